use crate::species::ClassCatalog;
use crate::species_classifier::PredictionResult;
use axum::response::Html;

const TEMPLATE: &str = include_str!("page.html");

pub fn render(catalog: &ClassCatalog, result: Option<&PredictionResult>) -> Html<String> {
    let result_html = result
        .map(|result| {
            format!(
                "<p>Detected: {}, Confidence: {}%</p>",
                escape(result.label.as_str()),
                escape(&result.confidence_percent())
            )
        })
        .unwrap_or_default();

    let cards: Vec<String> = catalog
        .iter()
        .map(|species| {
            let name = escape(species.name());
            format!(
                concat!(
                    "            <div class=\"fish-card\">\n",
                    "                <img src=\"/static/images/{}\" alt=\"{}\">\n",
                    "                <p>{}</p>\n",
                    "            </div>",
                ),
                species.image_file(),
                name,
                name
            )
        })
        .collect();

    Html(
        TEMPLATE
            .replace("{{result}}", &result_html)
            .replace("{{cards}}", &cards.join("\n")),
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
