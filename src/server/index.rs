use crate::server::error::ApiError;
use crate::server::page::render;
use crate::server::state::AppState;
use crate::server::upload::{sanitize_file_name, save_upload};
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

pub async fn show(State(state): State<AppState>) -> Html<String> {
    render(state.species_classifier.catalog(), None)
}

/// Form upload: stores the file, classifies it and re-renders the page.
/// A missing file, or a body that is not a multipart form, goes back to the
/// empty form.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let Ok(mut multipart) = multipart else {
        return Ok(Redirect::to("/").into_response());
    };

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            upload = Some((file_name, bytes));
            break;
        }
    }

    let Some((file_name, bytes)) = upload else {
        return Ok(Redirect::to("/").into_response());
    };
    let Some(file_name) = sanitize_file_name(&file_name) else {
        return Ok(Redirect::to("/").into_response());
    };

    save_upload(&state.upload_dir, &file_name, &bytes).await?;
    let _ = state.logger.info(&format!(
        "Saved upload {} ({} bytes)",
        file_name,
        bytes.len()
    ));

    let result = state.predict_image(bytes.to_vec()).await?;
    let _ = state.logger.info(&format!(
        "{}: {} ({}%)",
        file_name,
        result.label,
        result.confidence_percent()
    ));

    Ok(render(state.species_classifier.catalog(), Some(&result)).into_response())
}
