use crate::server::data_url::decode_data_url;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::species_classifier::{PredictionResponse, PredictionResult};
use axum::extract::{Multipart, State};
use axum::Json;

/// Webcam frame posted as a data URL in the `image` form field.
pub async fn capture(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PredictionResponse>, ApiError> {
    let mut data_url = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            data_url = Some(field.text().await?);
            break;
        }
    }
    let data_url = data_url.ok_or(ApiError::MissingField("image"))?;

    let result = match decode_data_url(&data_url) {
        Ok(raw_image) => state.predict_image(raw_image).await?,
        Err(e) => {
            let _ = state
                .logger
                .error(&format!("Capture payload is not valid base64: {}", e));
            PredictionResult::unknown()
        }
    };

    let _ = state.logger.info(&format!(
        "Capture: {} ({}%)",
        result.label,
        result.confidence_percent()
    ));

    Ok(Json(result.to_response()))
}
