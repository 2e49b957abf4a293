use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::state::{AppState, RedirectBackend};
use aperture_core::{LinkId, StoreError};

pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let store = match state.redirects() {
        RedirectBackend::Disabled => return Err(ApiError::NotFound),
        RedirectBackend::Unavailable => return Err(ApiError::LinksNotConfigured),
        RedirectBackend::Ready(store) => store,
    };

    // Anything failing id validation cannot be a stored key.
    let Ok(id) = LinkId::parse(id) else {
        return Err(ApiError::NotFound);
    };

    let record = store.get(&id).await?.ok_or(ApiError::NotFound)?;

    debug!(id = %id, "Redirecting to stored image URL");
    found_redirect(&record.target_url)
}

/// Builds a `302 Found` response pointing at `target_url`.
fn found_redirect(target_url: &str) -> Result<Response> {
    let location = HeaderValue::from_str(target_url).map_err(|_| {
        ApiError::Storage(StoreError::InvalidData(
            "stored target url is not a valid header value".to_string(),
        ))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
