//! Admin gate for lapify-web
//!
//! A shared key compared against the `x-admin-key` header. This is a
//! placeholder credential check, not a security boundary.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{ApiError, AppState};

/// Header carrying the admin key
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Admin middleware
///
/// An empty configured key disables the check. Applied to `/api/admin/*`
/// only.
pub async fn admin_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if state.admin_key.is_empty() {
        return Ok(next.run(request).await);
    }

    let provided = request
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == state.admin_key => Ok(next.run(request).await),
        Some(_) => {
            warn!(path = %request.uri().path(), "Rejected admin request: invalid key");
            Err(ApiError::Unauthorized("Invalid credential".to_string()))
        }
        None => Err(ApiError::Unauthorized(format!(
            "Missing {} header",
            ADMIN_KEY_HEADER
        ))),
    }
}
