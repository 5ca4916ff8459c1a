//! Client wrappers for the credential service endpoints. These helpers
//! centralize request setup so route code only deals with records and
//! outcomes, and they must never log the submitted credentials.

use crate::{
    app_lib::{AppError, post_json, post_json_response},
    features::auth::types::{LoginRequest, RegistrationRequest, TokenResponse},
};

/// Submits a registration record. The service replies with an opaque
/// confirmation body, so only the status is interpreted.
pub async fn signup(request: &RegistrationRequest) -> Result<(), AppError> {
    post_json("/credential/signup", request).await
}

/// Submits a login record and returns the issued access token.
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, AppError> {
    post_json_response("/credential/login", request).await
}
