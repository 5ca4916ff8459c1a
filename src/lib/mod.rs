//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Credential Flows
//!
//! 1. **Signup:** The client POSTs a registration record to
//!    `/credential/signup` and routes the user to the login page on success.
//! 2. **Login:** The client POSTs a login record to `/credential/login`,
//!    stores the issued access token for the current tab, and routes the user
//!    home on success.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! credentials directly, but callers must still avoid logging sensitive data.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{post_json, post_json_response};
pub(crate) use errors::AppError;
