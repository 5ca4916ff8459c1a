//! Auth feature module covering the credential submission flows. It keeps
//! request plumbing and outcome interpretation out of the UI and must stay
//! aligned with the credential service's wire format. Payloads carry raw
//! credentials and must never be logged.
//!
//! Flow Overview: Signup posts a registration record and routes the user to
//! the login page on success. Login posts a login record, stores the issued
//! access token for the current tab, and routes the user home. Every failed
//! attempt is terminal; `feedback` decides which dialog, if any, is shown.

pub(crate) mod client;
pub(crate) mod feedback;
pub(crate) mod session;
pub(crate) mod state;
pub(crate) mod types;
