//! Per-tab storage for the access token issued on login. Session storage is
//! scoped to the tab and dropped when it closes, which matches the token's
//! intended lifetime. Storage failures are ignored; the browser may deny
//! storage and the flow continues without it.

const ACCESS_TOKEN_KEY: &str = "accessToken";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok()).flatten()
}

/// Stores the access token for the current tab.
pub fn store_access_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Returns the access token for the current tab, if one was stored.
pub fn access_token() -> Option<String> {
    storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok()).flatten()
}
