//! Request and response payloads for the credential endpoints. The service
//! expects camelCase keys on the wire, so every renamed payload must keep its
//! serde attributes in sync with the backend DTOs.

use serde::{Deserialize, Serialize};

/// Registration record submitted on signup. No client-side validation is
/// applied; the service owns all input checks.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token issued on successful login, consumed by authenticated calls outside
/// this crate.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body returned by the credential service on failed attempts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_request_serializes_with_camel_case_keys() {
        let request = RegistrationRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            date_of_birth: "1815-12-10".to_string(),
            email: "ada@inbox.im".to_string(),
            username: "ada".to_string(),
            password: "analytical-engine".to_string(),
        };

        let json = serde_json::to_value(&request).expect("Failed to serialize");
        let object = json.as_object().expect("Expected an object");

        for key in [
            "firstName",
            "lastName",
            "dateOfBirth",
            "email",
            "username",
            "password",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn token_response_deserializes_access_token() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"accessToken":"abc.def.ghi"}"#).expect("Failed to deserialize");
        assert_eq!(token.access_token, "abc.def.ghi");
    }
}
