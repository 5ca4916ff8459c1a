//! Maps credential service failures to the canned dialogs shown to the user.
//!
//! The service reports failures as a non-2xx response with a JSON body of
//! `{ "message": <tag> }`. Each flow recognizes a fixed set of tags; a
//! response carrying anything else, a malformed body, or a transport-level
//! failure produces no feedback at all. Failed attempts are terminal: nothing
//! here retries, logs, or escalates beyond the returned dialog.

use crate::app_lib::AppError;
use crate::features::auth::types::ErrorResponse;

/// Fixed failure categories reported by the credential service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorTag {
    UserPresent,
    InvalidRegistrationPayload,
    InvalidLoginPayload,
    WrongCredential,
    DatabaseError,
    InternalServerError,
}

impl ErrorTag {
    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "USER_PRESENT" => Some(Self::UserPresent),
            "INVALID_AUTH_CREDENTIAL_DTO" => Some(Self::InvalidRegistrationPayload),
            "INVALID_AUTH_INPUT_DTO" => Some(Self::InvalidLoginPayload),
            "WRONG_CREDENTIAL" => Some(Self::WrongCredential),
            "DATABASE_ERROR" => Some(Self::DatabaseError),
            "INTERNAL_SERVER_ERROR" => Some(Self::InternalServerError),
            _ => None,
        }
    }
}

/// Visual style of a feedback dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// A canned dialog: title plus short explanation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub title: &'static str,
    pub text: String,
}

impl Feedback {
    fn error(title: &'static str, text: &str) -> Self {
        Self {
            kind: FeedbackKind::Error,
            title,
            text: text.to_string(),
        }
    }
}

/// Extracts the error tag from a failed request, if the body carries one.
pub fn error_tag(err: &AppError) -> Option<ErrorTag> {
    let AppError::Http { message, .. } = err else {
        return None;
    };
    let body: ErrorResponse = serde_json::from_str(message).ok()?;
    ErrorTag::from_wire(&body.message)
}

/// Dialog shown when a signup attempt succeeds.
pub fn signup_success() -> Feedback {
    Feedback {
        kind: FeedbackKind::Success,
        title: "Account created",
        text: "User added correctly.".to_string(),
    }
}

/// Dialog for a failed signup attempt, or `None` when the failure carries no
/// recognized tag.
pub fn signup_feedback(err: &AppError) -> Option<Feedback> {
    let feedback = match error_tag(err)? {
        ErrorTag::UserPresent => Feedback::error(
            "Unable to create the account",
            "That username is already taken, try another one.",
        ),
        ErrorTag::InvalidRegistrationPayload => Feedback::error(
            "Unable to create the account",
            "Check the data and try again.",
        ),
        ErrorTag::DatabaseError | ErrorTag::InternalServerError => {
            Feedback::error("Internal error", "Try again later.")
        }
        _ => return None,
    };
    Some(feedback)
}

/// Dialog shown when a login attempt succeeds, personalized with the
/// attempted username.
pub fn login_welcome(username: &str) -> Feedback {
    Feedback {
        kind: FeedbackKind::Success,
        title: "Correct credentials",
        text: format!("Welcome {username}"),
    }
}

/// Dialog for a failed login attempt, or `None` when the failure carries no
/// recognized tag.
pub fn login_feedback(err: &AppError) -> Option<Feedback> {
    let feedback = match error_tag(err)? {
        ErrorTag::InvalidLoginPayload => {
            Feedback::error("Login failed", "Check the data and try again.")
        }
        ErrorTag::WrongCredential => Feedback::error(
            "Wrong credentials",
            "Wrong username or password, try again.",
        ),
        ErrorTag::DatabaseError | ErrorTag::InternalServerError => {
            Feedback::error("Internal error", "Try again.")
        }
        _ => return None,
    };
    Some(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_error(tag: &str) -> AppError {
        AppError::Http {
            status: 400,
            message: format!(r#"{{"message":"{tag}"}}"#),
        }
    }

    #[test]
    fn error_tag_parses_every_known_tag() {
        let cases = [
            ("USER_PRESENT", ErrorTag::UserPresent),
            (
                "INVALID_AUTH_CREDENTIAL_DTO",
                ErrorTag::InvalidRegistrationPayload,
            ),
            ("INVALID_AUTH_INPUT_DTO", ErrorTag::InvalidLoginPayload),
            ("WRONG_CREDENTIAL", ErrorTag::WrongCredential),
            ("DATABASE_ERROR", ErrorTag::DatabaseError),
            ("INTERNAL_SERVER_ERROR", ErrorTag::InternalServerError),
        ];

        for (wire, expected) in cases {
            assert_eq!(error_tag(&http_error(wire)), Some(expected), "tag {wire}");
        }
    }

    #[test]
    fn error_tag_rejects_unknown_tags_and_malformed_bodies() {
        assert_eq!(error_tag(&http_error("EMAIL_PRESENT")), None);
        assert_eq!(
            error_tag(&AppError::Http {
                status: 500,
                message: "<html>Bad Gateway</html>".to_string(),
            }),
            None
        );
        assert_eq!(
            error_tag(&AppError::Network("connection refused".to_string())),
            None
        );
        assert_eq!(
            error_tag(&AppError::Timeout("timed out".to_string())),
            None
        );
    }

    #[test]
    fn signup_feedback_maps_each_known_tag() {
        let user_present = signup_feedback(&http_error("USER_PRESENT")).expect("dialog");
        assert_eq!(user_present.kind, FeedbackKind::Error);
        assert_eq!(user_present.title, "Unable to create the account");
        assert!(user_present.text.contains("already taken"));

        let invalid = signup_feedback(&http_error("INVALID_AUTH_CREDENTIAL_DTO")).expect("dialog");
        assert_eq!(invalid.title, "Unable to create the account");
        assert_eq!(invalid.text, "Check the data and try again.");

        for tag in ["DATABASE_ERROR", "INTERNAL_SERVER_ERROR"] {
            let internal = signup_feedback(&http_error(tag)).expect("dialog");
            assert_eq!(internal.title, "Internal error");
            assert_eq!(internal.text, "Try again later.");
        }
    }

    #[test]
    fn signup_feedback_is_silent_for_unrecognized_failures() {
        assert_eq!(signup_feedback(&http_error("EMAIL_PRESENT")), None);
        assert_eq!(signup_feedback(&http_error("WRONG_CREDENTIAL")), None);
        assert_eq!(
            signup_feedback(&AppError::Network("offline".to_string())),
            None
        );
    }

    #[test]
    fn login_feedback_maps_each_known_tag() {
        let invalid = login_feedback(&http_error("INVALID_AUTH_INPUT_DTO")).expect("dialog");
        assert_eq!(invalid.kind, FeedbackKind::Error);
        assert_eq!(invalid.title, "Login failed");

        let wrong = login_feedback(&http_error("WRONG_CREDENTIAL")).expect("dialog");
        assert_eq!(wrong.title, "Wrong credentials");
        assert!(wrong.text.contains("username or password"));

        for tag in ["DATABASE_ERROR", "INTERNAL_SERVER_ERROR"] {
            let internal = login_feedback(&http_error(tag)).expect("dialog");
            assert_eq!(internal.title, "Internal error");
            assert_eq!(internal.text, "Try again.");
        }
    }

    #[test]
    fn login_feedback_is_silent_for_unrecognized_failures() {
        assert_eq!(login_feedback(&http_error("USER_PRESENT")), None);
        assert_eq!(login_feedback(&http_error("NOT_A_TAG")), None);
        assert_eq!(
            login_feedback(&AppError::Parse("bad json".to_string())),
            None
        );
    }

    #[test]
    fn success_dialogs_carry_the_expected_copy() {
        let created = signup_success();
        assert_eq!(created.kind, FeedbackKind::Success);
        assert_eq!(created.title, "Account created");

        let welcome = login_welcome("ada");
        assert_eq!(welcome.kind, FeedbackKind::Success);
        assert_eq!(welcome.text, "Welcome ada");
    }
}
