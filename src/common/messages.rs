use leptos::prelude::ServerFnError;

const SERVER_FN_PREFIX: &str = "error running server function: ";

/// Turns a server function error into text fit for the login banner.
pub fn server_error_message(err: &ServerFnError) -> String {
    let message = err.to_string();
    message
        .strip_prefix(SERVER_FN_PREFIX)
        .unwrap_or(&message)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_strips_framework_prefix() {
        let err = ServerFnError::new("Invalid username or password");
        assert_eq!(server_error_message(&err), "Invalid username or password");
    }

    #[test]
    fn test_server_error_message_keeps_other_text() {
        let err = ServerFnError::Request("connection refused".into());
        assert!(server_error_message(&err).contains("connection refused"));
    }
}
