#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use login_dialog::frontend::forms::LoginDraft;
use login_dialog::types::LoginCredentials;

pub fn draft_with(username: &str, password: &str) -> LoginDraft {
    let mut draft = LoginDraft::default();
    draft.set_username(username);
    draft.set_password(password);
    draft
}

pub fn credentials(username: &str, password: &str, remember_me: bool) -> LoginCredentials {
    LoginCredentials {
        username: username.to_string(),
        password: password.to_string(),
        remember_me,
    }
}

/// Username drafts that trim to nothing.
pub fn blank_usernames() -> Vec<&'static str> {
    vec!["", " ", "   ", "\t", "\n", " \t \r\n "]
}

/// Field contents that pass the emptiness checks.
pub fn valid_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("alice", "secret1"),
        ("  bob  ", "pw"),
        ("carol", " "),
        ("dave", "  padded  "),
        ("ünïcödé", "пароль"),
    ]
}

/// Counts occurrences of a boolean HTML attribute, skipping class names such as `disabled:opacity-50`.
pub fn count_bool_attr(html: &str, name: &str) -> usize {
    let needle = format!(" {}", name);
    html.match_indices(&needle)
        .filter(|(idx, _)| {
            let next = html[idx + needle.len()..].chars().next();
            matches!(next, Some(' ') | Some('>') | Some('/') | Some('='))
        })
        .count()
}

/// Login handler that records every set of credentials it receives.
/// Must be created inside an `Owner`.
pub fn recording_handler() -> (Callback<LoginCredentials>, Arc<Mutex<Vec<LoginCredentials>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let handler = Callback::new(move |creds: LoginCredentials| {
        sink.lock().unwrap().push(creds);
    });
    (handler, calls)
}
