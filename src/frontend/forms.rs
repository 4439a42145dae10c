//! View state of the login dialog, kept free of the reactive runtime so the
//! submission rules can be exercised directly.

use crate::types::LoginCredentials;

/// Not-yet-submitted contents of the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginDraft {
    username: String,
    password: String,
    remember_me: bool,
    password_visible: bool,
}

impl Default for LoginDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            remember_me: true,
            password_visible: false,
        }
    }
}

impl LoginDraft {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Flips password masking. Returns `false` and changes nothing while loading.
    pub fn toggle_password_visibility(&mut self, is_loading: bool) -> bool {
        if is_loading {
            return false;
        }
        self.password_visible = !self.password_visible;
        true
    }

    pub fn set_remember_me(&mut self, checked: bool, is_loading: bool) -> bool {
        if is_loading {
            return false;
        }
        self.remember_me = checked;
        true
    }

    pub fn toggle_remember_me(&mut self, is_loading: bool) -> bool {
        self.set_remember_me(!self.remember_me, is_loading)
    }

    pub fn can_submit(&self, is_loading: bool) -> bool {
        !is_loading && !self.username.trim().is_empty() && !self.password.is_empty()
    }

    /// Credentials for the login handler, or `None` when the submission must be dropped.
    ///
    /// Only the username is trimmed; the password is passed through as typed.
    pub fn submit(&self, is_loading: bool) -> Option<LoginCredentials> {
        self.can_submit(is_loading).then(|| LoginCredentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        })
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    pub fn visibility_label(&self) -> &'static str {
        if self.password_visible {
            "Hide password"
        } else {
            "Show password"
        }
    }
}

/// Error text to show above the form; blank messages render no banner.
pub fn error_banner(error: Option<&str>) -> Option<&str> {
    error.filter(|message| !message.is_empty())
}
