//! Reusable UI components for the login dialog

mod alert;
mod button;
mod icons;
mod input;
mod login_modal;

pub use alert::ErrorAlert;
pub use button::{Button, ButtonVariant};
pub use icons::{EyeIcon, EyeSlashIcon, Spinner};
pub use input::{Checkbox, PasswordInput, TextInput};
pub use login_modal::{submit_login, LoginModal};
