//! Page components hosting the login dialog

mod login;
mod not_found;

pub use login::LoginPage;
pub use not_found::NotFound;
