mod errors;
mod messages;

pub use errors::*;
pub use messages::*;
