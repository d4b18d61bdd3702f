mod form_factor;
mod user_agent;

pub use form_factor::*;
pub use user_agent::*;
