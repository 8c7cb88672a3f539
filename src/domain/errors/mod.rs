//! Domain error types.

mod action_error;
mod model_error;

pub use action_error::ActionError;
pub(crate) use model_error::check_len;
pub use model_error::ModelError;
