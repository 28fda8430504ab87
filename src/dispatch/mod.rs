pub mod commands;
pub mod dispatcher;
pub mod session;
pub mod table;
pub mod types;

pub use dispatcher::Dispatcher;
pub use session::DispatchSession;
pub use types::{DispatchError, DispatchOutcome, HandlerResult};
