pub mod echo;
pub mod probe;
pub mod tree;

pub use probe::first_match;
pub use tree::{UiElement, UiTree};
