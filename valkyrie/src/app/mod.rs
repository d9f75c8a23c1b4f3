mod selection_args;
mod valkyrie_app;

pub use selection_args::{AreaArgs, SelectionArgs};
pub use valkyrie_app::{ValkyrieApp, ValkyrieOperation};
