pub mod array;
pub mod command;
pub mod display;
mod error;
pub mod math;
pub mod matrix;
pub mod object;
pub mod sorting;
pub mod string;
pub mod test_impls;
pub mod value;

pub use crate::command::{run_script, Command, Session};
pub use crate::display::GridDisplay;
pub use crate::error::JaggedError;
pub use crate::matrix::*;
