//! The line-oriented command language.

pub mod command;
pub mod interpreter;

pub use command::ScriptCommand;
pub use interpreter::{Flow, Interpreter};
