//! imagelab - script-driven image editing
//!
//! File codecs, the command language and its interpreter on top of the
//! `imagelab-engine` crate. This library exposes modules for integration
//! testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod script;
