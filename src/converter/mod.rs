//! Converter module - the input -> formats workflow

mod formats;
mod state;

pub use formats::*;
pub use state::*;
