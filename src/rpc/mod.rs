//! JSON-RPC API Module
//!
//! HTTP interface used by the converter page and by external tools.

mod methods;
mod server;

pub use methods::*;
pub use server::*;
