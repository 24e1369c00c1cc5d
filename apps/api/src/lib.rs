//! sheetfit-api library entry point.
//!
//! The optimizer is usable on its own through [`optimizer::optimize`]; the
//! remaining modules are the HTTP service that `main.rs` starts.

pub mod config;
pub mod errors;
pub mod optimizer;
pub mod routes;
pub mod state;
