//! Configuration module for the dashboard.

mod backend;
mod debug;

pub use backend::{BACKEND, BackendConfig};
pub use debug::DF;
