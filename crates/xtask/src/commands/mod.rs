//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod config;
mod describe;
mod validate;

pub use config::Config;
pub use describe::Describe;
pub use validate::Validate;
