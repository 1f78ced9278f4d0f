//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `handle` | Global read-only configuration handle        |

mod error;
pub mod handle;

pub use error::ConfigError;
pub use handle::{cfg, init_config};
