//! Error module orchestrator; the implementation lives in `types`.

mod types;

pub use types::{EaselError, Result};
