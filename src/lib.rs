//! Composite shape editor confined to a fixed 800x600 canvas.
//!
//! The crate models a closed set of shape variants (point, circle,
//! rectangle, composite) that move as a unit and render as text, plus a
//! command-driven session loop that console adapters feed. Larger modules
//! follow the orchestrator pattern: the public surface is re-exported here
//! while implementation details live in private submodules.

pub mod editor;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod shape;

pub use editor::Editor;
pub use error::{EaselError, Result};
pub use geometry::{Canvas, Position};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, SessionMetrics};
pub use runtime::driver::cli::{CliDriver, CliDriverError, DriverResult};
pub use runtime::{EaselRuntime, RuntimeConfig};
pub use session::{Command, CommandOutcome, Session};
pub use shape::{Circle, CompositeShape, Point, Rect, Shape};
