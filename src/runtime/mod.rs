//! Command dispatch loop wrapping a [`Session`] with logging and metrics.
//!
//! The runtime stays synchronous and single-threaded: commands arrive one
//! at a time from a console adapter (interactive or scripted) and each one
//! is applied, counted and optionally logged before the next is read.

use std::io::Write;
use std::time::Instant;

use serde_json::json;

use crate::error::Result;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{MetricSnapshot, SessionMetrics};
use crate::session::{Command, CommandOutcome, Session};

pub mod driver;

/// Configuration knobs for the session runtime.
#[derive(Clone)]
pub struct RuntimeConfig {
    /// Optional structured logger used by the runtime.
    pub logger: Option<Logger>,
    /// Target field used when emitting the final metrics snapshot.
    pub metrics_target: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics_target: "easel::runtime.metrics".to_string(),
        }
    }
}

/// Synchronous runtime owning the session state.
pub struct EaselRuntime {
    session: Session,
    config: RuntimeConfig,
    metrics: SessionMetrics,
    started: Option<Instant>,
}

impl EaselRuntime {
    pub fn new(session: Session) -> Self {
        Self::with_config(session, RuntimeConfig::default())
    }

    pub fn with_config(session: Session, config: RuntimeConfig) -> Self {
        Self {
            session,
            config,
            metrics: SessionMetrics::new(),
            started: None,
        }
    }

    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one command, recording metrics and emitting runtime events.
    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        self.metrics.record_command();
        let outcome = self.session.apply(command);

        match &outcome {
            CommandOutcome::Moved { .. } => {
                self.metrics.record_move(true);
                self.metrics.record_render();
                self.log_event(
                    LogLevel::Debug,
                    "move_applied",
                    [json_kv("children", json!(self.session.composite().len()))],
                );
            }
            CommandOutcome::MoveRejected => {
                self.metrics.record_move(false);
                self.log_event(LogLevel::Debug, "move_rejected", std::iter::empty());
            }
            CommandOutcome::InvalidOption => {
                self.log_event(LogLevel::Debug, "invalid_option", std::iter::empty());
            }
            CommandOutcome::Exit => {
                self.log_event(LogLevel::Info, "exit_requested", std::iter::empty());
            }
        }

        let mut fields = vec![json_kv("command", json!(describe_command(&command)))];
        if let Command::Move { x, y } = command {
            fields.push(json_kv("x", json!(x)));
            fields.push(json_kv("y", json!(y)));
        }
        self.log_event(LogLevel::Debug, "command_dispatched", fields);

        outcome
    }

    /// Drive a predetermined command sequence, writing each outcome's text
    /// to `out`. Stops early when a command requests exit.
    pub fn run_scripted<I>(&mut self, out: &mut impl Write, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = Command>,
    {
        self.bootstrap();
        for command in commands {
            let outcome = self.dispatch(command);
            let text = outcome.text();
            if !text.is_empty() {
                writeln!(out, "{text}")?;
            }
            if outcome.is_exit() {
                break;
            }
        }
        self.finalize();
        Ok(())
    }

    /// Counters as of now; uptime is zero until the session starts.
    pub fn metrics_snapshot(&self) -> MetricSnapshot {
        let uptime = self.started.map(|s| s.elapsed()).unwrap_or_default();
        self.metrics.snapshot(uptime)
    }

    pub(crate) fn bootstrap(&mut self) {
        self.started = Some(Instant::now());
        self.log_event(
            LogLevel::Info,
            "session_started",
            [json_kv("children", json!(self.session.composite().len()))],
        );
    }

    pub(crate) fn finalize(&mut self) {
        let snapshot = self.metrics_snapshot();
        if let Some(logger) = self.config.logger.as_ref() {
            let _ = logger.log_event(snapshot.to_log_event(&self.config.metrics_target));
        }
        self.log_event(
            LogLevel::Info,
            "session_stopped",
            [json_kv("uptime_ms", json!(snapshot.uptime_ms))],
        );
    }

    fn log_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let _ = logger.log_event(event_with_fields(level, "easel::runtime", message, fields));
        }
    }
}

fn describe_command(command: &Command) -> &'static str {
    match command {
        Command::Move { .. } => "move",
        Command::Exit => "exit",
        Command::Unknown(_) => "unknown",
    }
}
