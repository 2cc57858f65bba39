//! Session counters surfaced through the structured logger.

use std::time::Duration;

use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Saturating counters accumulated while a session runs.
#[derive(Debug, Default, Clone)]
pub struct SessionMetrics {
    commands: u64,
    moves_applied: u64,
    moves_rejected: u64,
    renders: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_command(&mut self) {
        self.commands = self.commands.saturating_add(1);
    }

    pub fn record_move(&mut self, applied: bool) {
        if applied {
            self.moves_applied = self.moves_applied.saturating_add(1);
        } else {
            self.moves_rejected = self.moves_rejected.saturating_add(1);
        }
    }

    pub fn record_render(&mut self) {
        self.renders = self.renders.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            commands: self.commands,
            moves_applied: self.moves_applied,
            moves_rejected: self.moves_rejected,
            renders: self.renders,
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub commands: u64,
    pub moves_applied: u64,
    pub moves_rejected: u64,
    pub renders: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "session_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut fields = LogFields::new();
        fields.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        fields.insert("commands".to_string(), json!(self.commands));
        fields.insert("moves_applied".to_string(), json!(self.moves_applied));
        fields.insert("moves_rejected".to_string(), json!(self.moves_rejected));
        fields.insert("renders".to_string(), json!(self.renders));
        fields
    }
}
