//! Command-driven session core behind the console loop.
//!
//! The interactive menu reduces to an explicit [`Command`] applied through
//! a state-transition function ([`Session::apply`]). Console adapters parse
//! input into commands and print the returned text, nothing more, so the
//! same session drives the interactive binary, scripted demos and tests.

use crate::shape::CompositeShape;

/// A single instruction fed to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the whole composite to an absolute position.
    Move { x: i32, y: i32 },
    /// Terminate the session.
    Exit,
    /// Menu selection outside the known range.
    Unknown(i32),
}

/// Result of applying a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Every child accepted the move; `rendered` is the fresh render.
    Moved { rendered: String },
    /// Some child rejected the move. Earlier children may already have
    /// moved; see [`CompositeShape::move_to`].
    MoveRejected,
    /// Menu selection the session does not recognise.
    InvalidOption,
    /// The session is over.
    Exit,
}

impl CommandOutcome {
    /// Console text for this outcome; empty for [`CommandOutcome::Exit`].
    pub fn text(&self) -> String {
        match self {
            CommandOutcome::Moved { rendered } if rendered.is_empty() => {
                "Graphic moved successfully.".to_string()
            }
            CommandOutcome::Moved { rendered } => {
                format!("Graphic moved successfully.\n{rendered}")
            }
            CommandOutcome::MoveRejected => "Could not move the graphic.".to_string(),
            CommandOutcome::InvalidOption => "Invalid option.".to_string(),
            CommandOutcome::Exit => String::new(),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, CommandOutcome::Exit)
    }
}

/// Session state: the composite under edit.
#[derive(Debug, Clone)]
pub struct Session {
    composite: CompositeShape,
}

impl Session {
    pub fn new(composite: CompositeShape) -> Self {
        Self { composite }
    }

    pub fn composite(&self) -> &CompositeShape {
        &self.composite
    }

    /// Apply one command and report what it produced.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Move { x, y } => {
                if self.composite.move_to(x, y) {
                    CommandOutcome::Moved {
                        rendered: self.composite.render(),
                    }
                } else {
                    CommandOutcome::MoveRejected
                }
            }
            Command::Exit => CommandOutcome::Exit,
            Command::Unknown(_) => CommandOutcome::InvalidOption,
        }
    }
}
