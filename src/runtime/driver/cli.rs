use std::io::{BufRead, Write};

use thiserror::Error;

use crate::editor::Editor;
use crate::error::EaselError;
use crate::runtime::{EaselRuntime, RuntimeConfig};
use crate::session::{Command, Session};
use crate::shape::{Circle, CompositeShape, Point, Rect};

pub type DriverResult<T> = std::result::Result<T, CliDriverError>;

#[derive(Debug, Error)]
pub enum CliDriverError {
    #[error(transparent)]
    Easel(#[from] EaselError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Interactive console driver owning an [`EaselRuntime`].
///
/// Implements the line-based protocol: prompt for the three shapes, render
/// the composite and an editor view of it, then loop on the move/exit menu.
/// Generic over its I/O handles so tests can drive it with in-memory
/// buffers. Malformed numbers and out-of-canvas construction end the run
/// with an error; there is no retry at this layer.
pub struct CliDriver<R, W> {
    input: R,
    output: W,
    config: RuntimeConfig,
}

impl<R: BufRead, W: Write> CliDriver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, RuntimeConfig::default())
    }

    pub fn with_config(input: R, output: W, config: RuntimeConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run the whole interactive session.
    pub fn run(mut self) -> DriverResult<()> {
        let composite = self.read_shapes()?;

        writeln!(self.output, "{}", composite.render())?;

        let mut editor = Editor::new();
        for child in composite.children() {
            editor.add_shape(child);
        }
        writeln!(self.output, "{}", editor.render_all())?;

        let config = self.config.clone();
        let mut runtime = EaselRuntime::with_config(Session::new(composite), config);
        runtime.bootstrap();

        loop {
            writeln!(self.output, "Choose what you want to do:")?;
            writeln!(self.output, "1. Move the graphic")?;
            writeln!(self.output, "2. Exit")?;
            let choice = self.read_i32("")?;

            let command = match choice {
                1 => {
                    let x = self.read_i32("Enter the new X coordinate: ")?;
                    let y = self.read_i32("Enter the new Y coordinate: ")?;
                    Command::Move { x, y }
                }
                2 => Command::Exit,
                other => Command::Unknown(other),
            };

            let outcome = runtime.dispatch(command);
            let text = outcome.text();
            if !text.is_empty() {
                writeln!(self.output, "{text}")?;
            }
            if outcome.is_exit() {
                break;
            }
        }

        runtime.finalize();
        Ok(())
    }

    fn read_shapes(&mut self) -> DriverResult<CompositeShape> {
        let x = self.read_i32("Enter the X coordinate of the point: ")?;
        let y = self.read_i32("Enter the Y coordinate of the point: ")?;
        let point = Point::new(x, y)?;

        let x = self.read_i32("Enter the X coordinate of the circle: ")?;
        let y = self.read_i32("Enter the Y coordinate of the circle: ")?;
        let radius = self.read_i32("Enter the radius of the circle: ")?;
        let circle = Circle::new(x, y, radius)?;

        let x = self.read_i32("Enter the X coordinate of the rectangle: ")?;
        let y = self.read_i32("Enter the Y coordinate of the rectangle: ")?;
        let width = self.read_i32("Enter the width of the rectangle: ")?;
        let height = self.read_i32("Enter the height of the rectangle: ")?;
        let rect = Rect::new(x, y, width, height)?;

        let mut composite = CompositeShape::new();
        composite.add_shape(point);
        composite.add_shape(circle);
        composite.add_shape(rect);
        Ok(composite)
    }

    fn read_i32(&mut self, prompt: &str) -> DriverResult<i32> {
        if !prompt.is_empty() {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let trimmed = line.trim();
        trimmed.parse::<i32>().map_err(|_| {
            CliDriverError::Easel(EaselError::InvalidNumber {
                input: trimmed.to_string(),
            })
        })
    }
}
