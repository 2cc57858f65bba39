//! Deterministic transcript over the classic three-shape setup.
//!
//! Builds the point/circle/rectangle trio, shows the composite and editor
//! renders, then replays a fixed command script through the runtime.

use std::io;

use easel_mvp::session::{Command, Session};
use easel_mvp::shape::{Circle, CompositeShape, Point, Rect};
use easel_mvp::{EaselRuntime, Editor, Result};

fn main() -> Result<()> {
    let mut composite = CompositeShape::new();
    composite.add_shape(Point::new(100, 100)?);
    composite.add_shape(Circle::new(400, 300, 50)?);
    composite.add_shape(Rect::new(600, 500, 150, 50)?);

    println!("{}", composite.render());

    let mut editor = Editor::new();
    for child in composite.children() {
        editor.add_shape(child);
    }
    println!("{}", editor.render_all());

    let mut runtime = EaselRuntime::new(Session::new(composite));
    let mut stdout = io::stdout();
    runtime.run_scripted(
        &mut stdout,
        [
            Command::Move { x: 200, y: 200 },
            Command::Move { x: 10, y: 10 },
            Command::Unknown(7),
            Command::Exit,
        ],
    )?;

    Ok(())
}
