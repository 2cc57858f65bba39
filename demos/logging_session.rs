//! Scripted session with a memory logger, dumping the captured events and
//! the final metrics snapshot as JSON lines.

use std::io;
use std::sync::Arc;

use easel_mvp::logging::{Logger, MemorySink};
use easel_mvp::session::{Command, Session};
use easel_mvp::shape::{Circle, CompositeShape, Point, Rect};
use easel_mvp::{EaselRuntime, Result, RuntimeConfig};

fn main() -> Result<()> {
    let mut composite = CompositeShape::new();
    composite.add_shape(Point::new(100, 100)?);
    composite.add_shape(Circle::new(400, 300, 50)?);
    composite.add_shape(Rect::new(600, 500, 150, 50)?);

    let sink = Arc::new(MemorySink::new());
    let mut config = RuntimeConfig::default();
    config.logger = Some(Logger::new(sink.clone()));

    let mut runtime = EaselRuntime::with_config(Session::new(composite), config);
    runtime.run_scripted(
        &mut io::sink(),
        [
            Command::Move { x: 200, y: 200 },
            Command::Move { x: 10, y: 10 },
            Command::Exit,
        ],
    )?;

    for event in sink.events() {
        println!("{}", serde_json::to_string(&event).expect("serialize event"));
    }

    Ok(())
}
