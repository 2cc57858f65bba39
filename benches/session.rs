use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};

use easel_mvp::EaselRuntime;
use easel_mvp::session::{Command, Session};
use easel_mvp::shape::{Circle, CompositeShape, Point, Rect};

fn scripted_move_loop(c: &mut Criterion) {
    let script = move_script();
    c.bench_function("scripted_move_loop", |b| {
        b.iter(|| {
            let mut runtime = EaselRuntime::new(Session::new(build_composite(16)));
            let mut sink = io::sink();
            runtime
                .run_scripted(&mut sink, black_box(script.clone()))
                .expect("scripted run");
        });
    });
}

fn wide_composite_render(c: &mut Criterion) {
    let composite = build_composite(256);
    c.bench_function("wide_composite_render", |b| {
        b.iter(|| black_box(&composite).render());
    });
}

fn wide_composite_move(c: &mut Criterion) {
    c.bench_function("wide_composite_move", |b| {
        b.iter(|| {
            let mut composite = build_composite(256);
            black_box(composite.move_to(120, 120));
        });
    });
}

fn move_script() -> Vec<Command> {
    let mut script: Vec<Command> = (0..64)
        .map(|i| Command::Move {
            x: 100 + (i % 50),
            y: 100 + (i % 50),
        })
        .collect();
    // One rejected move keeps the failure path in the measurement.
    script.push(Command::Move { x: 10, y: 10 });
    script.push(Command::Exit);
    script
}

fn build_composite(groups: usize) -> CompositeShape {
    let mut composite = CompositeShape::new();
    for i in 0..groups {
        let offset = (i % 100) as i32;
        composite.add_shape(Point::new(offset, offset).expect("point"));
        composite.add_shape(Circle::new(200 + offset, 200, 40).expect("circle"));
        composite.add_shape(Rect::new(300, 200 + offset, 80, 40).expect("rect"));
    }
    composite
}

criterion_group!(benches, scripted_move_loop, wide_composite_render, wide_composite_move);
criterion_main!(benches);
