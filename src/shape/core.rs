use crate::error::{EaselError, Result};
use crate::geometry::{Canvas, Position};

use super::composite::CompositeShape;

/// Closed set of drawable variants.
///
/// Every operation dispatches through a `match`; the set is deliberately
/// not open for extension. Aggregates nest via the `Composite` variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Point(Point),
    Circle(Circle),
    Rect(Rect),
    Composite(CompositeShape),
}

impl Shape {
    /// Attempt to relocate the shape to the absolute position `(x, y)`.
    ///
    /// Commits and returns `true` only when the variant's bound predicate
    /// accepts the new geometry; otherwise the shape is left untouched.
    /// Composites fan the call out to their children (see
    /// [`CompositeShape::move_to`] for the partial-move caveat).
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        match self {
            Shape::Point(point) => point.move_to(x, y),
            Shape::Circle(circle) => circle.move_to(x, y),
            Shape::Rect(rect) => rect.move_to(x, y),
            Shape::Composite(composite) => composite.move_to(x, y),
        }
    }

    /// Deterministic text description: one line per leaf, no side effects.
    pub fn render(&self) -> String {
        match self {
            Shape::Point(point) => point.render(),
            Shape::Circle(circle) => circle.render(),
            Shape::Rect(rect) => rect.render(),
            Shape::Composite(composite) => composite.render(),
        }
    }

    /// Short label naming the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Circle(_) => "circle",
            Shape::Rect(_) => "rectangle",
            Shape::Composite(_) => "composite",
        }
    }
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Shape::Point(point)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<CompositeShape> for Shape {
    fn from(composite: CompositeShape) -> Self {
        Shape::Composite(composite)
    }
}

/// A bare position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pos: Position,
}

impl Point {
    /// Construct a point, rejecting coordinates outside the canvas.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if !Canvas::contains_point(x, y) {
            return Err(EaselError::OutOfCanvas {
                shape: "point",
                x,
                y,
            });
        }
        Ok(Self {
            pos: Position::new(x, y),
        })
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        if !Canvas::contains_point(x, y) {
            return false;
        }
        self.pos = Position::new(x, y);
        true
    }

    pub fn render(&self) -> String {
        format!("Drawing a Point at {}", self.pos)
    }
}

/// A disk anchored at its centre.
///
/// The radius is fixed at construction; only the anchor moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pos: Position,
    radius: i32,
}

impl Circle {
    /// Construct a circle whose full disk must fit the canvas.
    pub fn new(x: i32, y: i32, radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(EaselError::NegativeExtent {
                shape: "circle",
                what: "radius",
                value: radius,
            });
        }
        if !Self::fits(x, y, radius) {
            return Err(EaselError::OutOfCanvas {
                shape: "circle",
                x,
                y,
            });
        }
        Ok(Self {
            pos: Position::new(x, y),
            radius,
        })
    }

    fn fits(x: i32, y: i32, radius: i32) -> bool {
        Canvas::spans_x(x.saturating_sub(radius), x.saturating_add(radius))
            && Canvas::spans_y(y.saturating_sub(radius), y.saturating_add(radius))
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        if !Self::fits(x, y, self.radius) {
            return false;
        }
        self.pos = Position::new(x, y);
        true
    }

    pub fn render(&self) -> String {
        format!("Drawing a Circle at {} with radius {}", self.pos, self.radius)
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// Width and height are fixed at construction; only the anchor moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pos: Position,
    width: i32,
    height: i32,
}

impl Rect {
    /// Construct a rectangle that must fit the canvas entirely.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        if width < 0 {
            return Err(EaselError::NegativeExtent {
                shape: "rectangle",
                what: "width",
                value: width,
            });
        }
        if height < 0 {
            return Err(EaselError::NegativeExtent {
                shape: "rectangle",
                what: "height",
                value: height,
            });
        }
        if !Self::fits(x, y, width, height) {
            return Err(EaselError::OutOfCanvas {
                shape: "rectangle",
                x,
                y,
            });
        }
        Ok(Self {
            pos: Position::new(x, y),
            width,
            height,
        })
    }

    fn fits(x: i32, y: i32, width: i32, height: i32) -> bool {
        Canvas::spans_x(x, x.saturating_add(width))
            && Canvas::spans_y(y, y.saturating_add(height))
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        if !Self::fits(x, y, self.width, self.height) {
            return false;
        }
        self.pos = Position::new(x, y);
        true
    }

    pub fn render(&self) -> String {
        format!(
            "Drawing a Rectangle at {} with width {} and height {}",
            self.pos, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_constructs_anywhere_inside_the_canvas() {
        assert!(Point::new(0, 0).is_ok());
        assert!(Point::new(800, 600).is_ok());
        assert!(Point::new(100, 100).is_ok());
    }

    #[test]
    fn point_rejects_out_of_canvas_coordinates() {
        for (x, y) in [(-1, 0), (801, 0), (0, -1), (0, 601)] {
            let err = Point::new(x, y).unwrap_err();
            assert!(matches!(err, EaselError::OutOfCanvas { shape: "point", .. }));
        }
    }

    #[test]
    fn point_move_commits_or_leaves_state_untouched() {
        let mut point = Point::new(100, 100).unwrap();
        assert!(point.move_to(0, 600));
        assert_eq!(point.position(), Position::new(0, 600));

        assert!(!point.move_to(801, 0));
        assert_eq!(point.position(), Position::new(0, 600));
    }

    #[test]
    fn circle_rejects_negative_radius() {
        let err = Circle::new(400, 300, -5).unwrap_err();
        assert!(matches!(
            err,
            EaselError::NegativeExtent {
                shape: "circle",
                what: "radius",
                value: -5,
            }
        ));
    }

    #[test]
    fn circle_disk_must_fit_at_construction() {
        assert!(Circle::new(400, 300, 50).is_ok());
        assert!(Circle::new(50, 50, 50).is_ok());
        assert!(Circle::new(10, 300, 50).is_err());
        assert!(Circle::new(400, 580, 50).is_err());
    }

    #[test]
    fn circle_move_checks_the_whole_disk() {
        let mut circle = Circle::new(400, 300, 50).unwrap();
        assert!(!circle.move_to(10, 10));
        assert_eq!(circle.position(), Position::new(400, 300));
        assert_eq!(circle.radius(), 50);

        assert!(circle.move_to(50, 550));
        assert_eq!(circle.position(), Position::new(50, 550));
    }

    #[test]
    fn moving_to_the_current_position_is_idempotent() {
        let mut circle = Circle::new(400, 300, 50).unwrap();
        let before = circle;
        assert!(circle.move_to(400, 300));
        assert_eq!(circle, before);
    }

    #[test]
    fn rect_spans_are_border_inclusive() {
        assert!(Rect::new(600, 500, 150, 50).is_ok());
        assert!(Rect::new(0, 0, 800, 600).is_ok());
        assert!(Rect::new(700, 500, 150, 50).is_err());
        assert!(Rect::new(600, 560, 150, 50).is_err());
    }

    #[test]
    fn rect_rejects_negative_extents() {
        assert!(matches!(
            Rect::new(10, 10, -1, 5).unwrap_err(),
            EaselError::NegativeExtent { what: "width", .. }
        ));
        assert!(matches!(
            Rect::new(10, 10, 5, -1).unwrap_err(),
            EaselError::NegativeExtent { what: "height", .. }
        ));
    }

    #[test]
    fn rect_move_keeps_extents() {
        let mut rect = Rect::new(600, 500, 150, 50).unwrap();
        assert!(!rect.move_to(700, 500));
        assert_eq!(rect.position(), Position::new(600, 500));

        assert!(rect.move_to(0, 0));
        assert_eq!(rect.position(), Position::new(0, 0));
        assert_eq!((rect.width(), rect.height()), (150, 50));
    }

    #[test]
    fn leaf_renders_are_single_deterministic_lines() {
        let point = Point::new(100, 100).unwrap();
        let circle = Circle::new(400, 300, 50).unwrap();
        let rect = Rect::new(600, 500, 150, 50).unwrap();

        assert_eq!(point.render(), "Drawing a Point at (100, 100)");
        assert_eq!(circle.render(), "Drawing a Circle at (400, 300) with radius 50");
        assert_eq!(
            rect.render(),
            "Drawing a Rectangle at (600, 500) with width 150 and height 50"
        );
        for rendered in [point.render(), circle.render(), rect.render()] {
            assert!(!rendered.contains('\n'));
        }
    }

    #[test]
    fn enum_dispatch_matches_the_variant() {
        let mut shape = Shape::from(Circle::new(400, 300, 50).unwrap());
        assert_eq!(shape.kind(), "circle");
        assert!(!shape.move_to(10, 10));
        assert!(shape.move_to(60, 60));
        assert_eq!(shape.render(), "Drawing a Circle at (60, 60) with radius 50");
    }
}
