use super::core::Shape;

/// Ordered aggregate of owned shapes that fans `move_to` and `render` out
/// to every child.
///
/// `move_to` keeps the historical stop-at-first-rejection behaviour:
/// children are visited in insertion order and the walk aborts at the first
/// child that rejects, so earlier children keep the new position while the
/// rest stay where they were. Callers that need all-or-nothing semantics
/// must validate the target geometry themselves before moving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeShape {
    children: Vec<Shape>,
}

impl CompositeShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child; insertion order is the move and render order.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.children.push(shape.into());
    }

    /// Move every child to the same absolute position `(x, y)`.
    ///
    /// Returns `false` at the first rejecting child (see the type docs for
    /// the partial-move caveat). An empty composite reports success.
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        for child in &mut self.children {
            if !child.move_to(x, y) {
                return false;
            }
        }
        true
    }

    /// Child renders joined with newlines, one leaf per line, recursing
    /// into nested composites. An empty composite renders to empty text.
    pub fn render(&self) -> String {
        self.children
            .iter()
            .map(Shape::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
