//! Non-owning display aggregator.

use crate::shape::Shape;

/// Batch renderer over borrowed shapes.
///
/// The editor never owns nor moves its entries; shape lifetimes belong to
/// the caller, typically a [`CompositeShape`](crate::shape::CompositeShape)
/// whose children are borrowed here for display.
#[derive(Debug, Default)]
pub struct Editor<'a> {
    shapes: Vec<&'a Shape>,
}

impl<'a> Editor<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a borrowed shape; insertion order is the render order.
    pub fn add_shape(&mut self, shape: &'a Shape) {
        self.shapes.push(shape);
    }

    /// Render output of every entry, one leaf per line, insertion order.
    pub fn render_all(&self) -> String {
        self.shapes
            .iter()
            .map(|shape| shape.render())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, CompositeShape, Point, Rect};

    #[test]
    fn empty_editor_renders_nothing() {
        let editor = Editor::new();
        assert!(editor.is_empty());
        assert_eq!(editor.render_all(), "");
    }

    #[test]
    fn editor_text_matches_the_composite_it_borrows_from() {
        let mut composite = CompositeShape::new();
        composite.add_shape(Point::new(100, 100).unwrap());
        composite.add_shape(Circle::new(400, 300, 50).unwrap());
        composite.add_shape(Rect::new(600, 500, 150, 50).unwrap());

        let mut editor = Editor::new();
        for child in composite.children() {
            editor.add_shape(child);
        }

        assert_eq!(editor.len(), 3);
        assert_eq!(editor.render_all(), composite.render());
    }
}
