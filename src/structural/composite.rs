//! Composite: a drawing is a shape made of shapes.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait Shape {
    fn draw(&self) -> Vec<String>;
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self) -> Vec<String> {
        vec!["a circle".to_string()]
    }
}

pub struct Rectangle;

impl Shape for Rectangle {
    fn draw(&self) -> Vec<String> {
        vec!["a rectangle".to_string()]
    }
}

#[derive(Default)]
pub struct Drawing {
    shapes: Vec<Box<dyn Shape>>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Shape for Drawing {
    fn draw(&self) -> Vec<String> {
        let mut lines = vec!["Drawing..".to_string()];
        lines.extend(self.shapes.iter().flat_map(|shape| shape.draw()));
        lines
    }
}

pub struct CompositePattern;

impl Pattern for CompositePattern {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn title(&self) -> &'static str {
        "Composite"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "A drawing treats single shapes and groups of shapes uniformly"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut drawing = Drawing::new();
        drawing.add(Box::new(Circle));
        drawing.add(Box::new(Rectangle));

        for line in drawing.draw() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
