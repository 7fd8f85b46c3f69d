//! Flyweight: circles are shared per color; position and radius are passed
//! in at draw time.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

#[derive(Debug, PartialEq, Eq)]
pub struct Circle {
    color: String,
}

impl Circle {
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn draw(&self, x: i32, y: i32, radius: i32) -> String {
        format!(
            "Drawing circle of color {} at ({},{}) with radius {}",
            self.color, x, y, radius
        )
    }
}

#[derive(Debug, Default)]
pub struct CircleFactory {
    circles: HashMap<String, Rc<Circle>>,
}

impl CircleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_circle(&mut self, color: &str) -> Rc<Circle> {
        let circle = self.circles.entry(color.to_string()).or_insert_with(|| {
            tracing::debug!(color, "creating flyweight");
            Rc::new(Circle {
                color: color.to_string(),
            })
        });
        Rc::clone(circle)
    }

    /// Number of distinct flyweights created so far.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

pub struct FlyweightPattern;

impl Pattern for FlyweightPattern {
    fn name(&self) -> &'static str {
        "flyweight"
    }

    fn title(&self) -> &'static str {
        "Flyweight"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Circles of the same color are created once and shared"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut factory = CircleFactory::new();

        let red_circle = factory.get_circle("red");
        writeln!(out, "{}", red_circle.draw(10, 10, 5))?;

        let blue_circle = factory.get_circle("blue");
        writeln!(out, "{}", blue_circle.draw(20, 20, 10))?;

        let another_red_circle = factory.get_circle("red");
        writeln!(out, "{}", another_red_circle.draw(30, 30, 7))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_color_is_shared() {
        let mut factory = CircleFactory::new();
        let a = factory.get_circle("red");
        let b = factory.get_circle("red");
        let c = factory.get_circle("green");

        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(factory.len(), 2);
        // factory + a + b
        assert_eq!(Rc::strong_count(&a), 3);
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        FlyweightPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Drawing circle of color red at (10,10) with radius 5\n\
             Drawing circle of color blue at (20,20) with radius 10\n\
             Drawing circle of color red at (30,30) with radius 7\n"
        );
    }
}
