//! Bridge: the shape abstraction delegates the actual drawing to a separate
//! implementation hierarchy.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait DrawApi {
    fn draw_circle(&self, radius: i32, x: i32, y: i32) -> String;
}

pub struct RedCircle;

impl DrawApi for RedCircle {
    fn draw_circle(&self, radius: i32, x: i32, y: i32) -> String {
        format!("Drawing Red Circle, radius: {}, x: {}, y: {}", radius, x, y)
    }
}

pub struct GreenCircle;

impl DrawApi for GreenCircle {
    fn draw_circle(&self, radius: i32, x: i32, y: i32) -> String {
        format!("Drawing Green Circle, radius: {}, x: {}, y: {}", radius, x, y)
    }
}

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    radius: i32,
    x: i32,
    y: i32,
    draw_api: Box<dyn DrawApi>,
}

impl Circle {
    pub fn new(radius: i32, x: i32, y: i32, draw_api: Box<dyn DrawApi>) -> Self {
        Self { radius, x, y, draw_api }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        self.draw_api.draw_circle(self.radius, self.x, self.y)
    }
}

pub struct BridgePattern;

impl Pattern for BridgePattern {
    fn name(&self) -> &'static str {
        "bridge"
    }

    fn title(&self) -> &'static str {
        "Bridge"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "A circle delegates rendering to an interchangeable drawing API"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let red_circle = Circle::new(10, 5, 6, Box::new(RedCircle));
        writeln!(out, "{}", red_circle.draw())?;

        let green_circle = Circle::new(3, 0, 0, Box::new(GreenCircle));
        writeln!(out, "{}", green_circle.draw())?;
        Ok(())
    }
}
