//! Model-View-Controller with a text view in place of a UI toolkit.

use std::fmt;
use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
    White,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::White => "white",
        };
        f.write_str(name)
    }
}

/// MODEL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub model: String,
    pub color: Color,
}

/// VIEW: knows how to show things, not where they come from.
#[derive(Debug, Default)]
pub struct CarView {
    background: Option<Color>,
    label: Option<String>,
}

impl CarView {
    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    pub fn set_label(&mut self, text: &str) {
        self.label = Some(text.to_string());
    }

    pub fn render(&self) -> Vec<String> {
        let background = self
            .background
            .map_or_else(|| "none".to_string(), |c| c.to_string());
        let mut lines = vec![format!("View background: {}", background)];
        if let Some(label) = &self.label {
            lines.push(format!("Label \"{}\" in {}", label, Color::White));
        }
        lines
    }
}

/// CONTROLLER: moves data from the model into the view.
pub struct CarController {
    car: Car,
    view: CarView,
}

impl CarController {
    pub fn new(car: Car) -> Self {
        Self {
            car,
            view: CarView::default(),
        }
    }

    pub fn load_view(&mut self) -> Vec<String> {
        self.view.set_label(&self.car.model);
        self.view.set_background(self.car.color);
        self.view.render()
    }

    pub fn repaint(&mut self, color: Color) -> Vec<String> {
        self.car.color = color;
        self.load_view()
    }

    pub fn car(&self) -> &Car {
        &self.car
    }
}

pub struct MvcPattern;

impl Pattern for MvcPattern {
    fn name(&self) -> &'static str {
        "mvc"
    }

    fn title(&self) -> &'static str {
        "Model-View-Controller"
    }

    fn category(&self) -> Category {
        Category::Architectural
    }

    fn summary(&self) -> &'static str {
        "A controller renders a car model through a separate view"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let car = Car {
            model: "BMW Series 3".to_string(),
            color: Color::Blue,
        };
        let mut controller = CarController::new(car);
        for line in controller.load_view() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_view() {
        assert_eq!(CarView::default().render(), vec!["View background: none"]);
    }

    #[test]
    fn test_model_change_reaches_view() {
        let mut controller = CarController::new(Car {
            model: "Mini".to_string(),
            color: Color::Blue,
        });
        let lines = controller.repaint(Color::Red);
        assert_eq!(lines[0], "View background: red");
        assert_eq!(controller.car().color, Color::Red);
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        MvcPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "View background: blue\nLabel \"BMW Series 3\" in white\n"
        );
    }
}
