//! Factory: one object creates configured labels and buttons for a screen.
//!
//! The widgets are plain data; a `Screen` renders them as text instead of
//! handing them to a UI toolkit.

use std::fmt;
use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?}x{:?})", self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub frame: Frame,
    pub text: String,
    pub color: Color,
    /// Zero means unlimited.
    pub number_of_lines: usize,
}

pub type Action = Box<dyn Fn() -> String>;

pub struct Button {
    pub frame: Frame,
    pub title: String,
    action: Option<Action>,
}

impl Button {
    /// Fires the primary action, if one was attached.
    pub fn tap(&self) -> Option<String> {
        self.action.as_ref().map(|action| action())
    }
}

pub trait WidgetFactory {
    fn create_label(&self, frame: Frame, text: &str, color: Color) -> Label;
    fn create_button(&self, frame: Frame, text: &str, action: Option<Action>) -> Button;
}

pub struct ContentFactory;

impl WidgetFactory for ContentFactory {
    fn create_label(&self, frame: Frame, text: &str, color: Color) -> Label {
        Label {
            frame,
            text: text.to_string(),
            color,
            number_of_lines: 0,
        }
    }

    fn create_button(&self, frame: Frame, text: &str, action: Option<Action>) -> Button {
        Button {
            frame,
            title: text.to_string(),
            action,
        }
    }
}

pub enum Widget {
    Label(Label),
    Button(Button),
}

pub struct Screen {
    pub background: Color,
    widgets: Vec<Widget>,
}

impl Screen {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            widgets: Vec::new(),
        }
    }

    pub fn add(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("Screen with {} background", self.background)];
        for widget in &self.widgets {
            lines.push(match widget {
                Widget::Label(label) => format!(
                    "Label \"{}\" in {} at {}",
                    label.text, label.color, label.frame
                ),
                Widget::Button(button) => {
                    format!("Button \"{}\" at {}", button.title, button.frame)
                }
            });
        }
        lines
    }
}

/// Builds the demo screen using whichever factory it is given.
pub fn load_view(factory: &dyn WidgetFactory) -> Screen {
    let label = factory.create_label(
        Frame::new(50.0, 200.0, 320.0, 100.0),
        "Label Created With Factory Design Pattern",
        Color::Black,
    );
    let button = factory.create_button(
        Frame::new(50.0, 290.0, 320.0, 100.0),
        "Button created with factory",
        None,
    );

    let mut screen = Screen::new(Color::White);
    screen.add(Widget::Label(label));
    screen.add(Widget::Button(button));
    screen
}

pub struct FactoryPattern;

impl Pattern for FactoryPattern {
    fn name(&self) -> &'static str {
        "factory"
    }

    fn title(&self) -> &'static str {
        "Factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "A content factory creates the labels and buttons of a screen"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        for line in load_view(&ContentFactory).render() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_configures_label() {
        let label = ContentFactory.create_label(Frame::new(0.0, 0.0, 10.0, 10.0), "hi", Color::Blue);
        assert_eq!(label.text, "hi");
        assert_eq!(label.color, Color::Blue);
        assert_eq!(label.number_of_lines, 0);
    }

    #[test]
    fn test_button_action() {
        let frame = Frame::new(0.0, 0.0, 1.0, 1.0);
        let silent = ContentFactory.create_button(frame, "noop", None);
        assert_eq!(silent.tap(), None);

        let loud = ContentFactory.create_button(frame, "go", Some(Box::new(|| "tapped".to_string())));
        assert_eq!(loud.tap().as_deref(), Some("tapped"));
    }

    #[test]
    fn test_frame_keeps_fraction_digits() {
        assert_eq!(Frame::new(0.5, 2.0, 10.0, 1.25).to_string(), "(0.5, 2.0, 10.0x1.25)");
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        FactoryPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Screen with white background\n\
             Label \"Label Created With Factory Design Pattern\" in black at (50.0, 200.0, 320.0x100.0)\n\
             Button \"Button created with factory\" at (50.0, 290.0, 320.0x100.0)\n"
        );
    }
}
