//! Decorator: formatters wrap other formatters and add markup.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait TextFormatter {
    fn format(&self, text: &str) -> String;
}

pub struct PlainTextFormatter;

impl TextFormatter for PlainTextFormatter {
    fn format(&self, text: &str) -> String {
        text.to_string()
    }
}

pub struct BoldTextDecorator<F: TextFormatter> {
    wrapped: F,
}

impl<F: TextFormatter> BoldTextDecorator<F> {
    pub fn new(wrapped: F) -> Self {
        Self { wrapped }
    }
}

impl<F: TextFormatter> TextFormatter for BoldTextDecorator<F> {
    fn format(&self, text: &str) -> String {
        format!("<b>{}</b>", self.wrapped.format(text))
    }
}

pub struct ItalicTextDecorator<F: TextFormatter> {
    wrapped: F,
}

impl<F: TextFormatter> ItalicTextDecorator<F> {
    pub fn new(wrapped: F) -> Self {
        Self { wrapped }
    }
}

impl<F: TextFormatter> TextFormatter for ItalicTextDecorator<F> {
    fn format(&self, text: &str) -> String {
        format!("<i>{}</i>", self.wrapped.format(text))
    }
}

// Lets decorators wrap borrowed formatters as well as owned ones.
impl<F: TextFormatter + ?Sized> TextFormatter for &F {
    fn format(&self, text: &str) -> String {
        (**self).format(text)
    }
}

pub struct DecoratorPattern;

impl Pattern for DecoratorPattern {
    fn name(&self) -> &'static str {
        "decorator"
    }

    fn title(&self) -> &'static str {
        "Decorator"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Bold and italic decorators stack on top of a plain formatter"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let plain_text = "Hello, world!";

        let plain = PlainTextFormatter;
        writeln!(out, "{}", plain.format(plain_text))?;

        let bold = BoldTextDecorator::new(&plain);
        writeln!(out, "{}", bold.format(plain_text))?;

        let italic = ItalicTextDecorator::new(&bold);
        writeln!(out, "{}", italic.format(plain_text))?;
        Ok(())
    }
}
