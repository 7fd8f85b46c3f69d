//! Template Method: `show` is fixed, the names it uses are hooks with defaults.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait Administration {
    fn post_office_name(&self) -> String {
        "The Central Office".to_string()
    }

    fn super_market_name(&self) -> String {
        "LIDL".to_string()
    }

    fn show(&self) -> String {
        format!(
            "My city had a post office name: {} and a supermarket with name: {}",
            self.post_office_name(),
            self.super_market_name()
        )
    }
}

/// Keeps every default.
pub struct City;

impl Administration for City {}

/// Overrides one hook; `show` stays the same.
pub struct Village {
    pub shop: String,
}

impl Administration for Village {
    fn super_market_name(&self) -> String {
        self.shop.clone()
    }
}

pub struct TemplateMethodPattern;

impl Pattern for TemplateMethodPattern {
    fn name(&self) -> &'static str {
        "template-method"
    }

    fn title(&self) -> &'static str {
        "Template Method"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "A default method fixes the algorithm; implementors fill in hooks"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", City.show())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_one_hook() {
        let village = Village {
            shop: "Corner Shop".to_string(),
        };
        assert_eq!(
            village.show(),
            "My city had a post office name: The Central Office and a supermarket with name: Corner Shop"
        );
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        TemplateMethodPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "My city had a post office name: The Central Office and a supermarket with name: LIDL\n"
        );
    }
}
