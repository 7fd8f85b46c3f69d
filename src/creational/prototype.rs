//! Prototype: new objects are copied from an existing instance.

use std::any::Any;
use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait Prototype: Any {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheep {
    pub name: String,
}

impl Sheep {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Prototype for Sheep {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub struct PrototypePattern;

impl Pattern for PrototypePattern {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn title(&self) -> &'static str {
        "Prototype"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Cloning a sheep yields an independent copy"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let original: Box<dyn Prototype> = Box::new(Sheep::new("Maria"));
        let mut cloned = original.clone_box();

        let name_of = |p: &dyn Prototype| {
            p.as_any()
                .downcast_ref::<Sheep>()
                .map(|s| s.name.clone())
                .unwrap_or_default()
        };

        writeln!(out, "{}", name_of(original.as_ref()))?;
        writeln!(out, "{}", name_of(cloned.as_ref()))?;

        if let Some(sheep) = cloned.as_any_mut().downcast_mut::<Sheep>() {
            sheep.name = "Dolly".to_string();
        }

        writeln!(out, "{}", name_of(original.as_ref()))?;
        writeln!(out, "{}", name_of(cloned.as_ref()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_independent() {
        let original = Sheep::new("Maria");
        let mut copy = original.clone_box();
        copy.as_any_mut().downcast_mut::<Sheep>().unwrap().name = "Dolly".to_string();

        assert_eq!(original.name, "Maria");
        assert_eq!(copy.as_any().downcast_ref::<Sheep>().unwrap().name, "Dolly");
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        PrototypePattern.run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Maria\nMaria\nMaria\nDolly\n");
    }
}
