//! Adapter: small capability traits, and an adapter that lets an unrelated
//! type satisfy one of them.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait Speaking {
    fn speak(&self) -> String;
}

pub trait Woofing {
    fn woof(&self) -> String;
}

pub trait Jumping {
    fn jump(&self) -> String;
}

pub struct Human;

impl Speaking for Human {
    fn speak(&self) -> String {
        "Humans can speak".to_string()
    }
}

impl Jumping for Human {
    fn jump(&self) -> String {
        "Humans can jump".to_string()
    }
}

pub struct Animal;

impl Jumping for Animal {
    fn jump(&self) -> String {
        "Animals can jump".to_string()
    }
}

impl Woofing for Animal {
    fn woof(&self) -> String {
        "Some animals can woof".to_string()
    }
}

/// Knows nothing about `Speaking`.
pub struct Robot {
    pub model: String,
}

impl Robot {
    pub fn beep(&self, times: usize) -> String {
        vec!["beep"; times].join(" ")
    }
}

pub struct RobotAdapter<'a> {
    robot: &'a Robot,
}

impl<'a> RobotAdapter<'a> {
    pub fn new(robot: &'a Robot) -> Self {
        Self { robot }
    }
}

impl Speaking for RobotAdapter<'_> {
    fn speak(&self) -> String {
        format!("{} says: {}", self.robot.model, self.robot.beep(2))
    }
}

/// Anything that can speak gets a chance to.
pub fn chorus(speakers: &[&dyn Speaking]) -> Vec<String> {
    speakers.iter().map(|s| s.speak()).collect()
}

pub struct AdapterPattern;

impl Pattern for AdapterPattern {
    fn name(&self) -> &'static str {
        "adapter"
    }

    fn title(&self) -> &'static str {
        "Adapter"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Types opt into small capability traits; an adapter bridges a robot in"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let human = Human;
        writeln!(out, "{}", human.jump())?;
        writeln!(out, "{}", human.speak())?;

        let animal = Animal;
        writeln!(out, "{}", animal.jump())?;
        writeln!(out, "{}", animal.woof())?;

        let robot = Robot { model: "R2".to_string() };
        let adapter = RobotAdapter::new(&robot);
        for line in chorus(&[&human, &adapter]) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_speaks_for_robot() {
        let robot = Robot { model: "T-800".to_string() };
        assert_eq!(RobotAdapter::new(&robot).speak(), "T-800 says: beep beep");
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        AdapterPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Humans can jump\n\
             Humans can speak\n\
             Animals can jump\n\
             Some animals can woof\n\
             Humans can speak\n\
             R2 says: beep beep\n"
        );
    }
}
