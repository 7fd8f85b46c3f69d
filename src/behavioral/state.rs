//! State: the context's behaviour depends on a swappable state object.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait State {
    fn label(&self) -> &'static str;

    /// Returns the message for this press and the state to move to.
    fn press_button(self: Box<Self>) -> (String, Box<dyn State>);
}

pub struct ConcreteStateA;

impl State for ConcreteStateA {
    fn label(&self) -> &'static str {
        "A"
    }

    fn press_button(self: Box<Self>) -> (String, Box<dyn State>) {
        (
            "State is A. Pressing button changes state to B.".to_string(),
            Box::new(ConcreteStateB),
        )
    }
}

pub struct ConcreteStateB;

impl State for ConcreteStateB {
    fn label(&self) -> &'static str {
        "B"
    }

    fn press_button(self: Box<Self>) -> (String, Box<dyn State>) {
        (
            "State is B. Pressing button changes state back to A.".to_string(),
            Box::new(ConcreteStateA),
        )
    }
}

pub struct Context {
    state: Option<Box<dyn State>>,
}

impl Context {
    pub fn new(state: Box<dyn State>) -> Self {
        Self { state: Some(state) }
    }

    pub fn set_state(&mut self, state: Box<dyn State>) {
        self.state = Some(state);
    }

    pub fn current(&self) -> &'static str {
        self.state.as_ref().map_or("-", |s| s.label())
    }

    pub fn press_button(&mut self) -> String {
        match self.state.take() {
            Some(state) => {
                let (message, next) = state.press_button();
                tracing::debug!(to = next.label(), "state transition");
                self.state = Some(next);
                message
            }
            None => String::new(),
        }
    }
}

pub struct StatePattern;

impl Pattern for StatePattern {
    fn name(&self) -> &'static str {
        "state"
    }

    fn title(&self) -> &'static str {
        "State"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Pressing the button toggles between two state objects"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut context = Context::new(Box::new(ConcreteStateA));
        writeln!(out, "{}", context.press_button())?;
        writeln!(out, "{}", context.press_button())?;
        Ok(())
    }
}
