//! Command: requests become objects an invoker can hold and run later.

use std::io::Write;
use std::rc::Rc;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait Command {
    fn execute(&self) -> Vec<String>;
}

/// Handles its own work without a receiver.
pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self) -> Vec<String> {
        vec![format!(
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        )]
    }
}

/// Holds the business logic commands delegate to.
#[derive(Debug, Default)]
pub struct Receiver;

impl Receiver {
    pub fn do_something(&self, a: &str) -> String {
        format!("Receiver: Working on ({})\n", a)
    }

    pub fn do_something_else(&self, b: &str) -> String {
        format!("Receiver: Also working on ({})\n", b)
    }
}

pub struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    pub fn new(receiver: Rc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) -> Vec<String> {
        vec![
            "ComplexCommand: Complex stuff should be done by a receiver object.\n".to_string(),
            self.receiver.do_something(&self.a),
            self.receiver.do_something_else(&self.b),
        ]
    }
}

/// Any closure returning lines can act as a command.
pub struct FnCommand<F>(pub F);

impl<F> Command for FnCommand<F>
where
    F: Fn() -> Vec<String>,
{
    fn execute(&self) -> Vec<String> {
        (self.0)()
    }
}

#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    pub fn do_something_important(&self) -> Vec<String> {
        let mut lines = vec!["Invoker: Does anybody want something done before I begin?".to_string()];
        if let Some(command) = &self.on_start {
            lines.extend(command.execute());
        }

        lines.push("Invoker: ...doing something really important...".to_string());
        lines.push("Invoker: Does anybody want something done after I finish?".to_string());

        if let Some(command) = &self.on_finish {
            lines.extend(command.execute());
        }
        lines
    }
}

pub struct CommandPattern;

impl Pattern for CommandPattern {
    fn name(&self) -> &'static str {
        "command"
    }

    fn title(&self) -> &'static str {
        "Command"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "An invoker runs simple and receiver-backed commands around its work"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut invoker = Invoker::new();
        invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));

        let receiver = Rc::new(Receiver);
        invoker.set_on_finish(Box::new(ComplexCommand::new(
            receiver,
            "Send email",
            "Save report",
        )));

        for line in invoker.do_something_important() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoker_without_commands() {
        let invoker = Invoker::new();
        assert_eq!(invoker.do_something_important().len(), 3);
    }

    #[test]
    fn test_closure_command() {
        let mut invoker = Invoker::new();
        invoker.set_on_finish(Box::new(FnCommand(|| vec!["closing up".to_string()])));
        assert_eq!(invoker.do_something_important().last().unwrap(), "closing up");
    }

    #[test]
    fn test_receiver_is_shared() {
        let receiver = Rc::new(Receiver);
        let a = ComplexCommand::new(Rc::clone(&receiver), "x", "y");
        let _b = ComplexCommand::new(Rc::clone(&receiver), "z", "w");
        assert_eq!(Rc::strong_count(&receiver), 3);
        assert_eq!(a.execute()[1], "Receiver: Working on (x)\n");
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        CommandPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Invoker: Does anybody want something done before I begin?\n\
             SimpleCommand: See, I can do simple things like printing (Say Hi!)\n\
             Invoker: ...doing something really important...\n\
             Invoker: Does anybody want something done after I finish?\n\
             ComplexCommand: Complex stuff should be done by a receiver object.\n\n\
             Receiver: Working on (Send email)\n\n\
             Receiver: Also working on (Save report)\n\n"
        );
    }
}
