//! Chain of Responsibility: a request travels along linked handlers until one
//! of them takes it.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub type Successor = Option<Box<dyn Handler>>;

pub trait Handler {
    fn successor(&self) -> Option<&dyn Handler>;
    fn successor_mut(&mut self) -> &mut Successor;

    /// Links `next` after this handler and returns it, so links can be chained:
    /// `a.set_next(b).set_next(c)`.
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        &mut **self.successor_mut().insert(next)
    }

    /// The default just passes the request on.
    fn handle(&self, request: &str) -> Option<String> {
        self.successor().and_then(|next| next.handle(request))
    }
}

macro_rules! handler {
    ($ty:ident, |$request:ident| $matched:expr) => {
        #[derive(Default)]
        pub struct $ty {
            next: Successor,
        }

        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Handler for $ty {
            fn successor(&self) -> Option<&dyn Handler> {
                self.next.as_deref()
            }

            fn successor_mut(&mut self) -> &mut Successor {
                &mut self.next
            }

            fn handle(&self, $request: &str) -> Option<String> {
                match $matched {
                    Some(answer) => Some(answer),
                    None => self.successor().and_then(|next| next.handle($request)),
                }
            }
        }
    };
}

handler!(DoorHandler, |request| (request == "OPEN_THE_DOOR")
    .then(|| format!("Task: {}", request)));

handler!(TvHandler, |request| (request == "TURN_ON_THE_TV")
    .then(|| format!("Task: {}", request)));

handler!(MonkeyHandler, |request| (request == "Banana")
    .then(|| format!("Monkey: I'll eat the {}.\n", request)));

handler!(SquirrelHandler, |request| (request == "Nut")
    .then(|| format!("Squirrel: I'll eat the {}.\n", request)));

handler!(DogHandler, |request| (request == "MeatBall")
    .then(|| format!("Dog: I'll eat the {}.\n", request)));

/// Offers each food to the chain, reporting who (if anyone) took it.
pub fn feed(handler: &dyn Handler, food: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    for item in food {
        lines.push(format!("Client: Who wants a {}?\n", item));
        match handler.handle(item) {
            Some(result) => lines.push(format!("  {}", result)),
            None => lines.push(format!("  {} was left untouched.\n", item)),
        }
    }
    lines
}

pub fn operate(handler: &dyn Handler, operations: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    for item in operations {
        lines.push(format!("USER WANTS TO {}?\n", item));
        match handler.handle(item) {
            Some(result) => lines.push(format!("  {}", result)),
            None => lines.push(format!("  {} operation didn't started.\n", item)),
        }
    }
    lines
}

pub fn household_chain() -> DoorHandler {
    let mut door = DoorHandler::new();
    door.set_next(Box::new(TvHandler::new()));
    door
}

pub fn animal_chain() -> MonkeyHandler {
    let mut monkey = MonkeyHandler::new();
    monkey
        .set_next(Box::new(SquirrelHandler::new()))
        .set_next(Box::new(DogHandler::new()));
    monkey
}

pub struct ChainOfResponsibilityPattern;

impl Pattern for ChainOfResponsibilityPattern {
    fn name(&self) -> &'static str {
        "chain-of-responsibility"
    }

    fn title(&self) -> &'static str {
        "Chain of Responsibility"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Requests pass along a chain of handlers until one accepts"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let door = household_chain();
        for line in operate(&door, &["OPEN_THE_DOOR", "TURN_ON_THE_TV"]) {
            writeln!(out, "{}", line)?;
        }

        let monkey = animal_chain();
        for line in feed(&monkey, &["Nut", "Banana", "Cup of coffee"]) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
