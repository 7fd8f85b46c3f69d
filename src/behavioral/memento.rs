//! Memento: snapshots of an originator's state, kept by a caretaker for undo.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

/// Opaque outside this module except for its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityMemento {
    state: String,
}

impl ActivityMemento {
    pub fn name(&self) -> &str {
        &self.state
    }
}

#[derive(Debug)]
pub struct HumanOriginator {
    state: String,
}

impl HumanOriginator {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn do_something(&mut self, action: impl Into<String>) {
        self.state = action.into();
    }

    pub fn save(&self) -> ActivityMemento {
        ActivityMemento {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, memento: ActivityMemento) {
        self.state = memento.state;
    }
}

/// Owns the originator and an unbounded history of its snapshots.
#[derive(Debug)]
pub struct Caretaker {
    mementos: Vec<ActivityMemento>,
    originator: HumanOriginator,
}

impl Caretaker {
    pub fn new(originator: HumanOriginator) -> Self {
        Self {
            mementos: Vec::new(),
            originator,
        }
    }

    pub fn originator(&self) -> &HumanOriginator {
        &self.originator
    }

    pub fn originator_mut(&mut self) -> &mut HumanOriginator {
        &mut self.originator
    }

    pub fn backup(&mut self) {
        self.mementos.push(self.originator.save());
    }

    /// Pops the latest snapshot and restores it. No-op on an empty history.
    pub fn undo(&mut self) -> bool {
        match self.mementos.pop() {
            Some(memento) => {
                tracing::debug!(state = memento.name(), "restoring memento");
                self.originator.restore(memento);
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> Vec<&str> {
        self.mementos.iter().map(|m| m.name()).collect()
    }
}

pub struct MementoPattern;

impl Pattern for MementoPattern {
    fn name(&self) -> &'static str {
        "memento"
    }

    fn title(&self) -> &'static str {
        "Memento"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "A caretaker keeps snapshots of an originator and undoes them"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut caretaker = Caretaker::new(HumanOriginator::new("1. I took a walk"));
        caretaker.backup();

        for action in [
            "2. I went for a run",
            "3. I went to play soccer/football",
            "4. I went to sleep",
        ] {
            caretaker.originator_mut().do_something(action);
            caretaker.backup();
        }

        writeln!(out, "\nCaretaker: Here's the list of mementos:\n")?;
        for name in caretaker.history() {
            writeln!(out, "{}", name)?;
        }

        for _ in 0..3 {
            writeln!(out, "\nUndo one object\n")?;
            caretaker.undo();
            for name in caretaker.history() {
                writeln!(out, "{}", name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut caretaker = Caretaker::new(HumanOriginator::new("idle"));
        assert!(!caretaker.undo());
        assert_eq!(caretaker.originator().state(), "idle");
    }

    #[test]
    fn test_undo_restores_popped_state() {
        let mut caretaker = Caretaker::new(HumanOriginator::new("a"));
        caretaker.backup();
        caretaker.originator_mut().do_something("b");
        caretaker.backup();
        caretaker.originator_mut().do_something("c");

        assert!(caretaker.undo());
        assert_eq!(caretaker.originator().state(), "b");
        assert!(caretaker.undo());
        assert_eq!(caretaker.originator().state(), "a");
        assert!(caretaker.history().is_empty());
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        MementoPattern.run(&mut out).unwrap();
        let expected = "\nCaretaker: Here's the list of mementos:\n\n\
1. I took a walk\n\
2. I went for a run\n\
3. I went to play soccer/football\n\
4. I went to sleep\n\
\nUndo one object\n\n\
1. I took a walk\n\
2. I went for a run\n\
3. I went to play soccer/football\n\
\nUndo one object\n\n\
1. I took a walk\n\
2. I went for a run\n\
\nUndo one object\n\n\
1. I took a walk\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
