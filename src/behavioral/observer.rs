//! Observer: a subject notifies every attached observer when its state changes.
//!
//! The subject holds only weak references, so dropping an observer detaches
//! it without any explicit bookkeeping.

use std::io::Write;
use std::rc::{Rc, Weak};

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait Observer {
    fn update(&self, state: i32) -> String;
}

#[derive(Default)]
pub struct Subject {
    observers: Vec<Weak<dyn Observer>>,
    state: i32,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach<O: Observer + 'static>(&mut self, observer: &Rc<O>) {
        let weak: Weak<O> = Rc::downgrade(observer);
        self.observers.push(weak);
    }

    pub fn detach<O: Observer + 'static>(&mut self, observer: &Rc<O>) {
        let target = Rc::as_ptr(observer) as *const ();
        self.observers
            .retain(|weak| weak.as_ptr() as *const () != target);
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    /// Updates the state and returns what each live observer reported.
    pub fn set_state(&mut self, state: i32) -> Vec<String> {
        self.state = state;
        self.notify_observers()
    }

    pub fn notify_observers(&mut self) -> Vec<String> {
        self.observers.retain(|weak| weak.strong_count() > 0);
        self.observers
            .iter()
            .filter_map(Weak::upgrade)
            .map(|observer| observer.update(self.state))
            .collect()
    }

    /// Live observers only.
    pub fn observer_count(&self) -> usize {
        self.observers.iter().filter(|w| w.strong_count() > 0).count()
    }
}

pub struct ConcreteObserver {
    pub name: String,
}

impl ConcreteObserver {
    /// Creates the observer and attaches it to `subject` in one step.
    pub fn new(name: impl Into<String>, subject: &mut Subject) -> Rc<Self> {
        let observer = Rc::new(Self { name: name.into() });
        subject.attach(&observer);
        observer
    }
}

impl Observer for ConcreteObserver {
    fn update(&self, state: i32) -> String {
        format!("{} received update with new state: {}", self.name, state)
    }
}

pub struct ObserverPattern;

impl Pattern for ObserverPattern {
    fn name(&self) -> &'static str {
        "observer"
    }

    fn title(&self) -> &'static str {
        "Observer"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Observers are told about every state change of their subject"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut subject = Subject::new();
        let _observer1 = ConcreteObserver::new("Observer 1", &mut subject);
        let _observer2 = ConcreteObserver::new("Observer 2", &mut subject);

        for state in [1, 2] {
            for line in subject.set_state(state) {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_observer_is_detached() {
        let mut subject = Subject::new();
        let first = ConcreteObserver::new("first", &mut subject);
        let second = ConcreteObserver::new("second", &mut subject);
        assert_eq!(subject.observer_count(), 2);

        drop(second);
        assert_eq!(
            subject.set_state(7),
            vec!["first received update with new state: 7"]
        );
        assert_eq!(subject.observer_count(), 1);
        drop(first);
        assert!(subject.set_state(8).is_empty());
    }

    #[test]
    fn test_explicit_detach() {
        let mut subject = Subject::new();
        let first = ConcreteObserver::new("first", &mut subject);
        let second = ConcreteObserver::new("second", &mut subject);

        subject.detach(&first);
        assert_eq!(
            subject.set_state(3),
            vec!["second received update with new state: 3"]
        );
        assert_eq!(subject.state(), 3);
        drop(second);
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        ObserverPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Observer 1 received update with new state: 1\n\
             Observer 2 received update with new state: 1\n\
             Observer 1 received update with new state: 2\n\
             Observer 2 received update with new state: 2\n"
        );
    }
}
