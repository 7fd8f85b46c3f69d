//! Monostate: many instances, one shared state.
//!
//! Unlike a singleton, callers create as many values as they like; every one
//! of them reads and writes the same static state.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use lazy_static::lazy_static;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub const INITIAL_STATE: &str = "Normal activity";

lazy_static! {
    static ref SHARED_STATE: RwLock<String> = RwLock::new(INITIAL_STATE.to_string());
    static ref SEQUENCE: Mutex<()> = Mutex::new(());
}

/// Default methods give every member the same view of the shared state.
pub trait Member {
    fn state(&self) -> String {
        SHARED_STATE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_state(&self, state: &str) {
        *SHARED_STATE.write().unwrap_or_else(PoisonError::into_inner) = state.to_string();
    }

    fn do_something(&self) -> String {
        format!("Doing something with state: {}", self.state())
    }
}

#[derive(Debug, Default)]
pub struct EuropeUnion;

impl Member for EuropeUnion {}

#[derive(Debug, Default)]
pub struct Germany;

impl Member for Germany {}

#[derive(Debug, Default)]
pub struct Italy;

impl Member for Italy {}

fn exclusive() -> MutexGuard<'static, ()> {
    SEQUENCE.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct MonostatePattern;

impl Pattern for MonostatePattern {
    fn name(&self) -> &'static str {
        "monostate"
    }

    fn title(&self) -> &'static str {
        "Monostate"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Separate instances all share one static state"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let _guard = exclusive();

        let first = EuropeUnion;
        first.set_state("Lockdown due to Covid-19");

        let second = EuropeUnion;
        writeln!(out, "{}", second.state())?;
        writeln!(out, "{}", second.do_something())?;

        writeln!(out, "{}", Germany.state())?;
        writeln!(out, "{}", Italy.state())?;
        Ok(())
    }
}
