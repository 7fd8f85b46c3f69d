//! Singleton: exactly one `Sun` exists for the whole process.
//!
//! Global mutable state is shown here as the textbook example, not as a
//! recommendation; passing a value explicitly is usually the better design.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

lazy_static! {
    static ref SUN: Sun = Sun {
        dimension: Mutex::new(None),
    };
    // Serializes demo runs so two runs never interleave their writes.
    static ref SEQUENCE: Mutex<()> = Mutex::new(());
}

#[derive(Debug)]
pub struct Sun {
    dimension: Mutex<Option<f64>>,
}

impl Sun {
    /// The only instance. There is no public constructor.
    pub fn shared() -> &'static Sun {
        &SUN
    }

    pub fn dimension(&self) -> Option<f64> {
        *self.dimension.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_dimension(&self, dimension: f64) {
        *self.dimension.lock().unwrap_or_else(PoisonError::into_inner) = Some(dimension);
    }
}

fn exclusive() -> MutexGuard<'static, ()> {
    SEQUENCE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn show(dimension: Option<f64>) -> String {
    dimension.map(|d| format!("{:?}", d)).unwrap_or_default()
}

pub struct SingletonPattern;

impl Pattern for SingletonPattern {
    fn name(&self) -> &'static str {
        "singleton"
    }

    fn title(&self) -> &'static str {
        "Singleton"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Every handle to the sun refers to the same instance"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let _guard = exclusive();

        let sun = Sun::shared();
        sun.set_dimension(345.0);
        writeln!(out, "{}", show(sun.dimension()))?;

        let same_sun = Sun::shared();
        writeln!(out, "{}", show(same_sun.dimension()))?;
        same_sun.set_dimension(56.0);
        writeln!(out, "{}", show(same_sun.dimension()))?;
        Ok(())
    }
}
