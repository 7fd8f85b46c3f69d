//! # Design Patterns in Rust
//!
//! One small, self-contained example per classic pattern. Every example is a
//! handful of types plus a driver (`Pattern::run`) that writes what the
//! pattern does to any `std::io::Write`.
//!
//! ## Creational
//! - Abstract Factory, Builder, Factory, Prototype
//! - Singleton and Monostate (process-wide state, shown as a cautionary tale)
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//!
//! ## Behavioral
//! - Chain of Responsibility, Command, Interpreter, Iterator, Mediator
//! - Memento, Observer, State, Strategy, Template Method, Visitor
//!
//! ## Architectural
//! - Model-View-Controller
//!
//! Run examples with: `cargo run --bin playground -- run <name>`

pub mod architectural;
pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod logger;
pub mod structural;

pub use catalog::{Category, Pattern};
pub use config::PlaygroundConfig;
pub use error::{PlaygroundError, Result};
