//! The registry every example plugs into.
//!
//! Each pattern is a unit struct implementing [`Pattern`]; the catalog hands
//! them out as `Box<dyn Pattern>` so the CLI can pick one at runtime.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;
use serde::Deserialize;

use crate::error::{PlaygroundError, Result};
use crate::{architectural, behavioral, creational, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
    Architectural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
            Category::Architectural => "architectural",
        };
        f.write_str(label)
    }
}

pub trait Pattern {
    /// Kebab-case identifier used on the command line.
    fn name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn category(&self) -> Category;

    fn summary(&self) -> &'static str;

    /// Writes the example's driver sequence to `out`.
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

pub fn catalog() -> Vec<Box<dyn Pattern>> {
    let mut patterns: Vec<Box<dyn Pattern>> = vec![
        Box::new(creational::abstract_factory::AbstractFactoryPattern),
        Box::new(structural::adapter::AdapterPattern),
        Box::new(structural::bridge::BridgePattern),
        Box::new(creational::builder::BuilderPattern),
        Box::new(behavioral::chain_of_responsibility::ChainOfResponsibilityPattern),
        Box::new(behavioral::command::CommandPattern),
        Box::new(structural::composite::CompositePattern),
        Box::new(structural::decorator::DecoratorPattern),
        Box::new(structural::facade::FacadePattern),
        Box::new(creational::factory::FactoryPattern),
        Box::new(structural::flyweight::FlyweightPattern),
        Box::new(behavioral::interpreter::InterpreterPattern),
        Box::new(behavioral::iterator::IteratorPattern),
        Box::new(behavioral::mediator::MediatorPattern),
        Box::new(behavioral::memento::MementoPattern),
        Box::new(creational::monostate::MonostatePattern),
        Box::new(architectural::mvc::MvcPattern),
        Box::new(behavioral::observer::ObserverPattern),
        Box::new(creational::prototype::PrototypePattern),
        Box::new(structural::proxy::ProxyPattern),
        Box::new(creational::singleton::SingletonPattern),
        Box::new(behavioral::state::StatePattern),
        Box::new(behavioral::strategy::StrategyPattern),
        Box::new(behavioral::template_method::TemplateMethodPattern),
        Box::new(behavioral::visitor::VisitorPattern),
    ];
    patterns.sort_by_key(|p| p.title());
    patterns
}

pub fn names() -> Vec<&'static str> {
    catalog().iter().map(|p| p.name()).collect()
}

/// Accepts `Chain_Of_Responsibility`, `chain of responsibility` and the
/// canonical `chain-of-responsibility` alike.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn find(name: &str) -> Result<Box<dyn Pattern>> {
    let wanted = normalize_name(name);
    tracing::debug!(requested = name, normalized = %wanted, "looking up pattern");

    match catalog().into_iter().find(|p| p.name() == wanted) {
        Some(pattern) => Ok(pattern),
        None => {
            let suggestion = find_similar_name(&wanted, &names());
            tracing::debug!(?suggestion, "pattern not found");
            Err(PlaygroundError::unknown_pattern(name, suggestion))
        }
    }
}

pub fn by_category(category: Option<Category>) -> Vec<Box<dyn Pattern>> {
    catalog()
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.category() == c))
        .collect()
}

pub fn header(pattern: &dyn Pattern) -> String {
    format!(
        "=== {} ({}) ===",
        pattern.title().bold(),
        pattern.category().to_string().cyan()
    )
}

/// Runs one pattern, optionally preceded by its header line.
pub fn run_pattern(pattern: &dyn Pattern, out: &mut dyn Write, with_header: bool) -> Result<()> {
    tracing::info!(pattern = pattern.name(), "running pattern");
    if with_header {
        writeln!(out, "{}", header(pattern))?;
    }
    pattern.run(out)?;
    if with_header {
        writeln!(out)?;
    }
    Ok(())
}

pub fn run_all(out: &mut dyn Write, category: Option<Category>, with_header: bool) -> Result<usize> {
    let patterns = by_category(category);
    for pattern in &patterns {
        run_pattern(pattern.as_ref(), out, with_header)?;
    }
    Ok(patterns.len())
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        current[0] = i;
        for j in 1..=b_chars.len() {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            current[j] = (prev[j] + 1)
                .min(current[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b_chars.len()]
}

pub fn find_similar_name(typo: &str, candidates: &[&str]) -> Option<String> {
    const MAX_DISTANCE: usize = 2;

    candidates
        .iter()
        .map(|&c| (levenshtein_distance(typo, c), c))
        .filter(|(distance, _)| *distance <= MAX_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, c)| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_every_pattern_once() {
        let names = names();
        assert_eq!(names.len(), 25);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn test_catalog_is_sorted_by_title() {
        let titles: Vec<_> = catalog().iter().map(|p| p.title()).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn test_names_are_kebab_case() {
        for name in names() {
            assert_eq!(normalize_name(name), name);
        }
    }

    #[test]
    fn test_find_accepts_loose_spelling() {
        assert_eq!(find("Chain_Of_Responsibility").unwrap().name(), "chain-of-responsibility");
        assert_eq!(find("template method").unwrap().name(), "template-method");
        assert_eq!(find("  MVC ").unwrap().name(), "mvc");
    }

    #[test]
    fn test_find_unknown_suggests_closest() {
        match find("vistor") {
            Err(PlaygroundError::UnknownPattern { name, suggestion }) => {
                assert_eq!(name, "vistor");
                assert_eq!(suggestion.as_deref(), Some("visitor"));
            }
            other => panic!("expected UnknownPattern, got {:?}", other.map(|p| p.name())),
        }
    }

    #[test]
    fn test_find_unknown_without_close_match() {
        match find("blockchain") {
            Err(PlaygroundError::UnknownPattern { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("expected UnknownPattern, got {:?}", other.map(|p| p.name())),
        }
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("proxy", "proxy"), 0);
        assert_eq!(levenshtein_distance("state", "stat"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_by_category_filters() {
        let creational = by_category(Some(Category::Creational));
        assert_eq!(creational.len(), 6);
        assert!(creational.iter().all(|p| p.category() == Category::Creational));
        assert_eq!(by_category(Some(Category::Structural)).len(), 7);
        assert_eq!(by_category(Some(Category::Behavioral)).len(), 11);
        assert_eq!(by_category(Some(Category::Architectural)).len(), 1);
        assert_eq!(by_category(None).len(), 25);
    }

    #[test]
    fn test_every_pattern_runs_and_writes_output() {
        for pattern in catalog() {
            let mut out = Vec::new();
            pattern.run(&mut out).unwrap();
            assert!(!out.is_empty(), "{} wrote nothing", pattern.name());
            assert!(!pattern.summary().is_empty());
        }
    }

    #[test]
    fn test_run_pattern_with_header() {
        colored::control::set_override(false);
        let pattern = find("bridge").unwrap();
        let mut out = Vec::new();
        run_pattern(pattern.as_ref(), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("=== Bridge (structural) ===\n"));
        assert!(text.contains("Drawing Red Circle, radius: 10, x: 5, y: 6"));
    }

    #[test]
    fn test_run_all_counts_patterns() {
        let mut out = Vec::new();
        let count = run_all(&mut out, Some(Category::Architectural), false).unwrap();
        assert_eq!(count, 1);
    }
}
