//! Iterator: walk a collection without exposing how it stores its elements.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ArrayIterator<'a, T> {
    elements: &'a [T],
    current: usize,
}

impl<'a, T> ArrayIterator<'a, T> {
    pub fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            current: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current < self.elements.len()
    }
}

impl<'a, T> Iterator for ArrayIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.current)?;
        self.current += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ArrayIterator<'_, T> {}

#[derive(Debug, Clone, PartialEq)]
pub struct MyCollection<T> {
    elements: Vec<T>,
}

impl<T> MyCollection<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    pub fn make_iterator(&self) -> ArrayIterator<'_, T> {
        ArrayIterator::new(&self.elements)
    }
}

impl<'a, T> IntoIterator for &'a MyCollection<T> {
    type Item = &'a T;
    type IntoIter = ArrayIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.make_iterator()
    }
}

pub struct IteratorPattern;

impl Pattern for IteratorPattern {
    fn name(&self) -> &'static str {
        "iterator"
    }

    fn title(&self) -> &'static str {
        "Iterator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "A collection hands out an iterator with has_next and next"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let collection = MyCollection::new(vec![1, 2, 3, 4, 5]);
        let mut iterator = collection.make_iterator();

        while iterator.has_next() {
            if let Some(element) = iterator.next() {
                writeln!(out, "{}", element)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_has_nothing() {
        let collection: MyCollection<i32> = MyCollection::new(Vec::new());
        let mut iterator = collection.make_iterator();
        assert!(!iterator.has_next());
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn test_next_past_the_end_stays_none() {
        let collection = MyCollection::new(vec!["a"]);
        let mut iterator = collection.make_iterator();
        assert_eq!(iterator.next(), Some(&"a"));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
        assert!(!iterator.has_next());
    }

    #[test]
    fn test_works_with_std_adapters() {
        let collection = MyCollection::new(vec![1, 2, 3, 4]);
        assert_eq!(collection.make_iterator().len(), 4);
        let evens: Vec<_> = (&collection).into_iter().filter(|n| *n % 2 == 0).collect();
        assert_eq!(evens, vec![&2, &4]);
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        IteratorPattern.run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n4\n5\n");
    }
}
