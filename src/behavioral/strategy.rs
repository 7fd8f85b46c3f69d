//! Strategy: the sorting algorithm is chosen when the context is built.

use std::io::Write;

use itertools::Itertools;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait SortStrategy {
    fn name(&self) -> &'static str;
    fn execute(&self, data: &[i32]) -> Vec<i32>;
}

pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn execute(&self, data: &[i32]) -> Vec<i32> {
        let mut array = data.to_vec();
        let n = array.len();
        for i in 0..n {
            let mut swapped = false;
            for j in 1..n - i {
                if array[j] < array[j - 1] {
                    array.swap(j, j - 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
        array
    }
}

pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "quick sort"
    }

    fn execute(&self, data: &[i32]) -> Vec<i32> {
        if data.len() <= 1 {
            return data.to_vec();
        }

        let pivot = data[data.len() / 2];
        let (less, rest): (Vec<i32>, Vec<i32>) = data.iter().partition(|&&x| x < pivot);
        let (equal, greater): (Vec<i32>, Vec<i32>) = rest.into_iter().partition(|&x| x == pivot);

        let mut sorted = self.execute(&less);
        sorted.extend(equal);
        sorted.extend(self.execute(&greater));
        sorted
    }
}

/// Delegates to the standard library's stable sort.
pub struct StdSort;

impl SortStrategy for StdSort {
    fn name(&self) -> &'static str {
        "std sort"
    }

    fn execute(&self, data: &[i32]) -> Vec<i32> {
        data.iter().copied().sorted().collect()
    }
}

pub struct Context {
    strategy: Box<dyn SortStrategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Self { strategy }
    }

    pub fn execute_strategy(&self, data: &[i32]) -> Vec<i32> {
        tracing::debug!(strategy = self.strategy.name(), len = data.len(), "sorting");
        self.strategy.execute(data)
    }

    pub fn describe(&self, data: &[i32]) -> String {
        format!(
            "Sorted data using {} strategy: [{}]",
            self.strategy.name(),
            self.execute_strategy(data).iter().join(", ")
        )
    }
}

pub struct StrategyPattern;

impl Pattern for StrategyPattern {
    fn name(&self) -> &'static str {
        "strategy"
    }

    fn title(&self) -> &'static str {
        "Strategy"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Bubble sort and quick sort are interchangeable strategies"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let data = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];

        let context1 = Context::new(Box::new(BubbleSort));
        writeln!(out, "{}", context1.describe(&data))?;

        let context2 = Context::new(Box::new(QuickSort));
        writeln!(out, "{}", context2.describe(&data))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategies() -> Vec<Box<dyn SortStrategy>> {
        vec![Box::new(BubbleSort), Box::new(QuickSort), Box::new(StdSort)]
    }

    #[test]
    fn test_all_strategies_agree() {
        let data = [3, -1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 0, -7];
        let mut expected = data.to_vec();
        expected.sort();
        for strategy in strategies() {
            assert_eq!(strategy.execute(&data), expected, "{}", strategy.name());
        }
    }

    #[test]
    fn test_empty_and_single_inputs() {
        for strategy in strategies() {
            assert!(strategy.execute(&[]).is_empty());
            assert_eq!(strategy.execute(&[42]), vec![42]);
        }
    }

    #[test]
    fn test_already_sorted_and_duplicates() {
        for strategy in strategies() {
            assert_eq!(strategy.execute(&[1, 2, 3]), vec![1, 2, 3]);
            assert_eq!(strategy.execute(&[2, 2, 2]), vec![2, 2, 2]);
        }
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        StrategyPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sorted data using bubble sort strategy: [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]\n\
             Sorted data using quick sort strategy: [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]\n"
        );
    }
}
