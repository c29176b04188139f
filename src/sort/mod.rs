//! Out-of-core sorting algorithms.
//!
//! The algorithms only see an [`ElementStore`]: a length plus fallible
//! indexed reads and writes. They know nothing about pages, so every
//! comparison or swap against a [`PagedArray`] may fault a page in.
//!
//! - [`quicksort`] - Hoare partition, bounded stack
//! - [`insertion_sort`] - Shift-and-insert, stable, cache friendly
//! - [`bubble_sort`] - Adjacent swaps, touches every page every pass

mod bubble;
mod insertion;
mod quicksort;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use quicksort::quicksort;

use std::fmt;
use std::str::FromStr;

use crate::buffer::{PagedArray, SharedPagedArray};
use crate::common::{Element, Error, Result};

/// Indexed storage the sorts operate on.
///
/// Any access may fail; the sorts propagate the first error and stop.
pub trait ElementStore {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&mut self, index: usize) -> Result<Element>;

    fn set(&mut self, index: usize, value: Element) -> Result<()>;

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let x = self.get(a)?;
        let y = self.get(b)?;
        self.set(a, y)?;
        self.set(b, x)
    }
}

impl ElementStore for PagedArray {
    fn len(&self) -> usize {
        PagedArray::len(self)
    }

    fn get(&mut self, index: usize) -> Result<Element> {
        PagedArray::get(self, index)
    }

    fn set(&mut self, index: usize, value: Element) -> Result<()> {
        PagedArray::set(self, index, value)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        PagedArray::swap(self, a, b)
    }
}

impl ElementStore for SharedPagedArray {
    fn len(&self) -> usize {
        SharedPagedArray::len(self)
    }

    fn get(&mut self, index: usize) -> Result<Element> {
        SharedPagedArray::get(self, index)
    }

    fn set(&mut self, index: usize, value: Element) -> Result<()> {
        SharedPagedArray::set(self, index, value)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        SharedPagedArray::swap(self, a, b)
    }
}

/// In-memory store, used as a reference when testing the paged path.
impl ElementStore for Vec<Element> {
    fn len(&self) -> usize {
        <[Element]>::len(self)
    }

    fn get(&mut self, index: usize) -> Result<Element> {
        let len = <[Element]>::len(self);
        <[Element]>::get(self, index)
            .copied()
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    fn set(&mut self, index: usize, value: Element) -> Result<()> {
        let len = <[Element]>::len(self);
        match <[Element]>::get_mut(self, index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }
}

/// Sorting algorithm selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    QuickSort,
    InsertionSort,
    BubbleSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::QuickSort,
        Algorithm::InsertionSort,
        Algorithm::BubbleSort,
    ];

    /// Short code: `QS`, `IS` or `BS`.
    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::QuickSort => "QS",
            Algorithm::InsertionSort => "IS",
            Algorithm::BubbleSort => "BS",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::QuickSort => "Quicksort",
            Algorithm::InsertionSort => "Insertion sort",
            Algorithm::BubbleSort => "Bubble sort",
        }
    }

    /// Sort `store` in ascending order.
    pub fn run<S: ElementStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        match self {
            Algorithm::QuickSort => quicksort(store),
            Algorithm::InsertionSort => insertion_sort(store),
            Algorithm::BubbleSort => bubble_sort(store),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.code() == s)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown algorithm '{}' (expected QS, IS or BS)",
                    s
                ))
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
