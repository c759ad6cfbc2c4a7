//! Step-generating algorithm drivers
//!
//! Every driver is a pure function: it copies its input, runs the algorithm
//! to completion and returns the recorded [`Steps`]. Running the same input
//! twice yields identical sequences.
//!
//! - Sorts: [`bubble`], [`selection`], [`merge`], [`quick`], [`shell`]
//! - Searches: [`linear`], [`binary`]
//!
//! Tree operations are listed in [`Algorithm`] so they can be selected, but
//! they are answered by the BST service in [`crate::bst`], not by a driver.
//!
//! Drivers assume a non-empty array; [`run`] rejects empty input before
//! dispatching.

pub mod binary;
pub mod bubble;
pub mod linear;
pub mod merge;
pub mod pseudocode;
pub mod quick;
pub mod selection;
pub mod shell;

use crate::errors::{InputError, RunError};
use crate::step::Steps;
use std::fmt;
use std::str::FromStr;

/// The nine selectable algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    MergeSort,
    QuickSort,
    ShellSort,
    LinearSearch,
    BinarySearch,
    BstInsert,
    BstSearch,
}

/// Broad family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Sort,
    Search,
    Tree,
}

impl Algorithm {
    /// Selection order used by the UI
    pub const ALL: [Algorithm; 9] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::ShellSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::BstInsert,
        Algorithm::BstSearch,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubblesort",
            Algorithm::SelectionSort => "selectionsort",
            Algorithm::MergeSort => "mergesort",
            Algorithm::QuickSort => "quicksort",
            Algorithm::ShellSort => "shellsort",
            Algorithm::LinearSearch => "linearsearch",
            Algorithm::BinarySearch => "binarysearch",
            Algorithm::BstInsert => "bstinsert",
            Algorithm::BstSearch => "bstsearch",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::ShellSort => "Shell Sort",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::BstInsert => "BST Insert",
            Algorithm::BstSearch => "BST Search",
        }
    }

    pub fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::BubbleSort
            | Algorithm::SelectionSort
            | Algorithm::MergeSort
            | Algorithm::QuickSort
            | Algorithm::ShellSort => AlgorithmKind::Sort,
            Algorithm::LinearSearch | Algorithm::BinarySearch => AlgorithmKind::Search,
            Algorithm::BstInsert | Algorithm::BstSearch => AlgorithmKind::Tree,
        }
    }

    pub fn pseudocode(self) -> &'static [&'static str] {
        pseudocode::for_algorithm(self)
    }

    /// Next algorithm in selection order, wrapping around
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in selection order, wrapping around
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Algorithm {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.id() == id)
            .ok_or_else(|| {
                tracing::error!(algorithm = s, "unknown algorithm");
                RunError::UnknownAlgorithm(s.to_string())
            })
    }
}

/// One execute request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub array: Vec<u32>,
    pub target: u32,
}

impl RunConfig {
    pub fn new(algorithm: Algorithm, array: Vec<u32>, target: u32) -> Self {
        RunConfig {
            algorithm,
            array,
            target,
        }
    }

    /// The array the driver will actually see.
    ///
    /// Binary search needs ascending input, so its array is sorted first.
    pub fn prepared_array(&self) -> Vec<u32> {
        let mut array = self.array.clone();
        if self.algorithm == Algorithm::BinarySearch {
            array.sort_unstable();
        }
        array
    }
}

/// Dispatch a run to its driver
pub fn run(config: &RunConfig) -> Result<Steps, RunError> {
    if config.array.is_empty() {
        return Err(InputError::EmptyArray.into());
    }

    let array = config.prepared_array();
    let steps = match config.algorithm {
        Algorithm::BubbleSort => bubble::steps(&array),
        Algorithm::SelectionSort => selection::steps(&array),
        Algorithm::MergeSort => merge::steps(&array),
        Algorithm::QuickSort => quick::steps(&array),
        Algorithm::ShellSort => shell::steps(&array),
        Algorithm::LinearSearch => linear::steps(&array, config.target),
        Algorithm::BinarySearch => binary::steps(&array, config.target),
        Algorithm::BstInsert | Algorithm::BstSearch => {
            return Err(RunError::NotAnArrayAlgorithm {
                id: config.algorithm.id(),
            });
        }
    };

    tracing::debug!(
        algorithm = config.algorithm.id(),
        len = array.len(),
        steps = steps.len(),
        "generated step sequence"
    );
    Ok(steps)
}
