//! Algorithm selection behind the sort contract.
//!
//! [`Algorithm`] is the closed set of sorts a host may pick. Discriminants
//! are ABI-stable ids used by `sortprov_sort_with`; new variants append,
//! existing values never change.

use std::fmt;
use std::str::FromStr;

use crate::error::SortError;
use crate::{heap, insertion, quick, radix, shell};

/// A sorting algorithm selectable across the C boundary.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Pattern-defeating quicksort from the standard library.
    #[default]
    Unstable = 0,
    /// Adaptive merge sort from the standard library.
    Stable = 1,
    /// Straight insertion sort.
    Insertion = 2,
    /// Shell sort over the Ciura gap sequence.
    Shell = 3,
    /// Bottom-up heap sort.
    Heap = 4,
    /// Three-way quicksort with a median-of-three pivot.
    Quick = 5,
    /// Byte-wise LSD radix sort.
    Radix = 6,
}

impl Algorithm {
    /// Every algorithm, in id order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Unstable,
        Algorithm::Stable,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Radix,
    ];

    /// Sort `data` in place into non-decreasing order.
    ///
    /// Slices of length 0 or 1 are returned untouched.
    pub fn sort(self, data: &mut [i32]) {
        if data.len() < 2 {
            return;
        }
        match self {
            Self::Unstable => data.sort_unstable(),
            Self::Stable => data.sort(),
            Self::Insertion => insertion::insertion(data),
            Self::Shell => shell::shell(data),
            Self::Heap => heap::heap(data),
            Self::Quick => quick::quick(data),
            Self::Radix => radix::radix(data),
        }
    }

    /// ABI id of this algorithm.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unstable => "unstable",
            Self::Stable => "stable",
            Self::Insertion => "insertion",
            Self::Shell => "shell",
            Self::Heap => "heap",
            Self::Quick => "quick",
            Self::Radix => "radix",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Stable | Self::Insertion | Self::Radix)
    }

    /// Worst-case complexity class label.
    pub fn complexity(self) -> &'static str {
        match self {
            Self::Unstable | Self::Stable | Self::Heap | Self::Quick => "O(n log n)",
            Self::Radix => "O(n)",
            Self::Shell => "O(n^(4/3))",
            Self::Insertion => "O(n^2)",
        }
    }

    /// Largest input the report harness feeds this algorithm, if capped.
    ///
    /// Quadratic sorts are limited to 10 000 elements.
    pub fn size_limit(self) -> Option<usize> {
        match self.complexity() {
            "O(n^2)" => Some(10_000),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Parse a name case-insensitively; `-` and `_` are ignored, and a few
    /// common aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let algorithm = match key.as_str() {
            "unstable" | "default" | "pdq" => Self::Unstable,
            "stable" | "merge" => Self::Stable,
            "insertion" => Self::Insertion,
            "shell" => Self::Shell,
            "heap" => Self::Heap,
            "quick" | "quicksort" => Self::Quick,
            "radix" | "lsd" => Self::Radix,
            _ => {
                return Err(SortError::UnknownAlgorithm {
                    name: s.to_string(),
                })
            }
        };
        Ok(algorithm)
    }
}

impl TryFrom<i32> for Algorithm {
    type Error = SortError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or(SortError::UnknownAlgorithmId { id })
    }
}
