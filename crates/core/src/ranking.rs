// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multi-criterion ordering.
//!
//! A ranking is an ordered list of comparison functions. The first
//! criterion that tells two elements apart decides their order; elements
//! that tie on every criterion keep their original relative order.

use std::cmp::Ordering;

/// A single ranking criterion.
pub type Criterion<T> = fn(&T, &T) -> Ordering;

/// Orders `true` before `false`.
#[must_use]
pub fn sort_by_boolean(a: bool, b: bool) -> Ordering {
    b.cmp(&a)
}

/// Compares two elements by each criterion in turn.
///
/// Returns the first non-equal result, or `Ordering::Equal` if every
/// criterion ties.
#[must_use]
pub fn compare_by_criteria<T>(criteria: &[Criterion<T>], a: &T, b: &T) -> Ordering {
    for criterion in criteria {
        let result: Ordering = criterion(a, b);
        if result != Ordering::Equal {
            return result;
        }
    }
    Ordering::Equal
}

/// Sorts `items` in place by `criteria`.
///
/// The sort is stable: fully tied elements keep their input order.
pub fn sort_by_criteria<T>(items: &mut [T], criteria: &[Criterion<T>]) {
    items.sort_by(|a, b| compare_by_criteria(criteria, a, b));
}
