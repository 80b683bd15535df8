//! Section diff
//!
//! Computes an edit script of run-length tagged `Copy`, `Insert` and `Delete`
//! sections that turns one sequence window into another. The engine
//! repeatedly takes the longest common run of a window pair and recurses on
//! the regions before and after it.
//!
//! # Example
//!
//! ```
//! use section_diff::{DiffSection, diff_strings};
//!
//! let sections: Vec<_> = diff_strings("ABCABBA", 0..7, "CBABAC", 0..6)
//!     .unwrap()
//!     .collect();
//! assert_eq!(
//!     sections,
//!     vec![
//!         DiffSection::insert(2),
//!         DiffSection::copy(2),
//!         DiffSection::insert(1),
//!         DiffSection::copy(1),
//!         DiffSection::delete(4),
//!     ]
//! );
//! ```

pub mod apply;
pub mod comparer;
pub mod engine;
pub mod error;
pub mod section;
pub mod sequence;
pub mod settings;

mod run;

use core::ops::Range;

pub use apply::apply_sections;
pub use comparer::{AsciiCaseInsensitive, DefaultEquality, EqualityComparer};
pub use engine::{DiffEngine, DiffSections, LineSections, StringSections};
pub use error::{DiffError, Side};
pub use section::{
    DiffSection, Positioned, PositionedSection, ScriptStats, SectionIterExt, SectionKind,
};
pub use sequence::Sequence;
pub use settings::DiffSettings;

/// Diffs `a[a_range]` against `b[b_range]` with the default engine.
///
/// # Errors
/// Returns [`DiffError::InvalidRange`] for a reversed or out-of-bounds window.
pub fn diff<A, B, C>(
    a: A,
    a_range: Range<usize>,
    b: B,
    b_range: Range<usize>,
    cmp: C,
) -> Result<DiffSections<A, B, C>, DiffError>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    C: EqualityComparer<A::Item>,
{
    DiffEngine::default().diff(a, a_range, b, b_range, cmp)
}

/// Diffs two whole slices using `PartialEq`.
#[must_use]
pub fn diff_slices<'s, T: PartialEq>(
    a: &'s [T],
    b: &'s [T],
) -> DiffSections<&'s [T], &'s [T], DefaultEquality> {
    DiffSections::whole(a, b, DefaultEquality)
}

/// Diffs two strings character by character with the default engine.
///
/// # Errors
/// Returns [`DiffError::InvalidRange`] for a reversed or out-of-bounds window.
pub fn diff_strings(
    first: &str,
    first_range: Range<usize>,
    second: &str,
    second_range: Range<usize>,
) -> Result<StringSections, DiffError> {
    DiffEngine::default().diff_strings(first, first_range, second, second_range)
}

/// Diffs two texts line by line with the default engine.
#[must_use]
pub fn diff_lines<'t>(first: &'t str, second: &'t str) -> LineSections<'t> {
    let old: Vec<&str> = first.lines().collect();
    let new: Vec<&str> = second.lines().collect();
    DiffSections::whole(old, new, DefaultEquality)
}
