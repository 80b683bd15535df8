//! The section diff engine.
//!
//! Each step finds the single longest common run in the current window pair,
//! then handles the region before it, emits `Copy` for the run, and handles
//! the region after it. A window pair with nothing in common becomes one
//! `Delete` and/or one `Insert`.
//!
//! This is greedy: it does not minimize edit distance, and for some inputs it
//! keeps fewer elements than a true longest common subsequence would.
//!
//! Sections are produced lazily from an explicit stack of pending work, so a
//! caller that stops iterating stops all further searching.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

use tracing::{debug, trace};

use crate::comparer::{DefaultEquality, EqualityComparer};
use crate::error::{DiffError, Side};
use crate::run::find_longest_common_run;
use crate::section::DiffSection;
use crate::sequence::Sequence;
use crate::settings::DiffSettings;

/// Sections of a character-level string diff.
pub type StringSections = DiffSections<Vec<char>, Vec<char>, DefaultEquality>;

/// Sections of a line-level text diff.
pub type LineSections<'t> = DiffSections<Vec<&'t str>, Vec<&'t str>, DefaultEquality>;

/// Checks that `range` is a forward window inside a sequence of length `len`.
pub(crate) fn validate_window(
    side: Side,
    range: &Range<usize>,
    len: usize,
) -> Result<(), DiffError> {
    if range.start > range.end || range.end > len {
        return Err(DiffError::InvalidRange {
            side,
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

/// Entry point for diffing, carrying the engine settings.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    settings: DiffSettings,
}

impl DiffEngine {
    /// Creates an engine with the given settings.
    #[must_use]
    pub const fn new(settings: DiffSettings) -> Self {
        Self { settings }
    }

    /// Returns the engine settings.
    #[must_use]
    pub const fn settings(&self) -> &DiffSettings {
        &self.settings
    }

    /// Diffs `a[a_range]` against `b[b_range]` using `cmp` for equality.
    ///
    /// Windows are validated up front; the returned iterator then produces
    /// sections on demand.
    ///
    /// # Errors
    /// Returns [`DiffError::InvalidRange`] for a reversed or out-of-bounds
    /// window and [`DiffError::WindowTooLarge`] if the configured limit is
    /// exceeded.
    pub fn diff<A, B, C>(
        &self,
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
        let checked = validate_window(Side::Old, &a_range, a.len())
            .and_then(|()| validate_window(Side::New, &b_range, b.len()))
            .and_then(|()| self.settings.check_window(a_range.len(), b_range.len()));
        if let Err(err) = checked {
            debug!(%err, "rejecting diff request");
            return Err(err);
        }

        debug!(
            old_len = a_range.len(),
            new_len = b_range.len(),
            "starting section diff"
        );
        Ok(DiffSections::new(a, a_range, b, b_range, cmp))
    }

    /// Diffs two strings character by character.
    ///
    /// Ranges count `char`s, not bytes.
    ///
    /// # Errors
    /// Same as [`DiffEngine::diff`].
    pub fn diff_strings(
        &self,
        first: &str,
        first_range: Range<usize>,
        second: &str,
        second_range: Range<usize>,
    ) -> Result<StringSections, DiffError> {
        self.diff(
            first.chars().collect::<Vec<_>>(),
            first_range,
            second.chars().collect::<Vec<_>>(),
            second_range,
            DefaultEquality,
        )
    }

    /// Diffs two texts line by line, covering both texts entirely.
    ///
    /// # Errors
    /// Returns [`DiffError::WindowTooLarge`] if the configured limit is exceeded.
    pub fn diff_lines<'t>(
        &self,
        first: &'t str,
        second: &'t str,
    ) -> Result<LineSections<'t>, DiffError> {
        let old: Vec<&str> = first.lines().collect();
        let new: Vec<&str> = second.lines().collect();
        let (old_len, new_len) = (old.len(), new.len());
        self.diff(old, 0..old_len, new, 0..new_len, DefaultEquality)
    }
}

/// Pending work on the stack, popped in emission order.
#[derive(Debug, Clone)]
enum Work {
    Window { a: Range<usize>, b: Range<usize> },
    Emit(DiffSection),
}

/// Lazy iterator over the sections of one diff.
///
/// It cannot be restarted; once exhausted it keeps returning `None`.
pub struct DiffSections<A, B, C> {
    a: A,
    b: B,
    cmp: C,
    stack: Vec<Work>,
}

impl<A, B, C> DiffSections<A, B, C>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    C: EqualityComparer<A::Item>,
{
    fn new(a: A, a_range: Range<usize>, b: B, b_range: Range<usize>, cmp: C) -> Self {
        let mut sections = Self {
            a,
            b,
            cmp,
            stack: Vec::new(),
        };
        sections.push_window(a_range, b_range);
        sections
    }

    /// Diff covering both sequences entirely; such windows are always valid.
    pub(crate) fn whole(a: A, b: B, cmp: C) -> Self {
        let (a_len, b_len) = (a.len(), b.len());
        debug!(old_len = a_len, new_len = b_len, "starting section diff");
        Self::new(a, 0..a_len, b, 0..b_len, cmp)
    }

    fn push_window(&mut self, a: Range<usize>, b: Range<usize>) {
        if a.is_empty() && b.is_empty() {
            return;
        }
        self.stack.push(Work::Window { a, b });
    }

    /// Expands one window, returning a section if it can be emitted right away.
    fn expand(&mut self, a: Range<usize>, b: Range<usize>) -> Option<DiffSection> {
        let run = find_longest_common_run(&self.a, a.clone(), &self.b, b.clone(), &self.cmp);
        if run.found {
            trace!(
                old_pos = run.position_in_a,
                new_pos = run.position_in_b,
                length = run.length,
                "longest common run"
            );
            let a_after = run.position_in_a + run.length;
            let b_after = run.position_in_b + run.length;
            // Reverse order: before-window ends up on top.
            self.push_window(a_after..a.end, b_after..b.end);
            self.stack.push(Work::Emit(DiffSection::copy(run.length)));
            self.push_window(a.start..run.position_in_a, b.start..run.position_in_b);
            return None;
        }

        trace!(old_len = a.len(), new_len = b.len(), "no common run");
        if !b.is_empty() {
            self.stack.push(Work::Emit(DiffSection::insert(b.len())));
        }
        (!a.is_empty()).then_some(DiffSection::delete(a.len()))
    }
}

impl<A, B, C> Iterator for DiffSections<A, B, C>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    C: EqualityComparer<A::Item>,
{
    type Item = DiffSection;

    fn next(&mut self) -> Option<DiffSection> {
        while let Some(work) = self.stack.pop() {
            match work {
                Work::Emit(section) => return Some(section),
                Work::Window { a, b } => {
                    if let Some(section) = self.expand(a, b) {
                        return Some(section);
                    }
                }
            }
        }
        None
    }
}

impl<A, B, C> FusedIterator for DiffSections<A, B, C>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    C: EqualityComparer<A::Item>,
{
}

impl<A, B, C> fmt::Debug for DiffSections<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffSections")
            .field("pending", &self.stack)
            .finish_non_exhaustive()
    }
}
