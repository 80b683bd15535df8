//! Edit-script value types.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

use serde::{Deserialize, Serialize};

/// The kind of a [`DiffSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    /// Elements present, unchanged, in both sequences.
    Copy,
    /// Elements only present in the new sequence.
    Insert,
    /// Elements only present in the old sequence.
    Delete,
}

/// One run-length tagged operation of an edit script.
///
/// Reading sections left to right, `Copy(n)` advances both cursors by `n`,
/// `Delete(n)` advances only the old cursor and `Insert(n)` only the new one.
/// The engine never produces a zero-length section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffSection {
    kind: SectionKind,
    length: usize,
}

impl DiffSection {
    /// Creates a section of the given kind.
    #[must_use]
    pub const fn new(kind: SectionKind, length: usize) -> Self {
        Self { kind, length }
    }

    /// Creates a `Copy` section.
    #[must_use]
    pub const fn copy(length: usize) -> Self {
        Self::new(SectionKind::Copy, length)
    }

    /// Creates an `Insert` section.
    #[must_use]
    pub const fn insert(length: usize) -> Self {
        Self::new(SectionKind::Insert, length)
    }

    /// Creates a `Delete` section.
    #[must_use]
    pub const fn delete(length: usize) -> Self {
        Self::new(SectionKind::Delete, length)
    }

    /// Returns the section kind.
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Returns the run length.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of old-sequence elements this section consumes.
    #[must_use]
    pub const fn old_len(&self) -> usize {
        match self.kind {
            SectionKind::Copy | SectionKind::Delete => self.length,
            SectionKind::Insert => 0,
        }
    }

    /// Number of new-sequence elements this section consumes.
    #[must_use]
    pub const fn new_len(&self) -> usize {
        match self.kind {
            SectionKind::Copy | SectionKind::Insert => self.length,
            SectionKind::Delete => 0,
        }
    }

    /// Returns true unless this is a `Copy`.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self.kind, SectionKind::Copy)
    }
}

impl fmt::Display for DiffSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            SectionKind::Copy => "Copy",
            SectionKind::Insert => "Insert",
            SectionKind::Delete => "Delete",
        };
        write!(f, "{name}({})", self.length)
    }
}

/// A section together with the absolute spans it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedSection {
    /// The underlying section.
    pub section: DiffSection,
    /// Span in the old sequence (empty for inserts).
    pub old: Range<usize>,
    /// Span in the new sequence (empty for deletes).
    pub new: Range<usize>,
}

/// Iterator adapter returned by [`SectionIterExt::positioned`].
#[derive(Debug, Clone)]
pub struct Positioned<I> {
    inner: I,
    old_pos: usize,
    new_pos: usize,
}

impl<I: Iterator<Item = DiffSection>> Iterator for Positioned<I> {
    type Item = PositionedSection;

    fn next(&mut self) -> Option<Self::Item> {
        let section = self.inner.next()?;
        // Hand-built scripts may carry arbitrary lengths; spans clamp at usize::MAX.
        let old = self.old_pos..self.old_pos.saturating_add(section.old_len());
        let new = self.new_pos..self.new_pos.saturating_add(section.new_len());
        self.old_pos = old.end;
        self.new_pos = new.end;
        Some(PositionedSection { section, old, new })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: FusedIterator<Item = DiffSection>> FusedIterator for Positioned<I> {}

/// Extension methods for iterators of sections.
pub trait SectionIterExt: Iterator<Item = DiffSection> + Sized {
    /// Annotates each section with absolute spans, starting the cursors at
    /// `old_start` and `new_start` (the window starts passed to the diff).
    fn positioned(self, old_start: usize, new_start: usize) -> Positioned<Self> {
        Positioned {
            inner: self,
            old_pos: old_start,
            new_pos: new_start,
        }
    }
}

impl<I: Iterator<Item = DiffSection>> SectionIterExt for I {}

/// Totals for an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptStats {
    /// Elements kept by `Copy` sections.
    pub copied: usize,
    /// Elements added by `Insert` sections.
    pub inserted: usize,
    /// Elements removed by `Delete` sections.
    pub deleted: usize,
    /// Number of sections.
    pub sections: usize,
}

impl ScriptStats {
    /// Summarizes a sequence of sections.
    #[must_use]
    pub fn from_sections<I: IntoIterator<Item = DiffSection>>(sections: I) -> Self {
        sections.into_iter().fold(Self::default(), |mut acc, s| {
            match s.kind() {
                SectionKind::Copy => acc.copied += s.length(),
                SectionKind::Insert => acc.inserted += s.length(),
                SectionKind::Delete => acc.deleted += s.length(),
            }
            acc.sections += 1;
            acc
        })
    }

    /// Returns true if the script contains no inserts or deletes.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.inserted == 0 && self.deleted == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lengths() {
        let copy = DiffSection::copy(5);
        assert_eq!(copy.old_len(), 5);
        assert_eq!(copy.new_len(), 5);
        assert!(!copy.is_change());

        let delete = DiffSection::delete(3);
        assert_eq!(delete.old_len(), 3);
        assert_eq!(delete.new_len(), 0);
        assert!(delete.is_change());

        let insert = DiffSection::insert(4);
        assert_eq!(insert.old_len(), 0);
        assert_eq!(insert.new_len(), 4);
        assert_eq!(insert.kind(), SectionKind::Insert);
    }

    #[test]
    fn test_display() {
        assert_eq!(DiffSection::copy(3).to_string(), "Copy(3)");
        assert_eq!(DiffSection::insert(1).to_string(), "Insert(1)");
        assert_eq!(DiffSection::delete(4).to_string(), "Delete(4)");
    }

    #[test]
    fn test_positioned_spans() {
        let script = vec![
            DiffSection::delete(2),
            DiffSection::copy(2),
            DiffSection::insert(2),
        ];
        let spans: Vec<_> = script.into_iter().positioned(1, 2).collect();
        assert_eq!(spans[0].old, 1..3);
        assert_eq!(spans[0].new, 2..2);
        assert_eq!(spans[1].old, 3..5);
        assert_eq!(spans[1].new, 2..4);
        assert_eq!(spans[2].old, 5..5);
        assert_eq!(spans[2].new, 4..6);
    }

    #[test]
    fn test_positioned_clamps_huge_lengths() {
        let spans: Vec<_> = vec![DiffSection::delete(usize::MAX), DiffSection::copy(3)]
            .into_iter()
            .positioned(5, 0)
            .collect();
        assert_eq!(spans[0].old, 5..usize::MAX);
        assert_eq!(spans[1].old, usize::MAX..usize::MAX);
        assert_eq!(spans[1].new, 0..3);
    }

    #[test]
    fn test_stats() {
        let stats = ScriptStats::from_sections([
            DiffSection::insert(2),
            DiffSection::copy(2),
            DiffSection::insert(1),
            DiffSection::copy(1),
            DiffSection::delete(4),
        ]);
        assert_eq!(
            stats,
            ScriptStats {
                copied: 3,
                inserted: 3,
                deleted: 4,
                sections: 5,
            }
        );
        assert!(!stats.is_unchanged());
        assert!(ScriptStats::from_sections([DiffSection::copy(7)]).is_unchanged());
    }
}
