//! Applying edit scripts back onto their inputs.

use core::ops::Range;

use crate::comparer::EqualityComparer;
use crate::engine::validate_window;
use crate::error::{DiffError, Side};
use crate::section::{DiffSection, SectionKind};
use crate::sequence::Sequence;

/// Rebuilds the new window from the old one by replaying `sections`.
///
/// `Copy` takes elements from the old sequence after checking them against
/// the new one with `cmp`; `Insert` takes elements from the new sequence;
/// `Delete` skips old elements. The script must cover both windows exactly.
///
/// # Errors
/// Returns [`DiffError::InvalidRange`] for a bad window and
/// [`DiffError::ScriptMismatch`] if the script overruns a window, leaves part
/// of one uncovered, contains a zero-length section, or copies elements that
/// are not equal.
pub fn apply_sections<A, B, C, I>(
    a: &A,
    a_range: Range<usize>,
    b: &B,
    b_range: Range<usize>,
    sections: I,
    cmp: &C,
) -> Result<Vec<A::Item>, DiffError>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Clone,
    C: EqualityComparer<A::Item> + ?Sized,
    I: IntoIterator<Item = DiffSection>,
{
    validate_window(Side::Old, &a_range, a.len())?;
    validate_window(Side::New, &b_range, b.len())?;

    let mut result = Vec::with_capacity(b_range.len());
    let (mut old_pos, mut new_pos) = (a_range.start, b_range.start);

    for section in sections {
        let n = section.length();
        if n == 0 {
            return Err(DiffError::ScriptMismatch(format!(
                "zero-length section {section}"
            )));
        }
        if section.old_len() > a_range.end - old_pos {
            return Err(DiffError::ScriptMismatch(format!(
                "{section} at old position {old_pos} overruns window ending at {}",
                a_range.end
            )));
        }
        if section.new_len() > b_range.end - new_pos {
            return Err(DiffError::ScriptMismatch(format!(
                "{section} at new position {new_pos} overruns window ending at {}",
                b_range.end
            )));
        }

        match section.kind() {
            SectionKind::Copy => {
                for k in 0..n {
                    let (old, new) = (a.item(old_pos + k), b.item(new_pos + k));
                    if !cmp.equals(old, new) {
                        return Err(DiffError::ScriptMismatch(format!(
                            "copied element differs at old {} / new {}",
                            old_pos + k,
                            new_pos + k
                        )));
                    }
                    result.push(old.clone());
                }
            }
            SectionKind::Insert => {
                result.extend((new_pos..new_pos + n).map(|i| b.item(i).clone()));
            }
            SectionKind::Delete => {}
        }
        old_pos += section.old_len();
        new_pos += section.new_len();
    }

    if old_pos != a_range.end || new_pos != b_range.end {
        return Err(DiffError::ScriptMismatch(format!(
            "script stops at old {old_pos} / new {new_pos}, windows end at {} / {}",
            a_range.end, b_range.end
        )));
    }
    Ok(result)
}
