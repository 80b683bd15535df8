//! Element equality used by the engine.

/// Decides whether two elements are equal for diffing purposes.
///
/// Implementations should be reflexive and symmetric; an inconsistent comparer
/// gives unspecified (but still finite) output.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns true if `a` and `b` are considered equal.
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Compares elements with [`PartialEq`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultEquality {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Compares characters, bytes and strings ignoring ASCII case.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiCaseInsensitive;

impl EqualityComparer<char> for AsciiCaseInsensitive {
    fn equals(&self, a: &char, b: &char) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl EqualityComparer<u8> for AsciiCaseInsensitive {
    fn equals(&self, a: &u8, b: &u8) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl EqualityComparer<str> for AsciiCaseInsensitive {
    fn equals(&self, a: &str, b: &str) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl EqualityComparer<String> for AsciiCaseInsensitive {
    fn equals(&self, a: &String, b: &String) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl EqualityComparer<&str> for AsciiCaseInsensitive {
    fn equals(&self, a: &&str, b: &&str) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same<T: ?Sized, C: EqualityComparer<T>>(cmp: &C, a: &T, b: &T) -> bool {
        cmp.equals(a, b)
    }

    #[test]
    fn test_default_equality() {
        assert!(same(&DefaultEquality, &3, &3));
        assert!(!same(&DefaultEquality, "a", "b"));
    }

    #[test]
    fn test_closure_comparer() {
        let mod_ten = |a: &u32, b: &u32| a % 10 == b % 10;
        assert!(same(&mod_ten, &13, &23));
        assert!(!same(&mod_ten, &13, &24));
    }

    #[test]
    fn test_ascii_case_insensitive() {
        assert!(same(&AsciiCaseInsensitive, &'Q', &'q'));
        assert!(same(&AsciiCaseInsensitive, &b'x', &b'X'));
        assert!(same(&AsciiCaseInsensitive, &"Line", &"LINE"));
        assert!(!same(&AsciiCaseInsensitive, &'a', &'b'));
    }
}
