//! Strings — the bit-string domain.
//!
//! A string is basic when it is a single character, lies below another string
//! when it is a substring of it, and comes apart at every split point.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::object::{AssemblyObject, ComponentPair};

const DOMAIN: &str = "string";

fn empty() -> Error {
    Error::invalid(DOMAIN, "string is empty")
}

/// Lazily yields `(s[..i], s[i..])` for every interior character boundary,
/// left to right.
#[derive(Debug, Clone)]
pub struct Splits {
    source: String,
    cursor: usize,
}

impl Splits {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let cursor = source.chars().next().map_or(0, char::len_utf8);
        Self { source, cursor }
    }
}

impl Iterator for Splits {
    type Item = ComponentPair<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let tail = self.source.get(self.cursor..).filter(|t| !t.is_empty())?;
        let head = &self.source[..self.cursor];
        let pair = (head.to_string(), tail.to_string());
        self.cursor += tail.chars().next().map_or(0, char::len_utf8);
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source[self.cursor..].chars().count();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Splits {}
impl FusedIterator for Splits {}

impl AssemblyObject for String {
    type Disassembly = Splits;

    fn is_basic(&self) -> Result<bool> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(empty()),
            (Some(_), None) => Ok(true),
            _ => Ok(false),
        }
    }

    fn is_below(&self, other: &Self) -> Result<bool> {
        if self.is_empty() || other.is_empty() {
            return Err(empty());
        }
        Ok(other.contains(self.as_str()))
    }

    fn disassemble(&self) -> Result<Self::Disassembly> {
        if self.is_empty() {
            return Err(empty());
        }
        Ok(Splits::new(self.as_str()))
    }
}

/// A string validated non-empty at construction.
///
/// Once built, every contract operation on a `Text` succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(empty());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl AssemblyObject for Text {
    type Disassembly = std::iter::Map<Splits, fn(ComponentPair<String>) -> ComponentPair<Text>>;

    fn is_basic(&self) -> Result<bool> {
        self.0.is_basic()
    }

    fn is_below(&self, other: &Self) -> Result<bool> {
        self.0.is_below(&other.0)
    }

    fn disassemble(&self) -> Result<Self::Disassembly> {
        let wrap: fn(ComponentPair<String>) -> ComponentPair<Text> = |(l, r)| (Text(l), Text(r));
        Ok(self.0.disassemble()?.map(wrap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Context;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn empty_string_is_invalid() {
        assert!(s("").is_basic().is_err());
        assert!(s("").is_below(&s("01")).is_err());
        assert!(s("01").is_below(&s("")).is_err());
        assert!(s("").disassemble().is_err());
        assert!(Text::new("").is_err());
    }

    #[test]
    fn single_character_is_basic() {
        assert!(s("0").is_basic().unwrap());
        assert!(s("é").is_basic().unwrap());
        assert!(!s("01").is_basic().unwrap());
    }

    #[test]
    fn substring_is_below() {
        assert!(s("01").is_below(&s("01")).unwrap());
        assert!(s("10").is_below(&s("0101")).unwrap());
        assert!(!s("11").is_below(&s("0101")).unwrap());
    }

    #[test]
    fn splits_every_boundary_in_order() {
        let pairs: Vec<_> = s("0110").disassemble().unwrap().collect();
        assert_eq!(
            pairs,
            vec![
                (s("0"), s("110")),
                (s("01"), s("10")),
                (s("011"), s("0")),
            ]
        );
        assert_eq!(s("0").disassemble().unwrap().count(), 0);
    }

    #[test]
    fn splits_respect_char_boundaries() {
        let splits = Splits::new("aéb");
        assert_eq!(splits.len(), 2);
        let pairs: Vec<_> = splits.collect();
        assert_eq!(pairs, vec![(s("a"), s("éb")), (s("aé"), s("b"))]);
    }

    #[test]
    fn known_string_indices() {
        let mut ctx = Context::new();
        assert_eq!(ctx.assembly_index(&s("0"), true).unwrap(), 0);
        assert_eq!(ctx.assembly_index(&s("01"), true).unwrap(), 1);
        assert_eq!(ctx.assembly_index(&s("000"), true).unwrap(), 2);
        assert_eq!(ctx.assembly_index(&s("0000"), true).unwrap(), 2);
        assert_eq!(ctx.assembly_index(&s("0101"), true).unwrap(), 2);
        assert_eq!(ctx.assembly_index(&s("0110"), true).unwrap(), 3);
    }

    #[test]
    fn cache_size_after_repeated_blocks() {
        let mut ctx = Context::new();
        assert_eq!(ctx.assembly_index(&s("0000"), true).unwrap(), 2);
        // "00", "000" and "0000"; every pair query reuses one of those keys.
        assert_eq!(ctx.cache_size(), 3);
    }

    #[test]
    fn empty_string_error_propagates_through_context() {
        let mut ctx = Context::new();
        let err = ctx.assembly_index(&s(""), true).unwrap_err();
        assert!(matches!(err, Error::InvalidDomainValue { domain: "string", .. }));
    }

    #[test]
    fn text_matches_plain_strings() {
        for value in ["0", "01", "0110", "011101", "10010011"] {
            let plain = Context::new().assembly_index(&s(value), true).unwrap();
            let text = Context::new()
                .assembly_index(&Text::new(value).unwrap(), true)
                .unwrap();
            assert_eq!(plain, text, "value = {value}");
        }
    }

    #[test]
    fn text_display_is_quoted() {
        assert_eq!(Text::new("01").unwrap().to_string(), "\"01\"");
        assert_eq!(Text::new("0é").unwrap().len(), 2);
    }
}
