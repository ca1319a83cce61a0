use std::{fmt::Display, ops::Deref, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::DiffError;

pub mod character_tokenizer;
pub mod line_tokenizer;
pub mod word_tokenizer;

/// A function splitting a text into tokens borrowed from it. Concatenating
/// the tokens must give back the original text.
pub type Tokenizer = dyn Fn(&str) -> Vec<&str>;

/// The granularities the text diff supports.
///
/// Dereferences to the matching [`Tokenizer`] so it can be passed anywhere a
/// tokenizer function is expected.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltinTokenizer {
    #[cfg_attr(feature = "serde", serde(alias = "char"))]
    Character,
    Word,
    #[default]
    Line,
}

impl BuiltinTokenizer {
    #[must_use]
    pub fn tokenize(self, text: &str) -> Vec<&str> { (*self)(text) }
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Character => &character_tokenizer::character_tokenizer,
            BuiltinTokenizer::Word => &word_tokenizer::word_tokenizer,
            BuiltinTokenizer::Line => &line_tokenizer::line_tokenizer,
        }
    }
}

impl FromStr for BuiltinTokenizer {
    type Err = DiffError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "char" | "character" => Ok(BuiltinTokenizer::Character),
            "word" => Ok(BuiltinTokenizer::Word),
            "line" => Ok(BuiltinTokenizer::Line),
            _ => Err(DiffError::UnknownGranularity(name.to_owned())),
        }
    }
}

impl Display for BuiltinTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuiltinTokenizer::Character => write!(f, "char"),
            BuiltinTokenizer::Word => write!(f, "word"),
            BuiltinTokenizer::Line => write!(f, "line"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("char", BuiltinTokenizer::Character)]
    #[test_case("character", BuiltinTokenizer::Character)]
    #[test_case("Word", BuiltinTokenizer::Word)]
    #[test_case(" line ", BuiltinTokenizer::Line)]
    fn test_parse(name: &str, expected: BuiltinTokenizer) {
        assert_eq!(name.parse::<BuiltinTokenizer>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "sentence".parse::<BuiltinTokenizer>(),
            Err(DiffError::UnknownGranularity("sentence".to_owned()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for tokenizer in [
            BuiltinTokenizer::Character,
            BuiltinTokenizer::Word,
            BuiltinTokenizer::Line,
        ] {
            assert_eq!(tokenizer.to_string().parse::<BuiltinTokenizer>(), Ok(tokenizer));
        }
    }

    #[test]
    fn test_deref_matches_tokenize() {
        let text = "one two\nthree";
        assert_eq!((*BuiltinTokenizer::Word)(text), BuiltinTokenizer::Word.tokenize(text));
        assert_eq!(BuiltinTokenizer::Line.tokenize(text), vec!["one two\n", "three"]);
    }
}
