//! Case transforms, character-class predicates and the strip family.
//!
//! Everything here works byte-wise under the ASCII case convention;
//! bytes with no case distinction pass through every transform unchanged.

use crate::string::{PyString, Text};

// false on empty, true iff every character is in the class
macro_rules! class_predicates {
    ($($name:ident => $class:ident, $doc:literal;)*) => {
        $(paste::paste! {
            #[doc = concat!("True when every character is ", $doc, "; false on empty input.")]
            pub fn [<is_ $name>](&self) -> bool {
                !self.bytes.is_empty() && self.bytes.iter().all(|b| b.$class())
            }
        })*
    };
}

// at least one character of the given case, and nothing cased the other
// way; digits, whitespace and punctuation are neutral
macro_rules! cased_predicates {
    ($($name:ident => $cased:ident;)*) => {
        $(paste::paste! {
            #[doc = concat!(
                "True when the value is entirely ", stringify!($name), "case: ",
                "at least one ", stringify!($name), "case letter, and every ",
                "character either that case, a digit, whitespace or punctuation.",
            )]
            pub fn [<is_ $name>](&self) -> bool {
                self.bytes.iter().any(|b| b.$cased())
                    && self.bytes.iter().all(|b| {
                        b.$cased()
                            || b.is_ascii_digit()
                            || b.is_ascii_whitespace()
                            || b.is_ascii_punctuation()
                    })
            }
        })*
    };
}

impl PyString {
    /// Uppercase the first character and lowercase the rest. Empty values
    /// are untouched.
    pub fn capitalize(&mut self) -> &mut Self {
        if let Some((first, rest)) = self.bytes.split_first_mut() {
            first.make_ascii_uppercase();
            rest.make_ascii_lowercase();
        }
        self
    }

    /// Lowercase every character.
    pub fn lower(&mut self) -> &mut Self {
        self.bytes.make_ascii_lowercase();
        self
    }

    /// Fold case for caseless comparison. Folding is plain lowercasing
    /// under the ASCII convention.
    pub fn casefold(&mut self) -> &mut Self {
        self.lower()
    }

    /// Uppercase every character.
    pub fn upper(&mut self) -> &mut Self {
        self.bytes.make_ascii_uppercase();
        self
    }

    /// Flip the case of every cased character.
    pub fn swapcase(&mut self) -> &mut Self {
        for b in &mut self.bytes {
            if b.is_ascii_uppercase() {
                b.make_ascii_lowercase();
            } else if b.is_ascii_lowercase() {
                b.make_ascii_uppercase();
            }
        }
        self
    }

    class_predicates! {
        alpha => is_ascii_alphabetic, "alphabetic";
        digit => is_ascii_digit, "a digit";
        alnum => is_ascii_alphanumeric, "alphanumeric";
        space => is_ascii_whitespace, "whitespace";
    }

    cased_predicates! {
        lower => is_ascii_lowercase;
        upper => is_ascii_uppercase;
    }

    /// Drop the run of `charset` characters at the left end.
    pub fn lstrip<'a>(&mut self, charset: impl Into<Text<'a>>) -> &mut Self {
        self.trim_start_in(&charset.into());
        self
    }

    /// Drop the run of `charset` characters at the right end.
    pub fn rstrip<'a>(&mut self, charset: impl Into<Text<'a>>) -> &mut Self {
        self.trim_end_in(&charset.into());
        self
    }

    /// Drop `charset` runs at both ends.
    ///
    /// `charset` is a set of individual characters, never a substring: any
    /// mix of its characters is stripped, in any order.
    pub fn strip<'a>(&mut self, charset: impl Into<Text<'a>>) -> &mut Self {
        let charset = charset.into();
        self.trim_start_in(&charset);
        self.trim_end_in(&charset);
        self
    }

    fn trim_start_in(&mut self, charset: &Text<'_>) {
        let kept = self
            .bytes
            .iter()
            .position(|b| !charset.contains_byte(*b))
            .unwrap_or(self.bytes.len());
        self.bytes.drain(..kept);
    }

    fn trim_end_in(&mut self, charset: &Text<'_>) {
        let kept = self
            .bytes
            .iter()
            .rposition(|b| !charset.contains_byte(*b))
            .map_or(0, |i| i + 1);
        self.bytes.truncate(kept);
    }
}
