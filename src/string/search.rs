use bstr::ByteSlice;

use crate::string::{PyString, StringError, Text};

impl PyString {
    /// True when `text` occurs as a contiguous substring. The empty pattern
    /// is contained nowhere.
    pub fn contains<'a>(&self, text: impl Into<Text<'a>>) -> bool {
        let text = text.into();
        !text.is_empty() && self.bytes.contains_str(text.as_bytes())
    }

    /// Offset of the first occurrence of `text`, or `None`.
    pub fn find<'a>(&self, text: impl Into<Text<'a>>) -> Option<usize> {
        self.bytes.find(text.into().as_bytes())
    }

    /// Offset of the last occurrence of `text`, or `None`.
    pub fn rfind<'a>(&self, text: impl Into<Text<'a>>) -> Option<usize> {
        self.bytes.rfind(text.into().as_bytes())
    }

    /// Non-overlapping occurrences of `text` in the whole value.
    pub fn count<'a>(&self, text: impl Into<Text<'a>>) -> usize {
        self.count_from(text, 0)
    }

    /// Non-overlapping occurrences of `text`, scanning from a logical
    /// position. Each next probe starts at the previous match's end. An
    /// empty pattern cannot advance the scan and counts zero.
    pub fn count_from<'a>(&self, text: impl Into<Text<'a>>, start: isize) -> usize {
        let text = text.into();
        let pattern = text.as_bytes();
        if pattern.is_empty() {
            return 0;
        }
        let mut probe = self.resolve(start);
        let mut occurrences = 0;
        while probe < self.bytes.len() {
            match self.bytes[probe..].find(pattern) {
                Some(offset) => {
                    occurrences += 1;
                    probe += offset + pattern.len();
                }
                None => break,
            }
        }
        occurrences
    }

    /// True when the value begins with `text`. The empty pattern is a
    /// trivial prefix.
    pub fn starts_with<'a>(&self, text: impl Into<Text<'a>>) -> bool {
        self.bytes.starts_with_str(text.into().as_bytes())
    }

    /// True when the value ends with `text`.
    pub fn ends_with<'a>(&self, text: impl Into<Text<'a>>) -> bool {
        self.bytes.ends_with_str(text.into().as_bytes())
    }

    /// Substitute every non-overlapping occurrence of `old` with `new`,
    /// left to right, each scan resuming after the replacement just written.
    pub fn replace<'a, 'b>(
        &mut self,
        old: impl Into<Text<'a>>,
        new: impl Into<Text<'b>>,
    ) -> Result<&mut Self, StringError> {
        let old = old.into();
        if old.is_empty() {
            return Err(StringError::EmptyPattern);
        }
        let new = new.into();
        self.bytes = self.bytes.replace(old.as_bytes(), new.as_bytes());
        Ok(self)
    }
}
