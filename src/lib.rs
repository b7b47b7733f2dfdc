//! Python-flavored strings over raw bytes.
//!
//! One value type, [`PyString`], wrapping an owned sequence of 8-bit
//! characters, with Python string ergonomics layered on top: negative
//! indexing, inclusive slicing, substring search, case transforms,
//! stripping, padding and join. Mutating operations work in place and hand
//! back `&mut Self` so transforms chain, and every operation that takes
//! text accepts a character (`u8`), a literal, an owned buffer or another
//! [`PyString`] through the [`Text`] argument shape.
//!
//! ```
//! use pystr::PyString;
//!
//! let mut greeting = PyString::from("  hello world!  ");
//! greeting.strip(b' ').capitalize();
//! assert_eq!(greeting, "Hello world!");
//! assert_eq!(greeting.slice(0, 4), "Hello");
//! assert_eq!(greeting[-1], b'!');
//! assert_eq!(greeting.find("world"), Some(6));
//! ```

pub mod string;

pub use string::{PyString, StringError, Text};
