//! Zero-width steganographic codec.
//!
//! Conversion between marker strings, bit sequences, and runs of invisible
//! Unicode characters, plus embedding/extraction of those runs in host text.

pub mod alphabet;
mod bits;
mod watermark;

pub use alphabet::{is_invisible, InvisibleChar};
pub use bits::BitSequence;
pub use watermark::{embed, extract, strip, verify};
