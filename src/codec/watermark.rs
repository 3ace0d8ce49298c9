//! Embedding and extraction of markers in host text.
//!
//! The encoded run is inserted after every paragraph boundary of the host
//! (or once at the end when the host is a single paragraph), so any single
//! surviving copy is enough to recover the marker from a partial paste.
//! The visible rendering of the host is unchanged.

use crate::codec::alphabet;
use crate::codec::bits::BitSequence;
use crate::error::Result;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// A paragraph boundary: one or more blank lines, where a blank line
/// contains only whitespace.
static PARAGRAPH_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[^\S\n]*\n)+").expect("paragraph boundary pattern"));

/// A maximal run of invisible-alphabet characters.
static INVISIBLE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}+", alphabet::char_class())).expect("invisible run pattern")
});

/// Embeds `marker` into `host` as invisible characters.
///
/// The boundary text between paragraphs is preserved verbatim, so
/// stripping the invisible alphabet from the result reproduces `host`
/// exactly.
///
/// # Errors
///
/// Returns [`crate::VeilmarkError::UnsupportedMarkerCharacter`] if the
/// marker contains a code point above `U+00FF`.
pub fn embed(host: &str, marker: &str) -> Result<String> {
    let run = BitSequence::from_marker(marker)?.to_invisible();

    let mut watermarked = String::with_capacity(host.len() + run.len() * 4);
    let mut last = 0;
    let mut boundaries = 0;

    for boundary in PARAGRAPH_BOUNDARY.find_iter(host) {
        watermarked.push_str(&host[last..boundary.start()]);
        watermarked.push_str(boundary.as_str());
        watermarked.push_str(&run);
        last = boundary.end();
        boundaries += 1;
    }
    watermarked.push_str(&host[last..]);

    // Single paragraph: one copy at the end.
    if boundaries == 0 {
        watermarked.push_str(&run);
    }

    debug!(
        "embedded {}-bit marker at {} insertion point(s)",
        marker.chars().count() * 8,
        boundaries.max(1)
    );

    Ok(watermarked)
}

/// Recovers a marker from watermarked text.
///
/// Scans for maximal invisible runs and decodes the first one in document
/// order; later redundant copies are ignored. Returns `None` when no run
/// is present or the first run does not decode — extraction is advisory
/// and never fails loudly on arbitrary input.
pub fn extract(text: &str) -> Option<String> {
    let run = INVISIBLE_RUN.find(text)?;

    let marker = BitSequence::from_invisible(run.as_str())
        .and_then(|bits| bits.to_marker());

    match marker {
        Ok(marker) => Some(marker),
        Err(e) => {
            debug!("invisible run at byte {} did not decode: {}", run.start(), e);
            None
        }
    }
}

/// Removes every invisible-alphabet character from `text`.
///
/// Applied to watermarked text this reproduces the original host exactly.
pub fn strip(text: &str) -> String {
    text.chars().filter(|&c| !alphabet::is_invisible(c)).collect()
}

/// Returns true if `text` carries exactly the expected marker.
pub fn verify(text: &str, expected: &str) -> bool {
    extract(text).is_some_and(|marker| marker == expected)
}
