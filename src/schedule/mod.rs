//! Specials rotation resolution
//!
//! Each classroom cycles through six specialty subjects keyed by the
//! rotation letters A-F. A week's schedule cell is either one of those
//! letters, free text ("Conferences", "NO SCHOOL"), or empty. Lookups
//! never fail: anything that is not a known letter resolves to nothing
//! and is rendered as an em-dash.

use std::collections::HashMap;

/// The valid rotation letters, in grid order
pub const ROTATION_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Placeholder shown when a cell resolves to no subject
pub const NO_SUBJECT: &str = "\u{2014}";

/// Markers that switch a day to its no-school rendering, matched
/// case-insensitively anywhere in the cell
const NO_SCHOOL_MARKERS: [&str; 3] = ["NO SCHOOL", "NO HAY", "CONFERENCES"];

/// Resolves rotation letters to subjects via the per-classroom tables
pub struct RotationResolver {
    rotations: HashMap<String, HashMap<String, String>>,
}

impl RotationResolver {
    /// Create a resolver over the configured rotation tables
    pub fn new(rotations: &HashMap<String, HashMap<String, String>>) -> Self {
        Self {
            rotations: rotations.clone(),
        }
    }

    /// Look up the subject a classroom has for a rotation letter.
    ///
    /// The letter is expected already normalized (trimmed, uppercased) by
    /// the caller. Anything that is not a single A-F character with a
    /// table entry yields `None`.
    pub fn resolve_subject(&self, classroom: &str, letter: &str) -> Option<&str> {
        if !is_rotation_letter(letter) {
            return None;
        }
        self.rotations
            .get(classroom)?
            .get(letter)
            .map(String::as_str)
    }
}

/// Whether a normalized cell value is exactly one rotation letter
fn is_rotation_letter(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('A'..='F'), None)
    )
}

/// Extract today's rotation letter from a week schedule, for highlighting
/// the active row in the rotation grids.
///
/// Returns the letter only when the raw cell normalizes to a single A-F
/// character. Free text, empty and multi-character cells yield `None`;
/// that is a filter, not an error.
pub fn today_highlight(specials: &HashMap<String, String>, today_key: &str) -> Option<char> {
    let raw = specials.get(today_key)?;
    let normalized = raw.trim().to_uppercase();
    if is_rotation_letter(&normalized) {
        normalized.chars().next()
    } else {
        None
    }
}

/// Whether a raw schedule cell means there is no school that day
pub fn is_no_school(raw: &str) -> bool {
    let upper = raw.to_uppercase();
    NO_SCHOOL_MARKERS.iter().any(|m| upper.contains(m))
}

/// Pictographic glyph for a subject, with a generic calendar fallback
pub fn subject_icon<'a>(icons: &'a HashMap<String, String>, subject: &str) -> &'a str {
    icons.get(subject).map(String::as_str).unwrap_or("\u{1F4C5}")
}
