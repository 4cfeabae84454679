//! Statistics over an (original, cleaned) text pair.
//!
//! Lengths are counted in Unicode scalar values, so a multi-byte character
//! counts once.

use serde::Serialize;

/// Simple metrics describing what cleaning did to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    /// Lines in the original text (`\n` count + 1, so never zero).
    pub line_count: usize,
    /// Characters in the original text.
    pub character_count: usize,
    /// Original length minus cleaned length. Negative if cleaning added text.
    pub characters_removed: i64,
}

impl TextStats {
    /// Share of the original characters that were removed, in percent.
    pub fn reduction_percent(&self) -> f64 {
        if self.character_count == 0 {
            return 0.0;
        }
        self.characters_removed as f64 / self.character_count as f64 * 100.0
    }
}

/// Compute [`TextStats`] for `original` and its `cleaned` form.
pub fn compute_stats(original: &str, cleaned: &str) -> TextStats {
    let character_count = original.chars().count();
    let cleaned_count = cleaned.chars().count();

    TextStats {
        line_count: original.matches('\n').count() + 1,
        character_count,
        characters_removed: character_count as i64 - cleaned_count as i64,
    }
}
