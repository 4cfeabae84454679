//! Box-drawing frame removal.
//!
//! Terminal UIs draw tables and panels with the Unicode box-drawing block
//! (U+2500..U+257F). Lines made only of those characters are pure framing and
//! are dropped. Content rows keep their text but lose the single frame
//! character on each edge.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line consisting only of box-drawing characters (plus edge whitespace).
static BOX_ONLY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*[\x{2500}-\x{257F}]+[ \t]*$").expect("valid regex"));

/// One vertical bar at the start of a line.
static LEADING_FRAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*[│┃║╎╏┆┇┊┋][ \t]*").expect("valid regex"));

/// One vertical bar or right-hand corner/joint at the end of a line.
static TRAILING_FRAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]*[│┃║╎╏┆┇┊┋┐┘╮╯╗╝╕╛╖╜┤┫╡╢╣][ \t]*$").expect("valid regex")
});

/// Remove box-drawing framing from `text`.
pub fn remove_box_drawing(text: &str) -> String {
    text.split('\n')
        .filter(|line| !BOX_ONLY_LINE.is_match(line))
        .map(strip_frame_edges)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_frame_edges(line: &str) -> String {
    let line = LEADING_FRAME.replace(line, "");
    TRAILING_FRAME.replace(&line, "").into_owned()
}
