//! Lettered list markup for solutions.
//!
//! Solutions often enumerate candidate lines inline:
//!
//! ```text
//! Three tries: (A) Qxf7+ loses the queen (B) Nd5 is met by ...c6 (C) Rd1 wins
//! ```
//!
//! [`convert_ordered_list`] turns those markers into an HTML ordered list so the
//! card back shows one candidate per line.

use crate::error::FormatError;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\w)\)").expect("marker pattern is valid"));

const LIST_OPEN: &str = r#"<ol type="A"><li>"#;
const ITEM_BREAK: &str = "</li><li>";
const LIST_CLOSE: &str = "</li></ol>";

/// Convert `(A) ... (B) ... (C) ...` markers into an `<ol type="A">` list.
///
/// Text before `(A)` is kept as a preamble and the text after the last marker
/// ends the last item. Fewer than two markers means there is no list and the
/// input comes back untouched.
///
/// Item text is kept verbatim, including the whitespace after each marker, so
/// `"(A) foo (B) bar"` gives the items `" foo "` and `" bar"`.
///
/// Markers must start at `A` and strictly increase; anything else is a
/// [`FormatError`] since the split would be ambiguous.
pub fn convert_ordered_list(text: &str) -> Result<Cow<'_, str>, FormatError> {
    let markers: Vec<(char, std::ops::Range<usize>)> = MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let letter = caps.get(1)?.as_str().chars().next()?;
            Some((letter, whole.range()))
        })
        .collect();

    if markers.len() < 2 {
        return Ok(Cow::Borrowed(text));
    }
    if markers[0].0 != 'A' {
        return Err(FormatError::ListStart { found: markers[0].0 });
    }
    for pair in markers.windows(2) {
        if pair[1].0 <= pair[0].0 {
            return Err(FormatError::ListMarker {
                marker: pair[1].0,
                text: text.to_string(),
            });
        }
    }

    let mut html = String::with_capacity(text.len() + LIST_OPEN.len() + LIST_CLOSE.len());
    html.push_str(&text[..markers[0].1.start]);
    html.push_str(LIST_OPEN);
    for (i, (_, span)) in markers.iter().enumerate() {
        let item_end = markers.get(i + 1).map_or(text.len(), |(_, next)| next.start);
        html.push_str(&text[span.end..item_end]);
        html.push_str(if i + 1 < markers.len() { ITEM_BREAK } else { LIST_CLOSE });
    }

    Ok(Cow::Owned(html))
}
