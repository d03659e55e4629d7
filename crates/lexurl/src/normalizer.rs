use unicode_normalization::UnicodeNormalization;

/// Zero-width, filler and bidi-control characters used to disguise URLs.
#[inline]
fn is_hidden(c: char) -> bool {
    matches!(
        c,
        '\u{00ad}'                  // soft hyphen
        | '\u{034f}'                // combining grapheme joiner
        | '\u{061c}'                // arabic letter mark
        | '\u{115f}' | '\u{1160}'   // hangul fillers
        | '\u{17b4}' | '\u{17b5}'   // khmer inherent vowels
        | '\u{180e}'                // mongolian vowel separator
        | '\u{200b}'..='\u{200f}'   // zero-width space/joiners, lrm, rlm
        | '\u{202a}'..='\u{202e}'   // bidi embeddings and overrides
        | '\u{2060}'..='\u{2064}'   // word joiner, invisible operators
        | '\u{2066}'..='\u{2069}'   // bidi isolates
        | '\u{3164}'                // hangul filler
        | '\u{feff}'                // bom
        | '\u{ffa0}' // halfwidth hangul filler
    )
}

/// Full stops that browsers treat as a label separator in hostnames.
#[inline]
fn as_label_separator(c: char) -> char {
    match c {
        '\u{3002}' | '\u{ff0e}' | '\u{ff61}' => '.',
        other => other,
    }
}

/// Canonicalize a URL before extraction: drop hidden characters, NFKC, map
/// ideographic full stops to `.`, trim surrounding whitespace.
///
/// Case is preserved. Extraction never calls this implicitly.
pub fn normalize_url(url: &str) -> String {
    // Hidden characters go first so NFKC sees the characters they separated.
    let normalized: String = url
        .chars()
        .filter(|&c| !is_hidden(c))
        .nfkc()
        .map(as_label_separator)
        .collect();

    normalized.trim().to_string()
}

/// Whether the URL carries characters that [`normalize_url`] would strip.
pub fn has_obfuscation_chars(url: &str) -> bool {
    url.chars().any(is_hidden)
}
