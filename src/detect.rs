//! Best effort detection of the format a color is written in.

use crate::color::ColorFormat;

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn is_bare_hex(text: &str) -> bool {
    matches!(text.len(), 3 | 6 | 8) && text.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Guess the format of `text` from its surface syntax. This only looks at the
/// prefix (or the shape of a bare hex run), so a detected format does not
/// mean the text will parse.
pub fn detect_format(text: &str) -> Option<ColorFormat> {
    let text = text.trim();

    if text.starts_with('#') || is_bare_hex(text) {
        return Some(ColorFormat::Hex);
    }

    const PREFIXES: [(&str, ColorFormat); 5] = [
        ("rgb", ColorFormat::Rgb),
        ("hsl", ColorFormat::Hsl),
        ("hsv", ColorFormat::Hsv),
        ("cmyk", ColorFormat::Cmyk),
        ("lab", ColorFormat::Lab),
    ];

    PREFIXES
        .into_iter()
        .find(|(prefix, _)| starts_with_ignore_case(text, prefix))
        .map(|(_, format)| format)
}
