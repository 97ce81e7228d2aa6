/// Script class of a single character, used to bias glyph scale and camera zoom.
///
/// Classes follow fixed code point ranges, not font or locale heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptClass {
    /// CJK Unified Ideographs, `U+4E00..=U+9FFF`.
    Ideograph,
    /// Hiragana, `U+3040..=U+309F`.
    Hiragana,
    /// ASCII letters `A-Z` / `a-z`.
    Latin,
    /// Anything else, including katakana, digits, punctuation and whitespace.
    Other,
}

impl ScriptClass {
    pub fn of(c: char) -> Self {
        match c {
            '\u{4E00}'..='\u{9FFF}' => Self::Ideograph,
            '\u{3040}'..='\u{309F}' => Self::Hiragana,
            c if c.is_ascii_alphabetic() => Self::Latin,
            _ => Self::Other,
        }
    }

    /// Class of the first character of `s`; empty strings are [`ScriptClass::Other`].
    pub fn of_str(s: &str) -> Self {
        s.chars().next().map_or(Self::Other, Self::of)
    }
}

/// Whether `c` occupies a full em in East Asian typesetting.
pub(crate) fn is_wide(c: char) -> bool {
    matches!(
        c,
        '\u{1100}'..='\u{115F}'
            | '\u{2E80}'..='\u{303E}'
            | '\u{3040}'..='\u{A4CF}'
            | '\u{AC00}'..='\u{D7A3}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FE30}'..='\u{FE4F}'
            | '\u{FF00}'..='\u{FF60}'
            | '\u{FFE0}'..='\u{FFE6}'
            | '\u{20000}'..='\u{3FFFD}'
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/script.rs"]
mod tests;
