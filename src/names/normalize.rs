use deunicode::deunicode_with_tofu;

/// Code-point ranges treated as emoji or pictographs and removed outright
///
/// The broad `U+24C2..=U+1F251` and supplementary-plane blocks also cover
/// CJK, Hangul and fullwidth forms, so those never reach transliteration.
const PICTOGRAPH_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F680, 0x1F6FF), // transport & map symbols
    (0x1F1E0, 0x1F1FF), // flags
    (0x2500, 0x2BEF),
    (0x2702, 0x27B0),
    (0x24C2, 0x1F251),
    (0x1F926, 0x1F937),
    (0x10000, 0x10FFFF),
    (0x2640, 0x2642),
    (0x2600, 0x2B55),
    (0x200D, 0x200D), // zero width joiner
    (0x23CF, 0x23CF),
    (0x23E9, 0x23E9),
    (0x231A, 0x231A),
    (0xFE0F, 0xFE0F), // variation selector-16
    (0x3030, 0x3030),
];

/// German umlauts and sharp s, mapped to their ASCII digraphs
pub const UMLAUT_MAP: &[(char, &str)] = &[
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
];

/// Normalizes display text into the canonical ASCII-safe form used for names
/// and positions
///
/// # Normalization Steps
///
/// 1. Remove emoji and pictographic code points
/// 2. Map umlauts and `ß` to ASCII digraphs (`Ü` → `Ue`, `ö` → `oe`, ...)
/// 3. Transliterate every other non-ASCII character to its closest ASCII
///    spelling (`Иван` → `Ivan`, `’` → `'`); characters without one are
///    dropped
/// 4. Delete `,` and turn `;` into `,` so fields are safe in `;`-delimited
///    output
/// 5. Trim surrounding whitespace
///
/// The result is pure ASCII. Applying `normalize` again yields the same
/// string unless the input contained `;`, which the first pass turns into a
/// `,` that a second pass would delete.
///
/// # Examples
///
/// ```
/// use lidump::names::normalize;
///
/// assert_eq!(normalize("Müller, Jörg"), "Mueller Joerg");
/// assert_eq!(normalize(" José 🚀 "), "Jose");
/// ```
pub fn normalize(text: &str) -> String {
    let without_pictographs: String = text.chars().filter(|c| !is_pictograph(*c)).collect();
    let digraphs = map_umlauts(&without_pictographs);
    let ascii = transliterate(&digraphs);

    ascii
        .replace(',', "")
        .replace(';', ",")
        .trim()
        .to_string()
}

/// Replaces umlauts and `ß` with their ASCII digraphs, leaving every other
/// character untouched
pub fn map_umlauts(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match UMLAUT_MAP.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// Checks whether a character falls inside one of the pictograph ranges
fn is_pictograph(c: char) -> bool {
    let cp = c as u32;
    PICTOGRAPH_RANGES
        .iter()
        .any(|&(start, end)| cp >= start && cp <= end)
}

/// Transliterates text to ASCII, dropping characters with no ASCII spelling
fn transliterate(text: &str) -> String {
    deunicode_with_tofu(text, "")
}
