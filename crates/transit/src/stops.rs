//! Stop-name normalization.

/// Common spellings and abbreviations mapped to canonical stop names.
/// Keys are lowercase.
const STOP_ALIASES: &[(&str, &str)] = &[
    ("majestic", "Majestic"),
    ("kbs", "Majestic"),
    ("btm", "BTM Layout"),
    ("btm layout", "BTM Layout"),
    ("silkboard", "Silk Board"),
    ("silk board", "Silk Board"),
];

/// Map user-typed stop text to a canonical stop name.
///
/// Known aliases resolve to their canonical name; anything else is trimmed
/// and title-cased (`"hebbal"` → `"Hebbal"`). The result is not checked
/// against any dataset.
pub fn normalize_stop_name(stop_name: &str) -> String {
    let trimmed = stop_name.trim();
    let key = trimmed.to_lowercase();

    STOP_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| title_case(trimmed))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// `"mekhri CIRCLE"` → `"Mekhri Circle"`, `"g-4"` → `"G-4"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(normalize_stop_name("KBS"), "Majestic");
        assert_eq!(normalize_stop_name("  majestic "), "Majestic");
        assert_eq!(normalize_stop_name("btm"), "BTM Layout");
        assert_eq!(normalize_stop_name("BTM layout"), "BTM Layout");
        assert_eq!(normalize_stop_name("silkboard"), "Silk Board");
        assert_eq!(normalize_stop_name("Silk Board"), "Silk Board");
    }

    #[test]
    fn test_title_case_fallback() {
        assert_eq!(normalize_stop_name("hebbal"), "Hebbal");
        assert_eq!(normalize_stop_name(" indiranagar"), "Indiranagar");
        assert_eq!(normalize_stop_name("mekhri CIRCLE"), "Mekhri Circle");
        assert_eq!(normalize_stop_name(""), "");
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("g-4"), "G-4");
        assert_eq!(title_case("500k"), "500K");
        assert_eq!(title_case("o'brien road"), "O'Brien Road");
    }
}
