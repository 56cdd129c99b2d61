//! Keyword shorthand encoder: compresses verbose weapon-rule phrases into
//! compact badges ("Rapid Fire 2" -> "RF-2", "Anti-Infantry 4+" -> "A-I4+").
//! Pure text transform; unknown phrases pass through unchanged.

/// Fixed phrase -> code table, original spelling.
const KEYWORD_SHORTHAND: &[(&str, &str)] = &[
    ("Assault", "As"),
    ("Rapid Fire", "RF"),
    ("Ignores Cover", "IC"),
    ("Twin-linked", "TL"),
    ("Pistol", "Pi"),
    ("Torrent", "To"),
    ("Lethal Hits", "Lethal"),
    ("Lance", "La"),
    ("Indirect Fire", "IF"),
    ("Precision", "Pr"),
    ("Blast", "Bl"),
    ("Melta", "M"),
    ("Heavy", "H"),
    ("Hazardous", "Hz"),
    ("Devastating Wounds", "Dev"),
    ("Sustained Hits", "Sus"),
    ("Extra Attacks", "EA"),
    ("Anti", "A"),
    ("One Shot", "OS"),
    ("Psychic", "Psy"),
    ("Conversion", "Cv"),
];

/// Anti-X target letters; unmapped targets fall back to their first char.
const ANTI_TARGETS: &[(&str, &str)] = &[
    ("Infantry", "I"),
    ("Vehicle", "V"),
    ("Monster", "M"),
    ("Fly", "F"),
    ("Character", "C"),
    ("Psyker", "P"),
    ("Beast", "B"),
    ("Swarm", "S"),
    ("Titanic", "T"),
];

fn table_lookup(phrase: &str) -> Option<&'static str> {
    KEYWORD_SHORTHAND
        .iter()
        .find(|(full, _)| *full == phrase)
        .map(|(_, code)| *code)
}

/// Encode one trimmed keyword phrase. Priority: Anti-keyword grammar, then
/// numbered keyword, then plain table lookup with passthrough fallback.
pub fn encode_keyword(keyword: &str) -> String {
    let keyword = keyword.trim();

    if let Some(rest) = keyword.strip_prefix("Anti-") {
        return encode_anti(rest);
    }

    if let Some((base, num)) = split_numeric_suffix(keyword) {
        let code = table_lookup(base).unwrap_or(base);
        return format!("{code}-{num}");
    }

    table_lookup(keyword).unwrap_or(keyword).to_string()
}

/// "Anti-<Target> <value>": normalize dash variants, split on whitespace,
/// map the target to its letter, append the value minus leading dashes.
fn encode_anti(rest: &str) -> String {
    let normalized: String = rest
        .chars()
        .map(|c| if is_dash(c) { '-' } else { c })
        .collect();
    let mut tokens = normalized.split_whitespace();

    let target = tokens.next().unwrap_or("");
    let letter = ANTI_TARGETS
        .iter()
        .find(|(name, _)| *name == target)
        .map(|(_, letter)| (*letter).to_string())
        .unwrap_or_else(|| target.chars().next().map(String::from).unwrap_or_default());

    let joined: String = tokens.collect::<Vec<_>>().concat();
    let value = joined.trim_start_matches('-');
    if value.is_empty() {
        format!("A-{letter}")
    } else {
        format!("A-{letter}{value}")
    }
}

fn is_dash(c: char) -> bool {
    matches!(c, '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}')
}

/// Split a trailing digit/`+` run off the phrase. The run must begin with a
/// digit and be preceded by whitespace, so "Sustained Hits 1" splits but
/// "Devastating Wounds D3+" does not (the run would abut a letter).
fn split_numeric_suffix(phrase: &str) -> Option<(&str, &str)> {
    let bytes = phrase.as_bytes();
    let mut start = phrase.len();
    while start > 0 && (bytes[start - 1].is_ascii_digit() || bytes[start - 1] == b'+') {
        start -= 1;
    }
    // the run itself must start on a digit, not a stray '+'
    while start < phrase.len() && bytes[start] == b'+' {
        start += 1;
    }
    if start == phrase.len() || !bytes[start].is_ascii_digit() {
        return None;
    }
    let prev = phrase[..start].chars().next_back()?;
    if !prev.is_whitespace() {
        return None;
    }
    let base = phrase[..start].trim_end();
    if base.is_empty() {
        return None;
    }
    Some((base, &phrase[start..]))
}

/// Encode a weapon's comma-separated keyword list. Empty text or the "-"
/// placeholder yields nothing at all.
pub fn encode_keyword_list(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Vec::new();
    }
    trimmed
        .split(',')
        .map(encode_keyword)
        .filter(|code| !code.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anti_keyword_with_value() {
        assert_eq!(encode_keyword("Anti-Infantry 4+"), "A-I4+");
        assert_eq!(encode_keyword("Anti-Monster 2+"), "A-M2+");
    }

    #[test]
    fn anti_keyword_without_value() {
        assert_eq!(encode_keyword("Anti-Vehicle"), "A-V");
    }

    #[test]
    fn anti_keyword_unmapped_target_uses_first_letter() {
        assert_eq!(encode_keyword("Anti-Daemon 3+"), "A-D3+");
    }

    #[test]
    fn anti_keyword_normalizes_unicode_dashes() {
        // non-breaking hyphen before the value
        assert_eq!(encode_keyword("Anti-Fly \u{2011}4+"), "A-F4+");
    }

    #[test]
    fn numbered_keyword_uses_table_code() {
        assert_eq!(encode_keyword("Rapid Fire 2"), "RF-2");
        assert_eq!(encode_keyword("Sustained Hits 1"), "Sus-1");
        assert_eq!(encode_keyword("Melta 2+"), "M-2+");
    }

    #[test]
    fn numbered_keyword_unknown_base_keeps_base() {
        assert_eq!(encode_keyword("Overwatch 5"), "Overwatch-5");
    }

    #[test]
    fn dice_suffix_is_not_a_numeric_suffix() {
        assert_eq!(encode_keyword("Devastating Wounds D3+"), "Devastating Wounds D3+");
    }

    #[test]
    fn plain_keyword_lookup_and_passthrough() {
        assert_eq!(encode_keyword("Heavy"), "H");
        assert_eq!(encode_keyword("Twin-linked"), "TL");
        assert_eq!(encode_keyword("Foo Bar"), "Foo Bar");
    }

    #[test]
    fn keyword_list_splits_and_encodes() {
        assert_eq!(
            encode_keyword_list("Assault, Anti-Infantry 4+, Heavy"),
            vec!["As", "A-I4+", "H"]
        );
    }

    #[test]
    fn empty_and_dash_lists_encode_to_nothing() {
        assert!(encode_keyword_list("").is_empty());
        assert!(encode_keyword_list(" - ").is_empty());
    }
}
