// src/core/sanitize.rs

/// "First Last" → "Last, First". Splits on the first space only, so
/// "J T Miller" keys as "T Miller, J" consistently across documents.
pub fn last_first(full_name: &str) -> String {
    let full_name = full_name.trim();
    match full_name.split_once(' ') {
        Some((first, last)) => format!("{}, {}", last.trim(), first),
        None => full_name.to_string(),
    }
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
/// Matches the event pages' casing convention, including timestamps:
/// "2021-05-30t10:00" → "2021-05-30T10:00".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Split a `"key" : "value"` line on the first ':' and scrub both halves:
/// quotes and commas dropped, whitespace trimmed, title-cased.
pub fn scrub_key_val(line: &str) -> Option<(String, String)> {
    let (k, v) = line.split_once(':')?;
    let k = title_case(k.replace('"', "").trim());
    let v = title_case(v.replace('"', "").replace(',', "").trim());
    Some((k, v))
}

/// "+15107271938" → "(510) 727-1938". Anything too short passes through.
pub fn format_phone(raw: &str) -> String {
    let bytes = raw.as_bytes();
    if raw.is_ascii() && bytes.len() >= 12 {
        format!("({}) {}-{}", &raw[2..5], &raw[5..8], &raw[8..12])
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_keys_last_first() {
        assert_eq!(last_first("Jane Doe"), "Doe, Jane");
        assert_eq!(last_first("J T Miller"), "T Miller, J");
        assert_eq!(last_first("Mononym"), "Mononym");
    }

    #[test]
    fn title_case_restores_timestamp_t() {
        assert_eq!(title_case("2021-05-30t10:00"), "2021-05-30T10:00");
        assert_eq!(
            title_case("members only garage sale!"),
            "Members Only Garage Sale!"
        );
    }

    #[test]
    fn key_val_scrub_keeps_urls_whole() {
        let (k, v) = scrub_key_val(r#""url" : "https://www.rei.com/berkeley","#).unwrap();
        assert_eq!(k, "Url");
        assert_eq!(v, "Https://Www.Rei.Com/Berkeley");
    }

    #[test]
    fn phone_formats_nanp() {
        assert_eq!(format_phone("+15107271938"), "(510) 727-1938");
        assert_eq!(format_phone("555"), "555");
    }
}
