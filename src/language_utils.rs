use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for normalizing and matching ISO 639-1
/// (2-letter) and ISO 639-2 (3-letter) language codes, plus a script based
/// guess of the language of a decoded document.

// ISO 639-2/B codes that differ from their 639-2/T form
fn bibliographic_to_terminology(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"),
        "ger" => Some("deu"),
        "dut" => Some("nld"),
        "gre" => Some("ell"),
        "chi" => Some("zho"),
        "cze" => Some("ces"),
        "ice" => Some("isl"),
        "alb" => Some("sqi"),
        "arm" => Some("hye"),
        "baq" => Some("eus"),
        "bur" => Some("mya"),
        "per" => Some("fas"),
        "geo" => Some("kat"),
        "may" => Some("msa"),
        "mac" => Some("mkd"),
        "rum" => Some("ron"),
        "slo" => Some("slk"),
        "wel" => Some("cym"),
        _ => None,
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's a 2-letter code, convert to 3-letter
    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    }
    // If it's already a 3-letter code, ensure it's ISO 639-2/T
    else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }

        if let Some(part2t) = bibliographic_to_terminology(&normalized_code) {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check if two language codes match (represent the same language)
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

#[derive(Default)]
struct ScriptCounts {
    han: usize,
    kana: usize,
    hangul: usize,
    latin: usize,
    vietnamese: usize,
    cyrillic: usize,
}

fn is_vietnamese_letter(c: char) -> bool {
    matches!(c, 'ă' | 'â' | 'đ' | 'ê' | 'ô' | 'ơ' | 'ư' | 'Ă' | 'Â' | 'Đ' | 'Ê' | 'Ô' | 'Ơ' | 'Ư')
        || ('\u{1EA0}'..='\u{1EF9}').contains(&c)
}

/// Guess the language of a text from the scripts it uses.
///
/// Returns an ISO 639-1 code, or `None` when the text has no letters.
/// Han text is `zh` unless at least a tenth of it is kana (`ja`); Latin text
/// is `vi` when at least one letter in twenty is Vietnamese-specific.
pub fn detect_language(text: &str) -> Option<&'static str> {
    let mut counts = ScriptCounts::default();
    for c in text.chars() {
        match c {
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' => counts.han += 1,
            '\u{3040}'..='\u{30FF}' => counts.kana += 1,
            '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' => counts.hangul += 1,
            '\u{0400}'..='\u{04FF}' => counts.cyrillic += 1,
            c if c.is_alphabetic() && (c.is_ascii() || is_vietnamese_letter(c) || ('\u{00C0}'..='\u{024F}').contains(&c)) => {
                counts.latin += 1;
                if is_vietnamese_letter(c) {
                    counts.vietnamese += 1;
                }
            }
            _ => {}
        }
    }

    let cjk = counts.han + counts.kana;
    let best = cjk.max(counts.hangul).max(counts.latin).max(counts.cyrillic);
    if best == 0 {
        return None;
    }

    if cjk == best {
        if counts.kana * 10 >= cjk {
            Some("ja")
        } else {
            Some("zh")
        }
    } else if counts.hangul == best {
        Some("ko")
    } else if counts.latin == best {
        if counts.vietnamese * 20 >= counts.latin {
            Some("vi")
        } else {
            Some("en")
        }
    } else {
        Some("ru")
    }
}
