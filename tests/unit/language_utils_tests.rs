/*!
 * Tests for language utility functions
 */

use zhvi::language_utils::{detect_language, get_language_name, language_codes_match, normalize_to_part2t};

/// Test normalization of language codes to ISO 639-2/T format
#[test]
fn test_normalize_to_part2t_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("zh").unwrap(), "zho");
    assert_eq!(normalize_to_part2t("vi").unwrap(), "vie");
    assert_eq!(normalize_to_part2t("chi").unwrap(), "zho");
    assert_eq!(normalize_to_part2t(" VIE ").unwrap(), "vie");
    assert!(normalize_to_part2t("xx").is_err());
    assert!(normalize_to_part2t("").is_err());
}

/// Test matching of language codes across formats
#[test]
fn test_language_codes_match_withEquivalentCodes_shouldMatch() {
    assert!(language_codes_match("zh", "zho"));
    assert!(language_codes_match("chi", "zh"));
    assert!(language_codes_match("vi", "VIE"));
    assert!(!language_codes_match("zh", "vi"));
    assert!(!language_codes_match("zh", "invalid"));
}

/// Test language names
#[test]
fn test_get_language_name_withValidCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("zh").unwrap(), "Chinese");
    assert_eq!(get_language_name("vi").unwrap(), "Vietnamese");
    assert!(get_language_name("xyz").is_err());
}

/// Test script-based detection on typical inputs
#[test]
fn test_detect_language_withTypicalTexts_shouldClassify() {
    assert_eq!(detect_language("我们在图书馆学习中文。"), Some("zh"));
    assert_eq!(detect_language("Chúng tôi học tiếng Trung ở thư viện."), Some("vi"));
    assert_eq!(detect_language("We study Chinese in the library."), Some("en"));
    assert_eq!(detect_language("안녕하세요"), Some("ko"));
    assert_eq!(detect_language("12345 !?"), None);
}
