/*!
 * Tests for dictionary loading
 */

use zhvi::dictionary::Dictionary;
use zhvi::errors::DictionaryError;

use crate::common;

/// Test loading the shared sample dictionary
#[test]
fn test_load_withSampleDictionary_shouldExposeEntries() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_dictionary(dir.path()).unwrap();

    let dictionary = Dictionary::load(&path).unwrap();

    assert_eq!(dictionary.len(), 6);
    assert_eq!(dictionary.get("图书馆"), Some("thư viện"));
    assert_eq!(dictionary.get("吗"), None);
    assert_eq!(dictionary.max_key_len(), 3);
}

/// Test that parse failures carry the offending path
#[test]
fn test_load_withWrongShape_shouldReportParseErrorWithPath() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(dir.path(), "dict.json", r#"{"你好": ["xin", "chào"]}"#).unwrap();

    let error = Dictionary::load(&path).unwrap_err();

    assert!(matches!(error, DictionaryError::Parse { .. }));
    assert!(error.to_string().contains("dict.json"));
}

/// Test that an unreadable dictionary degrades to an empty one
#[test]
fn test_loadOrEmpty_withMissingFile_shouldBeEmpty() {
    let dir = common::create_temp_dir().unwrap();
    let dictionary = Dictionary::load_or_empty(dir.path().join("missing.json"));

    assert!(dictionary.is_empty());
    assert_eq!(dictionary.max_key_len(), 0);
}

/// Test that key lengths are counted in characters, not bytes
#[test]
fn test_maxKeyLen_withMultibyteKeys_shouldCountChars() {
    let dictionary = Dictionary::from_json_str(r#"{"一心一意": "toàn tâm", "abc": "x"}"#).unwrap();
    assert_eq!(dictionary.max_key_len(), 4);
    assert_eq!(dictionary.count_longer_than(3), 1);
    assert_eq!(dictionary.count_longer_than(4), 0);
}
