/*!
 * Tests for longest-match segmentation
 */

use zhvi::dictionary::Dictionary;
use zhvi::translation::{GlossEntry, Segmenter, segment_and_translate};

fn dictionary() -> Dictionary {
    Dictionary::from_entries([
        ("你好", "xin chào"),
        ("你", "mày"),
        ("我们", "chúng tôi"),
        ("学习", "học tập"),
        ("中文", "tiếng Trung"),
    ])
}

/// Test that the longest key at the cursor wins
#[test]
fn test_segmentAndTranslate_withOverlappingKeys_shouldPreferLongest() {
    let result = segment_and_translate("你好吗", &dictionary());

    assert_eq!(
        result.trace.entries(),
        &[GlossEntry::known("你好", "xin chào"), GlossEntry::unknown("吗")]
    );
    assert_eq!(result.sentence, "xin chào 吗");
}

/// Test the unknown fallback with an empty dictionary
#[test]
fn test_segmentAndTranslate_withEmptyDictionary_shouldMarkEveryCharUnknown() {
    let result = segment_and_translate("中", &Dictionary::default());

    assert_eq!(result.trace.entries(), &[GlossEntry::unknown("中")]);
    assert_eq!(result.sentence, "中");
}

/// Test that the trace always reproduces the line
#[test]
fn test_segmentAndTranslate_withMixedText_shouldPartitionLine() {
    let dictionary = dictionary();
    let lines = ["我们学习中文。", "abc 你好！", "你你你好好", "中文ABC学习123"];

    for line in lines {
        let result = segment_and_translate(line, &dictionary);
        assert_eq!(result.trace.source_text(), line);
        assert!(result.trace.iter().all(|e| !e.segment.is_empty()));
    }
}

/// Test that repeated calls give identical results
#[test]
fn test_segmentAndTranslate_calledTwice_shouldBeIdentical() {
    let dictionary = dictionary();
    let first = segment_and_translate("我们学习中文", &dictionary);
    let second = segment_and_translate("我们学习中文", &dictionary);
    assert_eq!(first, second);
    assert_eq!(first.sentence, "chúng tôi học tập tiếng Trung");
}

/// Test a pinned window shorter than some keys
#[test]
fn test_withWindow_shorterThanKeys_shouldFallBackToSingleChars() {
    let dictionary = dictionary();
    let segmenter = Segmenter::new(&dictionary).with_window(1);

    let result = segmenter.segment_and_translate("你好");

    assert_eq!(
        result.trace.entries(),
        &[GlossEntry::known("你", "mày"), GlossEntry::unknown("好")]
    );
}

/// Test a custom sentence separator
#[test]
fn test_withSeparator_shouldJoinPartsWithIt() {
    let dictionary = dictionary();
    let segmenter = Segmenter::new(&dictionary).with_separator("");

    assert_eq!(segmenter.segment_and_translate("我们学习").sentence, "chúng tôihọc tập");
}
