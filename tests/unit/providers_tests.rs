/*!
 * Tests for the remote translator implementations
 */

use std::time::Duration;

use zhvi::app_config::RemoteConfig;
use zhvi::errors::ProviderError;
use zhvi::providers::RemoteTranslator;
use zhvi::providers::google::GoogleTranslate;
use zhvi::providers::mock::MockTranslator;

/// Test parsing a typical multi-segment response
#[test]
fn test_google_parseResponse_withSegments_shouldConcatenateInOrder() {
    let body = r#"[[["Xin chào. ","你好。",null,null,10],["Bạn khỏe không?","你好吗？",null,null,10]],null,"zh-CN"]"#;
    assert_eq!(
        GoogleTranslate::parse_response(body).unwrap(),
        "Xin chào. Bạn khỏe không?"
    );
}

/// Test rejection of malformed bodies
#[test]
fn test_google_parseResponse_withMalformedBody_shouldFail() {
    for body in ["not json", "{}", "[null]", r#"[[[1, "x"]]]"#] {
        assert!(
            matches!(GoogleTranslate::parse_response(body), Err(ProviderError::ParseError(_))),
            "accepted {}",
            body
        );
    }
}

/// Test that an unreachable endpoint yields an error rather than a panic
#[tokio::test]
async fn test_google_translate_withUnreachableEndpoint_shouldReturnError() {
    let client = GoogleTranslate::new(
        "http://127.0.0.1:9/translate_a/single",
        "gtx",
        "zh-CN",
        "vi",
        Some(Duration::from_secs(2)),
    );
    assert!(client.translate("你好").await.is_err());
}

/// Test building the client from configuration
#[test]
fn test_google_fromConfig_shouldUseEndpoint() {
    let config = RemoteConfig::default();
    let client = GoogleTranslate::from_config(&config);
    assert_eq!(client.endpoint(), "https://translate.googleapis.com/translate_a/single");
    assert_eq!(client.name(), "google");
}

/// Test the scripted mock behaviors through the trait object
#[tokio::test]
async fn test_mock_throughTraitObject_shouldFollowBehavior() {
    let working = MockTranslator::working().with_custom_response(|t| format!("<{}>", t));
    let translator: &dyn RemoteTranslator = &working;
    assert_eq!(translator.translate("中").await.unwrap(), "<中>");

    let failing = MockTranslator::failing();
    assert!(failing.translate("中").await.is_err());
    assert_eq!(failing.call_count(), 1);

    let empty = MockTranslator::empty();
    assert_eq!(empty.translate("中").await.unwrap(), "");
}

/// Test the intermittent pattern without an async test runtime
#[test]
fn test_mock_intermittent_shouldFailEveryNthCall() {
    let translator = MockTranslator::intermittent(3);
    let results: Vec<bool> = (0..6)
        .map(|_| tokio_test::block_on(translator.translate("中")).is_ok())
        .collect();

    assert_eq!(results, vec![true, true, false, true, true, false]);
    assert_eq!(translator.clone().call_count(), 6);
}
