//! Every failure of the model path lands on the regex fallback.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tw_config::OpenAiConfig;
use tw_core::extraction::ExtractionSource;
use tw_extract::TaskExtractor;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
}

#[tokio::test]
async fn missing_key_uses_fallback() {
    let extractor = TaskExtractor::from_config(&OpenAiConfig::default()).unwrap();
    assert!(!extractor.uses_model());

    let extraction = extractor.extract("Call mom tomorrow at 5pm", today()).await;
    assert_eq!(extraction.source, ExtractionSource::Fallback);
    assert_eq!(extraction.fields.title, "Call mom tomorrow at 5pm");
    assert_eq!(extraction.fields.category, "Work");
    let tomorrow = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
    assert_eq!(extraction.fields.due_date, Some(tomorrow));
    assert_eq!(extraction.fields.due_date_time, tomorrow.and_hms_opt(17, 0, 0));
}

#[tokio::test]
async fn unreachable_api_uses_fallback() {
    let config = OpenAiConfig {
        api_key: "sk-test".into(),
        base_url: "http://127.0.0.1:9/v1".into(),
        timeout_secs: 2,
        ..Default::default()
    };
    let extractor = TaskExtractor::from_config(&config).unwrap();
    assert!(extractor.uses_model());

    let extraction = extractor.extract("dentist 10:15am", today()).await;
    assert_eq!(extraction.source, ExtractionSource::Fallback);
    assert_eq!(extraction.fields.due_date, None);
    assert_eq!(extraction.fields.due_date_time, today().and_hms_opt(10, 15, 0));
}
