//! Domain tests for due dates, keyword lists and decisions.

use crate::classification::domain::{
    Decision, DueDate, DueDateError, FallbackSignal, KeywordConfig, KeywordConfigError, Urgency,
};
use chrono::{NaiveDate, TimeDelta};
use rstest::rstest;

fn naive(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid test date")
}

#[rstest]
#[case("2024-05-01T10:30")]
#[case("2024-05-01T10:30:45")]
#[case("2024-05-01T10:30:00.000Z")]
#[case("2024-5-1T10:30:00")]
fn due_date_parses_supported_shapes(#[case] raw: &str) {
    let due = DueDate::parse(raw).expect("due date should parse");
    assert_eq!(due.as_naive(), naive(2024, 5, 1, 10, 30));
}

#[test]
fn due_date_ignores_seconds() {
    let due: DueDate = "2024-12-31T23:59:59".parse().expect("due date should parse");
    assert_eq!(due.to_string(), "2024-12-31T23:59:00");
}

#[rstest]
#[case("2024-05-01 10:30:00", DueDateError::MissingTimeSeparator(String::new()))]
#[case("2024-05-01T10:30T00", DueDateError::MissingTimeSeparator(String::new()))]
#[case("2024/05/01T10:30:00", DueDateError::InvalidDatePart(String::new()))]
#[case("2024-05T10:30:00", DueDateError::InvalidDatePart(String::new()))]
#[case("tomorrowT10:30", DueDateError::InvalidDatePart(String::new()))]
#[case("2024-05-01T10", DueDateError::InvalidTimePart(String::new()))]
#[case("2024-05-01T10:30:00:00", DueDateError::InvalidTimePart(String::new()))]
#[case("2024-05-01Tnoon:00", DueDateError::InvalidTimePart(String::new()))]
#[case("2024-13-01T10:30", DueDateError::OutOfRange(String::new()))]
#[case("2024-02-30T10:30", DueDateError::OutOfRange(String::new()))]
#[case("2024-05-01T24:00", DueDateError::OutOfRange(String::new()))]
#[case("0-05-01T10:30", DueDateError::OutOfRange(String::new()))]
fn due_date_rejects_malformed_values(#[case] raw: &str, #[case] expected: DueDateError) {
    let err = DueDate::parse(raw).expect_err("due date should be rejected");
    assert_eq!(
        std::mem::discriminant(&err),
        std::mem::discriminant(&expected)
    );
    assert!(err.to_string().contains(raw));
}

#[rstest]
#[case(TimeDelta::hours(-30), true)]
#[case(TimeDelta::zero(), true)]
#[case(TimeDelta::hours(23), true)]
#[case(TimeDelta::days(1), false)]
#[case(TimeDelta::days(3), false)]
fn due_date_proximity_uses_one_day_window(#[case] offset: TimeDelta, #[case] expected: bool) {
    let now = naive(2024, 6, 14, 12, 0);
    let due = DueDate::from_naive(now + offset);
    assert_eq!(due.is_within_a_day_of(now), expected);
}

#[test]
fn keyword_config_keeps_entries_verbatim() {
    let keywords = KeywordConfig::new()
        .with_urgency_keywords(["ASAP", "urgent"])
        .with_non_urgency_phrases([" no "]);

    assert!(keywords.is_urgency_keyword("ASAP"));
    assert!(!keywords.is_urgency_keyword("asap"));
    assert!(keywords.is_urgency_keyword("urgent"));
    assert_eq!(keywords.non_urgency_phrase_in("call the notary"), None);
    assert_eq!(keywords.non_urgency_phrase_in("say no more"), Some(" no "));
}

#[test]
fn keyword_config_parses_document() {
    let json = r#"{
        "negative_keywords": ["not"],
        "urgency_keywords": ["asap"],
        "urgency_phrases": ["right away"],
        "non_urgency_keywords": ["whenever"],
        "non_urgency_phrases": ["no rush"],
        "comment": "extra keys are ignored"
    }"#;

    let keywords = KeywordConfig::from_json_str(json).expect("document should parse");

    assert!(keywords.is_negative_keyword("not"));
    assert!(keywords.is_urgency_keyword("asap"));
    assert!(keywords.is_urgency_phrase("right away"));
    assert!(keywords.is_non_urgency_keyword("whenever"));
    assert_eq!(keywords.non_urgency_phrase_in("no rush"), Some("no rush"));
}

#[rstest]
#[case("not json")]
#[case(r#"{"negative_keywords": []}"#)]
#[case(
    r#"{"negative_keywords": "not", "urgency_keywords": [], "urgency_phrases": [],
        "non_urgency_keywords": [], "non_urgency_phrases": []}"#
)]
fn keyword_config_rejects_malformed_documents(#[case] json: &str) {
    let result = KeywordConfig::from_json_str(json);
    assert!(matches!(result, Err(KeywordConfigError::Parse(_))));
}

#[test]
fn keyword_config_keeps_blank_entries() {
    let json = r#"{
        "negative_keywords": ["not"],
        "urgency_keywords": ["asap"],
        "urgency_phrases": [" "],
        "non_urgency_keywords": [],
        "non_urgency_phrases": ["no rush"]
    }"#;

    let keywords = KeywordConfig::from_json_str(json).expect("blank entries are accepted");

    assert!(keywords.is_urgency_phrase(" "));
    assert_eq!(keywords.lists_with_blank_entries(), ["urgency_phrases"]);
}

#[rstest]
#[case(Decision::NonUrgencyPhrase { phrase: "no rush".to_owned() }, Urgency::Normal)]
#[case(Decision::NonUrgencyKeyword { lemma: "whenever".to_owned() }, Urgency::Normal)]
#[case(
    Decision::UrgencyKeyword { lemma: "asap".to_owned(), negated_by: None },
    Urgency::Urgent
)]
#[case(
    Decision::UrgencyKeyword { lemma: "asap".to_owned(), negated_by: Some("not".to_owned()) },
    Urgency::Normal
)]
#[case(Decision::Fallback { signal: Some(FallbackSignal::DueWithinDay) }, Urgency::Urgent)]
#[case(Decision::Fallback { signal: None }, Urgency::Normal)]
fn decision_maps_to_urgency(#[case] decision: Decision, #[case] expected: Urgency) {
    assert_eq!(decision.urgency(), expected);
}

#[test]
fn urgency_serialises_lowercase() {
    let json = serde_json::to_string(&Urgency::Urgent).expect("serialise urgency");
    assert_eq!(json, r#""urgent""#);
    assert_eq!(Urgency::Normal.to_string(), "normal");
}
