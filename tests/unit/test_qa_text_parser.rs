use anyhow::Result;
use dialogset::models::{Message, MessageRole};
use dialogset::parsers::{ParseOptions, QaTextParser, SkipReason};

#[test]
fn test_parse_two_sessions() -> Result<()> {
    let input = "q: Hello\na: Hi there\n\nq: How are you?\na: Good, thanks!\n";

    let (dataset, report) = QaTextParser::new().parse(input)?;

    assert_eq!(report.lines_read, 5);
    assert_eq!(report.skipped_count(), 0);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.total_messages(), 4);
    assert_eq!(dataset.sessions[1].messages[0], Message::user("How are you?"));

    Ok(())
}

#[test]
fn test_trailing_blank_lines_and_malformed_line() -> Result<()> {
    let input = "q: Hello\nhello world\na: Hi there\n\n\n\n";

    let (dataset, report) = QaTextParser::new().parse(input)?;

    assert_eq!(dataset.len(), 1);
    assert_eq!(
        dataset.sessions[0].messages,
        vec![Message::user("Hello"), Message::assistant("Hi there")]
    );
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
    assert_eq!(report.skipped[0].text, "hello world");
    assert_eq!(report.skipped[0].reason, SkipReason::MissingMarker);

    Ok(())
}

#[test]
fn test_leading_and_repeated_blank_lines_never_create_empty_sessions() -> Result<()> {
    let input = "\n\n  \nq: one\n\n\n\t\na: two\n\n";

    let (dataset, _) = QaTextParser::new().parse(input)?;

    assert_eq!(dataset.len(), 2);
    assert!(dataset.sessions.iter().all(|s| !s.is_empty()));

    Ok(())
}

#[test]
fn test_session_of_only_skipped_lines_is_not_emitted() -> Result<()> {
    let input = "q:\na:   \nnoise\n\nq: real\n";

    let (dataset, report) = QaTextParser::new().parse(input)?;

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.sessions[0].messages, vec![Message::user("real")]);
    assert_eq!(
        report
            .skipped
            .iter()
            .map(|s| s.reason.clone())
            .collect::<Vec<_>>(),
        vec![
            SkipReason::EmptyContent(MessageRole::User),
            SkipReason::EmptyContent(MessageRole::Assistant),
            SkipReason::MissingMarker,
        ]
    );

    Ok(())
}

#[test]
fn test_consecutive_same_role_lines_are_preserved() -> Result<()> {
    let input = "q: first\nq: second\na: reply\na: another reply\n";

    let (dataset, _) = QaTextParser::new().parse(input)?;

    let roles: Vec<MessageRole> = dataset.sessions[0]
        .messages
        .iter()
        .map(|m| m.role)
        .collect();
    assert_eq!(
        roles,
        vec![
            MessageRole::User,
            MessageRole::User,
            MessageRole::Assistant,
            MessageRole::Assistant
        ]
    );

    Ok(())
}

#[test]
fn test_content_keeps_inner_colons_and_spacing() -> Result<()> {
    let (dataset, _) = QaTextParser::new().parse("a: ratio is 1:2,  really")?;

    assert_eq!(dataset.sessions[0].messages[0].content, "ratio is 1:2,  really");

    Ok(())
}

#[test]
fn test_empty_input_yields_empty_dataset() -> Result<()> {
    let (dataset, report) = QaTextParser::new().parse("")?;

    assert!(dataset.is_empty());
    assert_eq!(report.lines_read, 0);

    Ok(())
}

#[test]
fn test_strict_mode_rejects_empty_marker() {
    let parser = QaTextParser::new().with_options(ParseOptions { strict: true });

    let result = parser.parse("q: fine\na:\n");

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("line 2"), "unexpected message: {message}");
}

#[test]
fn test_strict_mode_accepts_clean_input() -> Result<()> {
    let parser = QaTextParser::new().with_strict(true);

    let (dataset, _) = parser.parse("q: a\na: b\n\nq: c\n")?;

    assert_eq!(dataset.len(), 2);

    Ok(())
}

#[test]
fn test_classic_mac_line_endings() -> Result<()> {
    let (dataset, report) = QaTextParser::new().parse("q: Hello\ra: Hi there\r\rq: Again\r")?;

    assert_eq!(report.lines_read, 4);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.sessions[1].messages, vec![Message::user("Again")]);

    Ok(())
}
