use dialogset::parsers::QaTextParser;
use dialogset::services::{convert, convert_or_report, ConverterService};
use dialogset::DialogSetError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_input_is_reported_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("dialogueCollection.txt");

    let result = convert(&input, None);

    match result {
        Err(DialogSetError::InputNotFound { path }) => assert_eq!(path, input),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
    assert!(!temp_dir.path().join("dialogueCollection.json").exists());
}

#[test]
fn test_convert_or_report_returns_none_on_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.txt");

    assert_eq!(convert_or_report(&input, None), None);
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn test_convert_or_report_returns_output_path_on_success() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("ok.txt");
    fs::write(&input, "q: hi\n").unwrap();

    assert_eq!(
        convert_or_report(&input, None),
        Some(temp_dir.path().join("ok.json"))
    );
}

#[test]
fn test_invalid_utf8_is_a_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("gbk.txt");
    // "q: 你好" encoded as GBK
    fs::write(&input, b"q: \xC4\xE3\xBA\xC3\n").unwrap();

    let result = convert(&input, None);

    match result {
        Err(DialogSetError::Decode { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected Decode, got {other:?}"),
    }
    assert!(!temp_dir.path().join("gbk.json").exists());
}

#[test]
fn test_unwritable_output_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("ok.txt");
    fs::write(&input, "q: hi\n").unwrap();
    let output = temp_dir.path().join("no-such-dir").join("out.json");

    let result = convert(&input, Some(&output));

    assert!(matches!(result, Err(DialogSetError::Io(_))));
}

#[test]
fn test_strict_failure_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("strict.txt");
    fs::write(&input, "q: hi\nnot a turn\n").unwrap();

    let service = ConverterService::new().with_parser(QaTextParser::new().with_strict(true));
    let result = service.convert(&input, None);

    assert!(matches!(
        result,
        Err(DialogSetError::MalformedLine { line: 2, .. })
    ));
    assert!(!temp_dir.path().join("strict.json").exists());
}
