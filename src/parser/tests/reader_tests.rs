//! Tests for the sample reader and its error classification

use super::{FailingSource, reader_for};
use crate::config::ReaderConfig;
use crate::error::{RowError, SampleError};
use crate::models::Person;
use crate::parser::{ReadOutcome, RejectedSample, SampleReader};
use crate::source::ReaderSource;
use std::io::Cursor;

fn expect_sample(outcome: ReadOutcome) -> Person {
    match outcome {
        ReadOutcome::Sample(person) => person,
        other => panic!("Expected a sample, got {:?}", other),
    }
}

#[test]
fn test_header_then_samples() {
    let mut reader = reader_for(
        "name,age,height\nAlice,30,170\nBob,25,180\n",
        ReaderConfig::default(),
    );

    assert_eq!(reader.read_header().unwrap(), "name,age,height");
    assert_eq!(
        expect_sample(reader.read_sample().unwrap()),
        Person::new("Alice", 30, 170)
    );
    assert_eq!(
        expect_sample(reader.read_sample().unwrap()),
        Person::new("Bob", 25, 180)
    );
    assert_eq!(reader.read_sample().unwrap(), ReadOutcome::EndOfInput);
    assert_eq!(reader.line_number(), 3);
}

#[test]
fn test_end_of_input_repeats() {
    let mut reader = reader_for("name,age,height\n", ReaderConfig::default());
    reader.read_header().unwrap();

    assert_eq!(reader.read_sample().unwrap(), ReadOutcome::EndOfInput);
    assert_eq!(reader.read_sample().unwrap(), ReadOutcome::EndOfInput);
}

#[test]
fn test_empty_input_has_no_header() {
    let mut reader = reader_for("", ReaderConfig::default());
    assert!(matches!(reader.read_header(), Err(SampleError::EmptyInput)));
}

#[test]
fn test_header_is_not_parsed() {
    // A header that would fail as a sample is still accepted as a header
    let mut reader = reader_for("name,age,height,extra\nDan,40,160", ReaderConfig::default());
    assert_eq!(reader.read_header().unwrap(), "name,age,height,extra");
    assert_eq!(
        expect_sample(reader.read_sample().unwrap()),
        Person::new("Dan", 40, 160)
    );
}

#[test]
fn test_rejected_row_carries_line_number() {
    let mut reader = reader_for(
        "name,age,height\nCarl,oops,190\nDan,40,160\n",
        ReaderConfig::default(),
    );
    reader.read_header().unwrap();

    match reader.read_sample().unwrap() {
        ReadOutcome::Rejected(RejectedSample { line_number, error }) => {
            assert_eq!(line_number, 2);
            assert!(matches!(error, RowError::InvalidField { field: "age", .. }));
        }
        other => panic!("Expected a rejection, got {:?}", other),
    }

    assert_eq!(
        expect_sample(reader.read_sample().unwrap()),
        Person::new("Dan", 40, 160)
    );
}

#[test]
fn test_over_long_line_is_rejected_and_reading_resumes() {
    let config = ReaderConfig::default().with_line_capacity(16);
    let long_name = "x".repeat(40);
    let input = format!("name,age,height\n{},30,170\nEve,33,165\n", long_name);
    let mut reader = reader_for(&input, config);
    reader.read_header().unwrap();

    assert_eq!(
        reader.read_sample().unwrap(),
        ReadOutcome::Rejected(RejectedSample {
            line_number: 2,
            error: RowError::MalformedLine { capacity: 16 },
        })
    );
    assert_eq!(
        expect_sample(reader.read_sample().unwrap()),
        Person::new("Eve", 33, 165)
    );
}

#[test]
fn test_line_at_exact_capacity() {
    // "Al,3,17\n" is 8 bytes
    let config = ReaderConfig::default().with_line_capacity(8);
    let mut reader = reader_for("h\nAl,3,17\nAl,3,170\n", config);
    reader.read_header().unwrap();

    assert_eq!(
        expect_sample(reader.read_sample().unwrap()),
        Person::new("Al", 3, 17)
    );
    assert!(matches!(
        reader.read_sample().unwrap(),
        ReadOutcome::Rejected(RejectedSample {
            error: RowError::MalformedLine { capacity: 8 },
            ..
        })
    ));
}

#[test]
fn test_truncated_name_is_flagged() {
    let config = ReaderConfig::default().with_name_capacity(6);
    let mut reader = reader_for("name,age,height\nBartholomew,52,177\n", config);
    reader.read_header().unwrap();

    let person = expect_sample(reader.read_sample().unwrap());
    assert_eq!(person.name, "Barth");
    assert!(person.name_truncated);
}

#[test]
fn test_read_failure_is_fatal() {
    let source = FailingSource::new(&["name,age,height\n", "Alice,30,170\n"]);
    let mut reader = SampleReader::new(source, ReaderConfig::default()).unwrap();

    reader.read_header().unwrap();
    expect_sample(reader.read_sample().unwrap());

    match reader.read_sample() {
        Err(SampleError::Read { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected Read error, got {:?}", other),
    }
}

#[test]
fn test_header_read_failure() {
    let mut reader = SampleReader::new(FailingSource::new(&[]), ReaderConfig::default()).unwrap();
    assert!(matches!(
        reader.read_header(),
        Err(SampleError::Read { line: 1, .. })
    ));
}

#[test]
fn test_constructor_rejects_invalid_configuration() {
    let source = || ReaderSource::new(Cursor::new(b"h\nAlice,30,170\n".to_vec()));

    // 'Ĭ' is U+012C; its low byte is a comma
    let wide_separator = ReaderConfig::default().with_separator('\u{012C}');
    assert!(matches!(
        SampleReader::new(source(), wide_separator),
        Err(SampleError::Configuration { .. })
    ));

    let no_capacity = ReaderConfig::default().with_line_capacity(0);
    assert!(matches!(
        SampleReader::new(source(), no_capacity),
        Err(SampleError::Configuration { .. })
    ));

    let no_name_room = ReaderConfig::default().with_name_capacity(1);
    assert!(matches!(
        SampleReader::new(source(), no_name_room),
        Err(SampleError::Configuration { .. })
    ));
}

#[test]
fn test_line_cut_after_the_last_needed_field_is_rejected() {
    let config = ReaderConfig::default().with_line_capacity(16);
    let mut reader = reader_for("h\nAl,3,17,xxxxxxxxxxxxxxxx\nBo,4,18\n", config);
    reader.read_header().unwrap();

    assert_eq!(
        reader.read_sample().unwrap(),
        ReadOutcome::Rejected(RejectedSample {
            line_number: 2,
            error: RowError::MalformedLine { capacity: 16 },
        })
    );
    assert_eq!(
        expect_sample(reader.read_sample().unwrap()),
        Person::new("Bo", 4, 18)
    );
}
