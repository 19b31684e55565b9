//! Tests for zero-copy field splitting

use crate::error::RowError;
use crate::parser::FieldSplitter;
use crate::source::{Line, LineBuffer};

fn collect_fields(line: &[u8], separator: u8) -> Vec<Vec<u8>> {
    FieldSplitter::new(Line::new(line), separator)
        .map(|field| field.unwrap().as_bytes().to_vec())
        .collect()
}

fn strings(fields: Vec<Vec<u8>>) -> Vec<String> {
    fields
        .into_iter()
        .map(|f| String::from_utf8(f).unwrap())
        .collect()
}

#[test]
fn test_three_fields_with_newline() {
    let fields = strings(collect_fields(b"Alice,30,170\n", b','));
    assert_eq!(fields, vec!["Alice", "30", "170"]);
}

#[test]
fn test_valid_lines_split_into_substrings() {
    let cases = [
        ("Bob", "25", "180"),
        ("x", "0", "0"),
        ("Mary Ann", "4294967295", "1"),
        ("", "1", "2"),
        ("Zoë", "12", "99"),
    ];

    for (name, age, height) in cases {
        let line = format!("{},{},{}\n", name, age, height);
        let fields = strings(collect_fields(line.as_bytes(), b','));
        assert_eq!(fields, vec![name, age, height], "line {:?}", line);
    }
}

#[test]
fn test_last_line_without_terminator() {
    let fields = strings(collect_fields(b"Dan,40,160", b','));
    assert_eq!(fields, vec!["Dan", "40", "160"]);
}

#[test]
fn test_crlf_terminator() {
    let fields = strings(collect_fields(b"Eve,33,165\r\n", b','));
    assert_eq!(fields, vec!["Eve", "33", "165"]);
}

#[test]
fn test_custom_separator() {
    let fields = strings(collect_fields(b"Fay;50;150\n", b';'));
    assert_eq!(fields, vec!["Fay", "50", "150"]);

    // Commas are plain text under another separator
    let fields = strings(collect_fields(b"Doe, Jane;50;150\n", b';'));
    assert_eq!(fields, vec!["Doe, Jane", "50", "150"]);
}

#[test]
fn test_empty_fields_are_zero_length_slices() {
    let fields = strings(collect_fields(b",30,\n", b','));
    assert_eq!(fields, vec!["", "30", ""]);

    let fields = strings(collect_fields(b"a,,b\n", b','));
    assert_eq!(fields, vec!["a", "", "b"]);
}

#[test]
fn test_blank_line_yields_one_empty_field() {
    let fields = strings(collect_fields(b"\n", b','));
    assert_eq!(fields, vec![""]);
}

#[test]
fn test_empty_line_yields_nothing() {
    assert!(collect_fields(b"", b',').is_empty());
}

#[test]
fn test_trailing_separator_at_line_end() {
    // The cursor reaches the end of the line, so there is no trailing field
    let fields = strings(collect_fields(b"a,b,", b','));
    assert_eq!(fields, vec!["a", "b"]);
}

#[test]
fn test_offsets_and_cursor() {
    let mut splitter = FieldSplitter::new(Line::new(b"ab,cde,f\n"), b',');

    let first = splitter.next_field().unwrap().unwrap();
    assert_eq!((first.offset(), first.len()), (0, 2));
    assert_eq!(splitter.position(), 3);

    let second = splitter.next_field().unwrap().unwrap();
    assert_eq!((second.offset(), second.len()), (3, 3));
    assert_eq!(splitter.position(), 7);

    let third = splitter.next_field().unwrap().unwrap();
    assert_eq!((third.offset(), third.as_bytes()), (7, &b"f"[..]));
    assert_eq!(splitter.position(), 9);
}

#[test]
fn test_no_more_fields_is_sticky() {
    let mut splitter = FieldSplitter::new(Line::new(b"a\n"), b',');

    assert!(splitter.next_field().unwrap().is_some());
    assert_eq!(splitter.next_field(), Ok(None));
    assert_eq!(splitter.next_field(), Ok(None));
}

#[test]
fn test_nothing_after_terminator() {
    // Text after the terminator is not part of the line
    let mut splitter = FieldSplitter::new(Line::new(b"a,b\r\n"), b',');
    assert_eq!(splitter.next_field().unwrap().unwrap().as_bytes(), b"a");
    assert_eq!(splitter.next_field().unwrap().unwrap().as_bytes(), b"b");
    assert_eq!(splitter.next_field(), Ok(None));
}

#[test]
fn test_truncated_line_is_malformed() {
    let mut buffer = LineBuffer::with_capacity(8);
    buffer.push(b"Alice,30,170\n");
    let line = buffer.line();
    assert!(line.is_truncated());
    assert_eq!(line.as_bytes(), b"Alice,30");

    let mut splitter = FieldSplitter::new(line, b',');
    assert_eq!(splitter.next_field().unwrap().unwrap().as_bytes(), b"Alice");
    assert_eq!(
        splitter.next_field(),
        Err(RowError::MalformedLine { capacity: 8 })
    );
    // The scan never resumes past the stored bytes
    assert_eq!(splitter.next_field(), Ok(None));
}

#[test]
fn test_truncated_line_without_any_separator() {
    let mut buffer = LineBuffer::with_capacity(4);
    buffer.push(b"abcdefgh");

    let mut splitter = FieldSplitter::new(buffer.line(), b',');
    assert_eq!(
        splitter.next_field(),
        Err(RowError::MalformedLine { capacity: 4 })
    );
}

#[test]
fn test_iterator_yields_error_then_stops() {
    let mut buffer = LineBuffer::with_capacity(3);
    buffer.push(b"a,bcdef\n");

    let results: Vec<_> = FieldSplitter::new(buffer.line(), b',').collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(RowError::MalformedLine { .. })));
}

#[test]
fn test_ensure_complete() {
    let splitter = FieldSplitter::new(Line::new(b"a,b,c\n"), b',');
    assert_eq!(splitter.ensure_complete(), Ok(()));

    // All wanted fields fit, but the line was still cut
    let mut buffer = LineBuffer::with_capacity(6);
    buffer.push(b"a,b,c,dddd\n");
    let mut splitter = FieldSplitter::new(buffer.line(), b',');
    for expected in [b"a", b"b", b"c"] {
        assert_eq!(splitter.next_field().unwrap().unwrap().as_bytes(), expected);
    }
    assert_eq!(
        splitter.ensure_complete(),
        Err(RowError::MalformedLine { capacity: 6 })
    );
}
