use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_builder() {
    let error = FormatError::new(ErrorCode::E1001, "test error")
        .with_span(Span::new(0, 5))
        .with_text("x")
        .with_span(Span::new(7, 8));

    assert_eq!(error.code(), ErrorCode::E1001);
    assert_eq!(error.message(), "test error");
    assert_eq!(error.args().len(), 3);
    assert_eq!(error.primary_span(), Some(Span::new(0, 5)));
    assert_eq!(error.spans().count(), 2);
}

#[test]
fn test_error_display_format() {
    let cause = FormatError::new(ErrorCode::E0002, "inner");
    let error = FormatError::new(ErrorCode::E1002, "outer")
        .with_span(Span::new(3, 4))
        .with_cause(cause);

    assert_eq!(
        error.to_string(),
        "[E1002] outer (at 3..4); caused by: [E0002] inner"
    );
}

#[test]
fn test_helpers_use_phase_codes() {
    let span = Span::new(1, 2);
    assert_eq!(unrecognized_char('#', span).code(), ErrorCode::E0002);
    assert_eq!(unterminated_string(span).code(), ErrorCode::E0001);
    assert_eq!(unexpected_token(")", span).code(), ErrorCode::E1001);
    assert_eq!(expected_token(")", "", span).code(), ErrorCode::E1002);
    assert_eq!(non_associative("==", span).code(), ErrorCode::E1003);
    assert_eq!(call_arity_mismatch("pow", 2, 1, span).code(), ErrorCode::E1004);
    assert_eq!(unparsed_suffix(".b", span).code(), ErrorCode::E1005);
    assert_eq!(nested_too_deeply(8, span).code(), ErrorCode::E1006);
    assert_eq!(
        arity_mismatch("+", Arity::Fixed(2), 1, span).code(),
        ErrorCode::E2001
    );
}

#[test]
fn test_messages_name_the_offender() {
    let span = Span::point(4);
    assert_eq!(
        expected_token(")", "", span).message(),
        "expected ')' but found end of input"
    );
    assert_eq!(
        expected_token(")", ",", span).message(),
        "expected ')' but found ','"
    );
    assert_eq!(unexpected_token("", span).message(), "unexpected end of input");
    assert!(unparsed_suffix(".sub", span).message().contains(".sub"));
}
