//! Integration tests for template scanning, block extraction and clause parsing.

use locus::parser::{
    Block, BlockError, BlockKind, BlockSections, Clause, ClauseError, ClauseValue, RawClause,
    Segment, TextToken, classify_block, extract_sections, lone_parameter, parse_clauses,
    parse_logic, parse_template, tokenize_text,
};
use locus::{Value, params};

// =============================================================================
// Template scanning
// =============================================================================

#[test]
fn pure_literal() {
    let t = parse_template("Hello, world!");
    assert_eq!(t.segments, vec![Segment::Literal("Hello, world!".into())]);
}

#[test]
fn empty_string() {
    let t = parse_template("");
    assert_eq!(t.segments, vec![]);
}

#[test]
fn single_block_records_content_and_span() {
    let t = parse_template("You have @{var=count} items");
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("You have ".into()),
            Segment::Block(Block {
                content: "var=count".into(),
                span: 9..21,
            }),
            Segment::Literal(" items".into()),
        ]
    );
}

#[test]
fn multiple_blocks_in_order() {
    let t = parse_template("@{var=a} and @{var=b}");
    let contents: Vec<&str> = t.blocks().map(|b| b.content.as_str()).collect();
    assert_eq!(contents, vec!["var=a", "var=b"]);
}

#[test]
fn block_content_ends_at_first_brace() {
    let t = parse_template("@{a@{b}c}");
    assert_eq!(
        t.segments,
        vec![
            Segment::Block(Block {
                content: "a@{b".into(),
                span: 0..7,
            }),
            Segment::Literal("c}".into()),
        ]
    );
}

#[test]
fn unterminated_block_is_literal() {
    let t = parse_template("50@{ off");
    assert_eq!(t.segments, vec![Segment::Literal("50@{ off".into())]);
}

#[test]
fn block_does_not_cross_line_break() {
    let t = parse_template("@{var=a\n}");
    assert_eq!(t.segments, vec![Segment::Literal("@{var=a\n}".into())]);
}

#[test]
fn at_signs_without_brace_are_literal() {
    let t = parse_template("mail me @ user@example.com");
    assert_eq!(
        t.segments,
        vec![Segment::Literal("mail me @ user@example.com".into())]
    );
}

#[test]
fn empty_block() {
    let t = parse_template("@{}");
    assert_eq!(
        t.segments,
        vec![Segment::Block(Block {
            content: String::new(),
            span: 0..3,
        })]
    );
}

// =============================================================================
// Block extraction
// =============================================================================

#[test]
fn variable_section() {
    let sections = extract_sections("var=name");
    assert_eq!(sections.var.as_deref(), Some("name"));
    assert_eq!(sections.reference, None);
    assert_eq!(sections.logic, None);
}

#[test]
fn reference_and_logic_sections() {
    let sections = extract_sections("ref=count||modi=mod=equal:val=0:text=x");
    assert_eq!(
        sections,
        BlockSections {
            var: None,
            reference: Some("count".into()),
            logic: Some("modi=mod=equal:val=0:text=x".into()),
        }
    );
}

#[test]
fn later_sections_overwrite_earlier_ones() {
    let sections = extract_sections("ref=a||modi=mod=first||ref=b||modi=mod=second");
    assert_eq!(sections.reference.as_deref(), Some("b"));
    assert_eq!(sections.logic.as_deref(), Some("modi=mod=second"));
}

#[test]
fn names_are_trimmed() {
    let sections = extract_sections("ref= count ||modi=mod=equal:val=0:text=x");
    assert_eq!(sections.reference.as_deref(), Some("count"));
}

#[test]
fn variable_section_with_extra_assignment_captures_nothing() {
    assert_eq!(extract_sections("var=a=b"), BlockSections::default());
}

#[test]
fn variable_marker_is_never_reclassified() {
    let sections = extract_sections("ref=n||modi=mod=equal:val=1:text=var=x");
    assert_eq!(sections.reference.as_deref(), Some("n"));
    assert_eq!(sections.logic, None);
}

#[test]
fn reference_marker_with_extra_assignment_can_be_logic() {
    let sections = extract_sections("modi=mod=equal:val=0:text=ref=x");
    assert_eq!(sections.reference, None);
    assert_eq!(
        sections.logic.as_deref(),
        Some("modi=mod=equal:val=0:text=ref=x")
    );
}

#[test]
fn unknown_sections_are_ignored() {
    assert_eq!(extract_sections("foo=bar||baz"), BlockSections::default());
}

#[test]
fn classify_variable_wins() {
    let kind = classify_block("ref=y||modi=mod=equal:val=1:text=a||var=x").unwrap();
    assert_eq!(kind, BlockKind::Variable { name: "x".into() });
}

#[test]
fn classify_reference() {
    let kind = classify_block("ref=count||modi=mod=equal:val=1:text=a").unwrap();
    assert_eq!(
        kind,
        BlockKind::Reference {
            name: "count".into(),
            logic: "modi=mod=equal:val=1:text=a".into(),
        }
    );
}

#[test]
fn classify_malformed_blocks() {
    assert_eq!(classify_block("foo=bar"), Err(BlockError::NoSections));
    assert_eq!(classify_block(""), Err(BlockError::NoSections));
    assert_eq!(classify_block("var="), Err(BlockError::NoSections));
    assert_eq!(classify_block("ref=count"), Err(BlockError::MissingLogic));
    assert_eq!(
        classify_block("modi=mod=equal:val=1:text=a"),
        Err(BlockError::MissingReference)
    );
}

// =============================================================================
// Clause parsing
// =============================================================================

fn raw(modifier: &str, value: ClauseValue, text: &str) -> RawClause {
    RawClause {
        modifier: Some(modifier.into()),
        value: Some(value),
        text: Some(text.into()),
    }
}

#[test]
fn clauses_in_written_order() {
    let clauses =
        parse_clauses("modi=mod=equal:val=0:text=no items;mod=bigger:val=1:text=$count items");
    assert_eq!(
        clauses,
        vec![
            raw("equal", ClauseValue::Literal("0".into()), "no items"),
            raw("bigger", ClauseValue::Literal("1".into()), "$count items"),
        ]
    );
}

#[test]
fn field_order_is_irrelevant() {
    let clauses = parse_clauses("modi=text=hi:val=3:mod=equal");
    assert_eq!(
        clauses,
        vec![raw("equal", ClauseValue::Literal("3".into()), "hi")]
    );
}

#[test]
fn modi_marker_can_name_the_modifier() {
    let clauses = parse_clauses("modi=equal:val=0:text=none;modi=bigger:val=0:text=some");
    assert_eq!(
        clauses,
        vec![
            raw("equal", ClauseValue::Literal("0".into()), "none"),
            raw("bigger", ClauseValue::Literal("0".into()), "some"),
        ]
    );
}

#[test]
fn text_may_contain_separators() {
    let clauses = parse_clauses("modi=mod=equal:val=1:text=Ratio: 1=1");
    assert_eq!(clauses[0].text.as_deref(), Some("Ratio: 1=1"));
}

#[test]
fn unknown_field_between_known_fields_is_skipped() {
    let clauses = parse_clauses("modi=mod=equal:val=0:lang=en:text=zero");
    assert_eq!(
        clauses,
        vec![raw("equal", ClauseValue::Literal("0".into()), "zero")]
    );

    let clauses = parse_clauses("modi=mod=equal:note=x:val=0:text=zero");
    assert_eq!(
        clauses,
        vec![raw("equal", ClauseValue::Literal("0".into()), "zero")]
    );
}

#[test]
fn piece_without_assignment_continues_previous_field() {
    let clauses = parse_clauses("modi=mod=equal:val=10:30:text=at 10:30");
    assert_eq!(
        clauses,
        vec![raw("equal", ClauseValue::Literal("10:30".into()), "at 10:30")]
    );
}

#[test]
fn spaces_around_keys_are_ignored() {
    let clauses = parse_clauses("modi=mod=equal:val=0:text=a; mod=bigger:val=0:text=b");
    assert_eq!(clauses[1].modifier.as_deref(), Some("bigger"));
}

#[test]
fn missing_fields_are_reported() {
    let clauses = parse_clauses("modi=mod=equal:val=0;mod=bigger:val=1:text=N items");
    assert_eq!(clauses[0].missing_fields(), vec!["text"]);
    assert!(clauses[1].missing_fields().is_empty());
}

#[test]
fn trailing_separator_yields_empty_clause() {
    let clauses = parse_clauses("modi=mod=equal:val=0:text=a;");
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[1].missing_fields(), vec!["mod", "val", "text"]);
}

#[test]
fn lone_reference_value() {
    let clauses = parse_clauses("modi=mod=equal:val=$limit:text=x");
    assert_eq!(
        clauses[0].value,
        Some(ClauseValue::Parameter("limit".into()))
    );
}

#[test]
fn reference_with_extra_text_is_literal() {
    let clauses = parse_clauses("modi=mod=equal:val=$a$b:text=x");
    assert_eq!(clauses[0].value, Some(ClauseValue::Literal("$a$b".into())));
}

#[test]
fn parse_logic_resolves_references() {
    let params = params! { "limit" => 3 };
    let clauses = parse_logic(
        "modi=mod=smaller:val=$limit:text=few;mod=equal:val=$other:text=x;mod=equal:val=1",
        &params,
    );
    assert_eq!(
        clauses,
        vec![
            Ok(Clause {
                modifier: "smaller".into(),
                value: Value::Number(3),
                text: "few".into(),
            }),
            Ok(Clause {
                modifier: "equal".into(),
                value: Value::String("-".into()),
                text: "x".into(),
            }),
            Err(ClauseError {
                missing: vec!["text"],
            }),
        ]
    );
}

// =============================================================================
// Parameter tokens
// =============================================================================

#[test]
fn text_tokens() {
    assert_eq!(
        tokenize_text("$n items for $who_2!"),
        vec![
            TextToken::Parameter("n"),
            TextToken::Literal(" items for "),
            TextToken::Parameter("who_2"),
            TextToken::Literal("!"),
        ]
    );
}

#[test]
fn dollar_without_name_is_literal() {
    assert_eq!(
        tokenize_text("5$ $$x"),
        vec![
            TextToken::Literal("5"),
            TextToken::Literal("$"),
            TextToken::Literal(" "),
            TextToken::Literal("$"),
            TextToken::Parameter("x"),
        ]
    );
    assert_eq!(tokenize_text(""), vec![]);
}

#[test]
fn lone_parameter_requires_whole_input() {
    assert_eq!(lone_parameter("$limit"), Some("limit"));
    assert_eq!(lone_parameter("$a$b"), None);
    assert_eq!(lone_parameter("$"), None);
    assert_eq!(lone_parameter("x$a"), None);
}
