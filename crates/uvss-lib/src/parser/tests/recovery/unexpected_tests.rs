use crate::{Document, parse};

#[test]
fn stray_semicolon_in_body() {
    let input = "button { ; color: red; }";

    let res = Document::expect_invalid(input);

    insta::assert_snapshot!(res, @"error[UVSS0002] at 9..10: unexpected Semicolon");
}

#[test]
fn stray_semicolon_tree() {
    let res = parse("button { ; color: red; }").dump_cst_with_diagnostics();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "button"
        OpenBrace "{"
        Error
          Semicolon ";"
            ! unexpected Semicolon
        PropertyDeclaration
          PropertyName
            Identifier "color"
          Colon ":"
          PropertyValue
            Identifier "red"
          Semicolon ";"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn stray_close_brace_at_top_level() {
    let res = Document::expect_invalid("} button { }");

    insta::assert_snapshot!(res, @"error[UVSS0002] at 0..1: unexpected CloseBrace");
}

#[test]
fn garbage_is_skipped() {
    let res = Document::expect_invalid("§ button { }");

    insta::assert_snapshot!(res, @"error[UVSS0002] at 0..2: unexpected Garbage");
}

#[test]
fn unterminated_comment_is_skipped() {
    let input = "button { } /* oops";

    let document = parse(input);

    insta::assert_snapshot!(
        document.diagnostics().printer().render(),
        @"error[UVSS0002] at 11..18: unexpected UnterminatedComment"
    );
    assert_eq!(document.to_full_string(), input);
}

#[test]
fn every_unexpected_token_is_reported() {
    let res = Document::expect_invalid("a { ; ; }");

    insta::assert_snapshot!(res, @r"
    error[UVSS0002] at 4..5: unexpected Semicolon
    error[UVSS0002] at 6..7: unexpected Semicolon
    ");
}

#[test]
fn garbage_inside_value_is_skipped() {
    let res = Document::expect_invalid("a { color: red § blue; }");

    insta::assert_snapshot!(res, @"error[UVSS0002] at 15..17: unexpected Garbage");
}

#[test]
fn keyword_at_top_level() {
    let res = Document::expect_invalid("keyframe a { }");

    insta::assert_snapshot!(res, @"error[UVSS0002] at 0..8: unexpected KeyframeKeyword");
}
