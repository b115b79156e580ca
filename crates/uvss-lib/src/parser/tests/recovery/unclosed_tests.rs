use crate::{Document, parse};
use indoc::indoc;

#[test]
fn unclosed_rule_set() {
    let input = "button {";

    let res = Document::expect_invalid(input);

    insta::assert_snapshot!(res, @"error[UVSS0001] at 8..8: CloseBrace expected");
}

#[test]
fn unclosed_rule_set_tree() {
    let res = parse("button {").dump_cst_with_diagnostics();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "button"
        OpenBrace "{"
        CloseBrace (missing)
          ! CloseBrace expected
      EndOfFile ""
    "#);
}

#[test]
fn next_rule_set_closes_the_previous_one() {
    let input = indoc! {r#"
    button {
      color: red;
    label { }
    "#};

    let document = parse(input);

    insta::assert_snapshot!(
        document.diagnostics().printer().render(),
        @"error[UVSS0001] at 23..23: CloseBrace expected"
    );
    assert_eq!(document.root().rule_sets().count(), 2);
}

#[test]
fn nested_unclosed_bodies_report_each_brace() {
    let input = indoc! {r#"
    @Glow {
      target Button {
    "#};

    let res = Document::expect_invalid(input);

    insta::assert_snapshot!(res, @r"
    error[UVSS0001] at 26..26: CloseBrace expected
    error[UVSS0001] at 26..26: CloseBrace expected
    ");
}

#[test]
fn unclosed_body_after_missing_colon() {
    let res = Document::expect_invalid("a { b");

    insta::assert_snapshot!(res, @r"
    error[UVSS0001] at 5..5: Colon expected
    error[UVSS0001] at 5..5: CloseBrace expected
    ");
}

#[test]
fn unclosed_selector_argument_after_missing_name() {
    let input = "button { trigger property X = 1 { set (#a Foo: 1; } }";

    let res = Document::expect_invalid(input);

    insta::assert_snapshot!(res, @r"
    error[UVSS0001] at 47..47: Identifier expected
    error[UVSS0001] at 47..47: CloseParen expected
    ");
}

#[test]
fn unclosed_selector_argument() {
    let input = "a { trigger event Click { set (#x } }";

    let res = Document::expect_invalid(input);

    insta::assert_snapshot!(res, @"error[UVSS0001] at 34..34: CloseParen expected");
}
