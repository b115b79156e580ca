use crate::{Document, parse};

#[test]
fn missing_colon_reports_once() {
    let res = Document::expect_invalid("button { color; }");

    insta::assert_snapshot!(res, @"error[UVSS0001] at 14..14: Colon expected");
}

#[test]
fn missing_colon_tree() {
    let res = parse("button { color; }").dump_cst_with_diagnostics();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "button"
        OpenBrace "{"
        PropertyDeclaration
          PropertyName
            Identifier "color"
          Colon (missing)
            ! Colon expected
          PropertyValue
            Identifier (missing)
          Semicolon ";"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn missing_semicolon_before_trigger() {
    let input = "button { color: red\n  trigger event Click { } }";

    let document = parse(input);

    insta::assert_snapshot!(
        document.diagnostics().printer().render(),
        @"error[UVSS0001] at 20..20: Semicolon expected"
    );
    let rule_set = document.root().rule_sets().next().unwrap();
    assert_eq!(rule_set.declarations().count(), 1);
    assert_eq!(rule_set.triggers().count(), 1);
}

#[test]
fn trigger_without_kind() {
    let res = Document::expect_invalid("button { trigger { } }");

    insta::assert_snapshot!(res, @"error[UVSS0001] at 17..17: PropertyKeyword expected");
}

#[test]
fn keyframe_without_time() {
    let res = Document::expect_invalid("animation Opacity { keyframe { 1 } }");

    insta::assert_snapshot!(res, @"error[UVSS0001] at 29..29: Number expected");
}

#[test]
fn storyboard_without_name() {
    let res = Document::expect_invalid("@ { }");

    insta::assert_snapshot!(res, @"error[UVSS0001] at 2..2: Identifier expected");
}

#[test]
fn class_without_name() {
    let res = Document::expect_invalid("a.{ }");

    insta::assert_snapshot!(res, @"error[UVSS0001] at 2..2: Identifier expected");
}

#[test]
fn trigger_condition_without_operator() {
    let res = Document::expect_invalid("a { trigger property IsEnabled { } }");

    insta::assert_snapshot!(res, @"error[UVSS0001] at 31..31: Equals expected");
}

#[test]
fn empty_declaration_value() {
    let res = Document::expect_invalid("a { color: ; }");

    insta::assert_snapshot!(res, @"error[UVSS0001] at 11..11: Identifier expected");
}
