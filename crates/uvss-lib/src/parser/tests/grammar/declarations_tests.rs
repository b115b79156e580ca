use crate::Document;
use indoc::indoc;

#[test]
fn simple_declaration() {
    let res = Document::expect_valid("button { color: red; }").dump_cst();

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
          Colon ":"
          PropertyValue
            Identifier "red"
          Semicolon ";"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn attached_property_string_and_important() {
    let input = indoc! {r#"
    Label {
        Grid.Row: 1;
        font-family: "Segoe UI" !important;
        color: red
    }
    "#};

    let res = Document::expect_valid(input).dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Label"
        OpenBrace "{"
        PropertyDeclaration
          PropertyName
            Identifier "Grid"
            Period "."
            Identifier "Row"
          Colon ":"
          PropertyValue
            Number "1"
          Semicolon ";"
        PropertyDeclaration
          PropertyName
            Identifier "font-family"
          Colon ":"
          PropertyValue
            StringLiteral "\"Segoe UI\""
          ImportantKeyword "!important"
          Semicolon ";"
        PropertyDeclaration
          PropertyName
            Identifier "color"
          Colon ":"
          PropertyValue
            Identifier "red"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn value_keeps_every_token() {
    let res = Document::expect_valid("Border { margin: 0 4 -2 4.5; }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Border"
        OpenBrace "{"
        PropertyDeclaration
          PropertyName
            Identifier "margin"
          Colon ":"
          PropertyValue
            Number "0"
            Number "4"
            Minus "-"
            Number "2"
            Number "4.5"
          Semicolon ";"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn keyword_as_property_name() {
    let res = Document::expect_valid("Button { target: self; }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Button"
        OpenBrace "{"
        PropertyDeclaration
          PropertyName
            Identifier "target"
          Colon ":"
          PropertyValue
            Identifier "self"
          Semicolon ";"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn value_text_is_trimmed() {
    let document = Document::expect_valid("Button { font: 12  Segoe /* c */ ; }");
    let value = document
        .syntax()
        .descendants()
        .find(|node| node.kind() == crate::SyntaxKind::PropertyValue)
        .unwrap();

    assert_eq!(value.text(), "12  Segoe");
}
