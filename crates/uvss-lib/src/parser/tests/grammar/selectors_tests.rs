use crate::Document;

#[test]
fn element_type() {
    let res = Document::expect_valid("Button { }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Button"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn compound_parts_and_combinators() {
    let input = "Button#ok.primary:hover > TextBlock >? Label, * { }";

    let res = Document::expect_valid(input).dump_cst();

    insta::assert_snapshot!(res, @r##"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Button"
              Hash "#"
              Identifier "ok"
              Period "."
              Identifier "primary"
              PseudoClass
                Colon ":"
                Identifier "hover"
            GreaterThan ">"
            SelectorPart
              Identifier "TextBlock"
            GreaterThanQuestion ">?"
            SelectorPart
              Identifier "Label"
          Comma ","
          Selector
            SelectorPart
              Asterisk "*"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "##);
}

#[test]
fn whitespace_is_the_descendant_combinator() {
    let res = Document::expect_valid("StackPanel Button { }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "StackPanel"
            SelectorPart
              Identifier "Button"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn whitespace_ends_a_part() {
    let res = Document::expect_valid("Button .primary { }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Button"
            SelectorPart
              Period "."
              Identifier "primary"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn class_without_element_type() {
    let res = Document::expect_valid(".primary { }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Period "."
              Identifier "primary"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn universal_with_pseudo_class() {
    let res = Document::expect_valid("*:hover { }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Asterisk "*"
              PseudoClass
                Colon ":"
                Identifier "hover"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn keyword_as_class_name() {
    let res = Document::expect_valid("Button.trigger { }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Button"
              Period "."
              Identifier "trigger"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
}
