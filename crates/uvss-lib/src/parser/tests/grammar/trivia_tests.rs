use crate::Document;
use indoc::indoc;

#[test]
fn comments_and_line_breaks_are_token_trivia() {
    let input = indoc! {r#"
    /* head */
    button { } // tail
    "#};

    let document = Document::expect_valid(input);

    insta::assert_snapshot!(document.dump_cst_full(), @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              MultiLineComment "/* head */"
              EndOfLine "\n"
              Identifier "button"
              Whitespace " "
        OpenBrace "{"
        Whitespace " "
        CloseBrace "}"
        Whitespace " "
        SingleLineComment "// tail"
        EndOfLine "\n"
      EndOfFile ""
    "#);
    assert_eq!(document.to_full_string(), input);
}

#[test]
fn final_trivia_belongs_to_end_of_file() {
    let input = "a { }\n\n// bye";

    let document = Document::expect_valid(input);

    insta::assert_snapshot!(document.dump_cst_full(), @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "a"
              Whitespace " "
        OpenBrace "{"
        Whitespace " "
        CloseBrace "}"
        EndOfLine "\n"
      EndOfLine "\n"
      SingleLineComment "// bye"
      EndOfFile ""
    "#);
}

#[test]
fn spans_exclude_trivia() {
    let document = Document::expect_valid("a { }");

    insta::assert_snapshot!(document.printer().with_spans(true).dump(), @r#"
    Document [0..5]
      RuleSet [0..5]
        SelectorList [0..1]
          Selector [0..1]
            SelectorPart [0..1]
              Identifier [0..1] "a"
        OpenBrace [2..3] "{"
        CloseBrace [4..5] "}"
      EndOfFile [5..5] ""
    "#);
}

#[test]
fn whitespace_only_document() {
    let document = Document::expect_valid("  \n");

    assert_eq!(document.syntax().children().count(), 0);
    assert_eq!(document.to_full_string(), "  \n");
    assert_eq!(u32::from(document.full_width()), 3);
    assert_eq!(u32::from(document.width()), 0);
}
