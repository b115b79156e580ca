use crate::Document;

#[test]
fn animation_in_rule_set() {
    let input = "Button { animation Grid.Row { keyframe 100 Linear { 2 } } }";

    let res = Document::expect_valid(input).dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Button"
        OpenBrace "{"
        Animation
          AnimationKeyword "animation"
          PropertyName
            Identifier "Grid"
            Period "."
            Identifier "Row"
          OpenBrace "{"
          Keyframe
            KeyframeKeyword "keyframe"
            Number "100"
            Identifier "Linear"
            OpenBrace "{"
            PropertyValue
              Number "2"
            CloseBrace "}"
          CloseBrace "}"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn top_level_animation() {
    let res = Document::expect_valid("animation Opacity { }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      Animation
        AnimationKeyword "animation"
        PropertyName
          Identifier "Opacity"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn keyword_as_animated_property() {
    let res = Document::expect_valid("animation target { }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      Animation
        AnimationKeyword "animation"
        PropertyName
          Identifier "target"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn keyframe_value_may_hold_semicolons() {
    let res = Document::expect_valid("animation Margin { keyframe 0 { 1; 2 } }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      Animation
        AnimationKeyword "animation"
        PropertyName
          Identifier "Margin"
        OpenBrace "{"
        Keyframe
          KeyframeKeyword "keyframe"
          Number "0"
          OpenBrace "{"
          PropertyValue
            Number "1"
            Semicolon ";"
            Number "2"
          CloseBrace "}"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn animation_without_name_parses() {
    let document = crate::parse("animation { }");

    insta::assert_snapshot!(document.dump_cst(), @r#"
    Document
      Animation
        AnimationKeyword "animation"
        OpenBrace "{"
        CloseBrace "}"
      EndOfFile ""
    "#);
    assert!(document.syntax().diagnostics().is_empty());
}
