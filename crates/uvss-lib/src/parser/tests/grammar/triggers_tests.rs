use crate::Document;
use indoc::indoc;

#[test]
fn property_trigger_with_actions() {
    let input = indoc! {r#"
    Button {
        trigger property IsMouseOver = true, IsEnabled <> false !important {
            set (#label) Foreground: Red;
            play-storyboard (Label): Glow;
            play-sfx: Click;
        }
    }
    "#};

    let res = Document::expect_valid(input).dump_cst();

    insta::assert_snapshot!(res, @r##"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Button"
        OpenBrace "{"
        Trigger
          TriggerKeyword "trigger"
          PropertyKeyword "property"
          TriggerCondition
            PropertyName
              Identifier "IsMouseOver"
            Equals "="
            PropertyValue
              Identifier "true"
          Comma ","
          TriggerCondition
            PropertyName
              Identifier "IsEnabled"
            NotEquals "<>"
            PropertyValue
              Identifier "false"
          ImportantKeyword "!important"
          OpenBrace "{"
          SetAction
            SetKeyword "set"
            SelectorArgument
              OpenParen "("
              Selector
                SelectorPart
                  Hash "#"
                  Identifier "label"
              CloseParen ")"
            PropertyName
              Identifier "Foreground"
            Colon ":"
            PropertyValue
              Identifier "Red"
            Semicolon ";"
          PlayStoryboardAction
            PlayStoryboardKeyword "play-storyboard"
            SelectorArgument
              OpenParen "("
              Selector
                SelectorPart
                  Identifier "Label"
              CloseParen ")"
            Colon ":"
            PropertyValue
              Identifier "Glow"
            Semicolon ";"
          PlaySfxAction
            PlaySfxKeyword "play-sfx"
            Colon ":"
            PropertyValue
              Identifier "Click"
            Semicolon ";"
          CloseBrace "}"
        CloseBrace "}"
      EndOfFile ""
    "##);
}

#[test]
fn event_trigger() {
    let input = "Button { trigger event Button.Click { play-sfx: Click; } }";

    let res = Document::expect_valid(input).dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "Button"
        OpenBrace "{"
        Trigger
          TriggerKeyword "trigger"
          EventKeyword "event"
          EventName
            Identifier "Button"
            Period "."
            Identifier "Click"
          OpenBrace "{"
          PlaySfxAction
            PlaySfxKeyword "play-sfx"
            Colon ":"
            PropertyValue
              Identifier "Click"
            Semicolon ";"
          CloseBrace "}"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn comparison_operators() {
    use crate::SyntaxKind::{
        Equals, GreaterThan, GreaterThanEquals, LessThan, LessThanEquals, NotEquals,
        TriggerCondition,
    };

    let input = "a { trigger property A = 1, B <> 1, C < 1, D <= 1, E > 1, F >= 1 { } }";
    let document = Document::expect_valid(input);

    let operators: Vec<_> = document
        .syntax()
        .descendants()
        .filter(|node| node.kind() == TriggerCondition)
        .filter_map(|node| node.children_with_tokens().nth(1))
        .map(|element| crate::syntax::element_kind(&element))
        .collect();

    assert_eq!(
        operators,
        vec![
            Equals,
            NotEquals,
            LessThan,
            LessThanEquals,
            GreaterThan,
            GreaterThanEquals
        ]
    );
}

#[test]
fn set_action_without_selector() {
    let res = Document::expect_valid("a { trigger event Click { set Opacity: 0.5; } }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      RuleSet
        SelectorList
          Selector
            SelectorPart
              Identifier "a"
        OpenBrace "{"
        Trigger
          TriggerKeyword "trigger"
          EventKeyword "event"
          EventName
            Identifier "Click"
          OpenBrace "{"
          SetAction
            SetKeyword "set"
            PropertyName
              Identifier "Opacity"
            Colon ":"
            PropertyValue
              Number "0.5"
            Semicolon ";"
          CloseBrace "}"
        CloseBrace "}"
      EndOfFile ""
    "#);
}
