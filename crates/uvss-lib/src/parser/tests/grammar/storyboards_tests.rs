use crate::Document;
use indoc::indoc;

#[test]
fn storyboard_with_target_and_keyframes() {
    let input = indoc! {r#"
    @Pulse Reverse {
        target Button (#ok) {
            animation Opacity {
                keyframe 0 { 1 }
                keyframe 500 EaseInOut { 0.5 }
            }
        }
    }
    "#};

    let res = Document::expect_valid(input).dump_cst();

    insta::assert_snapshot!(res, @r##"
    Document
      Storyboard
        AtSign "@"
        Identifier "Pulse"
        Identifier "Reverse"
        OpenBrace "{"
        StoryboardTarget
          TargetKeyword "target"
          Identifier "Button"
          SelectorArgument
            OpenParen "("
            Selector
              SelectorPart
                Hash "#"
                Identifier "ok"
            CloseParen ")"
          OpenBrace "{"
          Animation
            AnimationKeyword "animation"
            PropertyName
              Identifier "Opacity"
            OpenBrace "{"
            Keyframe
              KeyframeKeyword "keyframe"
              Number "0"
              OpenBrace "{"
              PropertyValue
                Number "1"
              CloseBrace "}"
            Keyframe
              KeyframeKeyword "keyframe"
              Number "500"
              Identifier "EaseInOut"
              OpenBrace "{"
              PropertyValue
                Number "0.5"
              CloseBrace "}"
            CloseBrace "}"
          CloseBrace "}"
        CloseBrace "}"
      EndOfFile ""
    "##);
}

#[test]
fn bare_storyboard() {
    let res = Document::expect_valid("@Glow { target { } }").dump_cst();

    insta::assert_snapshot!(res, @r#"
    Document
      Storyboard
        AtSign "@"
        Identifier "Glow"
        OpenBrace "{"
        StoryboardTarget
          TargetKeyword "target"
          OpenBrace "{"
          CloseBrace "}"
        CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn items_in_order() {
    let input = indoc! {r#"
    a { }
    @Glow { }
    b { }
    "#};

    let document = Document::expect_valid(input);
    let kinds: Vec<_> = document.syntax().children().map(|node| node.kind()).collect();

    use crate::SyntaxKind::{RuleSet, Storyboard};
    assert_eq!(kinds, vec![RuleSet, Storyboard, RuleSet]);
}
