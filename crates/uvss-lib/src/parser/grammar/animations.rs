use crate::parser::Parser;
use crate::syntax::SyntaxKind;
use crate::syntax::token_sets::{KEYFRAME_VALUE_END, NESTED_RECOVERY};

impl Parser<'_> {
    /// `Animation := 'animation' PropertyName? '{' Keyframe* '}'`
    ///
    /// The property name is optional here; its absence is reported by the semantic pass.
    pub(super) fn parse_animation(&mut self) {
        self.assert_current(SyntaxKind::AnimationKeyword);
        self.start_node(SyntaxKind::Animation);
        self.bump();
        if self.at_name() {
            self.parse_property_name();
        }
        self.expect(SyntaxKind::OpenBrace);

        loop {
            match self.current() {
                SyntaxKind::KeyframeKeyword => self.parse_keyframe(),
                kind if NESTED_RECOVERY.contains(kind) => break,
                _ if self.at_rule_set_start() => break,
                _ => self.error_and_bump(),
            }
        }

        self.expect(SyntaxKind::CloseBrace);
        self.finish_node();
    }

    /// `Keyframe := 'keyframe' Number Identifier? '{' PropertyValue '}'`
    ///
    /// The optional identifier is the easing function.
    fn parse_keyframe(&mut self) {
        self.start_node(SyntaxKind::Keyframe);
        self.bump();
        self.expect(SyntaxKind::Number);
        self.eat(SyntaxKind::Identifier);
        self.expect(SyntaxKind::OpenBrace);
        self.parse_property_value(KEYFRAME_VALUE_END, false);
        self.expect(SyntaxKind::CloseBrace);
        self.finish_node();
    }
}
