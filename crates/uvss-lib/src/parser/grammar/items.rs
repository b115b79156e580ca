use crate::parser::Parser;
use crate::syntax::SyntaxKind;
use crate::syntax::token_sets::{BODY_RECOVERY, STORYBOARD_RECOVERY};

impl Parser<'_> {
    /// `RuleSet := SelectorList '{' (PropertyDeclaration | Trigger | Animation)* '}'`
    pub(super) fn parse_rule_set(&mut self) {
        self.start_node(SyntaxKind::RuleSet);
        self.parse_selector_list();
        self.expect(SyntaxKind::OpenBrace);

        loop {
            match self.current() {
                SyntaxKind::TriggerKeyword => self.parse_trigger(),
                SyntaxKind::AnimationKeyword => self.parse_animation(),
                kind if BODY_RECOVERY.contains(kind) => break,
                _ if self.at_rule_set_start() => break,
                _ if self.at_name() => self.parse_property_declaration(),
                _ => self.error_and_bump(),
            }
        }

        self.expect(SyntaxKind::CloseBrace);
        self.finish_node();
    }

    /// `Storyboard := '@' Name Identifier? '{' StoryboardTarget* '}'`
    ///
    /// The optional identifier after the name is the loop behaviour.
    pub(super) fn parse_storyboard(&mut self) {
        self.assert_current(SyntaxKind::AtSign);
        self.start_node(SyntaxKind::Storyboard);
        self.bump();
        self.expect_name();
        self.eat(SyntaxKind::Identifier);
        self.expect(SyntaxKind::OpenBrace);

        loop {
            match self.current() {
                SyntaxKind::TargetKeyword => self.parse_storyboard_target(),
                kind if BODY_RECOVERY.contains(kind) => break,
                _ if self.at_rule_set_start() => break,
                _ => self.error_and_bump(),
            }
        }

        self.expect(SyntaxKind::CloseBrace);
        self.finish_node();
    }

    /// `StoryboardTarget := 'target' Identifier? SelectorArgument? '{' Animation* '}'`
    fn parse_storyboard_target(&mut self) {
        self.start_node(SyntaxKind::StoryboardTarget);
        self.bump();
        self.eat(SyntaxKind::Identifier);
        if self.at(SyntaxKind::OpenParen) {
            self.parse_selector_argument();
        }
        self.expect(SyntaxKind::OpenBrace);

        loop {
            match self.current() {
                SyntaxKind::AnimationKeyword => self.parse_animation(),
                kind if STORYBOARD_RECOVERY.contains(kind) => break,
                _ if self.at_rule_set_start() => break,
                _ => self.error_and_bump(),
            }
        }

        self.expect(SyntaxKind::CloseBrace);
        self.finish_node();
    }
}
