//! Triggers and their actions.
//!
//! ```text
//! trigger property IsMouseOver = true, IsEnabled = true !important {
//!     set (#label) Foreground: Red;
//!     play-storyboard: Glow;
//!     play-sfx: Click;
//! }
//! trigger event Click { play-sfx: Click; }
//! ```

use crate::parser::Parser;
use crate::syntax::SyntaxKind;
use crate::syntax::token_sets::{
    COMPARISON_OPERATORS, CONDITION_VALUE_END, NESTED_RECOVERY, VALUE_END,
};

impl Parser<'_> {
    pub(super) fn parse_trigger(&mut self) {
        self.assert_current(SyntaxKind::TriggerKeyword);
        self.start_node(SyntaxKind::Trigger);
        self.bump();

        match self.current() {
            SyntaxKind::PropertyKeyword => {
                self.bump();
                self.parse_trigger_condition();
                while self.eat(SyntaxKind::Comma) {
                    self.parse_trigger_condition();
                }
            }
            SyntaxKind::EventKeyword => {
                self.bump();
                self.parse_event_name();
            }
            _ => {
                self.expect(SyntaxKind::PropertyKeyword);
            }
        }

        self.eat(SyntaxKind::ImportantKeyword);
        self.expect(SyntaxKind::OpenBrace);

        loop {
            match self.current() {
                SyntaxKind::SetKeyword => self.parse_set_action(),
                SyntaxKind::PlayStoryboardKeyword => self.parse_play_storyboard_action(),
                SyntaxKind::PlaySfxKeyword => self.parse_play_sfx_action(),
                kind if NESTED_RECOVERY.contains(kind) => break,
                _ if self.at_rule_set_start() => break,
                _ => self.error_and_bump(),
            }
        }

        self.expect(SyntaxKind::CloseBrace);
        self.finish_node();
    }

    /// `TriggerCondition := PropertyName ('=' | '<>' | '<' | '<=' | '>' | '>=') PropertyValue`
    fn parse_trigger_condition(&mut self) {
        self.start_node(SyntaxKind::TriggerCondition);
        self.parse_property_name();
        if self.at_set(COMPARISON_OPERATORS) {
            self.bump();
        } else {
            self.expect(SyntaxKind::Equals);
        }
        self.parse_property_value(CONDITION_VALUE_END, false);
        self.finish_node();
    }

    /// `SetAction := 'set' SelectorArgument? PropertyName ':' PropertyValue ';'`
    fn parse_set_action(&mut self) {
        self.start_node(SyntaxKind::SetAction);
        self.bump();
        if self.at(SyntaxKind::OpenParen) {
            self.parse_selector_argument();
        }
        self.parse_property_name();
        self.parse_action_tail();
        self.finish_node();
    }

    /// `PlayStoryboardAction := 'play-storyboard' SelectorArgument? ':' PropertyValue ';'`
    fn parse_play_storyboard_action(&mut self) {
        self.start_node(SyntaxKind::PlayStoryboardAction);
        self.bump();
        if self.at(SyntaxKind::OpenParen) {
            self.parse_selector_argument();
        }
        self.parse_action_tail();
        self.finish_node();
    }

    /// `PlaySfxAction := 'play-sfx' ':' PropertyValue ';'`
    fn parse_play_sfx_action(&mut self) {
        self.start_node(SyntaxKind::PlaySfxAction);
        self.bump();
        self.parse_action_tail();
        self.finish_node();
    }

    /// `':' PropertyValue ';'`
    fn parse_action_tail(&mut self) {
        self.expect(SyntaxKind::Colon);
        self.parse_property_value(VALUE_END, true);
        self.expect(SyntaxKind::Semicolon);
    }
}
