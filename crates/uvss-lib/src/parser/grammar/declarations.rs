use crate::parser::Parser;
use crate::syntax::token_sets::VALUE_END;
use crate::syntax::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// `PropertyDeclaration := PropertyName ':' PropertyValue '!important'? ';'`
    ///
    /// The `;` may be left out right before the closing `}`.
    pub(super) fn parse_property_declaration(&mut self) {
        self.start_node(SyntaxKind::PropertyDeclaration);
        self.parse_property_name();
        self.expect(SyntaxKind::Colon);
        self.parse_property_value(VALUE_END, true);
        self.eat(SyntaxKind::ImportantKeyword);
        if !self.at(SyntaxKind::CloseBrace) {
            self.expect(SyntaxKind::Semicolon);
        }
        self.finish_node();
    }

    /// `PropertyName := Identifier ('.' Name)?`, e.g. the attached property `Grid.Row`.
    pub(super) fn parse_property_name(&mut self) {
        self.start_node(SyntaxKind::PropertyName);
        self.parse_dotted_name();
        self.finish_node();
    }

    /// `EventName := Identifier ('.' Name)?`
    pub(super) fn parse_event_name(&mut self) {
        self.start_node(SyntaxKind::EventName);
        self.parse_dotted_name();
        self.finish_node();
    }

    fn parse_dotted_name(&mut self) {
        self.expect_name();
        if self.eat(SyntaxKind::Period) {
            self.expect_name();
        }
    }

    /// Raw token run up to one of `end`, kept verbatim. Invalid tokens are skipped and an
    /// empty value becomes a missing `Identifier`. With `in_body`, the value also stops
    /// before anything that starts a sibling item (`trigger`, `animation`) or a new rule
    /// set, so a missing `;` does not swallow the rest of the body.
    pub(super) fn parse_property_value(&mut self, end: TokenSet, in_body: bool) {
        self.start_node(SyntaxKind::PropertyValue);
        let mut empty = true;

        while !self.at_set(end) {
            if in_body && self.at_body_item_start() {
                break;
            }
            if self.current().is_error() {
                self.error_and_bump();
                continue;
            }
            self.bump();
            empty = false;
        }

        if empty {
            self.expect(SyntaxKind::Identifier);
        }
        self.finish_node();
    }

    fn at_body_item_start(&mut self) -> bool {
        matches!(
            self.current(),
            SyntaxKind::TriggerKeyword | SyntaxKind::AnimationKeyword
        ) || self.at_rule_set_start()
    }
}
