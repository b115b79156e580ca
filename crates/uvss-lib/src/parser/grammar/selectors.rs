//! Selectors: `button#ok.primary:hover > label, *`.
//!
//! Parts are made of adjacent tokens; trivia between two tokens ends the current part,
//! which is how the descendant combinator is spelled.

use crate::parser::Parser;
use crate::syntax::SyntaxKind;
use crate::syntax::token_sets::{COMBINATORS, SELECTOR_PART_FIRST};

impl Parser<'_> {
    /// `SelectorList := Selector (',' Selector)*`
    pub(super) fn parse_selector_list(&mut self) {
        self.start_node(SyntaxKind::SelectorList);
        self.parse_selector();
        while self.eat(SyntaxKind::Comma) {
            self.parse_selector();
        }
        self.finish_node();
    }

    /// `Selector := SelectorPart (('>' | '>?')? SelectorPart)*`
    pub(super) fn parse_selector(&mut self) {
        self.start_node(SyntaxKind::Selector);
        self.parse_selector_part();
        loop {
            if self.at_set(COMBINATORS) {
                self.bump();
                self.parse_selector_part();
            } else if self.at_selector_part_start() {
                self.parse_selector_part();
            } else {
                break;
            }
        }
        self.finish_node();
    }

    /// `SelectorArgument := '(' Selector ')'`
    pub(super) fn parse_selector_argument(&mut self) {
        self.assert_current(SyntaxKind::OpenParen);
        self.start_node(SyntaxKind::SelectorArgument);
        self.bump();
        self.parse_selector();
        self.expect(SyntaxKind::CloseParen);
        self.finish_node();
    }

    fn at_selector_part_start(&mut self) -> bool {
        self.at_set(SELECTOR_PART_FIRST) || self.current().is_keyword()
    }

    /// `SelectorPart := (Identifier | '*')? (('#' | '.') Name)* PseudoClass?`
    ///
    /// A part that starts with nothing usable becomes a missing `Identifier`.
    fn parse_selector_part(&mut self) {
        self.start_node(SyntaxKind::SelectorPart);
        let start = self.offset();

        match self.current() {
            SyntaxKind::Identifier | SyntaxKind::Asterisk => self.bump(),
            kind if kind.is_keyword() => self.bump_remap(SyntaxKind::Identifier),
            _ => {}
        }

        loop {
            if self.offset() != start && self.gap_before_current() {
                break;
            }
            match self.current() {
                SyntaxKind::Hash | SyntaxKind::Period => {
                    self.bump();
                    self.expect_name();
                }
                SyntaxKind::Colon => {
                    self.parse_pseudo_class();
                    break;
                }
                _ => break,
            }
        }

        if self.offset() == start {
            self.expect(SyntaxKind::Identifier);
        }
        self.finish_node();
    }

    /// `PseudoClass := ':' Name`
    fn parse_pseudo_class(&mut self) {
        self.start_node(SyntaxKind::PseudoClass);
        self.bump();
        self.expect_name();
        self.finish_node();
    }
}
