//! Grammar productions for UVSS.
//!
//! Every production is a `parse_*` method on [`Parser`] and produces exactly one node.
//! List productions stop without consuming at tokens an enclosing production owns (see
//! the recovery sets in `token_sets`) and skip anything else as an `Error` node.

mod animations;
mod declarations;
mod items;
mod selectors;
mod triggers;

use super::core::Parser;
use crate::syntax::SyntaxKind;
use crate::syntax::token_sets::SELECTOR_PART_FIRST;

impl Parser<'_> {
    /// `Document := (RuleSet | Storyboard | Animation)* EndOfFile`
    pub(crate) fn parse_document(&mut self) {
        self.start_node(SyntaxKind::Document);

        while !self.eof() {
            match self.current() {
                SyntaxKind::AtSign => self.parse_storyboard(),
                SyntaxKind::AnimationKeyword => self.parse_animation(),
                kind if SELECTOR_PART_FIRST.contains(kind) => self.parse_rule_set(),
                _ => self.error_and_bump(),
            }
        }

        self.assert_current(SyntaxKind::EndOfFile);
        self.bump();
        self.finish_node();
    }

    /// An identifier directly followed by `{` starts a new rule set, so the body around
    /// it must be unclosed.
    pub(super) fn at_rule_set_start(&mut self) -> bool {
        self.at(SyntaxKind::Identifier) && self.next_is(SyntaxKind::OpenBrace)
    }
}
