//! Parser self-checks. They catch grammar bugs, never malformed input.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use crate::syntax::SyntaxKind;

/// Lookaheads allowed between two consumed tokens before the parser counts as stuck.
pub(super) const DEBUG_FUEL: u32 = 256;

impl Parser<'_> {
    /// Burns one unit of fuel per lookahead. Only checked in debug builds.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let fuel = self.debug_fuel.get();
        assert!(
            fuel != 0,
            "parser is stuck: {DEBUG_FUEL} lookaheads without consuming a token"
        );
        self.debug_fuel.set(fuel - 1);
    }

    /// Entry points of productions that are dispatched on their first token.
    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let current = self.current();
        assert_eq!(
            current, expected,
            "production entered at {current:?}, which cannot start it"
        );
    }
}
