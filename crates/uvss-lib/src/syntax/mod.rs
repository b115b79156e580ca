//! Lossless syntax tree: kinds, trivia, the immutable green layer and its red view.

pub mod kind;
mod green;
mod node;
mod printer;
mod trivia;


pub use green::{
    GreenElement, GreenNode, GreenNodeBuilder, GreenToken, element_full_width,
};
pub use kind::{SyntaxKind, TokenSet, token_sets};
pub use node::{
    ChildrenWithTokens, Preorder, SyntaxElement, SyntaxNode, SyntaxToken, element_full_span,
    element_kind, element_span,
};
pub use printer::TreePrinter;
pub use trivia::{Trivia, TriviaKind};
