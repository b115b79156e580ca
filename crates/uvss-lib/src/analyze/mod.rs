//! Semantic pass: shape rules the grammar cannot express.
//!
//! A read-only post-order walk. It never touches the tree and returns its diagnostics
//! instead, so running it again yields the same list.
//!
//! Rules:
//! - every `Animation` names the property it animates
//! - a property is animated at most once per rule set, storyboard target or document


use indexmap::IndexMap;
use rowan::NodeOrToken;

use crate::diagnostics::{Diagnostic, DiagnosticInfo};
use crate::syntax::{SyntaxKind, SyntaxNode};

pub fn analyze(root: &SyntaxNode) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    visit(root, &mut out);
    tracing::debug!(count = out.len(), "semantic pass finished");
    out
}

fn visit(node: &SyntaxNode, out: &mut Vec<Diagnostic>) {
    for child in node.children() {
        visit(&child, out);
    }

    match node.kind() {
        SyntaxKind::Animation => check_animation_name(node, out),
        SyntaxKind::Document | SyntaxKind::RuleSet | SyntaxKind::StoryboardTarget => {
            check_duplicate_animations(node, out)
        }
        _ => {}
    }
}

fn check_animation_name(animation: &SyntaxNode, out: &mut Vec<Diagnostic>) {
    if animation_name(animation).is_some() {
        return;
    }
    let Some(keyword) = animation.first_token_by_kind(SyntaxKind::AnimationKeyword) else {
        return;
    };
    let info = DiagnosticInfo::animation_missing_property_name(keyword.green());
    let anchor = keyword.span().start();
    out.push(Diagnostic::resolve(info, NodeOrToken::Token(keyword), anchor));
}

fn check_duplicate_animations(container: &SyntaxNode, out: &mut Vec<Diagnostic>) {
    let mut by_name: IndexMap<String, Vec<SyntaxNode>> = IndexMap::new();
    for animation in container
        .children()
        .filter(|child| child.kind() == SyntaxKind::Animation)
    {
        if let Some(name) = animation_name(&animation) {
            by_name.entry(name_text(&name)).or_default().push(name);
        }
    }

    for (text, names) in &by_name {
        for name in names.iter().skip(1) {
            let info = DiagnosticInfo::duplicate_animation(text, name.width());
            let anchor = name.span().start();
            out.push(Diagnostic::resolve(info, NodeOrToken::Node(name.clone()), anchor));
        }
    }
}

fn animation_name(animation: &SyntaxNode) -> Option<SyntaxNode> {
    animation
        .first_child_by_kind(SyntaxKind::PropertyName)
        .filter(|name| !name.is_missing())
}

/// Dotted name without trivia, e.g. `Grid.Row`.
fn name_text(name: &SyntaxNode) -> String {
    name.tokens()
        .filter(|token| !token.is_missing())
        .map(|token| token.text().to_owned())
        .collect()
}
