//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors for the style runtime.
//! Cast is infallible for the correct `SyntaxKind`; accessors return `None` for parts that
//! are absent or were synthesized during recovery.

use rowan::NodeOrToken;

use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Document);
ast_node!(RuleSet, RuleSet);
ast_node!(SelectorList, SelectorList);
ast_node!(Selector, Selector);
ast_node!(SelectorPart, SelectorPart);
ast_node!(PseudoClass, PseudoClass);
ast_node!(PropertyDeclaration, PropertyDeclaration);
ast_node!(PropertyName, PropertyName);
ast_node!(PropertyValue, PropertyValue);
ast_node!(Trigger, Trigger);
ast_node!(TriggerCondition, TriggerCondition);
ast_node!(SetAction, SetAction);
ast_node!(PlayStoryboardAction, PlayStoryboardAction);
ast_node!(PlaySfxAction, PlaySfxAction);
ast_node!(Storyboard, Storyboard);
ast_node!(StoryboardTarget, StoryboardTarget);
ast_node!(Animation, Animation);
ast_node!(Keyframe, Keyframe);

/// Top-level construct of a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    RuleSet(RuleSet),
    Storyboard(Storyboard),
    Animation(Animation),
}

impl Item {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::RuleSet => RuleSet::cast(node).map(Item::RuleSet),
            SyntaxKind::Storyboard => Storyboard::cast(node).map(Item::Storyboard),
            SyntaxKind::Animation => Animation::cast(node).map(Item::Animation),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Item::RuleSet(n) => n.as_cst(),
            Item::Storyboard(n) => n.as_cst(),
            Item::Animation(n) => n.as_cst(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TriggerAction {
    Set(SetAction),
    PlayStoryboard(PlayStoryboardAction),
    PlaySfx(PlaySfxAction),
}

impl TriggerAction {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SetAction => SetAction::cast(node).map(TriggerAction::Set),
            SyntaxKind::PlayStoryboardAction => {
                PlayStoryboardAction::cast(node).map(TriggerAction::PlayStoryboard)
            }
            SyntaxKind::PlaySfxAction => PlaySfxAction::cast(node).map(TriggerAction::PlaySfx),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            TriggerAction::Set(n) => n.as_cst(),
            TriggerAction::PlayStoryboard(n) => n.as_cst(),
            TriggerAction::PlaySfx(n) => n.as_cst(),
        }
    }
}

/// How a selector part relates to the part before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace: any descendant.
    Descendant,
    /// `>`: direct visual child.
    Child,
    /// `>?`: direct logical child.
    LogicalChild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Property,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl ComparisonOperator {
    fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::Equals => Some(Self::Equals),
            SyntaxKind::NotEquals => Some(Self::NotEquals),
            SyntaxKind::LessThan => Some(Self::LessThan),
            SyntaxKind::LessThanEquals => Some(Self::LessThanOrEqual),
            SyntaxKind::GreaterThan => Some(Self::GreaterThan),
            SyntaxKind::GreaterThanEquals => Some(Self::GreaterThanOrEqual),
            _ => None,
        }
    }
}

/// Direct child token of `kind`, unless it was synthesized.
fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(NodeOrToken::into_token)
        .find(|t| t.kind() == kind && !t.is_missing())
}

fn token_text(node: &SyntaxNode, kind: SyntaxKind) -> Option<String> {
    token(node, kind).map(|t| t.text().to_owned())
}

fn child<N>(node: &SyntaxNode, cast: fn(SyntaxNode) -> Option<N>) -> Option<N> {
    node.children().find_map(cast)
}

fn children<N>(node: &SyntaxNode, cast: fn(SyntaxNode) -> Option<N>) -> impl Iterator<Item = N> + use<N> {
    node.children().filter_map(cast)
}

/// Selector wrapped in a `SelectorArgument`, as in `set (#label) ...`.
fn selector_argument(node: &SyntaxNode) -> Option<Selector> {
    node.first_child_by_kind(SyntaxKind::SelectorArgument)
        .and_then(|arg| child(&arg, Selector::cast))
}

impl Root {
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        children(&self.0, Item::cast)
    }

    pub fn rule_sets(&self) -> impl Iterator<Item = RuleSet> + '_ {
        children(&self.0, RuleSet::cast)
    }

    pub fn storyboards(&self) -> impl Iterator<Item = Storyboard> + '_ {
        children(&self.0, Storyboard::cast)
    }

    pub fn animations(&self) -> impl Iterator<Item = Animation> + '_ {
        children(&self.0, Animation::cast)
    }
}

impl RuleSet {
    pub fn selector_list(&self) -> Option<SelectorList> {
        child(&self.0, SelectorList::cast)
    }

    pub fn selectors(&self) -> impl Iterator<Item = Selector> + '_ {
        self.selector_list()
            .into_iter()
            .flat_map(|list| list.selectors().collect::<Vec<_>>())
    }

    pub fn declarations(&self) -> impl Iterator<Item = PropertyDeclaration> + '_ {
        children(&self.0, PropertyDeclaration::cast)
    }

    pub fn triggers(&self) -> impl Iterator<Item = Trigger> + '_ {
        children(&self.0, Trigger::cast)
    }

    pub fn animations(&self) -> impl Iterator<Item = Animation> + '_ {
        children(&self.0, Animation::cast)
    }
}

impl SelectorList {
    pub fn selectors(&self) -> impl Iterator<Item = Selector> + '_ {
        children(&self.0, Selector::cast)
    }
}

impl Selector {
    pub fn parts(&self) -> impl Iterator<Item = SelectorPart> + '_ {
        children(&self.0, SelectorPart::cast)
    }

    /// Parts paired with the combinator that links each to the previous part.
    /// The first part has none.
    pub fn steps(&self) -> Vec<(Option<Combinator>, SelectorPart)> {
        let mut steps = Vec::new();
        let mut pending = None;
        for element in self.0.children_with_tokens() {
            match element {
                NodeOrToken::Token(t) if t.kind() == SyntaxKind::GreaterThan => {
                    pending = Some(Combinator::Child);
                }
                NodeOrToken::Token(t) if t.kind() == SyntaxKind::GreaterThanQuestion => {
                    pending = Some(Combinator::LogicalChild);
                }
                NodeOrToken::Node(node) => {
                    let Some(part) = SelectorPart::cast(node) else {
                        continue;
                    };
                    let combinator = if steps.is_empty() {
                        None
                    } else {
                        Some(pending.take().unwrap_or(Combinator::Descendant))
                    };
                    steps.push((combinator, part));
                }
                NodeOrToken::Token(_) => {}
            }
        }
        steps
    }
}

impl SelectorPart {
    /// Element type name, or `*` for the universal selector.
    pub fn element_type(&self) -> Option<String> {
        self.0
            .children_with_tokens()
            .next()
            .and_then(NodeOrToken::into_token)
            .filter(|t| {
                !t.is_missing() && matches!(t.kind(), SyntaxKind::Identifier | SyntaxKind::Asterisk)
            })
            .map(|t| t.text().to_owned())
    }

    pub fn is_universal(&self) -> bool {
        self.element_type().as_deref() == Some("*")
    }

    /// Name after `#`.
    pub fn id(&self) -> Option<String> {
        self.qualified_names(SyntaxKind::Hash).into_iter().next()
    }

    /// Names after each `.`.
    pub fn classes(&self) -> Vec<String> {
        self.qualified_names(SyntaxKind::Period)
    }

    pub fn pseudo_class(&self) -> Option<PseudoClass> {
        child(&self.0, PseudoClass::cast)
    }

    fn qualified_names(&self, marker: SyntaxKind) -> Vec<String> {
        let tokens: Vec<SyntaxToken> = self
            .0
            .children_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .collect();
        tokens
            .windows(2)
            .filter(|pair| pair[0].kind() == marker && !pair[1].is_missing())
            .map(|pair| pair[1].text().to_owned())
            .collect()
    }
}

impl PseudoClass {
    pub fn name(&self) -> Option<String> {
        token_text(&self.0, SyntaxKind::Identifier)
    }
}

impl PropertyDeclaration {
    pub fn name(&self) -> Option<PropertyName> {
        child(&self.0, PropertyName::cast)
    }

    pub fn value(&self) -> Option<PropertyValue> {
        child(&self.0, PropertyValue::cast)
    }

    pub fn is_important(&self) -> bool {
        token(&self.0, SyntaxKind::ImportantKeyword).is_some()
    }
}

impl PropertyName {
    fn identifiers(&self) -> Vec<Option<String>> {
        self.0
            .children_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .filter(|t| t.kind() == SyntaxKind::Identifier)
            .map(|t| (!t.is_missing()).then(|| t.text().to_owned()))
            .collect()
    }

    /// Owner type of an attached property: `Grid` in `Grid.Row`.
    pub fn qualifier(&self) -> Option<String> {
        match self.identifiers().as_slice() {
            [owner, _] => owner.clone(),
            _ => None,
        }
    }

    /// Property name proper: `Row` in `Grid.Row`, `Foreground` in `Foreground`.
    pub fn property(&self) -> Option<String> {
        self.identifiers().pop().flatten()
    }

    /// Full dotted name without trivia.
    pub fn text(&self) -> String {
        self.0
            .tokens()
            .filter(|t| !t.is_missing())
            .map(|t| t.text().to_owned())
            .collect()
    }
}

impl PropertyValue {
    /// Source text of the value, inner trivia kept, outer trivia dropped.
    pub fn text(&self) -> String {
        self.0.text().trim().to_owned()
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_missing()
    }
}

impl Trigger {
    pub fn kind(&self) -> Option<TriggerKind> {
        if token(&self.0, SyntaxKind::PropertyKeyword).is_some() {
            Some(TriggerKind::Property)
        } else if token(&self.0, SyntaxKind::EventKeyword).is_some() {
            Some(TriggerKind::Event)
        } else {
            None
        }
    }

    pub fn conditions(&self) -> impl Iterator<Item = TriggerCondition> + '_ {
        children(&self.0, TriggerCondition::cast)
    }

    /// Dotted event name of an event trigger.
    pub fn event_name(&self) -> Option<String> {
        let name = self.0.first_child_by_kind(SyntaxKind::EventName)?;
        let text: String = name
            .tokens()
            .filter(|t| !t.is_missing())
            .map(|t| t.text().to_owned())
            .collect();
        (!text.is_empty()).then_some(text)
    }

    pub fn is_important(&self) -> bool {
        token(&self.0, SyntaxKind::ImportantKeyword).is_some()
    }

    pub fn actions(&self) -> impl Iterator<Item = TriggerAction> + '_ {
        children(&self.0, TriggerAction::cast)
    }
}

impl TriggerCondition {
    pub fn property(&self) -> Option<PropertyName> {
        child(&self.0, PropertyName::cast)
    }

    pub fn operator(&self) -> Option<ComparisonOperator> {
        self.0
            .children_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .filter(|t| !t.is_missing())
            .find_map(|t| ComparisonOperator::from_kind(t.kind()))
    }

    pub fn value(&self) -> Option<PropertyValue> {
        child(&self.0, PropertyValue::cast)
    }
}

impl SetAction {
    /// Target selector; `None` means the element the trigger belongs to.
    pub fn selector(&self) -> Option<Selector> {
        selector_argument(&self.0)
    }

    pub fn property(&self) -> Option<PropertyName> {
        child(&self.0, PropertyName::cast)
    }

    pub fn value(&self) -> Option<PropertyValue> {
        child(&self.0, PropertyValue::cast)
    }
}

impl PlayStoryboardAction {
    pub fn selector(&self) -> Option<Selector> {
        selector_argument(&self.0)
    }

    /// Storyboard name.
    pub fn value(&self) -> Option<PropertyValue> {
        child(&self.0, PropertyValue::cast)
    }
}

impl PlaySfxAction {
    /// Sound effect asset.
    pub fn value(&self) -> Option<PropertyValue> {
        child(&self.0, PropertyValue::cast)
    }
}

impl Storyboard {
    pub fn name(&self) -> Option<String> {
        self.identifiers().into_iter().next()
    }

    /// Loop behaviour written after the name, e.g. `@Pulse Reverse { ... }`.
    pub fn loop_behavior(&self) -> Option<String> {
        self.identifiers().into_iter().nth(1)
    }

    pub fn targets(&self) -> impl Iterator<Item = StoryboardTarget> + '_ {
        children(&self.0, StoryboardTarget::cast)
    }

    fn identifiers(&self) -> Vec<String> {
        self.0
            .children_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .filter(|t| t.kind() == SyntaxKind::Identifier && !t.is_missing())
            .map(|t| t.text().to_owned())
            .collect()
    }
}

impl StoryboardTarget {
    pub fn element_type(&self) -> Option<String> {
        token_text(&self.0, SyntaxKind::Identifier)
    }

    pub fn selector(&self) -> Option<Selector> {
        selector_argument(&self.0)
    }

    pub fn animations(&self) -> impl Iterator<Item = Animation> + '_ {
        children(&self.0, Animation::cast)
    }
}

impl Animation {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::AnimationKeyword)
    }

    /// The animated property; required, see the semantic pass.
    pub fn property(&self) -> Option<PropertyName> {
        child(&self.0, PropertyName::cast)
    }

    pub fn keyframes(&self) -> impl Iterator<Item = Keyframe> + '_ {
        children(&self.0, Keyframe::cast)
    }
}

impl Keyframe {
    /// Time in milliseconds, as written.
    pub fn time(&self) -> Option<String> {
        token_text(&self.0, SyntaxKind::Number)
    }

    pub fn easing(&self) -> Option<String> {
        token_text(&self.0, SyntaxKind::Identifier)
    }

    pub fn value(&self) -> Option<PropertyValue> {
        child(&self.0, PropertyValue::cast)
    }
}
