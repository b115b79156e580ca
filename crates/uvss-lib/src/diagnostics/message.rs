use rowan::{TextRange, TextSize};
use serde::Serialize;

use crate::syntax::{GreenToken, SyntaxKind};

/// Identifies what went wrong. Ordered by pipeline stage: syntax first, then semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticId {
    // Recovered by synthesizing a zero-width token
    MissingToken,
    // Recovered by skipping the token
    UnexpectedToken,

    // Shape rules checked after parsing
    AnimationMissingPropertyName,
    DuplicateAnimation,
}

impl DiagnosticId {
    /// Stable code shown next to the severity.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingToken => "UVSS0001",
            Self::UnexpectedToken => "UVSS0002",
            Self::AnimationMissingPropertyName => "UVSS0003",
            Self::DuplicateAnimation => "UVSS0004",
        }
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DuplicateAnimation => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Base message for this id, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::MissingToken => "token expected",
            Self::UnexpectedToken => "unexpected token",
            Self::AnimationMissingPropertyName => {
                "Animation must specify the name of a property to animate"
            }
            Self::DuplicateAnimation => "property is already animated here",
        }
    }

    pub fn is_syntactic(&self) -> bool {
        matches!(self, Self::MissingToken | Self::UnexpectedToken)
    }
}

/// Totally ordered: `Hidden < Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Hidden,
    Info,
    Warning,
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hidden => write!(f, "hidden"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic as stored on a green element.
///
/// `span` is relative to the start of the owning element's content, i.e. after its
/// leading trivia. Absolute positions only exist once the element is viewed through the
/// red tree (see [`super::Diagnostic`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosticInfo {
    id: DiagnosticId,
    severity: Severity,
    span: TextRange,
    message: String,
}

impl DiagnosticInfo {
    pub fn new(id: DiagnosticId, span: TextRange, message: impl Into<String>) -> Self {
        Self {
            id,
            severity: id.default_severity(),
            span,
            message: message.into(),
        }
    }

    pub fn with_default_message(id: DiagnosticId, span: TextRange) -> Self {
        Self::new(id, span, id.fallback_message())
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// `"{kind} expected"`, anchored as an empty span on the synthesized token.
    pub fn missing_token(kind: SyntaxKind) -> Self {
        Self::new(
            DiagnosticId::MissingToken,
            TextRange::empty(TextSize::from(0)),
            format!("{kind} expected"),
        )
    }

    /// `"unexpected {kind}"`, underlining the skipped token's text but not its trivia.
    pub fn unexpected_token(token: &GreenToken) -> Self {
        Self::new(
            DiagnosticId::UnexpectedToken,
            TextRange::up_to(token.width()),
            format!("unexpected {}", token.kind()),
        )
    }

    /// Anchored on the `animation` keyword.
    pub fn animation_missing_property_name(keyword: &GreenToken) -> Self {
        Self::with_default_message(
            DiagnosticId::AnimationMissingPropertyName,
            TextRange::up_to(keyword.width()),
        )
    }

    /// Anchored on the repeated property name, `name_width` being its content width.
    pub fn duplicate_animation(name: &str, name_width: TextSize) -> Self {
        Self::new(
            DiagnosticId::DuplicateAnimation,
            TextRange::up_to(name_width),
            format!("property `{name}` is already animated here"),
        )
    }

    pub fn id(&self) -> DiagnosticId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn span(&self) -> TextRange {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Appends `info`, allocating the list on first use.
///
/// Error-free elements keep `None` and never allocate.
pub fn report(diagnostics: &mut Option<Vec<DiagnosticInfo>>, info: DiagnosticInfo) {
    diagnostics.get_or_insert_with(Vec::new).push(info);
}
