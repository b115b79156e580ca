mod collection;
mod message;
mod printer;


use rowan::{TextRange, TextSize};
use serde::ser::SerializeStruct;

pub use collection::Diagnostics;
pub use message::{DiagnosticId, DiagnosticInfo, Severity, report};
pub use printer::DiagnosticsPrinter;

use crate::syntax::{SyntaxElement, SyntaxKind, element_kind};

/// A diagnostic resolved against the red tree: it knows its owning element and its
/// absolute location in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    info: DiagnosticInfo,
    element: SyntaxElement,
    location: TextRange,
}

impl Diagnostic {
    /// `anchor` is where the element's content starts (position plus leading trivia).
    pub(crate) fn resolve(info: DiagnosticInfo, element: SyntaxElement, anchor: TextSize) -> Self {
        let location = info.span() + anchor;
        Self {
            info,
            element,
            location,
        }
    }

    pub fn info(&self) -> &DiagnosticInfo {
        &self.info
    }

    pub fn id(&self) -> DiagnosticId {
        self.info.id()
    }

    pub fn code(&self) -> &'static str {
        self.info.id().code()
    }

    pub fn severity(&self) -> Severity {
        self.info.severity()
    }

    pub fn message(&self) -> &str {
        self.info.message()
    }

    /// Absolute span in the source text.
    pub fn location(&self) -> TextRange {
        self.location
    }

    /// The node or token the diagnostic is attached to.
    pub fn element(&self) -> &SyntaxElement {
        &self.element
    }

    pub fn element_kind(&self) -> SyntaxKind {
        element_kind(&self.element)
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] at {}..{}: {}",
            self.severity(),
            self.code(),
            u32::from(self.location.start()),
            u32::from(self.location.end()),
            self.message()
        )
    }
}

impl serde::Serialize for Diagnostic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Diagnostic", 6)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("severity", &self.severity())?;
        state.serialize_field("start", &u32::from(self.location.start()))?;
        state.serialize_field("end", &u32::from(self.location.end()))?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
