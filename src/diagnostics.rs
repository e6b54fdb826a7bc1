//! Closed catalog of diagnostics the dualization pass can emit.
//!
//! Each kind is a variant of [`DiagnosticKind`] carrying its structured
//! payload, so the host can match exhaustively. Fix-its describe mechanical
//! edits to the *source* declaration; they are suggestions and are never
//! applied by the engine.

use crate::core::SourceLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

/// Every condition the pass can diagnose. Interface-level structural kinds
/// (`NotAnInterface`, `InterfaceInheritance`, `PrimaryAssociatedTypes`) are
/// terminal; member-level kinds only drop the offending member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    NotAnInterface,
    InterfaceInheritance,
    PrimaryAssociatedTypes,
    UnsupportedMemberKind,
    MemberWithBody,
    MutatingMember,
    NonStaticMember,
    EffectSpecifiers,
    InvalidIdentifier { ident: String },
    GivenNameNotLiteral,
}

impl DiagnosticKind {
    /// Stable machine-readable code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::NotAnInterface => "NotAnInterface",
            DiagnosticKind::InterfaceInheritance => "InterfaceInheritance",
            DiagnosticKind::PrimaryAssociatedTypes => "PrimaryAssociatedTypes",
            DiagnosticKind::UnsupportedMemberKind => "UnsupportedMemberKind",
            DiagnosticKind::MemberWithBody => "MemberWithBody",
            DiagnosticKind::MutatingMember => "MutatingMember",
            DiagnosticKind::NonStaticMember => "NonStaticMember",
            DiagnosticKind::EffectSpecifiers => "EffectSpecifiers",
            DiagnosticKind::InvalidIdentifier { .. } => "InvalidIdentifier",
            DiagnosticKind::GivenNameNotLiteral => "GivenNameNotLiteral",
        }
    }

    /// Human-readable message for this kind
    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::NotAnInterface => {
                "Dualization can only be applied to interface declarations".to_string()
            }
            DiagnosticKind::InterfaceInheritance => {
                "Interfaces with inheritance clauses are not yet supported".to_string()
            }
            DiagnosticKind::PrimaryAssociatedTypes => {
                "Interfaces with primary associated types are not yet supported".to_string()
            }
            DiagnosticKind::UnsupportedMemberKind => {
                "This kind of interface member is not yet supported".to_string()
            }
            DiagnosticKind::MemberWithBody => {
                "Interface methods with bodies cannot be dualized".to_string()
            }
            DiagnosticKind::MutatingMember => {
                "Mutating interface members are not yet supported".to_string()
            }
            DiagnosticKind::NonStaticMember => {
                "Instance-bound interface members are not yet supported".to_string()
            }
            DiagnosticKind::EffectSpecifiers => {
                "Interface members with effect specifiers are not yet supported".to_string()
            }
            DiagnosticKind::InvalidIdentifier { ident } => {
                format!("'{ident}' is not a valid identifier")
            }
            DiagnosticKind::GivenNameNotLiteral => {
                "The dual name must be given as a single string literal".to_string()
            }
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

/// A mechanically-applicable edit to the source declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceEdit {
    RemoveInheritanceClause,
    RemovePrimaryAssociatedTypes,
    RemoveModifier(String),
    /// Add `static` and take the receiver as an explicit leading self-typed
    /// parameter. The engine suggests this shape but does not dualize it.
    MakeStatic,
    RemoveEffectSpecifiers,
}

impl SourceEdit {
    pub fn message(&self) -> String {
        match self {
            SourceEdit::RemoveInheritanceClause => "Remove the inheritance clause".to_string(),
            SourceEdit::RemovePrimaryAssociatedTypes => {
                "Remove the primary associated types".to_string()
            }
            SourceEdit::RemoveModifier(modifier) => format!("Remove the '{modifier}' modifier"),
            SourceEdit::MakeStatic => {
                "Make the member static and take the receiver as an explicit parameter".to_string()
            }
            SourceEdit::RemoveEffectSpecifiers => "Remove the effect specifiers".to_string(),
        }
    }
}

/// A suggested, non-applied source edit attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixIt {
    pub message: String,
    pub edit: SourceEdit,
}

impl FixIt {
    pub fn new(edit: SourceEdit) -> Self {
        Self {
            message: edit.message(),
            edit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: SourceLocation,
    pub highlight: Option<SourceLocation>,
    pub fix_it: Option<FixIt>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: SourceLocation) -> Self {
        Self {
            kind,
            location,
            highlight: None,
            fix_it: None,
        }
    }

    pub fn with_highlight(mut self, highlight: SourceLocation) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn with_fix_it(mut self, edit: SourceEdit) -> Self {
        self.fix_it = Some(FixIt::new(edit));
        self
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Accumulates diagnostics for one invocation. Rejections are values; this
/// sink is the side channel that travels alongside them.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!(
            "{} at {}:{}:{}: {}",
            diagnostic.kind.code(),
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
            diagnostic.message()
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn loc() -> SourceLocation {
        SourceLocation::new(PathBuf::from("test.src"), 4, 5)
    }

    #[test]
    fn invalid_identifier_message_names_the_offender() {
        let kind = DiagnosticKind::InvalidIdentifier {
            ident: "co add".to_string(),
        };
        assert!(kind.message().contains("co add"));
        assert_eq!(kind.code(), "InvalidIdentifier");
    }

    #[test]
    fn fix_it_message_derives_from_edit() {
        let fix = FixIt::new(SourceEdit::RemoveModifier("mutating".to_string()));
        assert_eq!(fix.message, "Remove the 'mutating' modifier");
    }

    #[test]
    fn sink_accumulates_in_order() {
        let mut sink = DiagnosticSink::new();
        sink.push(Diagnostic::new(DiagnosticKind::NonStaticMember, loc()));
        sink.push(Diagnostic::new(DiagnosticKind::MutatingMember, loc()));
        let kinds: Vec<_> = sink.iter().map(|d| d.kind.code()).collect();
        assert_eq!(kinds, vec!["NonStaticMember", "MutatingMember"]);
    }

    #[test]
    fn all_kinds_are_errors() {
        assert_eq!(DiagnosticKind::NotAnInterface.severity(), Severity::Error);
        assert_eq!(DiagnosticKind::GivenNameNotLiteral.severity(), Severity::Error);
    }
}
