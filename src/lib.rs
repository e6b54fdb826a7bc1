// Export modules for library usage
pub mod cli;
pub mod core;
pub mod diagnostics;
pub mod dualize;

// Re-export commonly used types
pub use crate::core::{
    Annotation, AnnotationArg, DeclarationTree, EffectMarker, Error, FreshNames, InterfaceDecl,
    Member, MethodDecl, MethodName, ModifierSet, ParamLabel, Parameter, Result, ReturnType,
    SequentialNames, Signature, SourceLocation, TupleElem, TypeRepr,
};

pub use crate::diagnostics::{
    Diagnostic, DiagnosticKind, DiagnosticSink, FixIt, Severity, SourceEdit,
};

pub use crate::dualize::{
    dualize_all, dualize_interface, dualize_member, dualize_signature, try_dualize,
    try_dualize_with, DualizeOutcome, SignatureRejection, TriggerArgs, DUALIZE_ANNOTATION,
    DUAL_NAME_ANNOTATION,
};
