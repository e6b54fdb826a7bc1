//! Member Dualizer: eligibility gates, dual-name resolution, and assembly
//! of the dual method declaration.

use crate::core::idents::{initial_cap, is_operator, is_valid_identifier};
use crate::core::{
    Annotation, AnnotationArg, FreshNames, Member, MethodDecl, MethodName,
};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, SourceEdit};
use crate::dualize::signature::{dualize_signature, SignatureRejection};

/// Name of the per-member annotation that overrides the default dual name.
/// It is always stripped from the generated member, present or not.
pub const DUAL_NAME_ANNOTATION: &str = "DualName";

/// Dualize one interface member. Returns `None` when the member is rejected;
/// in that case at least one diagnostic has been pushed onto `sink` and the
/// member is simply omitted from the generated interface.
pub fn dualize_member(
    member: &Member,
    sink: &mut DiagnosticSink,
    names: Option<&mut (dyn FreshNames + '_)>,
) -> Option<MethodDecl> {
    let method = match member {
        Member::Method(method) => method,
        other => {
            sink.push(Diagnostic::new(
                DiagnosticKind::UnsupportedMemberKind,
                other.location().clone(),
            ));
            return None;
        }
    };
    if method.has_body {
        sink.push(Diagnostic::new(
            DiagnosticKind::MemberWithBody,
            method.location.clone(),
        ));
        return None;
    }
    if method.modifiers.is_mutating {
        sink.push(
            Diagnostic::new(DiagnosticKind::MutatingMember, method.location.clone())
                .with_fix_it(SourceEdit::RemoveModifier("mutating".to_string())),
        );
        return None;
    }
    if !method.modifiers.is_static {
        sink.push(non_static_diagnostic(method));
        return None;
    }
    let dual_signature = match dualize_signature(&method.signature, false, names) {
        Ok(signature) => signature,
        Err(rejection) => {
            sink.push(rejection_diagnostic(rejection, method));
            return None;
        }
    };
    let dual_name = resolve_dual_name(method, sink)?;
    log::debug!("dualized member '{}' as '{}'", method.name, dual_name);
    Some(MethodDecl {
        name: dual_name,
        modifiers: method.modifiers.clone(),
        signature: dual_signature,
        has_body: false,
        annotations: strip_override_annotation(&method.annotations),
        location: method.location.clone(),
    })
}

fn non_static_diagnostic(method: &MethodDecl) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::NonStaticMember, method.location.clone())
        .with_fix_it(SourceEdit::MakeStatic)
}

fn rejection_diagnostic(rejection: SignatureRejection, method: &MethodDecl) -> Diagnostic {
    match rejection {
        SignatureRejection::SelfParameter => non_static_diagnostic(method),
        SignatureRejection::EffectSpecifiers => {
            Diagnostic::new(DiagnosticKind::EffectSpecifiers, method.location.clone())
                .with_fix_it(SourceEdit::RemoveEffectSpecifiers)
        }
    }
}

/// Resolve the dual member name: explicit override annotation if present,
/// otherwise `"co" + InitialCap(name)`. The default rule is applied
/// mechanically to operator names too, even though the result is rarely
/// what the author wants.
fn resolve_dual_name(method: &MethodDecl, sink: &mut DiagnosticSink) -> Option<MethodName> {
    let annotation = method
        .annotations
        .iter()
        .find(|a| a.name == DUAL_NAME_ANNOTATION);
    let Some(annotation) = annotation else {
        if let MethodName::Operator(op) = &method.name {
            log::warn!(
                "operator method '{op}' has no dual-name override; applying the default rule"
            );
        }
        return Some(default_dual_name(&method.name));
    };
    match &annotation.argument {
        Some(AnnotationArg::StringLiteral(given)) => {
            if is_valid_identifier(given) {
                Some(MethodName::Ident(given.clone()))
            } else if is_operator(given) {
                Some(MethodName::Operator(given.clone()))
            } else {
                sink.push(
                    Diagnostic::new(
                        DiagnosticKind::InvalidIdentifier {
                            ident: given.clone(),
                        },
                        method.location.clone(),
                    )
                    .with_highlight(annotation.location.clone()),
                );
                None
            }
        }
        Some(AnnotationArg::Other(_)) | None => {
            sink.push(
                Diagnostic::new(DiagnosticKind::GivenNameNotLiteral, method.location.clone())
                    .with_highlight(annotation.location.clone()),
            );
            None
        }
    }
}

fn default_dual_name(name: &MethodName) -> MethodName {
    MethodName::Ident(format!("co{}", initial_cap(name.as_str())))
}

/// Structural reconstruction of the annotation list without the override
/// annotation.
fn strip_override_annotation(annotations: &[Annotation]) -> Vec<Annotation> {
    annotations
        .iter()
        .filter(|a| a.name != DUAL_NAME_ANNOTATION)
        .cloned()
        .collect()
}
