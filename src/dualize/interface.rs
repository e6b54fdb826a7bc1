//! Interface Dualizer: structural eligibility, dual-interface naming, and
//! member iteration with the non-fatal partial-success policy.

use crate::core::idents::is_valid_identifier;
use crate::core::{AnnotationArg, FreshNames, InterfaceDecl, Member};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, SourceEdit};
use crate::dualize::member::dualize_member;
use crate::dualize::TriggerArgs;

/// Name of the annotation that triggers dualization on an interface. The
/// generated interface carries the source annotations minus this one.
pub const DUALIZE_ANNOTATION: &str = "Dualize";

/// Dualize an interface declaration. Returns `None` on the terminal
/// structural rejections (inheritance clause, primary associated types,
/// unusable dual name); a rejected *member* only contributes diagnostics
/// and is omitted from the output.
pub fn dualize_interface(
    decl: &InterfaceDecl,
    args: &TriggerArgs,
    sink: &mut DiagnosticSink,
    mut names: Option<&mut (dyn FreshNames + '_)>,
) -> Option<InterfaceDecl> {
    if !decl.inherits.is_empty() {
        sink.push(
            Diagnostic::new(DiagnosticKind::InterfaceInheritance, decl.location.clone())
                .with_fix_it(SourceEdit::RemoveInheritanceClause),
        );
        return None;
    }
    if !decl.primary_associated_types.is_empty() {
        sink.push(
            Diagnostic::new(
                DiagnosticKind::PrimaryAssociatedTypes,
                decl.location.clone(),
            )
            .with_fix_it(SourceEdit::RemovePrimaryAssociatedTypes),
        );
        return None;
    }
    let dual_name = resolve_interface_name(decl, args, sink)?;
    let members = decl
        .members
        .iter()
        .filter_map(|member| {
            dualize_member(member, sink, names.as_deref_mut()).map(Member::Method)
        })
        .collect();
    log::debug!("dualized interface '{}' as '{dual_name}'", decl.name);
    Some(InterfaceDecl {
        name: dual_name,
        inherits: Vec::new(),
        primary_associated_types: Vec::new(),
        members,
        annotations: strip_trigger_annotation(decl, args),
        location: decl.location.clone(),
    })
}

/// Resolve the dual interface name: the triggering annotation's override
/// argument if given, otherwise `"Co" + name`. An unusable override is
/// terminal for the whole pass.
fn resolve_interface_name(
    decl: &InterfaceDecl,
    args: &TriggerArgs,
    sink: &mut DiagnosticSink,
) -> Option<String> {
    match &args.override_name {
        None => Some(format!("Co{}", decl.name)),
        Some(AnnotationArg::StringLiteral(given)) => {
            if is_valid_identifier(given) {
                Some(given.clone())
            } else {
                sink.push(Diagnostic::new(
                    DiagnosticKind::InvalidIdentifier {
                        ident: given.clone(),
                    },
                    args.trigger_location
                        .clone()
                        .unwrap_or_else(|| decl.location.clone()),
                ));
                None
            }
        }
        Some(AnnotationArg::Other(_)) => {
            sink.push(Diagnostic::new(
                DiagnosticKind::GivenNameNotLiteral,
                args.trigger_location
                    .clone()
                    .unwrap_or_else(|| decl.location.clone()),
            ));
            None
        }
    }
}

/// Rebuild the annotation list without the triggering annotation. When the
/// caller identifies the trigger by location, only that node is excluded;
/// otherwise every annotation with the trigger name is.
fn strip_trigger_annotation(decl: &InterfaceDecl, args: &TriggerArgs) -> Vec<crate::core::Annotation> {
    decl.annotations
        .iter()
        .filter(|annotation| {
            if annotation.name != DUALIZE_ANNOTATION {
                return true;
            }
            match &args.trigger_location {
                Some(trigger) => annotation.location != *trigger,
                None => false,
            }
        })
        .cloned()
        .collect()
}
