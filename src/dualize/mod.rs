//! Entry points of the dualization pass.
//!
//! One invocation takes an annotated declaration plus the triggering
//! annotation's arguments and produces either a generated dual interface or
//! nothing, always together with the diagnostics accumulated along the way.
//! Invocations are pure and share nothing, so batches parallelize freely.

pub mod interface;
pub mod member;
pub mod signature;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{
    AnnotationArg, DeclarationTree, FreshNames, InterfaceDecl, Result, SourceLocation,
};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};

pub use interface::{dualize_interface, DUALIZE_ANNOTATION};
pub use member::{dualize_member, DUAL_NAME_ANNOTATION};
pub use signature::{dualize_signature, SignatureRejection};

/// Arguments extracted from the triggering annotation by the host's front
/// end. `trigger_location` identifies the annotation node itself so it can
/// be excluded from the generated interface's attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerArgs {
    pub override_name: Option<AnnotationArg>,
    pub trigger_location: Option<SourceLocation>,
}

impl TriggerArgs {
    pub fn with_override(name: impl Into<String>) -> Self {
        Self {
            override_name: Some(AnnotationArg::StringLiteral(name.into())),
            trigger_location: None,
        }
    }
}

/// Result of one dualization invocation. `generated` is `None` on terminal
/// rejection; `diagnostics` may be non-empty either way, since per-member
/// rejections do not abort the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualizeOutcome {
    pub generated: Option<InterfaceDecl>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Dualize one annotated declaration. Dual parameters synthesized from
/// return-position tuple elements are left without internal names; use
/// [`try_dualize_with`] to have a host-supplied generator name them.
pub fn try_dualize(decl: &DeclarationTree, args: &TriggerArgs) -> Result<DualizeOutcome> {
    run(decl, args, None)
}

/// Like [`try_dualize`], with a host-supplied source of scope-unique
/// internal names for synthesized parameters.
pub fn try_dualize_with(
    decl: &DeclarationTree,
    args: &TriggerArgs,
    names: &mut dyn FreshNames,
) -> Result<DualizeOutcome> {
    run(decl, args, Some(names))
}

fn run(
    decl: &DeclarationTree,
    args: &TriggerArgs,
    names: Option<&mut (dyn FreshNames + '_)>,
) -> Result<DualizeOutcome> {
    decl.validate()?;
    let mut sink = DiagnosticSink::new();
    let generated = match decl {
        DeclarationTree::Interface(decl) => interface::dualize_interface(decl, args, &mut sink, names),
        other => {
            sink.push(Diagnostic::new(
                DiagnosticKind::NotAnInterface,
                other.location().clone(),
            ));
            None
        }
    };
    Ok(DualizeOutcome {
        generated,
        diagnostics: sink.into_diagnostics(),
    })
}

/// Dualize many independent annotated declarations. Each invocation reads
/// only its own tree, so the batch runs in parallel with no coordination.
pub fn dualize_all(batch: &[(DeclarationTree, TriggerArgs)]) -> Result<Vec<DualizeOutcome>> {
    batch
        .par_iter()
        .map(|(decl, args)| try_dualize(decl, args))
        .collect()
}
