//! Signature Dualizer: pure mapping from a method signature to its dual.
//!
//! The dual swaps the two sides of a signature. The return shape (absent
//! return modeled as the empty tuple) becomes the parameter list, and the
//! parameter list becomes the return shape. On the subset of signatures this
//! function accepts, applying it twice reproduces the original up to one
//! deliberate asymmetry: an absent return comes back as an explicit empty
//! tuple, because at zero arity omission and `()` mean different things on
//! the two sides of the mapping.

use crate::core::{
    FreshNames, ParamLabel, Parameter, ReturnType, Signature, TupleElem, TypeRepr,
};

/// Why a signature is outside the duality mapping's domain. Callers map
/// these onto member-level diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureRejection {
    /// The method is bound to a receiver; receiver duality is an open
    /// extension point, not implemented.
    SelfParameter,
    /// The signature carries effect markers (`throws`, `async`, ...).
    EffectSpecifiers,
}

/// Compute the dual of `signature`.
///
/// When `names` is provided, parameters synthesized from return-position
/// tuple elements receive fresh internal names; otherwise they are left
/// nameless, which the data model permits.
pub fn dualize_signature(
    signature: &Signature,
    has_self: bool,
    mut names: Option<&mut (dyn FreshNames + '_)>,
) -> Result<Signature, SignatureRejection> {
    if has_self {
        return Err(SignatureRejection::SelfParameter);
    }
    if !signature.effects.is_empty() {
        return Err(SignatureRejection::EffectSpecifiers);
    }
    let parameters = dual_parameters(signature.returns.as_ref(), &mut names);
    let returns = dual_return(&signature.parameters);
    Ok(Signature::new(parameters, Some(returns)))
}

/// Return → parameters. A labeled tuple contributes one parameter per
/// element in order; a bare type contributes a single wildcard-labeled
/// parameter; an absent return contributes nothing.
fn dual_parameters(
    returns: Option<&ReturnType>,
    names: &mut Option<&mut (dyn FreshNames + '_)>,
) -> Vec<Parameter> {
    match returns {
        None => Vec::new(),
        Some(ReturnType::Tuple(elements)) => elements
            .iter()
            .map(|element| {
                let label = match &element.label {
                    Some(name) => ParamLabel::named(name.clone()),
                    None => ParamLabel::Wildcard,
                };
                let hint = element.label.as_deref().unwrap_or("_");
                Parameter {
                    internal_name: names.as_mut().map(|n| n.fresh(hint)),
                    label,
                    ty: element.ty.clone(),
                    variadic: false,
                }
            })
            .collect(),
        Some(ReturnType::Bare(ty)) => vec![Parameter {
            label: ParamLabel::Wildcard,
            internal_name: names.as_mut().map(|n| n.fresh("_")),
            ty: ty.clone(),
            variadic: false,
        }],
    }
}

/// Parameters → return. Variadic parameters first have their type rewritten
/// to an array of the element type, since variadic markers cannot appear in
/// return position. A single wildcard-labeled parameter becomes a bare
/// return (tuple sugar elided); every other list becomes an explicit labeled
/// tuple, internal names dropped. Zero parameters yield the explicit empty
/// tuple, never an absent return.
fn dual_return(parameters: &[Parameter]) -> ReturnType {
    let rewritten: Vec<(ParamLabel, TypeRepr)> = parameters
        .iter()
        .map(|parameter| {
            let ty = if parameter.variadic {
                TypeRepr::Array(Box::new(parameter.ty.clone()))
            } else {
                parameter.ty.clone()
            };
            (parameter.label.clone(), ty)
        })
        .collect();
    if let [(ParamLabel::Wildcard, ty)] = rewritten.as_slice() {
        return ReturnType::Bare(ty.clone());
    }
    ReturnType::Tuple(
        rewritten
            .into_iter()
            .map(|(label, ty)| {
                let label = match label {
                    ParamLabel::Named(name) => Some(name),
                    ParamLabel::Wildcard => None,
                };
                TupleElem::new(label, ty)
            })
            .collect(),
    )
}
