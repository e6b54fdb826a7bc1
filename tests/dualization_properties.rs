//! Property-based tests for the signature dualizer
//!
//! These tests verify invariants that should hold for all inputs:
//! - Dualizing twice restores the original signature, up to the documented
//!   absent-vs-explicit-empty-tuple asymmetry at zero arity
//! - Arity inverts: N parameters and a K-element tuple return swap places
//! - Default naming is deterministic
//!
//! Variadic parameters are excluded from the round-trip property: their
//! rewrite to an array type is one-way by design.

use dualize::core::{
    ParamLabel, Parameter, ReturnType, Signature, TupleElem, TypeRepr,
};
use dualize::core::idents::initial_cap;
use dualize::dualize_signature;
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,10}"
}

fn type_repr() -> impl Strategy<Value = TypeRepr> {
    prop_oneof![
        Just(TypeRepr::SelfType),
        identifier().prop_map(|name| TypeRepr::Named(initial_cap(&name))),
        identifier().prop_map(|name| TypeRepr::Array(Box::new(TypeRepr::Named(initial_cap(&name))))),
    ]
}

fn param_label() -> impl Strategy<Value = ParamLabel> {
    prop_oneof![
        Just(ParamLabel::Wildcard),
        identifier().prop_map(ParamLabel::Named),
    ]
}

/// Non-variadic, internally-unnamed parameters: the shape the dualizer
/// itself produces, and the shape the round-trip property quantifies over.
fn parameter() -> impl Strategy<Value = Parameter> {
    (param_label(), type_repr()).prop_map(|(label, ty)| Parameter::new(label, ty))
}

fn tuple_elem() -> impl Strategy<Value = TupleElem> {
    (proptest::option::of(identifier()), type_repr())
        .prop_map(|(label, ty)| TupleElem::new(label, ty))
}

/// Return shapes that survive a round trip. A one-element unlabeled tuple
/// is the same type as its bare element (tuple sugar), so it is generated
/// in bare form only.
fn return_type() -> impl Strategy<Value = Option<ReturnType>> {
    prop_oneof![
        Just(None),
        type_repr().prop_map(|ty| Some(ReturnType::Bare(ty))),
        proptest::collection::vec(tuple_elem(), 0..4)
            .prop_filter("one-element unlabeled tuple is bare-type sugar", |elems| {
                !(elems.len() == 1 && elems[0].label.is_none())
            })
            .prop_map(|elems| Some(ReturnType::Tuple(elems))),
    ]
}

fn signature() -> impl Strategy<Value = Signature> {
    (proptest::collection::vec(parameter(), 0..4), return_type())
        .prop_map(|(parameters, returns)| Signature::new(parameters, returns))
}

fn dual(signature: &Signature) -> Signature {
    dualize_signature(signature, false, None).expect("generated signatures are eligible")
}

proptest! {
    /// Property: dualizing twice restores the original, with an absent
    /// return coming back as the explicit empty tuple.
    #[test]
    fn prop_round_trip_up_to_zero_arity_asymmetry(sig in signature()) {
        let twice = dual(&dual(&sig));
        let expected = Signature::new(
            sig.parameters.clone(),
            Some(sig.returns.clone().unwrap_or_else(ReturnType::unit)),
        );
        prop_assert_eq!(twice, expected);
    }

    /// Property: the dual's parameter count equals the source tuple-return
    /// arity, and the dual's tuple-return arity equals the source parameter
    /// count (when the tuple shape is not elided to a bare type).
    #[test]
    fn prop_arity_inversion(
        params in proptest::collection::vec(parameter(), 0..5),
        elems in proptest::collection::vec(tuple_elem(), 0..5),
    ) {
        let sig = Signature::new(params.clone(), Some(ReturnType::Tuple(elems.clone())));
        let dualized = dual(&sig);
        prop_assert_eq!(dualized.parameters.len(), elems.len());
        let single_wildcard = params.len() == 1
            && matches!(params[0].label, ParamLabel::Wildcard);
        match dualized.returns {
            Some(ReturnType::Bare(_)) => prop_assert!(single_wildcard),
            Some(ReturnType::Tuple(dual_elems)) => {
                prop_assert!(!single_wildcard);
                prop_assert_eq!(dual_elems.len(), params.len());
            }
            None => prop_assert!(false, "dual return is never absent"),
        }
    }

    /// Property: labels transpose positionally in both directions.
    #[test]
    fn prop_labels_transpose(elems in proptest::collection::vec(tuple_elem(), 0..5)) {
        let sig = Signature::new(vec![], Some(ReturnType::Tuple(elems.clone())));
        let dualized = dual(&sig);
        for (elem, parameter) in elems.iter().zip(&dualized.parameters) {
            match (&elem.label, &parameter.label) {
                (Some(label), ParamLabel::Named(dual_label)) => {
                    prop_assert_eq!(label, dual_label)
                }
                (None, ParamLabel::Wildcard) => {}
                (source, dual_label) => prop_assert!(
                    false,
                    "label mismatch: {:?} became {:?}",
                    source,
                    dual_label
                ),
            }
        }
    }

    /// Property: dualization is deterministic.
    #[test]
    fn prop_dualization_is_deterministic(sig in signature()) {
        prop_assert_eq!(dual(&sig), dual(&sig));
    }

    /// Property: absent any override, the dual member name is
    /// "co" + first-char-uppercased original name.
    #[test]
    fn prop_default_naming(name in identifier()) {
        use dualize::core::{Member, MethodDecl, MethodName, ModifierSet, SourceLocation};
        use dualize::{dualize_member, DiagnosticSink};
        use std::path::PathBuf;

        let member = Member::Method(MethodDecl {
            name: MethodName::Ident(name.clone()),
            modifiers: ModifierSet::static_only(),
            signature: Signature::new(vec![], None),
            has_body: false,
            annotations: vec![],
            location: SourceLocation::new(PathBuf::from("fixture.src"), 1, 1),
        });
        let mut sink = DiagnosticSink::new();
        let dual = dualize_member(&member, &mut sink, None).expect("member is eligible");
        prop_assert_eq!(
            dual.name,
            MethodName::Ident(format!("co{}", initial_cap(&name)))
        );
        prop_assert!(sink.is_empty());
    }
}
