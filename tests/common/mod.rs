// Test utility module for dualize integration tests
#![allow(dead_code)]

use dualize::core::{
    Annotation, AnnotationArg, DeclarationTree, InterfaceDecl, Member, MethodDecl, MethodName,
    ModifierSet, ParamLabel, Parameter, ReturnType, Signature, SourceLocation, TupleElem, TypeRepr,
};
use std::path::PathBuf;

pub fn loc(line: usize) -> SourceLocation {
    SourceLocation::new(PathBuf::from("fixture.src"), line, 1)
}

pub fn self_ty() -> TypeRepr {
    TypeRepr::SelfType
}

pub fn named_ty(name: &str) -> TypeRepr {
    TypeRepr::named(name)
}

pub fn param(label: &str, ty: TypeRepr) -> Parameter {
    Parameter::new(ParamLabel::named(label), ty)
}

pub fn wildcard_param(ty: TypeRepr) -> Parameter {
    Parameter::new(ParamLabel::Wildcard, ty)
}

pub fn variadic_param(ty: TypeRepr) -> Parameter {
    Parameter::variadic(ParamLabel::Wildcard, ty)
}

pub fn elem(label: Option<&str>, ty: TypeRepr) -> TupleElem {
    TupleElem::new(label.map(str::to_string), ty)
}

pub fn bare(ty: TypeRepr) -> Option<ReturnType> {
    Some(ReturnType::Bare(ty))
}

pub fn tuple(elements: Vec<TupleElem>) -> Option<ReturnType> {
    Some(ReturnType::Tuple(elements))
}

pub fn static_method(
    name: &str,
    line: usize,
    parameters: Vec<Parameter>,
    returns: Option<ReturnType>,
) -> Member {
    Member::Method(MethodDecl {
        name: MethodName::Ident(name.to_string()),
        modifiers: ModifierSet::static_only(),
        signature: Signature::new(parameters, returns),
        has_body: false,
        annotations: vec![],
        location: loc(line),
    })
}

pub fn operator_method(
    op: &str,
    line: usize,
    parameters: Vec<Parameter>,
    returns: Option<ReturnType>,
) -> Member {
    Member::Method(MethodDecl {
        name: MethodName::Operator(op.to_string()),
        modifiers: ModifierSet::static_only(),
        signature: Signature::new(parameters, returns),
        has_body: false,
        annotations: vec![],
        location: loc(line),
    })
}

pub fn with_dual_name(member: Member, dual_name: &str) -> Member {
    let Member::Method(mut method) = member else {
        panic!("dual-name annotation only applies to methods");
    };
    method.annotations.push(Annotation {
        name: dualize::DUAL_NAME_ANNOTATION.to_string(),
        argument: Some(AnnotationArg::StringLiteral(dual_name.to_string())),
        location: method.location.clone(),
    });
    Member::Method(method)
}

pub fn interface(name: &str, members: Vec<Member>) -> DeclarationTree {
    DeclarationTree::Interface(InterfaceDecl {
        name: name.to_string(),
        inherits: vec![],
        primary_associated_types: vec![],
        members: members.into(),
        annotations: vec![],
        location: loc(1),
    })
}

/// Extract the (name, signature) pairs of the generated interface's methods
/// for compact assertions.
pub fn method_names(decl: &InterfaceDecl) -> Vec<String> {
    decl.members
        .iter()
        .map(|member| match member {
            Member::Method(method) => method.name.to_string(),
            other => panic!("generated interface contains a non-method member: {other:?}"),
        })
        .collect()
}

pub fn method_at(decl: &InterfaceDecl, index: usize) -> &MethodDecl {
    match &decl.members[index] {
        Member::Method(method) => method,
        other => panic!("expected a method at index {index}, got {other:?}"),
    }
}
