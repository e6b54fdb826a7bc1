//! Declaration data model shared across the dualization pass.
//!
//! Everything here is an immutable snapshot of the host compiler's parsed
//! representation. The engine never mutates these values; every
//! transformation constructs new sibling entities.

pub mod errors;
pub mod idents;

use im::Vector;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use errors::{Error, Result};
pub use idents::{FreshNames, SequentialNames};

/// Location in source code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            end_line: None,
            end_column: None,
        }
    }

    /// Set the end position
    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }
}

/// A parsed top-level declaration as handed over by the host.
///
/// The engine only generates output for the `Interface` variant; the other
/// variants exist so the entry point can report `NotAnInterface` with a
/// location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeclarationTree {
    Interface(InterfaceDecl),
    Structure { name: String, location: SourceLocation },
    Enumeration { name: String, location: SourceLocation },
    Function { name: String, location: SourceLocation },
}

impl DeclarationTree {
    pub fn location(&self) -> &SourceLocation {
        match self {
            DeclarationTree::Interface(decl) => &decl.location,
            DeclarationTree::Structure { location, .. }
            | DeclarationTree::Enumeration { location, .. }
            | DeclarationTree::Function { location, .. } => location,
        }
    }

    /// Check structural invariants the host is expected to uphold.
    ///
    /// A tree that violates these is not a diagnosable user mistake but a
    /// malformed input, so the failure is an [`Error`] rather than a
    /// diagnostic.
    pub fn validate(&self) -> Result<()> {
        match self {
            DeclarationTree::Interface(decl) => decl.validate(),
            _ => Ok(()),
        }
    }
}

/// An interface declaration: a named contract listing method signatures
/// without implementations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub inherits: Vec<String>,
    pub primary_associated_types: Vec<String>,
    pub members: Vector<Member>,
    pub annotations: Vec<Annotation>,
    pub location: SourceLocation,
}

impl InterfaceDecl {
    pub fn validate(&self) -> Result<()> {
        for member in &self.members {
            if let Member::Method(method) = member {
                method.signature.validate(&method.location)?;
            }
        }
        Ok(())
    }
}

/// A single interface member. Only `Method` is ever dualized; the other
/// variants are representable so they can be rejected with a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Method(MethodDecl),
    Property { name: String, location: SourceLocation },
    AssociatedType { name: String, location: SourceLocation },
    NestedType { name: String, location: SourceLocation },
    Initializer { location: SourceLocation },
    Subscript { location: SourceLocation },
}

impl Member {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Member::Method(method) => &method.location,
            Member::Property { location, .. }
            | Member::AssociatedType { location, .. }
            | Member::NestedType { location, .. }
            | Member::Initializer { location }
            | Member::Subscript { location } => location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: MethodName,
    pub modifiers: ModifierSet,
    pub signature: Signature,
    pub has_body: bool,
    pub annotations: Vec<Annotation>,
    pub location: SourceLocation,
}

/// Method names are either ordinary identifiers or symbolic operators
/// (`+`, `*`, ...). Operators get no meaningful default dual name, so in
/// practice they require an explicit override: absent one, the generic
/// `co` + InitialCap rule is still applied mechanically and lands in the
/// `Ident` variant even though the result (for example `co-`) is not a
/// legal identifier. Such a member is generated as-is, with a warning
/// logged; validation of override-supplied names is stricter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodName {
    Ident(String),
    Operator(String),
}

impl MethodName {
    pub fn as_str(&self) -> &str {
        match self {
            MethodName::Ident(name) | MethodName::Operator(name) => name,
        }
    }
}

impl std::fmt::Display for MethodName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier flags attached to a method declaration. Flags the engine does
/// not interpret travel through `other` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub is_static: bool,
    pub is_mutating: bool,
    pub other: Vec<String>,
}

impl ModifierSet {
    pub fn static_only() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }
}

/// Effect markers on a signature (`throws`, `async`, ...). Opaque to the
/// engine: their presence alone makes a signature ineligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectMarker {
    Throws,
    Async,
    Other(String),
}

/// A method's parameter list plus return type, independent of its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub parameters: Vec<Parameter>,
    pub returns: Option<ReturnType>,
    pub effects: Vec<EffectMarker>,
}

impl Signature {
    pub fn new(parameters: Vec<Parameter>, returns: Option<ReturnType>) -> Self {
        Self {
            parameters,
            returns,
            effects: Vec::new(),
        }
    }

    /// At most one parameter may be variadic, and only the last.
    pub fn validate(&self, location: &SourceLocation) -> Result<()> {
        let count = self.parameters.len();
        for (index, parameter) in self.parameters.iter().enumerate() {
            if parameter.variadic && index + 1 != count {
                return Err(Error::malformed_tree(
                    "variadic parameter must be the last parameter",
                    Some(location.clone()),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub label: ParamLabel,
    pub internal_name: Option<String>,
    pub ty: TypeRepr,
    pub variadic: bool,
}

impl Parameter {
    pub fn new(label: ParamLabel, ty: TypeRepr) -> Self {
        Self {
            label,
            internal_name: None,
            ty,
            variadic: false,
        }
    }

    pub fn variadic(label: ParamLabel, ty: TypeRepr) -> Self {
        Self {
            label,
            internal_name: None,
            ty,
            variadic: true,
        }
    }
}

/// External argument label of a parameter: a caller-facing name or the
/// wildcard `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamLabel {
    Named(String),
    Wildcard,
}

impl ParamLabel {
    pub fn named(name: impl Into<String>) -> Self {
        ParamLabel::Named(name.into())
    }
}

/// Return shape of a signature. An absent return (`None` on
/// [`Signature::returns`]) means "returns nothing"; an explicit empty tuple
/// is a distinct shape and the dualizer keeps the two apart on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReturnType {
    Bare(TypeRepr),
    Tuple(Vec<TupleElem>),
}

impl ReturnType {
    /// The explicit empty tuple `()`.
    pub fn unit() -> Self {
        ReturnType::Tuple(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleElem {
    pub label: Option<String>,
    pub ty: TypeRepr,
}

impl TupleElem {
    pub fn new(label: Option<String>, ty: TypeRepr) -> Self {
        Self { label, ty }
    }
}

/// Structural type representation. The engine never resolves types; it only
/// needs enough shape to rewrite variadics into arrays and to carry labeled
/// tuples across the parameter/return boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRepr {
    Named(String),
    SelfType,
    Array(Box<TypeRepr>),
    Tuple(Vec<(Option<String>, TypeRepr)>),
}

impl TypeRepr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRepr::Named(name.into())
    }
}

/// An annotation attached to an interface or a member, with its single
/// argument already extracted by the host's front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub argument: Option<AnnotationArg>,
    pub location: SourceLocation,
}

/// The argument of an annotation. `Other` captures anything that is not a
/// string literal, preserving its source text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationArg {
    StringLiteral(String),
    Other(String),
}
