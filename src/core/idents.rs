//! Identifier validation, default-name derivation, and fresh-name supply.

/// True if `text` is a legal identifier: a letter or underscore followed by
/// letters, digits, or underscores. The lone underscore is the wildcard
/// label, not an identifier.
pub fn is_valid_identifier(text: &str) -> bool {
    if text == "_" {
        return false;
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

const OPERATOR_CHARS: &str = "+-*/%<>=!&|^~?.";

/// True if `text` is a symbolic operator token such as `+` or `<=>`.
pub fn is_operator(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| OPERATOR_CHARS.contains(c))
}

/// Upper-case exactly the first character of `text`.
pub fn initial_cap(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Source of scope-unique identifiers, used when a return-position tuple
/// element becomes a parameter that needs an internal name. The host may
/// supply its own implementation wired to the enclosing scope.
pub trait FreshNames {
    fn fresh(&mut self, hint: &str) -> String;
}

/// Deterministic default generator. Produced names carry a double-underscore
/// prefix so they cannot collide with user-written identifiers accepted by
/// [`is_valid_identifier`] plus a running counter for uniqueness within one
/// invocation.
#[derive(Debug, Default)]
pub struct SequentialNames {
    next: usize,
}

impl SequentialNames {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FreshNames for SequentialNames {
    fn fresh(&mut self, hint: &str) -> String {
        let base = if is_valid_identifier(hint) { hint } else { "dual" };
        let name = format!("__{}{}", base, self.next);
        self.next += 1;
        name
    }
}
