//! Naming conventions for target languages.

use wizgen_core::{to_identifier, to_snake_case};

/// Language-specific naming conventions.
///
/// Defines how a user-supplied contract name becomes a type name and a file
/// name, and how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform contract name to type name (e.g., "my token" -> "MyToken")
    pub contract_to_type: fn(&str) -> String,
    /// Transform type name to file stem (e.g., "MyToken" -> "my_token")
    pub type_to_file: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "Self" -> "Self_")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a contract type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.contract_to_type)(name);
        self.safe_name(&transformed)
    }

    /// File stem for a contract type name.
    pub fn file_stem(&self, type_name: &str) -> String {
        (self.type_to_file)(type_name)
    }
}

fn contract_identifier(name: &str) -> String {
    to_identifier(name, true)
}

fn unchanged(name: &str) -> String {
    name.to_string()
}

fn escape_with_underscore(name: &str) -> String {
    format!("{}_", name)
}

/// Solidity naming conventions. Files are named after the contract.
pub const SOLIDITY_NAMING: NamingConvention = NamingConvention {
    contract_to_type: contract_identifier,
    type_to_file: unchanged,
    reserved_words: &[
        "abstract", "after", "alias", "anonymous", "apply", "assembly", "auto", "break", "case",
        "catch", "constant", "continue", "contract", "copyof", "default", "define", "delete", "do",
        "else", "emit", "enum", "event", "external", "fallback", "false", "final", "for",
        "function", "if", "immutable", "implements", "import", "in", "indexed", "inline",
        "interface", "internal", "is", "let", "library", "macro", "mapping", "match", "memory",
        "modifier", "mutable", "new", "null", "of", "override", "partial", "payable", "pragma",
        "private", "promise", "public", "pure", "receive", "reference", "relocatable", "return",
        "returns", "sealed", "sizeof", "static", "storage", "struct", "supports", "switch",
        "true", "try", "type", "typedef", "typeof", "unchecked", "using", "view", "virtual",
        "while",
    ],
    escape_reserved: escape_with_underscore,
};

/// Cairo 0.10 naming conventions.
pub const CAIRO_NAMING: NamingConvention = NamingConvention {
    contract_to_type: contract_identifier,
    type_to_file: to_snake_case,
    reserved_words: &[
        "alloc_locals", "as", "assert", "call", "cast", "const", "dw", "else", "end", "felt",
        "from", "func", "if", "import", "jmp", "let", "local", "member", "namespace", "new",
        "nondet", "rel", "ret", "return", "static_assert", "struct", "tempvar", "with",
        "with_attr",
    ],
    escape_reserved: escape_with_underscore,
};

/// Rust naming conventions, used for Soroban contracts.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    contract_to_type: contract_identifier,
    type_to_file: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_with_underscore,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(SOLIDITY_NAMING.type_name("my token"), "MyToken");
        assert_eq!(RUST_NAMING.type_name("self"), "Self_");
        assert_eq!(CAIRO_NAMING.type_name("42"), "Unnamed");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(SOLIDITY_NAMING.file_stem("MyToken"), "MyToken");
        assert_eq!(CAIRO_NAMING.file_stem("MyToken"), "my_token");
    }

    #[test]
    fn test_reserved() {
        assert!(RUST_NAMING.is_reserved("impl"));
        assert!(!RUST_NAMING.is_reserved("Impl"));
        assert_eq!(CAIRO_NAMING.safe_name("felt"), "felt_");
    }
}
