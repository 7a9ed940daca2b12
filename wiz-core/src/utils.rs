//! Shared string utilities for identifiers and literals.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
///
/// Runs of capitals stay together: "MyNFT" -> "my_nft".
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            let after_capital = chars[i - 1].is_uppercase();
            let before_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if !after_capital || before_lower {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result.replace(['-', ' '], "_")
}

/// Convert a string to UPPER_SNAKE_CASE (e.g., "minter" -> "MINTER")
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Normalize arbitrary user input into a valid identifier.
///
/// Leading characters that cannot start an identifier are dropped, every run
/// of characters outside `[A-Za-z0-9_]` is removed and the character that
/// follows it is upper-cased. This never fails: input with nothing usable
/// becomes `Unnamed` (or `unnamed`).
///
/// ```
/// use wizgen_core::to_identifier;
///
/// assert_eq!(to_identifier("My Token", true), "MyToken");
/// assert_eq!(to_identifier("42 cool-coin", false), "coolCoin");
/// assert_eq!(to_identifier("!!!", true), "Unnamed");
/// ```
pub fn to_identifier(s: &str, capitalize: bool) -> String {
    let trimmed = s.trim_start_matches(|c: char| !(c.is_ascii_alphabetic() || c == '_'));

    let mut result = String::with_capacity(trimmed.len());
    let mut upper_next = false;
    for c in trimmed.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if upper_next {
                result.push(c.to_ascii_uppercase());
                upper_next = false;
            } else {
                result.push(c);
            }
        } else {
            upper_next = true;
        }
    }

    if result.is_empty() {
        return if capitalize { "Unnamed" } else { "unnamed" }.to_string();
    }

    let mut chars = result.chars();
    match chars.next() {
        Some(first) if capitalize => first.to_ascii_uppercase().to_string() + chars.as_str(),
        _ => result,
    }
}

/// Escape a string for use inside a literal delimited by `quote`.
pub fn escape_string(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
