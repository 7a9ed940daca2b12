//! Static consistency checks over a set of Solidity files.
//!
//! Not a compiler. It catches what a hand-maintained bundle tends to get
//! wrong: internal calls, modifiers, events and errors nothing in the set
//! defines, bodiless functions outside interfaces, and imports of symbols
//! the target file does not declare.

use std::collections::{BTreeMap, BTreeSet};

use crate::sources::resolve_path;

/// Modifiers whose use must be backed by a definition in the same set.
const MODIFIERS: &[&str] = &[
    "whenNotPaused",
    "whenPaused",
    "onlyOwner",
    "onlyRole",
    "initializer",
    "onlyInitializing",
    "reinitializer",
    "onlyProxy",
    "notDelegated",
    "onlyCustodian",
];

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

#[derive(Debug)]
struct Declaration {
    kind: &'static str,
    name: String,
    is_abstract: bool,
    start: usize,
}

struct Unit<'a> {
    path: &'a str,
    code: String,
    declarations: Vec<Declaration>,
    /// Imported symbols and the resolved path they come from.
    imports: Vec<(Vec<String>, String)>,
}

impl<'a> Unit<'a> {
    fn new(path: &'a str, text: &str) -> Self {
        let code = code_of(text);
        Self {
            path,
            declarations: declarations(&code),
            imports: imports(path, text),
            code,
        }
    }

    fn tokens(&self) -> Vec<Token<'_>> {
        tokens(&self.code)
    }

    fn declares(&self, name: &str) -> bool {
        self.declarations.iter().any(|d| d.name == name)
    }

    fn imports_symbol(&self, name: &str) -> bool {
        self.imports
            .iter()
            .any(|(symbols, _)| symbols.iter().any(|s| s == name))
    }

    fn container_at(&self, pos: usize) -> Option<&Declaration> {
        self.declarations.iter().rev().find(|d| d.start < pos)
    }
}

/// Comments removed and string contents blanked; quotes and newlines stay.
fn code_of(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    while let Some(c) = chars.next() {
        if in_string {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                '\n' => out.push(c),
                _ => {}
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push(c);
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn tokens(code: &str) -> Vec<Token<'_>> {
    let bytes = code.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !is_ident_byte(bytes[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && is_ident_byte(bytes[i]) {
            i += 1;
        }
        if !bytes[start].is_ascii_digit() {
            out.push(Token {
                text: &code[start..i],
                start,
                end: i,
            });
        }
    }
    out
}

fn next_byte(code: &str, pos: usize) -> Option<u8> {
    code.as_bytes()
        .get(pos..)?
        .iter()
        .copied()
        .find(|b| !b.is_ascii_whitespace())
}

fn byte_at(code: &str, pos: usize) -> Option<u8> {
    code.as_bytes().get(pos).copied()
}

/// Top-level declarations, which always start at column zero.
fn declarations(code: &str) -> Vec<Declaration> {
    let mut out = Vec::new();
    let mut offset = 0;
    for line in code.split_inclusive('\n') {
        let parsed = [
            ("abstract contract ", "contract", true),
            ("contract ", "contract", false),
            ("interface ", "interface", false),
            ("library ", "library", false),
            ("type ", "type", false),
        ]
        .into_iter()
        .find_map(|(prefix, kind, is_abstract)| {
            line.strip_prefix(prefix)
                .map(|rest| (kind, is_abstract, rest))
        });
        if let Some((kind, is_abstract, rest)) = parsed {
            let name: String = rest.bytes().take_while(|b| is_ident_byte(*b)).map(char::from).collect();
            out.push(Declaration {
                kind,
                name,
                is_abstract,
                start: offset,
            });
        }
        offset += line.len();
    }
    out
}

fn imports(path: &str, text: &str) -> Vec<(Vec<String>, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("import {"))
        .filter_map(|line| {
            let (symbols, rest) = line.strip_prefix("import {")?.split_once('}')?;
            let target = rest.split('"').nth(1)?;
            let symbols = symbols
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            Some((symbols, resolve_path(path, target)))
        })
        .collect()
}

/// Named function definition at `tokens[i]`, skipping function types.
fn defined_function<'a>(code: &str, tokens: &[Token<'a>], i: usize) -> Option<Token<'a>> {
    let keyword = tokens[i];
    if keyword.text != "function" || !byte_at(code, keyword.end)?.is_ascii_whitespace() {
        return None;
    }
    tokens.get(i + 1).copied()
}

#[derive(Default)]
struct Definitions {
    functions: BTreeSet<String>,
    modifiers: BTreeSet<String>,
    events: BTreeSet<String>,
    errors: BTreeSet<String>,
    /// Functions of each library, by library name.
    libraries: BTreeMap<String, BTreeSet<String>>,
    /// Every top-level name and the file declaring it.
    names: BTreeMap<String, String>,
}

impl Definitions {
    fn collect(units: &[Unit<'_>]) -> Self {
        let mut defs = Definitions::default();
        for unit in units {
            let tokens = unit.tokens();
            for (i, token) in tokens.iter().enumerate() {
                if let Some(name) = defined_function(&unit.code, &tokens, i) {
                    defs.functions.insert(name.text.to_string());
                    if let Some(decl) = unit.container_at(token.start).filter(|d| d.kind == "library")
                    {
                        defs.libraries
                            .entry(decl.name.clone())
                            .or_default()
                            .insert(name.text.to_string());
                    }
                    continue;
                }
                let set = match token.text {
                    "modifier" => &mut defs.modifiers,
                    "event" => &mut defs.events,
                    "error" => &mut defs.errors,
                    _ => continue,
                };
                if let Some(name) = tokens.get(i + 1) {
                    set.insert(name.text.to_string());
                }
            }
            for decl in &unit.declarations {
                defs.names.insert(decl.name.clone(), unit.path.to_string());
            }
        }
        defs
    }
}

/// Check a closed set of files, as `(path, text)` pairs. Returns one
/// message per problem found.
pub(crate) fn check<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<String> {
    let units: Vec<Unit<'_>> = files
        .into_iter()
        .map(|(path, text)| Unit::new(path, text))
        .collect();
    let defs = Definitions::collect(&units);
    let by_path: BTreeMap<&str, &Unit<'_>> = units.iter().map(|u| (u.path, u)).collect();

    let mut problems = Vec::new();
    for unit in &units {
        check_references(unit, &defs, &mut problems);
        check_bodies(unit, &mut problems);
        check_imports(unit, &by_path, &defs, &mut problems);
    }
    problems
}

fn check_references(unit: &Unit<'_>, defs: &Definitions, problems: &mut Vec<String>) {
    let code = unit.code.as_str();
    let tokens = unit.tokens();
    let path = unit.path;

    for (i, token) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| tokens[p].text);
        let called = next_byte(code, token.end) == Some(b'(');

        if token.text.starts_with('_')
            && token.text.len() > 1
            && called
            && !matches!(prev, Some("function" | "modifier"))
            && !defs.functions.contains(token.text)
            && !defs.modifiers.contains(token.text)
        {
            problems.push(format!("{path}: calls undefined `{}`", token.text));
        }

        if MODIFIERS.contains(&token.text)
            && prev != Some("modifier")
            && !defs.modifiers.contains(token.text)
        {
            problems.push(format!("{path}: uses undefined modifier `{}`", token.text));
        }

        match token.text {
            "emit" => {
                if let Some(event) = tokens.get(i + 1) {
                    if !defs.events.contains(event.text) {
                        problems.push(format!("{path}: emits undefined event `{}`", event.text));
                    }
                }
            }
            "revert" if !called => {
                let mut j = i + 1;
                if tokens
                    .get(j)
                    .is_some_and(|t| byte_at(code, t.end) == Some(b'.'))
                {
                    j += 1;
                }
                if let Some(error) = tokens.get(j) {
                    if !defs.errors.contains(error.text) {
                        problems.push(format!("{path}: reverts with undefined `{}`", error.text));
                    }
                }
            }
            _ => {}
        }

        if let (Some(functions), Some(member)) =
            (defs.libraries.get(token.text), tokens.get(i + 1))
        {
            let is_member_call = byte_at(code, token.end) == Some(b'.')
                && member.start == token.end + 1
                && next_byte(code, member.end) == Some(b'(');
            if is_member_call
                && !functions.contains(member.text)
                && !defs.errors.contains(member.text)
            {
                problems.push(format!(
                    "{path}: calls undefined `{}.{}`",
                    token.text, member.text
                ));
            }
        }
    }
}

fn check_bodies(unit: &Unit<'_>, problems: &mut Vec<String>) {
    let code = unit.code.as_str();
    let bytes = code.as_bytes();
    let tokens = unit.tokens();

    for (i, token) in tokens.iter().enumerate() {
        let name = match defined_function(code, &tokens, i) {
            Some(name) => name.text,
            None if token.text == "constructor" && next_byte(code, token.end) == Some(b'(') => {
                "constructor"
            }
            None => continue,
        };

        let Some(open) = code[token.end..].find('(').map(|p| token.end + p) else {
            continue;
        };
        let mut depth = 0usize;
        let mut end = None;
        for (pos, b) in bytes.iter().enumerate().skip(open) {
            match b {
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                b'{' | b';' if depth == 0 => {
                    end = Some((pos, *b));
                    break;
                }
                _ => {}
            }
        }
        let Some((end, terminator)) = end else {
            problems.push(format!("{}: `{name}` never ends", unit.path));
            continue;
        };
        if terminator == b'{' {
            continue;
        }

        let header = &code[token.start..end];
        let is_virtual = self::tokens(header).iter().any(|t| t.text == "virtual");
        let container = unit.container_at(token.start);
        let allowed = match container {
            _ if name == "constructor" => false,
            Some(decl) if decl.kind == "interface" => true,
            Some(decl) if decl.kind == "contract" => decl.is_abstract && is_virtual,
            _ => false,
        };
        if !allowed {
            problems.push(format!("{}: `{name}` has no body", unit.path));
        }
    }
}

fn check_imports(
    unit: &Unit<'_>,
    by_path: &BTreeMap<&str, &Unit<'_>>,
    defs: &Definitions,
    problems: &mut Vec<String>,
) {
    let path = unit.path;
    for (symbols, target) in &unit.imports {
        let Some(target_unit) = by_path.get(target.as_str()) else {
            problems.push(format!("{path}: imports {target}, which is not in the set"));
            continue;
        };
        for symbol in symbols {
            if !target_unit.declares(symbol) && !target_unit.imports_symbol(symbol) {
                problems.push(format!("{path}: {target} does not provide `{symbol}`"));
            }
        }
    }

    let used: BTreeSet<&str> = unit.tokens().iter().map(|t| t.text).collect();
    for name in used {
        if defs.names.contains_key(name) && !unit.declares(name) && !unit.imports_symbol(name) {
            problems.push(format!("{path}: uses `{name}` without importing it"));
        }
    }
}

#[cfg(test)]
mod tests {
    use wizgen_codegen::{generate, options::Access};

    use super::*;
    use crate::{
        ClockMode, Erc20Options, Erc721Options, Limitations, Solidity, SolidityOptions,
        StablecoinOptions, Upgradeable, bundle::SOURCES, kinds::CustomOptions,
        sources::library,
    };

    const OWNABLE: &str = "@openzeppelin/contracts/access/Ownable.sol";
    const CONTEXT: &str = "@openzeppelin/contracts/utils/Context.sol";

    fn check_closure(root: &str) -> Vec<String> {
        let libs = library();
        let closure = libs.reachable([root]);
        check(
            closure
                .iter()
                .filter_map(|path| libs.source(path).map(|text| (path.as_str(), text))),
        )
    }

    #[test]
    fn test_every_bundled_closure_is_consistent() {
        for (path, _) in SOURCES {
            let problems = check_closure(path);
            assert!(problems.is_empty(), "{path}:\n{}", problems.join("\n"));
        }
    }

    #[test]
    fn test_generated_contracts_are_consistent() {
        let records = [
            SolidityOptions::Erc20(Erc20Options {
                mintable: true,
                pausable: true,
                ..Default::default()
            }),
            SolidityOptions::Erc20(Erc20Options {
                burnable: true,
                pausable: true,
                premint: Some(1000),
                mintable: true,
                votes: Some(ClockMode::Timestamp),
                flashmint: true,
                access: Some(Access::Roles),
                upgradeable: Some(Upgradeable::Uups),
                ..Default::default()
            }),
            SolidityOptions::Erc721(Erc721Options {
                base_uri: "https://example.com/".to_string(),
                enumerable: true,
                uri_storage: true,
                burnable: true,
                pausable: true,
                mintable: true,
                incremental: true,
                votes: true,
                ..Default::default()
            }),
            SolidityOptions::Erc721(Erc721Options {
                enumerable: true,
                uri_storage: true,
                pausable: true,
                mintable: true,
                votes: true,
                access: Some(Access::Roles),
                upgradeable: Some(Upgradeable::Transparent),
                ..Default::default()
            }),
            SolidityOptions::Stablecoin(StablecoinOptions {
                pausable: true,
                mintable: true,
                votes: Some(ClockMode::Blocknumber),
                limitations: Some(Limitations::Allowlist),
                custodian: true,
                access: Some(Access::Roles),
                ..Default::default()
            }),
            SolidityOptions::Stablecoin(StablecoinOptions {
                burnable: true,
                limitations: Some(Limitations::Blocklist),
                custodian: true,
                ..Default::default()
            }),
            SolidityOptions::Custom(CustomOptions {
                pausable: true,
                upgradeable: Some(Upgradeable::Uups),
                ..Default::default()
            }),
        ];

        for options in &records {
            let generated = generate(&Solidity, options).unwrap();
            let problems = check(
                generated
                    .files
                    .iter()
                    .map(|(path, text)| (path.as_str(), text.as_str())),
            );
            assert!(problems.is_empty(), "{options:?}:\n{}", problems.join("\n"));
        }
    }

    #[test]
    fn test_flags_internal_call_without_definition() {
        let ownable = "pragma solidity ^0.8.20;\n\nimport {Context} from \"../utils/Context.sol\";\n\nabstract contract Ownable is Context {\n    function renounceOwnership() public virtual {\n        _transferOwnership(address(0));\n    }\n}\n";
        let context = library().source(CONTEXT).unwrap();
        let problems = check([(OWNABLE, ownable), (CONTEXT, context)]);
        assert_eq!(
            problems,
            vec![format!("{OWNABLE}: calls undefined `_transferOwnership`")]
        );
    }

    #[test]
    fn test_flags_missing_bodies_and_modifiers() {
        let pausable = "pragma solidity ^0.8.20;\n\nabstract contract Pausable {\n    function _pause() internal whenNotPaused;\n}\n\nlibrary Math {\n    function max(uint256 a, uint256 b) internal pure returns (uint256);\n}\n";
        let problems = check([("Pausable.sol", pausable)]);
        assert_eq!(
            problems,
            vec![
                "Pausable.sol: uses undefined modifier `whenNotPaused`".to_string(),
                "Pausable.sol: `_pause` has no body".to_string(),
                "Pausable.sol: `max` has no body".to_string(),
            ]
        );
    }

    #[test]
    fn test_flags_symbol_missing_from_import_target() {
        let token = "pragma solidity ^0.8.20;\n\nimport {Ownable, Context} from \"./Ownable.sol\";\n\ncontract MyToken is Ownable {}\n";
        let ownable = "pragma solidity ^0.8.20;\n\nabstract contract Ownable {}\n";
        let problems = check([("MyToken.sol", token), ("Ownable.sol", ownable)]);
        assert_eq!(
            problems,
            vec!["MyToken.sol: Ownable.sol does not provide `Context`".to_string()]
        );
    }

    #[test]
    fn test_comments_and_strings_are_ignored() {
        let code = code_of("string s = \"// not a comment\"; // _missing()\n");
        assert_eq!(code, "string s = \"\"; \n");
    }
}
