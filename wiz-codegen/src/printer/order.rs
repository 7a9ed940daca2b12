//! Declaration ordering.

use std::cmp::Ordering;

use wizgen_ir::{Contract, ImplBlock, Library};

/// Libraries in print order: those that initialize first lead, ties keep
/// insertion order.
pub fn libraries(contract: &Contract) -> Vec<&Library> {
    let mut libraries: Vec<&Library> = contract.libraries().iter().collect();
    libraries.sort_by_key(|lib| !lib.module.initializes_first);
    libraries
}

/// Blocks in print order: by section (untagged first), then by priority
/// (unset last), then by name.
pub fn blocks(contract: &Contract) -> Vec<&ImplBlock> {
    let mut blocks: Vec<&ImplBlock> = contract.blocks().iter().collect();
    blocks.sort_by(|a, b| compare_blocks(a, b));
    blocks
}

fn compare_blocks(a: &ImplBlock, b: &ImplBlock) -> Ordering {
    a.section
        .cmp(&b.section)
        .then((a.priority.is_none(), a.priority).cmp(&(b.priority.is_none(), b.priority)))
        .then(a.name.cmp(&b.name))
}
