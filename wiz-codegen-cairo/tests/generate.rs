//! End-to-end generation tests for the Cairo backend.

use wizgen_codegen::{Ecosystem, generate, oracle::check_ecosystem};
use wizgen_codegen::options::{Access, Info};
use wizgen_codegen_cairo::{Cairo, CairoOptions, CustomOptions, Erc721Options};

#[test]
fn test_pausable_custom() {
    let options = CairoOptions::Custom(CustomOptions {
        pausable: true,
        ..Default::default()
    });
    let generated = generate(&Cairo, &options).unwrap();
    assert_eq!(generated.file_name, "my_contract.cairo");

    insta::assert_snapshot!(generated.source(), @r"
    // SPDX-License-Identifier: MIT
    // Compatible with OpenZeppelin Contracts for Cairo ^0.6.1

    %lang starknet

    from openzeppelin.access.ownable.library import Ownable
    from openzeppelin.security.pausable.library import Pausable
    from starkware.cairo.common.cairo_builtins import HashBuiltin

    @constructor
    func constructor{syscall_ptr: felt*, pedersen_ptr: HashBuiltin*, range_check_ptr}(owner: felt) {
        Ownable.initializer(owner);
        return ();
    }

    @view
    func paused{syscall_ptr: felt*, pedersen_ptr: HashBuiltin*, range_check_ptr}() -> (paused: felt) {
        return Pausable.is_paused();
    }

    @view
    func owner{syscall_ptr: felt*, pedersen_ptr: HashBuiltin*, range_check_ptr}() -> (owner: felt) {
        return Ownable.owner();
    }

    @external
    func transferOwnership{syscall_ptr: felt*, pedersen_ptr: HashBuiltin*, range_check_ptr}(newOwner: felt) {
        Ownable.transfer_ownership(newOwner);
        return ();
    }

    @external
    func renounceOwnership{syscall_ptr: felt*, pedersen_ptr: HashBuiltin*, range_check_ptr}() {
        Ownable.renounce_ownership();
        return ();
    }

    @external
    func pause{syscall_ptr: felt*, pedersen_ptr: HashBuiltin*, range_check_ptr}() {
        Ownable.assert_only_owner();
        Pausable._pause();
        return ();
    }

    @external
    func unpause{syscall_ptr: felt*, pedersen_ptr: HashBuiltin*, range_check_ptr}() {
        Ownable.assert_only_owner();
        Pausable._unpause();
        return ();
    }
    ");
}

#[test]
fn test_erc721_pausable_mintable() {
    let options = CairoOptions::Erc721(Erc721Options {
        pausable: true,
        mintable: true,
        ..Default::default()
    });
    let generated = generate(&Cairo, &options).unwrap();
    let source = generated.source();

    assert_eq!(generated.files.len(), 1);
    assert!(source.contains("    ERC721.initializer('MyToken', 'MTK');\n    Ownable.initializer(owner);\n"));
    assert_eq!(source.matches("Ownable.assert_only_owner();").count(), 3);
    // Four transfers plus the mint.
    assert_eq!(source.matches("Pausable.assert_not_paused();").count(), 5);
    assert_eq!(source.matches("func pause{").count(), 1);
    assert!(source.contains(
        "    ERC721._safe_mint(to, tokenId, data_len, data);\n    ERC721._set_token_uri(tokenId, tokenURI);\n    return ();\n"
    ));

    let views = source.find("@view").unwrap();
    let externals = source.find("@external").unwrap();
    assert!(views < externals);
}

#[test]
fn test_upgradeable_roles() {
    let options = CairoOptions::Erc721(Erc721Options {
        name: "My NFT".to_string(),
        mintable: true,
        access: Some(Access::Roles),
        upgradeable: true,
        info: Info {
            security_contact: Some("security@example.com".to_string()),
            license: None,
        },
        ..Default::default()
    });
    let generated = generate(&Cairo, &options).unwrap();
    let source = generated.source();

    assert_eq!(generated.file_name, "my_nft.cairo");
    assert!(source.contains("// @custom:security-contact security@example.com\n"));
    assert!(source.contains("from openzeppelin.upgrades.library import Proxy\n"));
    assert!(source.contains("from openzeppelin.utils.constants.library import DEFAULT_ADMIN_ROLE\n"));
    assert!(source.contains("const MINTER_ROLE = 'MINTER_ROLE';\n"));
    assert!(source.contains(
        "@external\nfunc initializer{syscall_ptr: felt*, pedersen_ptr: HashBuiltin*, range_check_ptr}(admin: felt, minter: felt, proxy_admin: felt) {\n"
    ));
    assert!(source.contains("    Proxy.initializer(proxy_admin);\n    ERC721.initializer('My NFT', 'MTK');\n"));
    assert!(source.contains("    Proxy.assert_only_admin();\n    Proxy._set_implementation_hash(new_implementation);\n"));
    assert!(!source.contains("@constructor"));
}

#[test]
fn test_serde_tagging() {
    let options: CairoOptions =
        serde_json::from_str(r#"{"kind": "Custom", "access": "roles", "upgradeable": true}"#)
            .unwrap();
    let CairoOptions::Custom(custom) = &options else {
        panic!("expected custom options");
    };
    assert_eq!(custom.access, Some(Access::Roles));
    assert!(custom.upgradeable);
    assert_eq!(custom.name, "MyContract");
}

#[test]
fn test_oracle_passes_for_every_kind() {
    for kind in Cairo.kinds() {
        let report = check_ecosystem(&Cairo, kind).unwrap();
        assert!(report.passed(), "{kind}: {:?}", report.failures);
        assert_eq!(report.files, report.records);
    }
}
