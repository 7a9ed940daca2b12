//! End-to-end generation tests for the Soroban backend.

use wizgen_codegen::options::{Access, Info};
use wizgen_codegen::{Ecosystem, generate, oracle::check_ecosystem};
use wizgen_codegen_stellar::{CustomOptions, FungibleOptions, Stellar, StellarOptions};

#[test]
fn test_pausable_burnable_mintable_token() {
    let options = StellarOptions::Fungible(FungibleOptions {
        pausable: true,
        burnable: true,
        mintable: true,
        ..Default::default()
    });
    let generated = generate(&Stellar, &options).unwrap();
    assert_eq!(generated.file_name, "my_token.rs");

    insta::assert_snapshot!(generated.source(), @r#"
    // SPDX-License-Identifier: MIT
    // Compatible with OpenZeppelin Stellar Soroban Contracts ^0.4.1
    #![no_std]

    use soroban_sdk::{Address, Env, String, contract, contractimpl};
    use stellar_access::ownable::{Ownable, self as ownable};
    use stellar_contract_utils::pausable::{Pausable, self as pausable};
    use stellar_macros::{default_impl, only_owner, when_not_paused};
    use stellar_tokens::fungible::{Base, FungibleToken, burnable::FungibleBurnable};

    #[contract]
    pub struct MyToken;

    #[contractimpl]
    impl MyToken {
        pub fn __constructor(e: &Env, owner: Address) {
            Base::set_metadata(e, 18, String::from_str(e, "MyToken"), String::from_str(e, "MTK"));
            ownable::set_owner(e, &owner);
        }

        #[when_not_paused]
        #[only_owner]
        pub fn mint(e: &Env, account: Address, amount: i128) {
            Base::mint(e, &account, amount);
        }
    }

    #[default_impl]
    #[contractimpl]
    impl FungibleToken for MyToken {
        type ContractType = Base;

        #[when_not_paused]
        fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
            Self::ContractType::transfer(e, &from, &to, amount);
        }

        #[when_not_paused]
        fn transfer_from(e: &Env, spender: Address, from: Address, to: Address, amount: i128) {
            Self::ContractType::transfer_from(e, &spender, &from, &to, amount);
        }
    }

    //
    // Extensions
    //

    #[default_impl]
    #[contractimpl]
    impl FungibleBurnable for MyToken {
        #[when_not_paused]
        fn burn(e: &Env, from: Address, amount: i128) {
            Self::ContractType::burn(e, &from, amount);
        }

        #[when_not_paused]
        fn burn_from(e: &Env, spender: Address, from: Address, amount: i128) {
            Self::ContractType::burn_from(e, &spender, &from, amount);
        }
    }

    //
    // Utils
    //

    #[default_impl]
    #[contractimpl]
    impl Ownable for MyToken {}

    #[contractimpl]
    impl Pausable for MyToken {
        fn paused(e: &Env) -> bool {
            pausable::paused(e)
        }

        #[only_owner]
        fn pause(e: &Env, caller: Address) {
            pausable::pause(e);
        }

        #[only_owner]
        fn unpause(e: &Env, caller: Address) {
            pausable::unpause(e);
        }
    }
    "#);
}

#[test]
fn test_upgradeable_roles_with_contact() {
    let options = StellarOptions::Fungible(FungibleOptions {
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
    let generated = generate(&Stellar, &options).unwrap();
    let source = generated.source();

    assert_eq!(generated.file_name, "my_nft.rs");
    assert!(source.contains(
        "contractmeta!(key = \"security-contact\", val = \"security@example.com\");\n\n#[derive(Upgradeable)]\n#[contract]\npub struct MyNFT;\n"
    ));
    assert!(source.contains(
        "pub fn __constructor(e: &Env, admin: Address, minter: Address, upgrader: Address) {\n"
    ));
    assert!(source.contains("        access_control::set_admin(e, &admin);\n"));
    assert!(source.contains(
        "    #[only_role(caller, \"minter\")]\n    pub fn mint(e: &Env, account: Address, amount: i128, caller: Address) {\n"
    ));
    assert!(source.contains("impl UpgradeableInternal for MyNFT {\n    fn _require_auth(e: &Env, operator: &Address) {\n"));
    assert!(source.contains("use stellar_contract_utils::upgradeable::UpgradeableInternal;\n"));
    assert!(!source.contains("only_owner"));
}

#[test]
fn test_custom_without_features_has_no_impl() {
    let options = StellarOptions::Custom(CustomOptions::default());
    let generated = generate(&Stellar, &options).unwrap();
    assert_eq!(generated.file_name, "my_contract.rs");
    assert!(generated.source().ends_with("use soroban_sdk::contract;\n\n#[contract]\npub struct MyContract;\n"));
    assert!(!generated.source().contains("impl"));
}

#[test]
fn test_serde_tagging() {
    let options: StellarOptions =
        serde_json::from_str(r#"{"kind": "Fungible", "premint": 500, "access": false}"#).unwrap();
    let StellarOptions::Fungible(fungible) = &options else {
        panic!("expected fungible options");
    };
    assert_eq!(fungible.premint, Some(500));
    assert_eq!(fungible.access, None);
    assert_eq!(fungible.symbol, "MTK");
}

#[test]
fn test_oracle_passes_for_every_kind() {
    for kind in Stellar.kinds() {
        let report = check_ecosystem(&Stellar, kind).unwrap();
        assert!(report.passed(), "{kind}: {:?}", report.failures);
        assert_eq!(report.files, report.records);
    }
}
