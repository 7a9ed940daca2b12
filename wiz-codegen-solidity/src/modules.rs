//! OpenZeppelin Contracts modules, in plain and upgradeable flavors.

use wizgen_ir::Module;

/// A library that exists both in `@openzeppelin/contracts` and, with an
/// `Upgradeable` suffix, in `@openzeppelin/contracts-upgradeable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModulePair {
    pub plain: Module,
    pub upgradeable: Module,
}

impl ModulePair {
    pub fn get(&self, upgradeable: bool) -> Module {
        if upgradeable {
            self.upgradeable
        } else {
            self.plain
        }
    }
}

macro_rules! pair {
    ($dir:literal, $name:literal) => {
        ModulePair {
            plain: Module::new(
                $name,
                concat!("@openzeppelin/contracts/", $dir, "/", $name, ".sol"),
            ),
            upgradeable: Module::new(
                concat!($name, "Upgradeable"),
                concat!(
                    "@openzeppelin/contracts-upgradeable/",
                    $dir,
                    "/",
                    $name,
                    "Upgradeable.sol"
                ),
            ),
        }
    };
}

pub const ERC20: ModulePair = pair!("token/ERC20", "ERC20");
pub const ERC20_BURNABLE: ModulePair = pair!("token/ERC20/extensions", "ERC20Burnable");
pub const ERC20_PAUSABLE: ModulePair = pair!("token/ERC20/extensions", "ERC20Pausable");
pub const ERC20_PERMIT: ModulePair = pair!("token/ERC20/extensions", "ERC20Permit");
pub const ERC20_VOTES: ModulePair = pair!("token/ERC20/extensions", "ERC20Votes");
pub const ERC20_FLASH_MINT: ModulePair = pair!("token/ERC20/extensions", "ERC20FlashMint");

pub const ERC721: ModulePair = pair!("token/ERC721", "ERC721");
pub const ERC721_BURNABLE: ModulePair = pair!("token/ERC721/extensions", "ERC721Burnable");
pub const ERC721_ENUMERABLE: ModulePair = pair!("token/ERC721/extensions", "ERC721Enumerable");
pub const ERC721_PAUSABLE: ModulePair = pair!("token/ERC721/extensions", "ERC721Pausable");
pub const ERC721_URI_STORAGE: ModulePair = pair!("token/ERC721/extensions", "ERC721URIStorage");
pub const ERC721_VOTES: ModulePair = pair!("token/ERC721/extensions", "ERC721Votes");

pub const PAUSABLE: ModulePair = pair!("utils", "Pausable");
pub const OWNABLE: ModulePair = pair!("access", "Ownable");
pub const ACCESS_CONTROL: ModulePair = pair!("access", "AccessControl");
pub const NONCES: ModulePair = pair!("utils", "Nonces");
pub const EIP712: ModulePair = pair!("utils/cryptography", "EIP712");

/// Stablecoin extensions. They build on the plain ERC-20 only and have no
/// upgradeable flavor.
pub const ERC20_ALLOWLIST: Module = Module::new(
    "ERC20Allowlist",
    "@openzeppelin/community-contracts/token/ERC20/extensions/ERC20Allowlist.sol",
);
pub const ERC20_BLOCKLIST: Module = Module::new(
    "ERC20Blocklist",
    "@openzeppelin/community-contracts/token/ERC20/extensions/ERC20Blocklist.sol",
);
pub const ERC20_CUSTODIAN: Module = Module::new(
    "ERC20Custodian",
    "@openzeppelin/community-contracts/token/ERC20/extensions/ERC20Custodian.sol",
);

pub const INITIALIZABLE: Module = Module::new(
    "Initializable",
    "@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol",
)
.first();

pub const UUPS_UPGRADEABLE: Module = Module::new(
    "UUPSUpgradeable",
    "@openzeppelin/contracts-upgradeable/proxy/utils/UUPSUpgradeable.sol",
);

/// Stem of a library's `__<stem>_init` function.
///
/// Upgradeable variants drop their suffix; `UUPSUpgradeable` has no plain
/// counterpart and keeps its full name.
pub fn init_stem(module: &Module) -> &'static str {
    if *module == UUPS_UPGRADEABLE {
        return module.name;
    }
    module
        .name
        .strip_suffix("Upgradeable")
        .unwrap_or(module.name)
}
