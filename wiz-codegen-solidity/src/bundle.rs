// Bundled OpenZeppelin sources, keyed by import path. Keep sorted.
pub(crate) static SOURCES: &[(&str, &str)] = &[
    (
        "@openzeppelin/community-contracts/token/ERC20/extensions/ERC20Allowlist.sol",
        include_str!("../openzeppelin/community-contracts/token/ERC20/extensions/ERC20Allowlist.sol"),
    ),
    (
        "@openzeppelin/community-contracts/token/ERC20/extensions/ERC20Blocklist.sol",
        include_str!("../openzeppelin/community-contracts/token/ERC20/extensions/ERC20Blocklist.sol"),
    ),
    (
        "@openzeppelin/community-contracts/token/ERC20/extensions/ERC20Custodian.sol",
        include_str!("../openzeppelin/community-contracts/token/ERC20/extensions/ERC20Custodian.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/access/AccessControlUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/access/AccessControlUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/access/OwnableUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/access/OwnableUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/governance/utils/VotesUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/governance/utils/VotesUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/proxy/utils/UUPSUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/proxy/utils/UUPSUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC20/ERC20Upgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC20/ERC20Upgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20BurnableUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20BurnableUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20FlashMintUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20FlashMintUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20PausableUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20PausableUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20PermitUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20PermitUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20VotesUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20VotesUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC721/ERC721Upgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC721/ERC721Upgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721BurnableUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721BurnableUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721EnumerableUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721EnumerableUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721PausableUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721PausableUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721URIStorageUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721URIStorageUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721VotesUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/token/ERC721/extensions/ERC721VotesUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/utils/ContextUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/utils/ContextUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/utils/NoncesUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/utils/NoncesUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/utils/PausableUpgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/utils/PausableUpgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/utils/cryptography/EIP712Upgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/utils/cryptography/EIP712Upgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts-upgradeable/utils/introspection/ERC165Upgradeable.sol",
        include_str!("../openzeppelin/contracts-upgradeable/utils/introspection/ERC165Upgradeable.sol"),
    ),
    (
        "@openzeppelin/contracts/access/AccessControl.sol",
        include_str!("../openzeppelin/contracts/access/AccessControl.sol"),
    ),
    (
        "@openzeppelin/contracts/access/IAccessControl.sol",
        include_str!("../openzeppelin/contracts/access/IAccessControl.sol"),
    ),
    (
        "@openzeppelin/contracts/access/Ownable.sol",
        include_str!("../openzeppelin/contracts/access/Ownable.sol"),
    ),
    (
        "@openzeppelin/contracts/governance/utils/IVotes.sol",
        include_str!("../openzeppelin/contracts/governance/utils/IVotes.sol"),
    ),
    (
        "@openzeppelin/contracts/governance/utils/Votes.sol",
        include_str!("../openzeppelin/contracts/governance/utils/Votes.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC165.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC165.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC1967.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC1967.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC3156FlashBorrower.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC3156FlashBorrower.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC3156FlashLender.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC3156FlashLender.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC4906.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC4906.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC5267.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC5267.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC5805.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC5805.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC6372.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC6372.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/IERC721.sol",
        include_str!("../openzeppelin/contracts/interfaces/IERC721.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/draft-IERC1822.sol",
        include_str!("../openzeppelin/contracts/interfaces/draft-IERC1822.sol"),
    ),
    (
        "@openzeppelin/contracts/interfaces/draft-IERC6093.sol",
        include_str!("../openzeppelin/contracts/interfaces/draft-IERC6093.sol"),
    ),
    (
        "@openzeppelin/contracts/proxy/ERC1967/ERC1967Utils.sol",
        include_str!("../openzeppelin/contracts/proxy/ERC1967/ERC1967Utils.sol"),
    ),
    (
        "@openzeppelin/contracts/proxy/beacon/IBeacon.sol",
        include_str!("../openzeppelin/contracts/proxy/beacon/IBeacon.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/ERC20.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/ERC20.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/IERC20.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/IERC20.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/extensions/ERC20FlashMint.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/extensions/ERC20FlashMint.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/extensions/ERC20Pausable.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/extensions/ERC20Pausable.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/extensions/ERC20Permit.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/extensions/ERC20Permit.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/extensions/ERC20Votes.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/extensions/ERC20Votes.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/extensions/IERC20Metadata.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/extensions/IERC20Metadata.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC20/extensions/IERC20Permit.sol",
        include_str!("../openzeppelin/contracts/token/ERC20/extensions/IERC20Permit.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/ERC721.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/ERC721.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/IERC721.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/IERC721.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/IERC721Receiver.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/IERC721Receiver.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/extensions/ERC721Burnable.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/extensions/ERC721Burnable.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/extensions/ERC721Enumerable.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/extensions/ERC721Enumerable.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/extensions/ERC721Pausable.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/extensions/ERC721Pausable.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/extensions/ERC721URIStorage.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/extensions/ERC721URIStorage.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/extensions/ERC721Votes.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/extensions/ERC721Votes.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/extensions/IERC721Enumerable.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/extensions/IERC721Enumerable.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/extensions/IERC721Metadata.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/extensions/IERC721Metadata.sol"),
    ),
    (
        "@openzeppelin/contracts/token/ERC721/utils/ERC721Utils.sol",
        include_str!("../openzeppelin/contracts/token/ERC721/utils/ERC721Utils.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/Address.sol",
        include_str!("../openzeppelin/contracts/utils/Address.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/Context.sol",
        include_str!("../openzeppelin/contracts/utils/Context.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/Errors.sol",
        include_str!("../openzeppelin/contracts/utils/Errors.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/Nonces.sol",
        include_str!("../openzeppelin/contracts/utils/Nonces.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/Pausable.sol",
        include_str!("../openzeppelin/contracts/utils/Pausable.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/ShortStrings.sol",
        include_str!("../openzeppelin/contracts/utils/ShortStrings.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/StorageSlot.sol",
        include_str!("../openzeppelin/contracts/utils/StorageSlot.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/Strings.sol",
        include_str!("../openzeppelin/contracts/utils/Strings.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/cryptography/ECDSA.sol",
        include_str!("../openzeppelin/contracts/utils/cryptography/ECDSA.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/cryptography/EIP712.sol",
        include_str!("../openzeppelin/contracts/utils/cryptography/EIP712.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/cryptography/MessageHashUtils.sol",
        include_str!("../openzeppelin/contracts/utils/cryptography/MessageHashUtils.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/introspection/ERC165.sol",
        include_str!("../openzeppelin/contracts/utils/introspection/ERC165.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/introspection/IERC165.sol",
        include_str!("../openzeppelin/contracts/utils/introspection/IERC165.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/math/Math.sol",
        include_str!("../openzeppelin/contracts/utils/math/Math.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/math/SafeCast.sol",
        include_str!("../openzeppelin/contracts/utils/math/SafeCast.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/math/SignedMath.sol",
        include_str!("../openzeppelin/contracts/utils/math/SignedMath.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/structs/Checkpoints.sol",
        include_str!("../openzeppelin/contracts/utils/structs/Checkpoints.sol"),
    ),
    (
        "@openzeppelin/contracts/utils/types/Time.sol",
        include_str!("../openzeppelin/contracts/utils/types/Time.sol"),
    ),
];
