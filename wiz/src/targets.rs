//! Registry of the target ecosystems the CLI can generate for.

use eyre::{Result, eyre};
use wizgen_codegen::Target;
use wizgen_codegen_cairo::Cairo;
use wizgen_codegen_solidity::Solidity;
use wizgen_codegen_stellar::Stellar;
use wizgen_codegen_stylus::Stylus;

static SOLIDITY: Solidity = Solidity;
static CAIRO: Cairo = Cairo;
static STELLAR: Stellar = Stellar;
static STYLUS: Stylus = Stylus;

/// Every supported target, in display order.
pub fn all() -> [&'static dyn Target; 4] {
    [&SOLIDITY, &CAIRO, &STELLAR, &STYLUS]
}

pub fn names() -> Vec<&'static str> {
    all().iter().map(|t| t.name()).collect()
}

/// Look up a target by its identifier (e.g., "cairo").
pub fn find(name: &str) -> Option<&'static dyn Target> {
    all().into_iter().find(|t| t.name() == name)
}

/// Like [`find`], failing with the list of available targets.
pub fn get(name: &str) -> Result<&'static dyn Target> {
    find(name).ok_or_else(|| {
        eyre!(
            "Unknown target '{name}' (available: {})",
            names().join(", ")
        )
    })
}

/// The named target, or every target when `name` is absent.
pub fn select(name: Option<&str>) -> Result<Vec<&'static dyn Target>> {
    match name {
        Some(name) => Ok(vec![get(name)?]),
        None => Ok(all().to_vec()),
    }
}
