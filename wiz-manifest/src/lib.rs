//! `wizard.toml` generation requests.
//!
//! ```
//! use wizgen_manifest::Request;
//!
//! let request: Request = r#"
//! [contract]
//! target = "cairo"
//! kind = "ERC721"
//! mintable = true
//! "#
//! .parse()
//! .unwrap();
//! assert_eq!(request.kind(), "ERC721");
//! assert_eq!(request.record().unwrap()["mintable"], true);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod request;
mod span;

pub use error::{Error, Result, SourceContext};
pub use request::{FILE_NAME, Request, template};
