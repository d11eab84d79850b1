//! Sigil - a compose-style service manifest builder
//!
//! Sigil assembles a service manifest in a single construction pass and
//! renders it as an indented text block. It provides:
//!
//! - Closure-scoped builders for the document and each service entry
//! - Write-once `version` and `image` fields
//! - Ordered environment entries and port mappings
//! - Flat, single-level indented text output
//!
//! ```
//! # fn main() -> sigil::Result<()> {
//! use sigil::manifest::manifest;
//!
//! let doc = manifest(|m| {
//!     m.set_version(3)?;
//!     m.add_service("db", |svc| {
//!         svc.set_image("mysql")?;
//!         svc.add_env("USER", "myuser");
//!         svc.add_port(9999, 3306);
//!         Ok(())
//!     })
//! })?;
//!
//! println!("{}", doc.render("   ")?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod manifest;

pub use error::{Result, SigilError};
