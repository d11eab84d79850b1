//! Compose-style manifest construction and rendering
//!
//! This module provides the manifest document builder, the per-service
//! builder, and the indented text renderer.

pub mod document;
pub mod field;
pub mod service;

pub use document::{manifest, Manifest};
pub use field::WriteOnce;
pub use service::{EnvEntry, PortMapping, Service};
