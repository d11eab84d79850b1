//! Manifest document builder and renderer

use super::field::WriteOnce;
use super::service::Service;
use crate::error::Result;
use serde::Serialize;

/// A service manifest document
///
/// Populated in a single construction pass (see [`manifest`]) and then
/// rendered any number of times. The version is write-once; services
/// keep their insertion order, which is the order they render in.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    version: WriteOnce<u32>,
    services: Vec<Service>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self {
            version: WriteOnce::new("version"),
            services: Vec::new(),
        }
    }

    /// Manifest version, if set
    pub fn version(&self) -> Option<u32> {
        self.version.peek().copied()
    }

    /// Services in insertion order
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Set the version; fails if a version was already set
    pub fn set_version(&mut self, version: u32) -> Result<()> {
        self.version.set(version)
    }

    /// Add a named service, populated by the configuration closure
    ///
    /// The closure runs synchronously against the new entry before it
    /// is appended. Names are not checked for uniqueness or format.
    pub fn add_service<F>(&mut self, name: &str, configure: F) -> Result<()>
    where
        F: FnOnce(&mut Service) -> Result<()>,
    {
        let mut service = Service::new(name);
        configure(&mut service)?;
        tracing::debug!("Added service: {}", name);
        self.services.push(service);
        Ok(())
    }

    /// Render the manifest as an indented text block
    ///
    /// Every line of the service block carries exactly one `indent`
    /// unit; indentation stays flat regardless of nesting depth. Fails
    /// if the version was never set, or if any service has no image.
    pub fn render(&self, indent: &str) -> Result<String> {
        let version = self.version.get()?;
        tracing::debug!("Rendering manifest with {} services", self.services.len());

        let mut lines = Vec::new();
        for service in &self.services {
            lines.extend(service.body()?);
        }
        let block: Vec<String> = lines
            .iter()
            .map(|line| format!("{}{}", indent, line))
            .collect();

        Ok(format!(
            "version: '{}'\nservices:\n{}\n",
            version,
            block.join("\n")
        ))
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a manifest in a single construction pass
///
/// Creates an empty document, hands it to the closure for population,
/// and returns it ready to render.
pub fn manifest<F>(build: F) -> Result<Manifest>
where
    F: FnOnce(&mut Manifest) -> Result<()>,
{
    let mut doc = Manifest::new();
    build(&mut doc)?;
    Ok(doc)
}
