//! Per-service manifest entry

use super::field::WriteOnce;
use crate::error::Result;
use serde::Serialize;

/// A single environment entry
///
/// Entries keep their insertion order; duplicate keys are allowed and
/// rendered as-is.
#[derive(Debug, Clone, Serialize)]
pub struct EnvEntry {
    /// Variable name
    pub key: String,
    /// Variable value
    pub value: String,
}

/// A host-to-container port mapping
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PortMapping {
    /// Port on the host
    pub host: u16,
    /// Port inside the container
    pub container: u16,
}

/// A named service entry in a manifest
///
/// Created through [`Manifest::add_service`](super::Manifest::add_service)
/// and populated inside its configuration closure. The image is
/// write-once; environment entries and port mappings append in order.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    name: String,
    image: WriteOnce<String>,
    environment: Vec<EnvEntry>,
    ports: Vec<PortMapping>,
}

impl Service {
    /// Create an empty service entry
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            image: WriteOnce::new("image"),
            environment: Vec::new(),
            ports: Vec::new(),
        }
    }

    /// Service name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image name, if set
    pub fn image(&self) -> Option<&str> {
        self.image.peek().map(String::as_str)
    }

    /// Environment entries in insertion order
    pub fn environment(&self) -> &[EnvEntry] {
        &self.environment
    }

    /// Port mappings in insertion order
    pub fn ports(&self) -> &[PortMapping] {
        &self.ports
    }

    /// Set the image; fails if an image was already set
    pub fn set_image(&mut self, image: &str) -> Result<()> {
        self.image.set(image.to_string())
    }

    /// Append an environment entry; duplicate keys are kept
    pub fn add_env(&mut self, key: &str, value: &str) {
        self.environment.push(EnvEntry {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    /// Append a port mapping
    pub fn add_port(&mut self, host: u16, container: u16) {
        self.ports.push(PortMapping { host, container });
    }

    /// Render the service standalone
    ///
    /// The `image` line and the environment/port entry blocks are each
    /// indented one `indent` unit; section headers stay bare. Fails if
    /// the image was never set.
    pub fn render(&self, indent: &str) -> Result<String> {
        let image = self.image.get()?;
        let mut out = String::new();
        out.push_str(&format!("{}:\n", self.name));
        out.push_str(&format!("{}image: {}\n", indent, image));
        out.push_str("environments:\n");
        for entry in &self.environment {
            out.push_str(&format!("{}- {}: {}\n", indent, entry.key, entry.value));
        }
        out.push_str("port:\n");
        for port in &self.ports {
            out.push_str(&format!("{}- \"{}:{}\"\n", indent, port.host, port.container));
        }
        Ok(out)
    }

    /// Flat line body used by the document renderer
    ///
    /// Carries no indentation of its own; the document applies the
    /// single prefix to every line.
    pub(crate) fn body(&self) -> Result<Vec<String>> {
        let image = self.image.get()?;
        let mut lines = Vec::with_capacity(4 + self.environment.len() + self.ports.len());
        lines.push(format!("{}:", self.name));
        lines.push(format!("image: {}", image));
        lines.push("environments:".to_string());
        for entry in &self.environment {
            lines.push(format!("- {}: {}", entry.key, entry.value));
        }
        lines.push("port:".to_string());
        for port in &self.ports {
            lines.push(format!("- \"{}:{}\"", port.host, port.container));
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SigilError;

    #[test]
    fn test_render_requires_image() {
        let svc = Service::new("db");
        let err = svc.render("  ").unwrap_err();
        assert!(matches!(err, SigilError::UninitializedField("image")));
    }

    #[test]
    fn test_render_standalone() {
        let mut svc = Service::new("db");
        svc.set_image("mysql").unwrap();
        svc.add_env("USER", "myuser");
        svc.add_port(9999, 3306);

        let text = svc.render("  ").unwrap();
        assert_eq!(
            text,
            "db:\n  image: mysql\nenvironments:\n  - USER: myuser\nport:\n  - \"9999:3306\"\n"
        );
    }

    #[test]
    fn test_empty_entry_blocks() {
        let mut svc = Service::new("cache");
        svc.set_image("redis").unwrap();

        let text = svc.render("  ").unwrap();
        assert_eq!(text, "cache:\n  image: redis\nenvironments:\nport:\n");
    }

    #[test]
    fn test_image_is_write_once() {
        let mut svc = Service::new("db");
        svc.set_image("mysql").unwrap();
        let err = svc.set_image("mysql").unwrap_err();
        assert!(matches!(err, SigilError::AlreadyInitialized("image")));
    }

    #[test]
    fn test_duplicate_env_keys_kept_in_order() {
        let mut svc = Service::new("db");
        svc.set_image("mysql").unwrap();
        svc.add_env("KEY", "first");
        svc.add_env("KEY", "second");

        let text = svc.render(" ").unwrap();
        let first = text.find("- KEY: first").unwrap();
        let second = text.find("- KEY: second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_body_is_flat() {
        let mut svc = Service::new("db");
        svc.set_image("mysql").unwrap();
        svc.add_env("USER", "myuser");
        svc.add_port(9999, 3306);

        let lines = svc.body().unwrap();
        assert_eq!(
            lines,
            vec![
                "db:",
                "image: mysql",
                "environments:",
                "- USER: myuser",
                "port:",
                "- \"9999:3306\"",
            ]
        );
    }
}
