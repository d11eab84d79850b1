//! Sigil - compose-style service manifest generator
//!
//! This is the main CLI entry point for Sigil.

use clap::{Parser, Subcommand};
use sigil::error::Result;
use sigil::manifest::{manifest, Manifest};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Sigil - compose-style service manifest generator
#[derive(Parser)]
#[command(name = "sigil")]
#[command(author = "Evoker Industries")]
#[command(version)]
#[command(about = "Builds service manifests and renders them as text", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in sample manifest
    Sample {
        /// Indent width in spaces
        #[arg(short, long, default_value = "3")]
        indent: usize,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit the document model as JSON instead of manifest text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Sample {
            indent,
            output,
            json,
        } => {
            let doc = sample_manifest()?;
            let text = if json {
                let mut text = serde_json::to_string_pretty(&doc)?;
                text.push('\n');
                text
            } else {
                doc.render(&" ".repeat(indent))?
            };
            write_output(&text, output.as_deref())?;
        }
    }

    Ok(())
}

/// The sample manifest: one mysql service with credentials and a
/// published port
fn sample_manifest() -> Result<Manifest> {
    manifest(|m| {
        m.set_version(3)?;
        m.add_service("db", |svc| {
            svc.set_image("mysql")?;
            svc.add_env("USER", "myuser");
            svc.add_env("PASSWORD", "mypassword");
            svc.add_port(9999, 3306);
            Ok(())
        })
    })
}

/// Write rendered text to a file, or stdout when no path is given
fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!("Wrote manifest to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_manifest_renders() {
        let doc = sample_manifest().unwrap();
        let text = doc.render("   ").unwrap();
        assert!(text.starts_with("version: '3'\nservices:\n"));
        assert!(text.contains("   db:"));
        assert!(text.contains("- \"9999:3306\""));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.txt");
        let text = sample_manifest().unwrap().render("  ").unwrap();

        write_output(&text, Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }
}
