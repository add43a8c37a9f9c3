//! Glyphpick - Main entry point.
//!
//! Meant to be bound to a hotkey by the desktop environment: builds the
//! symbol catalog, runs one blocking selection attempt through rofi, types
//! the chosen glyph through xdotool, exits. A dismissed picker or a
//! malformed selection is a normal, silent exit; only an unlaunchable
//! external tool produces a diagnostic.

use anyhow::Result;
use clap::Parser;

use glyphpick_catalog::Catalog;
use glyphpick_pipeline::{RofiSelector, SelectionOutcome, SelectionPipeline, XdotoolInjector};

/// Search a catalog of LaTeX-style symbol mnemonics and type the chosen
/// glyph into the focused window.
#[derive(Debug, Parser)]
#[command(name = "glyphpick", version, about)]
struct Cli {}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they can never leak into the selector
    // protocol.
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let catalog = Catalog::builtin();
    tracing::debug!(entries = catalog.len(), "symbol catalog built");

    let selector = RofiSelector::new();
    if !selector.is_available() {
        anyhow::bail!(
            "selector '{}' is not installed or not on PATH",
            selector.command()
        );
    }

    let pipeline = SelectionPipeline::new(selector, XdotoolInjector::new());
    match pipeline.run(&catalog)? {
        SelectionOutcome::Injected { key, .. } => {
            tracing::debug!(key = %key, "glyph injected");
        }
        SelectionOutcome::Cancelled => {
            tracing::debug!("selection cancelled");
        }
        SelectionOutcome::Discarded => {
            tracing::debug!("selection discarded");
        }
    }

    Ok(())
}
