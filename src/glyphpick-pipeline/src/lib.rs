//! Glyphpick Pipeline - from catalog to keystrokes.
//!
//! One selection attempt runs strictly sequentially:
//!
//! 1. Render the catalog as `"key → value"` display lines.
//! 2. Hand the list to an interactive [`Selector`] and block until it
//!    returns a line or is dismissed.
//! 3. Parse the key out of the returned line and re-look it up in the
//!    catalog; the echoed value portion is never trusted.
//! 4. Dispatch the authoritative glyph to an [`Injector`].
//!
//! Cancellation, malformed lines and unknown keys all degrade to a silent
//! no-op. Only a backend that cannot be launched surfaces as an error.
//!
//! The bundled backends shell out to rofi and xdotool; both sit behind
//! traits so other launchers or platform injectors can be dropped in
//! without touching the catalog or parsing logic.
//!
//! # Example
//!
//! ```no_run
//! use glyphpick_catalog::Catalog;
//! use glyphpick_pipeline::{RofiSelector, SelectionPipeline, XdotoolInjector};
//!
//! fn main() -> Result<(), glyphpick_pipeline::PipelineError> {
//!     let catalog = Catalog::builtin();
//!     let pipeline = SelectionPipeline::new(RofiSelector::new(), XdotoolInjector::new());
//!     let outcome = pipeline.run(&catalog)?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

mod error;
mod injector;
mod pipeline;
mod render;
mod selector;

pub use error::{PipelineError, PipelineResult};
pub use injector::{Injector, XdotoolInjector};
pub use pipeline::{SelectionOutcome, SelectionPipeline};
pub use render::{SEPARATOR, parse_selection, render_lines};
pub use selector::{RofiSelector, Selector};
