//! One blocking selection attempt.

use glyphpick_catalog::Catalog;

use crate::error::PipelineResult;
use crate::injector::Injector;
use crate::render::{parse_selection, render_lines};
use crate::selector::Selector;

/// Outcome of one selection attempt.
///
/// Every variant is a success from the process's point of view; only
/// backend launch faults are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A catalog entry was chosen and its glyph dispatched to the injector.
    Injected {
        /// The mnemonic key that was selected.
        key: String,
        /// The glyph handed to the injector.
        value: String,
    },
    /// The selector was dismissed without a choice.
    Cancelled,
    /// The returned line had no separator, or named a key not in the
    /// catalog.
    Discarded,
}

/// Drives select → parse → lookup → inject against an explicit catalog.
pub struct SelectionPipeline<S, I> {
    selector: S,
    injector: I,
}

impl<S: Selector, I: Injector> SelectionPipeline<S, I> {
    /// Build a pipeline over the given backends.
    pub fn new(selector: S, injector: I) -> Self {
        Self { selector, injector }
    }

    /// Run one selection attempt.
    ///
    /// Blocks for as long as the selector keeps the user's attention; there
    /// is deliberately no timeout. The injector is invoked at most once,
    /// and only with a value re-read from the catalog.
    pub fn run(&self, catalog: &Catalog) -> PipelineResult<SelectionOutcome> {
        let input = render_lines(catalog);

        let Some(line) = self.selector.select(&input)? else {
            tracing::debug!("selection cancelled");
            return Ok(SelectionOutcome::Cancelled);
        };

        let Some(key) = parse_selection(&line) else {
            tracing::debug!(line = %line, "returned line has no separator, ignoring");
            return Ok(SelectionOutcome::Discarded);
        };

        let Some(value) = catalog.get(key) else {
            tracing::debug!(key = %key, "selected key not in catalog, ignoring");
            return Ok(SelectionOutcome::Discarded);
        };

        self.injector.inject(value)?;
        Ok(SelectionOutcome::Injected {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use glyphpick_catalog::{Catalog, SymbolTable};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::PipelineError;

    const GREEK: SymbolTable = SymbolTable {
        name: "greek",
        entries: &[(r"\alpha", "α"), (r"\beta", "β")],
    };

    /// Selector that returns a canned line (or cancellation) and records
    /// what it was shown.
    struct FixedSelector {
        line: Option<&'static str>,
        shown: RefCell<Option<String>>,
    }

    impl FixedSelector {
        fn returning(line: Option<&'static str>) -> Self {
            Self {
                line,
                shown: RefCell::new(None),
            }
        }
    }

    impl Selector for FixedSelector {
        fn select(&self, input: &str) -> PipelineResult<Option<String>> {
            *self.shown.borrow_mut() = Some(input.to_string());
            Ok(self.line.map(str::to_string))
        }
    }

    /// Injector that records every dispatched string.
    #[derive(Default)]
    struct RecordingInjector {
        injected: RefCell<Vec<String>>,
    }

    impl Injector for RecordingInjector {
        fn inject(&self, text: &str) -> PipelineResult<()> {
            self.injected.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn run_with(line: Option<&'static str>) -> (SelectionOutcome, Vec<String>, String) {
        let catalog = Catalog::from_tables(&[GREEK]);
        let pipeline = SelectionPipeline::new(FixedSelector::returning(line), RecordingInjector::default());
        let outcome = pipeline.run(&catalog).unwrap();
        let injected = pipeline.injector.injected.borrow().clone();
        let shown = pipeline.selector.shown.borrow().clone().unwrap();
        (outcome, injected, shown)
    }

    #[test]
    fn test_exact_dispatch() {
        let (outcome, injected, shown) = run_with(Some("\\alpha → α"));

        assert_eq!(shown, "\\alpha → α\n\\beta → β");
        assert_eq!(
            outcome,
            SelectionOutcome::Injected {
                key: r"\alpha".to_string(),
                value: "α".to_string(),
            }
        );
        assert_eq!(injected, vec!["α".to_string()]);
    }

    #[test]
    fn test_cancellation_is_a_no_op() {
        let (outcome, injected, _) = run_with(None);
        assert_eq!(outcome, SelectionOutcome::Cancelled);
        assert!(injected.is_empty());
    }

    #[test]
    fn test_line_without_separator_is_discarded() {
        let (outcome, injected, _) = run_with(Some("garbage text with no arrow"));
        assert_eq!(outcome, SelectionOutcome::Discarded);
        assert!(injected.is_empty());
    }

    #[test]
    fn test_unknown_key_is_discarded() {
        let (outcome, injected, _) = run_with(Some("\\zzz123 → 😀"));
        assert_eq!(outcome, SelectionOutcome::Discarded);
        assert!(injected.is_empty());
    }

    #[test]
    fn test_echoed_value_is_not_trusted() {
        // The catalog value wins over whatever the picker echoed back.
        let (outcome, injected, _) = run_with(Some("\\beta → TAMPERED"));
        assert_eq!(
            outcome,
            SelectionOutcome::Injected {
                key: r"\beta".to_string(),
                value: "β".to_string(),
            }
        );
        assert_eq!(injected, vec!["β".to_string()]);
    }

    #[test]
    fn test_selector_error_propagates() {
        struct FailingSelector;
        impl Selector for FailingSelector {
            fn select(&self, _input: &str) -> PipelineResult<Option<String>> {
                Err(PipelineError::selector_launch(
                    "rofi",
                    std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                ))
            }
        }

        let catalog = Catalog::from_tables(&[GREEK]);
        let pipeline = SelectionPipeline::new(FailingSelector, RecordingInjector::default());
        let err = pipeline.run(&catalog).unwrap_err();
        assert!(matches!(err, PipelineError::SelectorLaunch { .. }));
    }
}
