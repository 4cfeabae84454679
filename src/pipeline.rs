//! The cleaning pipeline.
//!
//! Applies every rule of the catalog in order, each rule receiving the
//! previous rule's output. The catalog is static and read-only, so a
//! [`Pipeline`] is a cheap `Copy` handle that can be shared freely across
//! threads.
//!
//! # Example
//!
//! ```
//! use termclean::pipeline::{clean, Pipeline};
//!
//! let input = "┌────┐\n│ \x1b[32m$ test\x1b[0m │\n└────┘";
//! assert_eq!(clean(input), "test");
//!
//! let trace = Pipeline::standard().run_traced("| a  b |");
//! assert_eq!(trace.output(), "a b");
//! assert!(trace.changed_by("remove-pipes"));
//! ```
//!
//! # Idempotence
//!
//! Cleaning already-clean text is a no-op for the artifact classes the rules
//! target. Known exceptions:
//!
//! - a line that only looks like a JSON array can be rewritten again by the
//!   fallback branch;
//! - an all-pipe line such as `"|  |  |"` loses one pipe per pass on each edge;
//! - stacked prompt markers (`">>> x"`, `"$ $ ls"`) lose one marker per pass;
//! - whitespace hidden behind a color code (`"\x1b[32m   Compiling"`) is
//!   exposed only after whitespace normalization has run, so it survives the
//!   first pass as a single leading space.

use tracing::{debug, trace};

use crate::rules::{rules, CleaningRule};

/// An ordered sequence of cleaning rules.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    rules: &'static [CleaningRule],
}

impl Pipeline {
    /// The standard pipeline over the full rule catalog.
    pub fn standard() -> Self {
        Self { rules: rules() }
    }

    /// The rules this pipeline applies, in order.
    pub fn rules(&self) -> &'static [CleaningRule] {
        self.rules
    }

    /// Clean `input` by applying every rule in order.
    pub fn run(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let mut text = input.to_string();
        for rule in self.rules {
            let next = rule.apply(&text);
            trace!(
                rule = rule.name,
                input_len = text.len(),
                output_len = next.len(),
                "Applied cleaning rule"
            );
            text = next;
        }

        debug!(
            input_len = input.len(),
            output_len = text.len(),
            "Cleaned text"
        );
        text
    }

    /// Clean `input` and record each rule's intermediate output.
    pub fn run_traced(&self, input: &str) -> PipelineTrace {
        let mut steps = Vec::with_capacity(self.rules.len());
        let mut text = input.to_string();

        for rule in self.rules {
            let output = rule.apply(&text);
            let changed = output != text;
            steps.push(RuleStep {
                rule: rule.name,
                chars_before: text.chars().count(),
                chars_after: output.chars().count(),
                changed,
            });
            text = output;
        }

        PipelineTrace {
            steps,
            output: text,
        }
    }

    /// Whether cleaning the cleaned form of `input` leaves it unchanged.
    pub fn is_stable(&self, input: &str) -> bool {
        let once = self.run(input);
        self.run(&once) == once
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// What one rule did during a traced run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStep {
    pub rule: &'static str,
    pub chars_before: usize,
    pub chars_after: usize,
    pub changed: bool,
}

/// Per-rule record of a pipeline run plus its final output.
#[derive(Debug, Clone)]
pub struct PipelineTrace {
    steps: Vec<RuleStep>,
    output: String,
}

impl PipelineTrace {
    pub fn steps(&self) -> &[RuleStep] {
        &self.steps
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    /// Whether the named rule modified the text.
    pub fn changed_by(&self, rule: &str) -> bool {
        self.steps.iter().any(|s| s.rule == rule && s.changed)
    }
}

/// Clean `input` with the standard pipeline. `clean("") == ""`.
pub fn clean(input: &str) -> String {
    Pipeline::standard().run(input)
}

/// Clean possibly-absent input; `None` yields an empty string.
pub fn clean_optional(input: Option<&str>) -> String {
    input.map(clean).unwrap_or_default()
}

/// Whether [`clean`] is idempotent on `input`.
pub fn is_stable(input: &str) -> bool {
    Pipeline::standard().is_stable(input)
}
