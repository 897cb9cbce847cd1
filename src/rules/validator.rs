// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::config::RuleSeverity;
use console::{style, Style};

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Name of the rule that failed.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Severity the rule is configured with.
    pub level: RuleSeverity,
    /// Line number where the issue was found.
    pub line: Option<usize>,
}

impl ValidationIssue {
    pub fn is_error(&self) -> bool {
        self.level == RuleSeverity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = if self.is_error() {
            (style("✖").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{}   {} {}",
            prefix,
            self.message,
            code_style.apply_to(format!("[{}]", self.rule))
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "rule": self.rule,
            "level": self.level.level(),
            "message": self.message,
            "line": self.line,
        })
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The message as given.
    pub input: String,
    /// Validation errors.
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings.
    pub warnings: Vec<ValidationIssue>,
    /// The message matched a default ignore pattern and was not checked.
    pub ignored: bool,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(input: String) -> Self {
        Self {
            input,
            errors: Vec::new(),
            warnings: Vec::new(),
            ignored: false,
        }
    }

    /// Create a result for a message that was skipped.
    pub fn ignored(input: String) -> Self {
        Self {
            ignored: true,
            ..Self::new(input)
        }
    }

    /// File an issue under errors or warnings according to its level.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.level {
            RuleSeverity::Error => self.errors.push(issue),
            RuleSeverity::Warning => self.warnings.push(issue),
            RuleSeverity::Disabled => {}
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!("{}", self.to_json()),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let header = self.input.lines().next().unwrap_or("");
        println!("{}   input: {}", style("⧗").dim(), style(header).bold());

        if self.ignored {
            println!("{}   skipped by default ignores", style("→").dim());
            return;
        }

        for error in &self.errors {
            println!("{}", error.format());
        }
        for warning in &self.warnings {
            println!("{}", warning.format());
        }

        let mark = if self.is_valid() {
            style("✔").green().bold()
        } else {
            style("✖").red().bold()
        };
        println!();
        println!("{}   {}", mark, self.summary());
    }

    /// Render the result as JSON.
    pub fn to_json(&self) -> String {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "ignored": self.ignored,
            "input": self.input,
            "errors": self.errors.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.ignored {
            "Ignored".to_string()
        } else if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}
