//! Diagnostic plumbing shared by the parser, the semantic layer and the test suite.
//!
//! Errors from every layer implement [`IntoDiagnostic`] and are collected into a
//! [`DiagnosticContext`], which owns the source files they point into.

use std::collections::HashMap;

use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};

// Re-export commonly used types from codespan_reporting
pub use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

/// Trait for types that can be converted into a diagnostic.
pub trait IntoDiagnostic {
    /// Convert this error into a codespan diagnostic located in `file_id`.
    fn into_diagnostic(&self, file_id: usize) -> Diagnostic<usize>;
}

/// Collects diagnostics together with the files they refer to.
pub struct DiagnosticContext {
    files: SimpleFiles<String, String>,
    diagnostics: Vec<Diagnostic<usize>>,
    file_map: HashMap<String, usize>,
}

impl DiagnosticContext {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            diagnostics: Vec::new(),
            file_map: HashMap::new(),
        }
    }

    /// Register a source file, returning its id.
    ///
    /// Adding the same name twice returns the id of the first registration.
    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&id) = self.file_map.get(&name) {
            return id;
        }
        let id = self.files.add(name.clone(), source.into());
        self.file_map.insert(name, id);
        id
    }

    /// Record an error located in `file_id`.
    pub fn report<D: IntoDiagnostic + ?Sized>(&mut self, error: &D, file_id: usize) {
        self.diagnostics.push(error.into_diagnostic(file_id));
    }

    /// Record an already-built diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic<usize>) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, Severity::Error | Severity::Bug))
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic<usize>] {
        &self.diagnostics
    }

    pub fn file_id(&self, name: &str) -> Option<usize> {
        self.file_map.get(name).copied()
    }

    /// Emit all diagnostics to stderr with color support.
    pub fn emit(&self) -> Result<(), codespan_reporting::files::Error> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let result = self.emit_to(&mut writer.lock());
        result
    }

    /// Emit all diagnostics to a custom writer.
    pub fn emit_to<W: WriteColor>(
        &self,
        writer: &mut W,
    ) -> Result<(), codespan_reporting::files::Error> {
        let config = term::Config::default();

        for diagnostic in &self.diagnostics {
            term::emit(writer, &config, &self.files, diagnostic)?;
        }

        Ok(())
    }

    /// Render all diagnostics as plain text.
    pub fn render(&self) -> Result<String, codespan_reporting::files::Error> {
        let mut writer = NoColor::new(Vec::new());
        self.emit_to(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }
}

impl Default for DiagnosticContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unexpected(std::ops::Range<usize>);

    impl IntoDiagnostic for Unexpected {
        fn into_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
            Diagnostic::error()
                .with_message("unexpected token")
                .with_labels(vec![Label::primary(file_id, self.0.clone()).with_message("here")])
        }
    }

    #[test]
    fn test_add_file_deduplicates_names() {
        let mut ctx = DiagnosticContext::new();
        let a = ctx.add_file("main.swift", "let x = 1");
        let b = ctx.add_file("main.swift", "ignored");
        assert_eq!(a, b);
        assert_eq!(ctx.file_id("main.swift"), Some(a));
        assert_eq!(ctx.file_id("other.swift"), None);
    }

    #[test]
    fn test_report_and_render() {
        let mut ctx = DiagnosticContext::new();
        let file = ctx.add_file("main.swift", "let x = }");
        assert!(ctx.is_empty());

        ctx.report(&Unexpected(8..9), file);

        assert!(ctx.has_errors());
        assert_eq!(ctx.len(), 1);
        let rendered = ctx.render().unwrap();
        assert!(rendered.contains("unexpected token"));
        assert!(rendered.contains("main.swift"));
    }

    #[test]
    fn test_warnings_are_not_errors() {
        let mut ctx = DiagnosticContext::new();
        ctx.add_diagnostic(Diagnostic::warning().with_message("unused"));
        assert!(!ctx.has_errors());
        assert_eq!(ctx.diagnostics()[0].message, "unused");
    }
}
