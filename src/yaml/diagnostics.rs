//! Diagnostics for YAML configuration files

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A syntax or shape error pinned to a location in the source file
#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse {filename}: {message}")]
#[diagnostic(
    code(basesize::yaml::syntax),
    help("Check the indentation and the field names against the default file (`basesize config init`)")
)]
pub struct YamlSyntaxError {
    pub filename: String,
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err.location().map(|loc| {
            let offset = loc.index().min(content.len());
            SourceSpan::from((offset, 1usize.min(content.len() - offset)))
        });

        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}

/// Errors produced while reading YAML
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("IO error: {0}")]
    #[diagnostic(code(basesize::yaml::io))]
    Io(#[from] std::io::Error),
}
