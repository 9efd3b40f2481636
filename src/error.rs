//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Every way a preview run can fail. All variants are terminal for the
/// current invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum MdpError {
    #[error("Failed to read input file: {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template file not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Failed to read template file: {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse template")]
    TemplateParse(#[from] tinytemplate::error::Error),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Could not find '{0}' on the search path")]
    ExecutableNotFound(String),

    #[error("Failed to launch preview command '{command}'")]
    PreviewLaunch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Preview command '{command}' exited with {status}")]
    PreviewExit { command: String, status: ExitStatus },
}
