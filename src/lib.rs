//! Core library for mdp, a Markdown preview tool.
//!
//! One invocation is a straight-line pipeline: read the input file, render
//! it to HTML, sanitize the HTML, wrap it in a page template, write the
//! result to disk, announce the path, and open it with the OS default
//! viewer. The first error aborts everything downstream of it.

pub mod cli;
pub mod error;
pub mod output;
pub mod preview;
pub mod render;
pub mod template;

use std::env::consts;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Context;

use crate::cli::Cli;
use crate::error::MdpError;
use crate::output::OutputPolicy;
use crate::template::PageTemplate;

/// Delay between the preview command returning and temp-file cleanup, so
/// slow-starting viewers get a chance to open the file before it disappears.
pub const VIEWER_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Resolved settings for one pipeline run.
#[derive(Debug)]
pub struct Options {
    pub input: PathBuf,
    pub template: Option<PathBuf>,
    pub skip_preview: bool,
    pub policy: OutputPolicy,
    /// Host OS identifier used for previewer dispatch.
    pub platform: String,
    /// Grace period before temp-file cleanup.
    pub grace: Duration,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options {
            input: cli.file,
            template: cli.template,
            skip_preview: cli.skip_preview,
            policy: if cli.sibling {
                OutputPolicy::Sibling
            } else {
                OutputPolicy::Temp
            },
            platform: consts::OS.to_string(),
            grace: VIEWER_GRACE_PERIOD,
        }
    }
}

/// Run the whole pipeline, writing the resolved output path to `out`.
///
/// The path is announced only after the write has succeeded, so an announced
/// path always exists at that moment. With the temp policy the file is gone
/// again by the time `run` returns unless the preview was skipped.
pub fn run(options: &Options, out: &mut dyn Write) -> anyhow::Result<()> {
    let markdown = fs::read_to_string(&options.input).map_err(|source| MdpError::InputRead {
        path: options.input.clone(),
        source,
    })?;

    let page_template = match &options.template {
        Some(path) => PageTemplate::from_file(path)?,
        None => PageTemplate::built_in(),
    };

    let body = render::sanitize(&render::render(&markdown));
    let html = page_template.render(&body)?;

    match options.policy {
        OutputPolicy::Sibling => {
            let out_path = output::sibling_path(&options.input);
            output::save_html(&out_path, &html)?;
            announce(out, &out_path)?;

            if options.skip_preview {
                return Ok(());
            }

            preview::open(&options.platform, &out_path)?;
            Ok(())
        }
        OutputPolicy::Temp => {
            let temp_file = output::create_temp_file()?;
            let out_path = temp_file.path().to_path_buf();
            output::save_html(&out_path, &html)?;
            announce(out, &out_path)?;

            if options.skip_preview {
                // The caller gets to keep the file.
                temp_file.keep().map_err(|err| MdpError::OutputWrite {
                    path: out_path.clone(),
                    source: err.error,
                })?;
                return Ok(());
            }

            let previewed = preview::open(&options.platform, &out_path);

            // The viewer may have launched even when the command reported
            // failure, so the grace period applies either way.
            thread::sleep(options.grace);

            // Dropping the temp file handle removes it from disk.
            drop(temp_file);
            log::debug!("removed preview file {}", out_path.display());

            previewed?;
            Ok(())
        }
    }
}

fn announce(out: &mut dyn Write, path: &Path) -> anyhow::Result<()> {
    writeln!(out, "{}", path.display()).context("Failed to write the output path")
}
