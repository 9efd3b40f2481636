//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mdp",
    version,
    about = "Preview Markdown files in the browser as sanitized HTML."
)]
pub struct Cli {
    /// The Markdown file to preview.
    #[arg(short, long, value_name = "FILE_PATH")]
    pub file: PathBuf,

    /// A page template file to use instead of the built-in shell.
    #[arg(short, long, value_name = "TEMPLATE_PATH")]
    pub template: Option<PathBuf>,

    /// Skip opening the rendered file with the default viewer.
    #[arg(short, long)]
    pub skip_preview: bool,

    /// Write `<input-file-name>.html` to the current directory instead of a
    /// temp file, and leave it on disk.
    #[arg(long)]
    pub sibling: bool,
}
