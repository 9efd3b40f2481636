//! Output-path policies and file writing.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::MdpError;

/// Where the rendered page is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPolicy {
    /// A uniquely named `mdp*.html` file in the system temp directory,
    /// removed after the preview unless it is skipped.
    Temp,
    /// `<input-file-name>.html` in the current working directory, left on
    /// disk and overwritten without confirmation.
    Sibling,
}

/// Derive the sibling output path for an input file.
///
/// The full file name (extension included) is kept, so `notes.md` becomes
/// `notes.md.html` and distinct inputs cannot collide.
pub fn sibling_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("out"));
    PathBuf::from(format!("{name}.html"))
}

/// Create the uniquely named temp file the rendered page is written into.
pub fn create_temp_file() -> Result<NamedTempFile, MdpError> {
    tempfile::Builder::new()
        .prefix("mdp")
        .suffix(".html")
        .tempfile()
        .map_err(|source| MdpError::OutputWrite {
            path: env::temp_dir(),
            source,
        })
}

/// Persist rendered page bytes to `path`.
pub fn save_html(path: &Path, html: &str) -> Result<(), MdpError> {
    fs::write(path, html).map_err(|source| MdpError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_path_keeps_the_input_extension() {
        assert_eq!(
            sibling_path(Path::new("docs/notes.md")),
            PathBuf::from("notes.md.html")
        );
    }

    #[test]
    fn sibling_path_is_relative_to_the_working_directory() {
        assert_eq!(
            sibling_path(Path::new("/home/user/notes.md")),
            PathBuf::from("notes.md.html")
        );
    }

    #[test]
    fn temp_file_name_is_recognizable() {
        let temp = create_temp_file().unwrap();
        let name = temp
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();

        assert!(name.starts_with("mdp"), "unexpected temp name: {name}");
        assert!(name.ends_with(".html"), "unexpected temp name: {name}");
    }

    #[test]
    fn save_html_reports_the_failing_path() {
        let err = save_html(Path::new("no-such-dir/out.html"), "<p>hi</p>").unwrap_err();
        assert!(matches!(err, MdpError::OutputWrite { .. }), "got {err:?}");
    }
}
