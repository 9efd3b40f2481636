//! Wraps sanitized body markup in a page template.
//!
//! Templates use tinytemplate syntax with a two-field page model: `{title}`
//! and `{body}`. The body placeholder receives [`TrustedHtml`] and is
//! interpolated without escaping, which is why the renderer only accepts the
//! sanitizer's output type.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::MdpError;
use crate::render::TrustedHtml;

/// Title used for every rendered page.
pub const PAGE_TITLE: &str = "Markdown Preview Tool";

/// Built-in page shell used when no user template is given.
pub const DEFAULT_TEMPLATE: &str = "\
<!DOCTYPE html>
<html>
  <head>
    <meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\">
    <title>{title}</title>
  </head>
  <body>
{body}  </body>
</html>
";

const TEMPLATE_NAME: &str = "page";

#[derive(Serialize)]
struct Page<'a> {
    title: &'a str,
    body: &'a TrustedHtml,
}

/// A page template with `{title}` and `{body}` placeholders.
#[derive(Debug)]
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    /// The built-in default shell.
    pub fn built_in() -> Self {
        Self::from_source(DEFAULT_TEMPLATE)
    }

    /// A template from arbitrary source text.
    pub fn from_source(source: impl Into<String>) -> Self {
        PageTemplate {
            source: source.into(),
        }
    }

    /// Load a user-supplied template file.
    pub fn from_file(path: &Path) -> Result<Self, MdpError> {
        let source = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                MdpError::TemplateNotFound(path.to_path_buf())
            } else {
                MdpError::TemplateRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(Self::from_source(source))
    }

    /// Render the final page around sanitized body markup.
    pub fn render(&self, body: &TrustedHtml) -> Result<String, MdpError> {
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template(TEMPLATE_NAME, &self.source)?;

        let page = Page {
            title: PAGE_TITLE,
            body,
        };

        Ok(tt.render(TEMPLATE_NAME, &page)?)
    }
}
