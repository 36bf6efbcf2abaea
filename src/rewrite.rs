//! Default-document rewriting for directory-style and extensionless paths.
//!
//! ```text
//! /blog/            → /blog/index.html   (directory)
//! /blog             → /blog/index.html   (extensionless)
//! /styles/main.css  → /styles/main.css   (unchanged)
//! ```
//!
//! The trailing-slash check always runs first, so `/a.b/` is a directory even
//! though it contains a dot. No input is rejected: the empty string has no
//! trailing slash and no dot, so it becomes `/index.html`.

use std::fmt;

/// Document served for directory-style and extensionless paths.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Which rule applied to a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rewrite {
    /// Path ended in `/`; `index.html` was appended.
    Directory,
    /// Path had no `.`; `/index.html` was appended.
    Extensionless,
    /// Path names a file; left as is.
    Unchanged,
}

impl Rewrite {
    /// Classify a path without modifying it.
    #[inline]
    pub fn classify(path: &str) -> Self {
        if path.ends_with('/') {
            Rewrite::Directory
        } else if !path.contains('.') {
            Rewrite::Extensionless
        } else {
            Rewrite::Unchanged
        }
    }

    /// Whether the path was (or would be) modified.
    #[inline]
    pub fn is_rewrite(&self) -> bool {
        !matches!(self, Rewrite::Unchanged)
    }

    /// Short label used in log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Rewrite::Directory => "directory",
            Rewrite::Extensionless => "extensionless",
            Rewrite::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append the default document to `uri` in place.
///
/// Returns the rule that applied.
pub fn normalize_uri(uri: &mut String) -> Rewrite {
    let rule = Rewrite::classify(uri);

    match rule {
        Rewrite::Directory => {
            uri.reserve(DEFAULT_DOCUMENT.len());
            uri.push_str(DEFAULT_DOCUMENT);
        }
        Rewrite::Extensionless => {
            uri.reserve(DEFAULT_DOCUMENT.len() + 1);
            uri.push('/');
            uri.push_str(DEFAULT_DOCUMENT);
        }
        Rewrite::Unchanged => {}
    }

    rule
}

/// Return the normalized form of `path`, leaving the input untouched.
pub fn normalized(path: &str) -> String {
    let mut out = path.to_string();
    normalize_uri(&mut out);
    out
}
