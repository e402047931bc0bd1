//! Classified clipboard content value object

use std::fmt;

/// Placeholder shown for image content (raw bytes are not retained)
pub const IMAGE_PLACEHOLDER: &str = "[image on clipboard]";

/// Placeholder prefix for a file list
pub const FILE_LIST_PREFIX: &str = "[files on clipboard]: ";

/// Placeholder shown when no format could be classified
pub const UNSUPPORTED_PLACEHOLDER: &str = "[unsupported clipboard content]";

/// Content categories the watcher can classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Text,
    Image,
    FileList,
    Unsupported,
}

impl ContentKind {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::FileList => "files",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified clipboard value.
///
/// The value is the full observed content for text, and a fixed
/// placeholder form for images, file lists, and unclassifiable content.
/// Entries are immutable once created; history replaces, never mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    kind: ContentKind,
    value: String,
}

impl ContentEntry {
    /// Create a text entry holding the full text
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Text,
            value: value.into(),
        }
    }

    /// Create an image entry with the fixed placeholder value
    pub fn image() -> Self {
        Self {
            kind: ContentKind::Image,
            value: IMAGE_PLACEHOLDER.to_string(),
        }
    }

    /// Create a file-list entry listing the file names joined by `", "`
    pub fn file_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = names
            .into_iter()
            .map(|n| n.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            kind: ContentKind::FileList,
            value: format!("{}{}", FILE_LIST_PREFIX, joined),
        }
    }

    /// Create the entry used when no supported format is available
    pub fn unsupported() -> Self {
        Self {
            kind: ContentKind::Unsupported,
            value: UNSUPPORTED_PLACEHOLDER.to_string(),
        }
    }

    /// The content kind tag
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// The full value. Equality for dedup and recall comparison is always
    /// on this, never on a truncated form.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Truncated display form: at most `max_chars` characters, with an
    /// ASCII ellipsis appended only when something was cut off.
    pub fn preview(&self, max_chars: usize) -> String {
        truncate_chars(&self.value, max_chars)
    }
}

/// Truncate to at most `max_chars` characters on a char boundary,
/// appending "..." only when truncation happened.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut chars = value.char_indices();
    match chars.nth(max_chars) {
        Some((idx, _)) => format!("{}...", &value[..idx]),
        None => value.to_string(),
    }
}
