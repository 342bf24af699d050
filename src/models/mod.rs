use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetErrorKind {
    Empty,
    MissingHash,
    EmptyFragment,
    Whitespace,
}

/// Rejection of a malformed anchor target.
#[derive(Clone, Debug)]
pub struct TargetError {
    pub kind: TargetErrorKind,
    pub message: String,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TargetError {}

impl TargetError {
    fn new(kind: TargetErrorKind, raw: &str) -> Self {
        let reason = match kind {
            TargetErrorKind::Empty => "target is empty",
            TargetErrorKind::MissingHash => "target must start with `#`",
            TargetErrorKind::EmptyFragment => "target has no fragment after `#`",
            TargetErrorKind::Whitespace => "target fragment contains whitespace",
        };
        Self {
            kind,
            message: format!("invalid anchor target {raw:?}: {reason}"),
        }
    }
}

/// A fragment identifier such as `#intro`.
///
/// Always matches `^#\S+$`; the only way to obtain one is through
/// [`LinkTarget::parse`] (or its `FromStr`/`TryFrom` wrappers).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkTarget(String);

impl LinkTarget {
    pub fn parse(raw: &str) -> Result<Self, TargetError> {
        if raw.is_empty() {
            return Err(TargetError::new(TargetErrorKind::Empty, raw));
        }
        let Some(fragment) = raw.strip_prefix('#') else {
            return Err(TargetError::new(TargetErrorKind::MissingHash, raw));
        };
        if fragment.is_empty() {
            return Err(TargetError::new(TargetErrorKind::EmptyFragment, raw));
        }
        if fragment.chars().any(char::is_whitespace) {
            return Err(TargetError::new(TargetErrorKind::Whitespace, raw));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment without the leading `#`, i.e. the id of the destination element.
    pub fn fragment(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LinkTarget {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for LinkTarget {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LinkTarget {
    type Error = TargetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LinkTarget> for String {
    fn from(value: LinkTarget) -> Self {
        value.0
    }
}

/// Payload handed to the controller when a link is clicked.
///
/// `title` is only set when the link's title is a literal string.
#[derive(Clone, Debug)]
pub struct LinkClick {
    pub href: LinkTarget,
    pub title: Option<String>,
    pub event: Option<web_sys::MouseEvent>,
}

/// One entry of a data-driven table of contents.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub href: LinkTarget,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    /// Number of levels in this subtree (a leaf is 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TocEntry::depth).max().unwrap_or(0)
    }
}

#[derive(Clone, Debug)]
pub struct TocError {
    pub message: String,
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TocError {}

impl From<serde_json::Error> for TocError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            message: format!("invalid table of contents: {e}"),
        }
    }
}

pub fn parse_toc(json: &str) -> Result<Vec<TocEntry>, TocError> {
    let entries: Vec<TocEntry> = serde_json::from_str(json)?;
    Ok(entries)
}
