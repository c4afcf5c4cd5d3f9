//! Position of a node inside a manifest tree

use std::fmt;

/// One step from a parent node to a child
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping entry, by its key rendered as text
    Key(String),
    /// Sequence element
    Index(usize),
}

impl PathSegment {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    /// Render a full path as `spec.template.spec.containers[0].image`
    pub fn display_path(path: &[PathSegment]) -> String {
        let mut out = String::new();
        for segment in path {
            match segment {
                Self::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                Self::Index(i) => out.push_str(&format!("[{i}]")),
            }
        }
        out
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}
