//! Feature paths.
//!
//! A [`Path`] is an ordered sequence of name segments ("steps") that
//! identifies a feature's position in a possibly nested schema. Statistics
//! records are a flat list; paths are what give them structure: a feature
//! whose path is a strict prefix of another's is an ancestor candidate for
//! it.
//!
//! Paths have a human-readable dotted form (`user.address.zip`) used by
//! [`std::fmt::Display`] and [`std::str::FromStr`]. Steps that contain the
//! separator or quoting characters are wrapped in single quotes with
//! backslash escapes, so every path round-trips through its display form.
//! On the wire (serde) a path is just its step vector; no quoting applies.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors from parsing the dotted path form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathParseError {
    /// A quoted step was opened but never closed.
    #[error("unterminated quoted step")]
    UnterminatedQuote,

    /// The input ended in the middle of a backslash escape.
    #[error("dangling escape at end of input")]
    DanglingEscape,

    /// A quoted step was followed by something other than `.` or the end
    /// of the input.
    #[error("expected `.` after quoted step, found `{found}`")]
    ExpectedSeparator { found: char },
}

/// An ordered sequence of name segments identifying a feature.
///
/// Two paths are equal iff their step sequences are equal. Ordering is
/// lexicographic over steps, so a strict prefix always sorts before its
/// extensions.
///
/// # Example
///
/// ```
/// use statview::Path;
///
/// let address = Path::new(["user", "address"]);
/// let zip = address.child("zip");
///
/// assert!(address.is_strict_prefix_of(&zip));
/// assert_eq!(zip.parent(), Some(address));
/// assert_eq!(zip.to_string(), "user.address.zip");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<String>,
}

impl Path {
    /// Create a path from an ordered sequence of steps.
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// The empty path (zero steps).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The steps of this path, in order.
    #[inline]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the path has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last step, if any.
    #[inline]
    pub fn last_step(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    /// The path with the last step removed, or `None` for the empty path.
    pub fn parent(&self) -> Option<Path> {
        match self.steps.split_last() {
            Some((_, init)) => Some(Path {
                steps: init.to_vec(),
            }),
            None => None,
        }
    }

    /// A new path with `step` appended.
    pub fn child(&self, step: impl Into<String>) -> Path {
        let mut steps = self.steps.clone();
        steps.push(step.into());
        Path { steps }
    }

    /// Returns true iff `self`'s steps are a proper initial subsequence of
    /// `other`'s.
    ///
    /// The empty path is a strict prefix of every non-empty path; no path
    /// is a strict prefix of itself.
    pub fn is_strict_prefix_of(&self, other: &Path) -> bool {
        self.len() < other.len() && other.steps[..self.len()] == self.steps[..]
    }
}

/// A step needs quoting in the dotted form when the bare spelling would be
/// ambiguous: it is empty, contains the separator, or contains quoting
/// characters.
fn needs_quoting(step: &str) -> bool {
    step.is_empty() || step.contains(|c| matches!(c, '.' | '\'' | '"' | '\\'))
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_char('.')?;
            }
            if needs_quoting(step) {
                f.write_char('\'')?;
                for c in step.chars() {
                    if c == '\'' || c == '\\' {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('\'')?;
            } else {
                f.write_str(step)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The empty string is the empty path, not a path with one empty
        // step. A lone empty step is spelled `''`.
        if s.is_empty() {
            return Ok(Path::default());
        }

        let mut steps = Vec::new();
        let mut chars = s.chars();
        'steps: loop {
            if chars.clone().next() == Some('\'') {
                chars.next();
                let mut step = String::new();
                loop {
                    match chars.next() {
                        Some('\\') => {
                            let escaped = chars.next().ok_or(PathParseError::DanglingEscape)?;
                            step.push(escaped);
                        }
                        Some('\'') => break,
                        Some(c) => step.push(c),
                        None => return Err(PathParseError::UnterminatedQuote),
                    }
                }
                steps.push(step);
                match chars.next() {
                    None => break 'steps,
                    Some('.') => {}
                    Some(found) => return Err(PathParseError::ExpectedSeparator { found }),
                }
            } else {
                let mut step = String::new();
                loop {
                    match chars.next() {
                        None => {
                            steps.push(step);
                            break 'steps;
                        }
                        Some('.') => {
                            steps.push(step);
                            break;
                        }
                        Some(c) => step.push(c),
                    }
                }
            }
        }

        Ok(Path { steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_steps() {
        let path = Path::new(["a", "b"]);
        assert_eq!(path.steps(), &["a".to_string(), "b".to_string()]);
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert_eq!(path.last_step(), Some("b"));
    }

    #[test]
    fn empty_path() {
        let path = Path::empty();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.last_step(), None);
        assert_eq!(path.parent(), None);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn parent_and_child() {
        let path = Path::new(["a", "b", "c"]);
        assert_eq!(path.parent(), Some(Path::new(["a", "b"])));
        assert_eq!(Path::new(["a"]).parent(), Some(Path::empty()));
        assert_eq!(Path::new(["a"]).child("b"), Path::new(["a", "b"]));
    }

    #[test]
    fn strict_prefix() {
        let a = Path::new(["a"]);
        let ab = Path::new(["a", "b"]);
        let ac = Path::new(["a", "c"]);

        assert!(a.is_strict_prefix_of(&ab));
        assert!(!ab.is_strict_prefix_of(&a));
        assert!(!ab.is_strict_prefix_of(&ab));
        assert!(!ab.is_strict_prefix_of(&ac));
        assert!(Path::empty().is_strict_prefix_of(&a));
        assert!(!Path::empty().is_strict_prefix_of(&Path::empty()));
    }

    #[test]
    fn prefixes_sort_first() {
        let mut paths = vec![
            Path::new(["a", "b"]),
            Path::new(["a"]),
            Path::new(["a", "b", "c"]),
            Path::new(["b"]),
        ];
        paths.sort();
        assert_eq!(
            paths,
            vec![
                Path::new(["a"]),
                Path::new(["a", "b"]),
                Path::new(["a", "b", "c"]),
                Path::new(["b"]),
            ]
        );
    }

    #[test]
    fn display_plain() {
        assert_eq!(Path::new(["user", "address", "zip"]).to_string(), "user.address.zip");
        assert_eq!(Path::new(["a"]).to_string(), "a");
    }

    #[test]
    fn display_quotes_awkward_steps() {
        assert_eq!(Path::new(["a.b", "c"]).to_string(), "'a.b'.c");
        assert_eq!(Path::new(["it's"]).to_string(), r"'it\'s'");
        assert_eq!(Path::new([""]).to_string(), "''");
        assert_eq!(Path::new([r"back\slash"]).to_string(), r"'back\\slash'");
    }

    #[test]
    fn parse_plain() {
        let path: Path = "user.address.zip".parse().unwrap();
        assert_eq!(path, Path::new(["user", "address", "zip"]));

        let path: Path = "a".parse().unwrap();
        assert_eq!(path, Path::new(["a"]));

        let path: Path = "".parse().unwrap();
        assert_eq!(path, Path::empty());
    }

    #[test]
    fn parse_quoted() {
        let path: Path = "'a.b'.c".parse().unwrap();
        assert_eq!(path, Path::new(["a.b", "c"]));

        let path: Path = r"'it\'s'".parse().unwrap();
        assert_eq!(path, Path::new(["it's"]));

        let path: Path = "''".parse().unwrap();
        assert_eq!(path, Path::new([""]));
    }

    #[test]
    fn parse_empty_steps() {
        let path: Path = "a..b".parse().unwrap();
        assert_eq!(path, Path::new(["a", "", "b"]));

        let path: Path = "a.".parse().unwrap();
        assert_eq!(path, Path::new(["a", ""]));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("'abc".parse::<Path>(), Err(PathParseError::UnterminatedQuote));
        assert_eq!(r"'abc\".parse::<Path>(), Err(PathParseError::DanglingEscape));
        assert_eq!(
            "'a'b".parse::<Path>(),
            Err(PathParseError::ExpectedSeparator { found: 'b' })
        );
    }

    #[test]
    fn display_parse_round_trip() {
        let cases = vec![
            Path::empty(),
            Path::new(["a"]),
            Path::new(["user", "address", "zip"]),
            Path::new(["a.b", "c"]),
            Path::new(["it's", "weird.step", ""]),
            Path::new([r"a\'b"]),
        ];
        for path in cases {
            let parsed: Path = path.to_string().parse().unwrap();
            assert_eq!(parsed, path, "round trip failed for {path}");
        }
    }

    #[test]
    fn serde_is_transparent() {
        let path = Path::new(["a.b", "c"]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["a.b","c"]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    // Verify Send + Sync
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn path_is_send_sync() {
        assert_send_sync::<Path>();
    }
}
