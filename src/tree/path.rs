use thiserror::Error;

/// A single step into a JSON tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key access: `.foo` or `["foo bar"]`
    Key(String),
    /// Array index access: `[0]`, `[-1]`
    Index(i64),
}

/// Error from parsing a path string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path must start with '.'")]
    MustStartWithDot,
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unclosed bracket at position {pos}")]
    UnclosedBracket { pos: usize },
    #[error("unclosed quote at position {pos}")]
    UnclosedQuote { pos: usize },
    #[error("invalid index '{value}' at position {pos}")]
    InvalidIndex { value: String, pos: usize },
    #[error("empty key at position {pos}")]
    EmptyKey { pos: usize },
    #[error("empty path")]
    Empty,
}

/// Parse a dot-notation path into segments.
///
/// `.` alone addresses the root and yields no segments.
///
/// # Examples
/// ```
/// use jsonward::tree::{parse_path, PathSegment};
///
/// let segments = parse_path(r#".store.books[0]["first name"]"#).unwrap();
/// assert_eq!(segments, vec![
///     PathSegment::Key("store".into()),
///     PathSegment::Key("books".into()),
///     PathSegment::Index(0),
///     PathSegment::Key("first name".into()),
/// ]);
/// ```
pub fn parse_path(input: &str) -> Result<Vec<PathSegment>, PathError> {
    if input.is_empty() {
        return Err(PathError::Empty);
    }

    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();

    if chars[0] != '.' {
        return Err(PathError::MustStartWithDot);
    }

    let mut segments = Vec::new();
    let mut i = 1;

    // A key may follow the leading dot directly
    if i < len && chars[i] != '[' {
        i = parse_key(&chars, i, &mut segments)?;
    }

    while i < len {
        match chars[i] {
            '[' => {
                i = parse_bracket(&chars, i, &mut segments)?;
            }
            '.' => {
                i = parse_key(&chars, i + 1, &mut segments)?;
            }
            c => {
                return Err(PathError::UnexpectedChar { ch: c, pos: i });
            }
        }
    }

    Ok(segments)
}

/// Parse a bare key starting at `start`. Returns the position after it.
fn parse_key(
    chars: &[char],
    start: usize,
    segments: &mut Vec<PathSegment>,
) -> Result<usize, PathError> {
    let mut i = start;
    while i < chars.len() && chars[i] != '.' && chars[i] != '[' {
        i += 1;
    }
    if i == start {
        return Err(PathError::EmptyKey { pos: start });
    }
    segments.push(PathSegment::Key(chars[start..i].iter().collect()));
    Ok(i)
}

/// Parse a bracket expression `[...]` starting at `start`.
/// Returns the position after the closing `]`.
fn parse_bracket(
    chars: &[char],
    start: usize,
    segments: &mut Vec<PathSegment>,
) -> Result<usize, PathError> {
    let len = chars.len();
    let mut i = start + 1; // skip `[`

    if i >= len {
        return Err(PathError::UnclosedBracket { pos: start });
    }

    if chars[i] == '"' {
        i += 1;
        let mut key = String::new();
        while i < len && chars[i] != '"' {
            if chars[i] == '\\' && i + 1 < len {
                i += 1;
            }
            key.push(chars[i]);
            i += 1;
        }
        if i >= len {
            return Err(PathError::UnclosedQuote { pos: start + 1 });
        }
        i += 1; // closing `"`
        if i >= len || chars[i] != ']' {
            return Err(PathError::UnclosedBracket { pos: start });
        }
        segments.push(PathSegment::Key(key));
        return Ok(i + 1);
    }

    let content_start = i;
    while i < len && chars[i] != ']' {
        i += 1;
    }
    if i >= len {
        return Err(PathError::UnclosedBracket { pos: start });
    }
    let content: String = chars[content_start..i].iter().collect();
    let idx = content
        .trim()
        .parse::<i64>()
        .map_err(|_| PathError::InvalidIndex {
            value: content.clone(),
            pos: content_start,
        })?;
    segments.push(PathSegment::Index(idx));
    Ok(i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        assert_eq!(parse_path(".").unwrap(), vec![]);
    }

    #[test]
    fn test_keys_and_indices() {
        assert_eq!(
            parse_path(".a[2].b[-1]").unwrap(),
            vec![
                PathSegment::Key("a".into()),
                PathSegment::Index(2),
                PathSegment::Key("b".into()),
                PathSegment::Index(-1),
            ]
        );
    }

    #[test]
    fn test_leading_bracket() {
        assert_eq!(parse_path(".[0]").unwrap(), vec![PathSegment::Index(0)]);
    }

    #[test]
    fn test_quoted_key_with_escape() {
        assert_eq!(
            parse_path(r#".["a.b \"c\""]"#).unwrap(),
            vec![PathSegment::Key(r#"a.b "c""#.into())]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_path(""), Err(PathError::Empty));
        assert_eq!(parse_path("a"), Err(PathError::MustStartWithDot));
        assert_eq!(
            parse_path(".a[0"),
            Err(PathError::UnclosedBracket { pos: 2 })
        );
        assert_eq!(
            parse_path(r#".["abc]"#),
            Err(PathError::UnclosedQuote { pos: 2 })
        );
        assert_eq!(
            parse_path(".a[x]"),
            Err(PathError::InvalidIndex {
                value: "x".into(),
                pos: 3
            })
        );
        assert_eq!(parse_path(".a..b"), Err(PathError::EmptyKey { pos: 3 }));
        assert_eq!(parse_path(".a."), Err(PathError::EmptyKey { pos: 3 }));
    }

    #[test]
    fn test_unexpected_char_after_bracket() {
        assert_eq!(
            parse_path(".a[0]b"),
            Err(PathError::UnexpectedChar { ch: 'b', pos: 5 })
        );
    }
}
