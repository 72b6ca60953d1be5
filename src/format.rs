//! Normalization of generated source code.
//!
//! [`normalize`] checks that the delimiters in the text are balanced and then puts the whitespace in canonical form:
//!
//! * Trailing whitespace is removed from every line.
//! * Leading blank lines are removed, and runs of blank lines are collapsed into a single blank line.
//! * The text ends with exactly one newline.
//!
//! Delimiters inside line comments, nested block comments, string literals, and simple character literals are ignored.
//! Raw string literals are not recognized.

use thiserror::Error;

//-----------------------------------------------------------------------------

/// A structural problem in the source text.
///
/// Line and column numbers are 1-based, and columns count characters.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// A closing delimiter without a matching opening delimiter.
    #[error("{line}:{column}: unexpected closing delimiter `{found}`")]
    UnexpectedClose { line: usize, column: usize, found: char },

    /// A closing delimiter that does not match the innermost opening delimiter.
    #[error("{line}:{column}: mismatched closing delimiter `{found}`, expected `{expected}`")]
    Mismatched { line: usize, column: usize, found: char, expected: char },

    /// An opening delimiter that is never closed.
    #[error("{line}:{column}: unclosed delimiter `{open}`")]
    Unclosed { line: usize, column: usize, open: char },

    /// A block comment or a string literal that continues to the end of the text.
    #[error("{line}:{column}: unterminated {what}")]
    Unterminated { line: usize, column: usize, what: &'static str },
}

//-----------------------------------------------------------------------------

/// Validates the text and returns it with canonical whitespace.
///
/// # Examples
///
/// ```
/// use pextgen::format;
///
/// let source = "\n\nstatic A: [u8; 2] = [1, 2];   \n\n\n\nstatic B: u8 = 3;";
/// assert_eq!(format::normalize(source).unwrap(), "static A: [u8; 2] = [1, 2];\n\nstatic B: u8 = 3;\n");
/// assert!(format::normalize("static A: [u8; 2] = [1, 2;").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`FormatError`] for the first structural problem found.
pub fn normalize(text: &str) -> Result<String, FormatError> {
    validate(text)?;

    let mut result = String::with_capacity(text.len() + 1);
    let mut pending_blank = false;
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank = !result.is_empty();
            continue;
        }
        if pending_blank {
            result.push('\n');
            pending_blank = false;
        }
        result.push_str(line);
        result.push('\n');
    }

    Ok(result)
}

//-----------------------------------------------------------------------------

// Position of a character in the text.
#[derive(Clone, Copy, Debug)]
struct Position {
    line: usize,
    column: usize,
}

impl Position {
    fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

// Checks that the delimiters are balanced.
fn validate(text: &str) -> Result<(), FormatError> {
    let chars: Vec<char> = text.chars().collect();
    let mut stack: Vec<(char, Position)> = Vec::new();
    let mut pos = Position { line: 1, column: 1 };
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let start = pos;
        match c {
            '/' if next == Some('/') => {
                while i < chars.len() && chars[i] != '\n' {
                    pos.advance(chars[i]);
                    i += 1;
                }
                continue;
            },
            '/' if next == Some('*') => {
                let mut depth = 0;
                loop {
                    if i >= chars.len() {
                        return Err(FormatError::Unterminated { line: start.line, column: start.column, what: "block comment" });
                    }
                    let pair = (chars[i], chars.get(i + 1).copied());
                    if pair == ('/', Some('*')) || pair == ('*', Some('/')) {
                        depth = if pair.0 == '/' { depth + 1 } else { depth - 1 };
                        pos.advance(chars[i]); pos.advance(chars[i + 1]);
                        i += 2;
                        if depth == 0 {
                            break;
                        }
                    } else {
                        pos.advance(chars[i]);
                        i += 1;
                    }
                }
                continue;
            },
            '"' => {
                pos.advance(c);
                i += 1;
                loop {
                    if i >= chars.len() {
                        return Err(FormatError::Unterminated { line: start.line, column: start.column, what: "string literal" });
                    }
                    let d = chars[i];
                    pos.advance(d);
                    i += 1;
                    if d == '\\' && i < chars.len() {
                        pos.advance(chars[i]);
                        i += 1;
                    } else if d == '"' {
                        break;
                    }
                }
                continue;
            },
            '\'' => {
                // Character literals like '[' and '\n'. Anything else is a lifetime or a label.
                let len = match (next, chars.get(i + 2).copied()) {
                    (Some('\\'), _) => chars.get(i + 3..).and_then(|rest| rest.iter().position(|&d| d == '\'')).map(|end| end + 4),
                    (Some(_), Some('\'')) => Some(3),
                    _ => None,
                };
                if let Some(len) = len {
                    for _ in 0..len {
                        pos.advance(chars[i]);
                        i += 1;
                    }
                    continue;
                }
            },
            '(' | '[' | '{' => stack.push((c, start)),
            ')' | ']' | '}' => {
                match stack.pop() {
                    Some((open, _)) if open == matching(c) => {},
                    Some((open, _)) => {
                        return Err(FormatError::Mismatched { line: start.line, column: start.column, found: c, expected: matching(open) });
                    },
                    None => {
                        return Err(FormatError::UnexpectedClose { line: start.line, column: start.column, found: c });
                    },
                }
            },
            _ => {},
        }
        pos.advance(c);
        i += 1;
    }

    if let Some((open, at)) = stack.pop() {
        return Err(FormatError::Unclosed { line: at.line, column: at.column, open });
    }
    Ok(())
}

// Returns the counterpart of a delimiter.
fn matching(c: char) -> char {
    match c {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        ')' => '(',
        ']' => '[',
        '}' => '{',
        _ => c,
    }
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
