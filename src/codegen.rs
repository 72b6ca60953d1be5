//! Rust source serialization for lookup tables.
//!
//! Each table becomes a `pub static` declaration with an array literal initializer.
//! The layout is fixed so that the generated file is stable across runs:
//!
//! * 16 values per line.
//! * In a two-dimensional table, every row is a bracketed block of its own, and rows are grouped four at a time with a blank line between the groups.
//! * Four spaces of indentation per nesting level.

use crate::tables::{ByteGrid, ByteTable};
use crate::bits;

use std::fmt::Write;

//-----------------------------------------------------------------------------

/// Number of values on a single line.
pub const VALUES_PER_LINE: usize = 16;

/// Number of rows of a two-dimensional table between blank lines.
pub const ROWS_PER_GROUP: usize = 4;

/// Indentation of a single nesting level.
pub const INDENT: &str = "    ";

//-----------------------------------------------------------------------------

/// A value that can be written as a Rust literal.
///
/// # Examples
///
/// ```
/// use pextgen::codegen::SourceLiteral;
///
/// let table = [7u8; 256];
/// assert_eq!(<[u8; 256] as SourceLiteral>::type_name(), "[u8; 256]");
///
/// let mut literal = String::new();
/// table.write_literal(&mut literal, 0);
/// assert!(literal.starts_with("[\n    7, 7,"));
/// assert!(literal.ends_with("7,\n]"));
/// ```
pub trait SourceLiteral {
    /// Returns the Rust type of the literal.
    fn type_name() -> String;

    /// Appends the literal to `out`.
    ///
    /// The opening bracket is written at the current position, and the closing bracket is indented by `level` levels.
    /// Nothing is written after the closing bracket.
    fn write_literal(&self, out: &mut String, level: usize);
}

impl SourceLiteral for ByteTable {
    fn type_name() -> String {
        format!("[u8; {}]", bits::BYTE_VALUES)
    }

    fn write_literal(&self, out: &mut String, level: usize) {
        out.push('[');
        write_values(out, self, level + 1);
        out.push('\n');
        indent(out, level);
        out.push(']');
    }
}

impl SourceLiteral for ByteGrid {
    fn type_name() -> String {
        format!("[{}; {}]", <ByteTable as SourceLiteral>::type_name(), bits::BYTE_VALUES)
    }

    fn write_literal(&self, out: &mut String, level: usize) {
        out.push('[');
        for (i, row) in self.iter().enumerate() {
            if i > 0 && i % ROWS_PER_GROUP == 0 {
                out.push('\n');
            }
            out.push('\n');
            indent(out, level + 1);
            row.write_literal(out, level + 1);
            out.push(',');
        }
        out.push('\n');
        indent(out, level);
        out.push(']');
    }
}

// Writes the values starting from a new line, `VALUES_PER_LINE` values per line, each followed by a comma.
fn write_values(out: &mut String, values: &[u8], level: usize) {
    for line in values.chunks(VALUES_PER_LINE) {
        out.push('\n');
        indent(out, level);
        for (i, value) in line.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing to a `String` cannot fail.
            let _ = write!(out, "{},", value);
        }
    }
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

//-----------------------------------------------------------------------------

/// Returns the declaration of a `pub static` item named `name` holding `data`.
///
/// The declaration is preceded by a line comment if `comment` is non-empty.
/// Every line is indented by `level` levels, and the result ends with a semicolon but no newline.
///
/// # Examples
///
/// ```
/// use pextgen::codegen;
///
/// let table = [0u8; 256];
/// let source = codegen::declaration("ZEROS", &table, "All zeros.", 1);
/// assert!(source.starts_with("    // All zeros.\n    pub static ZEROS: [u8; 256] = ["));
/// assert!(source.ends_with("\n    ];"));
/// ```
pub fn declaration<T: SourceLiteral>(name: &str, data: &T, comment: &str, level: usize) -> String {
    let mut out = String::new();
    if !comment.is_empty() {
        indent(&mut out, level);
        let _ = writeln!(out, "// {}", comment);
    }
    indent(&mut out, level);
    let _ = write!(out, "pub static {}: {} = ", name, T::type_name());
    data.write_literal(&mut out, level);
    out.push(';');
    out
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
