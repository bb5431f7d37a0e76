/*

    Minimal reader for Wavefront OBJ text records.

    Only positional vertex records are understood:
        v <x> <y> <z> [w] [r g b]
    Everything after z is ignored. Other records that share the
    v prefix family (vt, vn, vp) are not vertex positions and are
    never classified as such.

    Fields are separated by runs of whitespace, so both
    "v 1 2 3" and "v\t1   2 3" give the same vertex.

    Lines arrive as raw bytes and only vertex lines are decoded,
    so comments in other encodings never stop a scan.

    @date: 10 Nov, 2025
    @author: bartu
*/

use crate::error::{ParseError, ParseErrorKind};
use crate::numeric::{Float, Vector3};

/// Record kind of a single OBJ line, decided by its leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Vertex,
    Other,
}

/// Classify a line without parsing its fields.
/// A vertex line starts with 'v' directly followed by whitespace.
pub fn record_kind(line: &str) -> RecordKind {
    match vertex_fields(line) {
        Some(_) => RecordKind::Vertex,
        None => RecordKind::Other,
    }
}

fn has_vertex_prefix(line: &[u8]) -> bool {
    matches!(line, [b'v', b' ' | b'\t', ..])
}

// Remainder of the line after the "v" prefix, if it is a vertex line
fn vertex_fields(line: &str) -> Option<&str> {
    if has_vertex_prefix(line.as_bytes()) {
        Some(&line[1..])
    } else {
        None
    }
}

fn parse_coord(field: &str) -> Result<Float, ParseErrorKind> {
    let value = field.parse::<Float>().map_err(|e| ParseErrorKind::InvalidFloat {
        field: field.to_string(),
        source: e,
    })?;
    if !value.is_finite() {
        return Err(ParseErrorKind::NonFinite { field: field.to_string() });
    }
    Ok(value)
}

/// Parse the three coordinates of a vertex line.
/// Returns Ok(None) for any line that is not a vertex record.
/// line_no is 1-based and only used for error reporting.
pub fn parse_vertex_line(line: &str, line_no: usize) -> Result<Option<Vector3>, ParseError> {
    let Some(rest) = vertex_fields(line) else {
        return Ok(None);
    };

    let to_err = |kind: ParseErrorKind| ParseError {
        line: line_no,
        text: line.trim_end().to_string(),
        kind,
    };

    let fields: Vec<&str> = rest.split_whitespace().take(3).collect();
    if fields.len() < 3 {
        return Err(to_err(ParseErrorKind::MissingField { found: fields.len() }));
    }

    let mut coords = [0.0 as Float; 3];
    for (c, field) in coords.iter_mut().zip(fields) {
        *c = parse_coord(field).map_err(to_err)?;
    }
    Ok(Some(Vector3::from_array(coords)))
}

/// Same as parse_vertex_line, on a line that has not been decoded yet.
/// Non-vertex lines are returned as Ok(None) without looking at their encoding.
pub fn parse_vertex_bytes(line: &[u8], line_no: usize) -> Result<Option<Vector3>, ParseError> {
    if !has_vertex_prefix(line) {
        return Ok(None);
    }
    match std::str::from_utf8(line) {
        Ok(text) => parse_vertex_line(text, line_no),
        Err(_) => Err(ParseError {
            line: line_no,
            text: String::from_utf8_lossy(line).trim_end().to_string(),
            kind: ParseErrorKind::InvalidUtf8,
        }),
    }
}
