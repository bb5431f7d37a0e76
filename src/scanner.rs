/*

    Bounding box scanner over OBJ files.

    Single linear pass: every vertex line is parsed and
    folded into a local BBox, every other line is skipped.
    The accumulator lives only for the duration of one call
    and is handed back inside a ScanReport.

    @date: 10 Nov, 2025
    @author: bartu
*/

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::bbox::BBox;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::numeric::{Float, to_array};
use crate::obj::parse_vertex_bytes;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScanReport {
    /// None when the input had no vertex records
    pub bounds: Option<BBox>,
    pub lines: usize,
    pub vertices: usize,
    /// Malformed vertex lines dropped in lenient mode
    pub skipped: usize,
}

// Flat layout written by --json
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub min: Option<[Float; 3]>,
    pub max: Option<[Float; 3]>,
    pub size: Option<[Float; 3]>,
    pub center: Option<[Float; 3]>,
    pub lines: usize,
    pub vertices: usize,
    pub skipped: usize,
}

impl ScanReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let report = JsonReport {
            min: self.bounds.map(|b| to_array(&b.min())),
            max: self.bounds.map(|b| to_array(&b.max())),
            size: self.bounds.map(|b| to_array(&b.size())),
            center: self.bounds.map(|b| to_array(&b.center())),
            lines: self.lines,
            vertices: self.vertices,
            skipped: self.skipped,
        };
        serde_json::to_string(&report)
    }
}

/// Scan any buffered reader line by line.
/// Lines are kept as bytes until they are known to be vertex records.
/// Read failures are reported against `source_path` when there is one.
fn scan_lines<R: BufRead>(mut reader: R, config: &ScanConfig, source_path: Option<&Path>) -> Result<ScanReport, ScanError> {
    let mut bbox = BBox::EMPTY;
    let mut report = ScanReport::default();
    let mut buf: Vec<u8> = Vec::new();

    let read_err = |e: std::io::Error| match source_path {
        Some(path) => ScanError::FileAccess { path: path.to_path_buf(), source: e },
        None => ScanError::Read(e),
    };

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(read_err)? == 0 {
            break;
        }
        report.lines += 1;

        match parse_vertex_bytes(&buf, report.lines) {
            Ok(Some(v)) => {
                bbox.expand(&v);
                report.vertices += 1;
            }
            Ok(None) => {}
            Err(e) if config.lenient => {
                warn!("Skipping malformed vertex, {}", e);
                report.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    report.bounds = bbox.finish();
    debug!("Scanned {} lines, {} vertices, {} skipped", report.lines, report.vertices, report.skipped);
    Ok(report)
}

/// Scan OBJ text coming from any reader (files, in-memory buffers, stdin).
pub fn scan_reader<R: BufRead>(reader: R, config: &ScanConfig) -> Result<ScanReport, ScanError> {
    scan_lines(reader, config, None)
}

/// Open the OBJ file at `path` and compute the bounds of its vertex positions.
/// The file is closed on every return path, including parse failures.
pub fn scan_file<P: AsRef<Path>>(path: P, config: &ScanConfig) -> Result<ScanReport, ScanError> {
    let path = path.as_ref();

    let span = tracing::span!(tracing::Level::INFO, "scan_obj");
    let _enter = span.enter();

    let file = File::open(path).map_err(|e| ScanError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("Reading file from {}", path.display());

    scan_lines(BufReader::new(file), config, Some(path))
}

/// Strict scan with default options, returning only the bounds.
pub fn bounds_of_file<P: AsRef<Path>>(path: P) -> Result<Option<BBox>, ScanError> {
    Ok(scan_file(path, &ScanConfig::default())?.bounds)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::numeric::Vector3;
    use std::io::Cursor;

    fn scan_str(text: &str) -> Result<ScanReport, ScanError> {
        scan_reader(Cursor::new(text), &ScanConfig::default())
    }

    fn bounds_str(text: &str) -> BBox {
        scan_str(text).unwrap().bounds.expect("input has vertices")
    }

    #[test]
    fn test_single_vertex() {
        let bbox = bounds_str("v 1.0 2.0 3.0\n");
        assert_eq!(bbox.min(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(bbox.max(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(bbox.to_string(), "Min: [1.0, 2.0, 3.0]\nMax: [1.0, 2.0, 3.0]");
    }

    #[test]
    fn test_two_vertices() {
        let bbox = bounds_str("v -1.0 0.0 5.0\nv 2.0 -3.0 5.0\n");
        assert_eq!(bbox.to_string(), "Min: [-1.0, -3.0, 5.0]\nMax: [2.0, 0.0, 5.0]");
    }

    #[test]
    fn test_face_line_ignored() {
        let report = scan_str("v 1.0 2.0 3.0\nf 1 2 3\n").unwrap();
        assert_eq!(report.lines, 2);
        assert_eq!(report.vertices, 1);
        assert_eq!(report.bounds.unwrap().max(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_two_fields_is_parse_error() {
        let err = scan_str("# header\nv 1.0 2.0\n").unwrap_err();
        match err {
            ScanError::Parse(p) => {
                assert_eq!(p.line, 2);
                assert_eq!(p.kind, ParseErrorKind::MissingField { found: 2 });
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_vertices_gives_no_bounds() {
        let report = scan_str("# nothing here\nvn 0 1 0\nf 1 2 3\n").unwrap();
        assert_eq!(report.bounds, None);
        assert_eq!(report.vertices, 0);
        assert_eq!(scan_str("").unwrap().bounds, None);
    }

    #[test]
    fn test_non_vertex_lines_do_not_change_bounds() {
        let plain = bounds_str("v 0 0 0\nv 1 -2 3\nv -4 5 0.5\n");
        let noisy = bounds_str(
            "# comment v 100 100 100\nmtllib a.mtl\no cube\nv 0 0 0\nvt 9 9\nvn -9 -9 -9\n\
             v 1 -2 3\ng side\nusemtl red\nf 1 2 3\nvp 50\nv -4 5 0.5\ns off\n",
        );
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_tabs_and_crlf() {
        let bbox = bounds_str("v\t1\t2\t3\r\nv  -1   -2    -3\r\n");
        assert_eq!(bbox.min(), Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(bbox.max(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_all_negative_coordinates() {
        let bbox = bounds_str("v -5 -6 -7\nv -1 -2 -3\n");
        assert_eq!(bbox.max(), Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_lenient_skips_bad_lines() {
        let text = "v 1 1 1\nv 2 oops 2\nv 3\nv -1 0 4\n";
        assert!(scan_str(text).is_err());

        let report = scan_reader(Cursor::new(text), &ScanConfig::lenient()).unwrap();
        assert_eq!(report.vertices, 2);
        assert_eq!(report.skipped, 2);
        let bbox = report.bounds.unwrap();
        assert_eq!(bbox.min(), Vector3::new(-1.0, 0.0, 1.0));
        assert_eq!(bbox.max(), Vector3::new(1.0, 1.0, 4.0));
    }

    #[test]
    fn test_bounds_are_attained() {
        let points = [
            [0.5, -1.25, 3.0],
            [2.0, 0.0, -8.0],
            [-3.5, 4.0, 1.0],
            [1.0, 1.0, 1.0],
        ];
        let text: String = points.iter().map(|p| format!("v {} {} {}\n", p[0], p[1], p[2])).collect();
        let bbox = bounds_str(&text);
        for axis in 0..3 {
            let (lo, hi) = (bbox.min()[axis], bbox.max()[axis]);
            assert!(lo <= hi);
            assert!(points.iter().any(|p| p[axis] == lo));
            assert!(points.iter().any(|p| p[axis] == hi));
            assert!(points.iter().all(|p| lo <= p[axis] && p[axis] <= hi));
        }
    }

    #[test]
    fn test_non_utf8_comment_is_skipped() {
        let text: &[u8] = b"v 1 2 3\n# exported by \xC9t\xE9\nv -1 0 4\n";
        for config in [ScanConfig::default(), ScanConfig::lenient()] {
            let report = scan_reader(Cursor::new(text), &config).unwrap();
            assert_eq!(report.lines, 3);
            assert_eq!(report.vertices, 2);
            assert_eq!(report.skipped, 0);
            let bbox = report.bounds.unwrap();
            assert_eq!(bbox.min(), Vector3::new(-1.0, 0.0, 3.0));
            assert_eq!(bbox.max(), Vector3::new(1.0, 2.0, 4.0));
        }
    }

    #[test]
    fn test_non_utf8_vertex_line() {
        let text: &[u8] = b"v 1 2 3\nv 4 \xFF 6\n";
        match scan_reader(Cursor::new(text), &ScanConfig::default()) {
            Err(ScanError::Parse(p)) => {
                assert_eq!(p.line, 2);
                assert_eq!(p.kind, ParseErrorKind::InvalidUtf8);
            }
            other => panic!("expected parse error, got {:?}", other),
        }

        let report = scan_reader(Cursor::new(text), &ScanConfig::lenient()).unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.bounds.unwrap().max(), Vector3::new(1.0, 2.0, 3.0));
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn test_reader_failure_has_no_path() {
        let err = scan_reader(std::io::BufReader::new(FailingReader), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::Read(_)));
        assert_eq!(err.to_string(), "Failed to read input: disk gone");
    }

    #[test]
    fn test_missing_file() {
        let err = scan_file("definitely/not/here.obj", &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::FileAccess { .. }));
    }

    #[test]
    fn test_json_report() {
        let report = scan_str("v -1.0 0.0 5.0\nv 2.0 -3.0 5.0\n").unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["min"], serde_json::json!([-1.0, -3.0, 5.0]));
        assert_eq!(json["max"], serde_json::json!([2.0, 0.0, 5.0]));
        assert_eq!(json["size"], serde_json::json!([3.0, 3.0, 0.0]));
        assert_eq!(json["vertices"], 2);

        let empty: serde_json::Value = serde_json::from_str(&scan_str("").unwrap().to_json().unwrap()).unwrap();
        assert!(empty["min"].is_null());
    }
}
