//! Writing the snapshot file.
//!
//! The file is rendered as two-space indented JSON with no trailing newline
//! and written in place over whatever was there. The write is not atomic.
//!
//! Every character outside printable ASCII is written as a `\uXXXX` escape
//! (surrogate pairs above the BMP), so the bytes match earlier snapshots of
//! the same listing and only real changes show up in a diff.

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use tracing::debug;

use crate::error::{ScrapeError, ScrapeResult};
use crate::report::SnapshotReport;

/// Pretty formatter that escapes everything above `~` in strings.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch <= '~' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}

/// Render a report exactly as it lands on disk.
pub fn render(report: &SnapshotReport) -> ScrapeResult<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::new());
    report.serialize(&mut ser)?;
    // Only ASCII reaches the buffer.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Overwrite `path` with the rendered report.
pub fn write(path: &Path, report: &SnapshotReport) -> ScrapeResult<()> {
    let data = render(report)?;
    std::fs::write(path, &data).map_err(|source| ScrapeError::Write {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "snapshot written");
    Ok(())
}

/// Load a previously written snapshot.
pub fn read(path: &Path) -> anyhow::Result<SnapshotReport> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoRecord;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn fixed_report() -> SnapshotReport {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_micro_opt(12, 0, 0, 500)
            .unwrap();
        SnapshotReport {
            last_updated: ts,
            memo_count: 1,
            memos: vec![MemoRecord {
                title: "GC Memo 25-01 on Remedies".to_string(),
                url: "https://www.nlrb.gov/gc-25-01".to_string(),
                found_date: ts,
            }],
        }
    }

    #[test]
    fn test_render_layout() {
        let expected = r#"{
  "last_updated": "2025-03-01T12:00:00.000500",
  "memo_count": 1,
  "memos": [
    {
      "title": "GC Memo 25-01 on Remedies",
      "url": "https://www.nlrb.gov/gc-25-01",
      "found_date": "2025-03-01T12:00:00.000500"
    }
  ]
}"#;
        assert_eq!(render(&fixed_report()).unwrap(), expected);
    }

    #[test]
    fn test_render_escapes_non_ascii() {
        let mut report = fixed_report();
        report.memos[0].title = "GC 25-01 \u{2013} Remedies\u{2019}".to_string();
        let out = render(&report).unwrap();
        assert!(out.contains(r#""title": "GC 25-01 \u2013 Remedies\u2019","#));
        assert!(out.is_ascii());
    }

    #[test]
    fn test_render_escapes_astral_as_surrogates() {
        let mut report = fixed_report();
        report.memos[0].title = "Memo \u{1F4C4} caf\u{e9} \u{7f}".to_string();
        let out = render(&report).unwrap();
        assert!(out.contains(r#""title": "Memo \ud83d\udcc4 caf\u00e9 \u007f","#));
    }

    #[test]
    fn test_render_keeps_json_escapes() {
        let mut report = fixed_report();
        report.memos[0].title = "Quote \" and \\ tab\t".to_string();
        let out = render(&report).unwrap();
        assert!(out.contains(r#""title": "Quote \" and \\ tab\t","#));
    }

    #[test]
    fn test_escaped_snapshot_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nlrb_memos.json");
        let mut report = fixed_report();
        report.memos[0].title = "GC 25-01 \u{2013} Remedies\u{2019}".to_string();

        write(&path, &report).unwrap();

        assert_eq!(read(&path).unwrap().memos, report.memos);
    }

    #[test]
    fn test_render_empty() {
        let mut report = fixed_report();
        report.memos.clear();
        report.memo_count = 0;
        let out = render(&report).unwrap();
        assert!(out.contains("\"memo_count\": 0"));
        assert!(out.contains("\"memos\": []"));
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nlrb_memos.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        write(&path, &fixed_report()).unwrap();

        let back = read(&path).unwrap();
        assert_eq!(back.memo_count, 1);
        assert_eq!(back.memos, fixed_report().memos);
        assert!(!std::fs::read_to_string(&path).unwrap().contains("xxx"));
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("nlrb_memos.json");
        let err = write(&path, &fixed_report()).unwrap_err();
        assert!(matches!(err, ScrapeError::Write { .. }));
    }
}
