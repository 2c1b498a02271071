//! Week-file store
//!
//! One markdown file per ISO week under `<entries>/<year>/week-<NN>.md`:
//!
//! ```text
//! # Week 48 - 2024
//!
//! ## 2024-11-25
//! ### Implemented authentication
//! - **Topic:** Project Alpha
//! - **Impact:** Secured user access
//! - **Tags:** security, feature
//! ```

use crate::domain::calendar::{self, WeekKey};
use crate::domain::entry::{self, DateHeader, Entry};
use crate::error::{BragError, Result};
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Append-only store of week-files rooted at the entries directory
#[derive(Debug, Clone)]
pub struct WeekFileStore {
    entries_dir: PathBuf,
}

impl WeekFileStore {
    pub fn new(entries_dir: PathBuf) -> Self {
        WeekFileStore { entries_dir }
    }

    pub fn entries_dir(&self) -> &Path {
        &self.entries_dir
    }

    /// Path of the week-file for `key`; it may not exist yet
    pub fn locate(&self, key: WeekKey) -> PathBuf {
        self.entries_dir
            .join(key.year.to_string())
            .join(format!("week-{:02}.md", key.week))
    }

    /// Create the week-file with its `# Week N - YYYY` header if missing.
    /// An existing file is left untouched.
    pub fn ensure(&self, key: WeekKey) -> Result<PathBuf> {
        let path = self.locate(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                if let Err(e) = write_header(file, key) {
                    let _ = fs::remove_file(&path);
                    return Err(BragError::Io(e));
                }
                tracing::info!(path = %path.display(), "created week file");
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                // Left behind by an interrupted create
                if fs::metadata(&path)?.len() == 0 {
                    write_header(OpenOptions::new().append(true).open(&path)?, key)?;
                    tracing::warn!(path = %path.display(), "added missing header to empty week file");
                }
            }
            Err(e) => return Err(BragError::Io(e)),
        }

        Ok(path)
    }

    /// Append an entry to the week-file of its date. Returns the week used.
    pub fn append(&self, entry: &Entry) -> Result<WeekKey> {
        let key = calendar::week_of(entry.entry_date());
        let path = self.ensure(key)?;

        let content = fs::read_to_string(&path)?;
        let updated = insert_entry(&content, entry.entry_date(), &entry::encode(entry));
        write_atomic(&path, &updated)?;

        tracing::debug!(week = %key, title = entry.title(), "appended entry");
        Ok(key)
    }

    /// Entries stored in the week-file for `key`, in file order
    pub fn entries_for_week(&self, key: WeekKey) -> Result<Vec<Entry>> {
        parse_all(&self.locate(key))
    }
}

fn write_header(mut file: File, key: WeekKey) -> io::Result<()> {
    writeln!(file, "# Week {} - {}", key.week, key.year)?;
    file.sync_all()
}

/// Parse every entry in a week-file, in file order.
///
/// A missing file yields no entries. Blocks without a title line, blocks
/// outside any Date-Section and blocks holding invalid UTF-8 are dropped.
pub fn parse_all(path: &Path) -> Result<Vec<Entry>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(BragError::Io(e)),
    };

    let mut parser = SectionParser::default();
    for raw in bytes.split(|byte| *byte == b'\n') {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        match std::str::from_utf8(raw) {
            Ok(line) => parser.feed(line),
            Err(_) => parser.feed_corrupt(&String::from_utf8_lossy(raw)),
        }
    }
    let entries = parser.finish();

    tracing::debug!(path = %path.display(), count = entries.len(), "parsed week file");
    Ok(entries)
}

/// Line-by-line state machine over a week-file
#[derive(Debug, Default)]
struct SectionParser {
    current_date: Option<NaiveDate>,
    buffer: Vec<String>,
    corrupt: bool,
    entries: Vec<Entry>,
}

impl SectionParser {
    fn feed(&mut self, line: &str) {
        if let Some(header) = entry::parse_date_header(line) {
            self.flush();
            self.current_date = match header {
                DateHeader::Valid(date) => Some(date),
                DateHeader::Malformed => {
                    tracing::warn!(line, "ignoring section with invalid date");
                    None
                }
            };
        } else if line.starts_with("### ") {
            self.flush();
            self.buffer.push(line.to_string());
        } else if !self.buffer.is_empty() {
            self.buffer.push(line.to_string());
        }
    }

    /// A line that is not valid UTF-8 spoils the block it belongs to
    fn feed_corrupt(&mut self, lossy: &str) {
        if lossy.starts_with("### ") {
            self.flush();
            self.buffer.push(lossy.to_string());
        }
        if !self.buffer.is_empty() {
            self.corrupt = true;
        }
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let block = std::mem::take(&mut self.buffer).join("\n");
        if std::mem::take(&mut self.corrupt) {
            tracing::warn!("dropping entry block with invalid UTF-8");
            return;
        }

        match self.current_date {
            Some(date) => match entry::decode(&block, date) {
                Some(entry) => self.entries.push(entry),
                None => tracing::warn!(%date, "dropping entry block without a title"),
            },
            None => tracing::warn!("dropping entry block outside a date section"),
        }
    }

    fn finish(mut self) -> Vec<Entry> {
        self.flush();
        self.entries
    }
}

/// Place an encoded entry block into week-file content.
///
/// Without a section for `date`, a new `## date` header and the block go at
/// the end. Otherwise the block goes after the last entry of the matching
/// section (the last one, if the header repeats). The block is spliced in
/// with the file's own line ending; every existing byte is kept as is.
pub fn insert_entry(content: &str, date: NaiveDate, block: &str) -> String {
    let header = entry::date_header(date);
    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let block = block.lines().collect::<Vec<_>>().join(eol);
    let lines = line_spans(content);

    let Some(header_idx) = lines.iter().rposition(|line| line.text == header) else {
        let mut out = content.to_string();
        if let Some(last) = lines.last() {
            if !last.terminated {
                out.push_str(eol);
            }
            if !last.text.trim().is_empty() {
                out.push_str(eol);
            }
        }
        out.push_str(&header);
        out.push_str(eol);
        out.push_str(&block);
        out.push_str(eol);
        return out;
    };

    let section_end = lines[header_idx + 1..]
        .iter()
        .position(|line| entry::parse_date_header(line.text).is_some())
        .map_or(lines.len(), |offset| header_idx + 1 + offset);

    // Insert after the section's last non-blank line
    let mut insert_at = section_end;
    while insert_at > header_idx + 1 && lines[insert_at - 1].text.trim().is_empty() {
        insert_at -= 1;
    }
    let anchor = &lines[insert_at - 1];

    let mut insertion = String::new();
    if !anchor.terminated {
        insertion.push_str(eol);
    }
    if insert_at > header_idx + 1 {
        insertion.push_str(eol);
    }
    insertion.push_str(&block);
    insertion.push_str(eol);
    if insert_at == section_end && section_end < lines.len() {
        insertion.push_str(eol);
    }

    let mut out = String::with_capacity(content.len() + insertion.len());
    out.push_str(&content[..anchor.end]);
    out.push_str(&insertion);
    out.push_str(&content[anchor.end..]);
    out
}

/// One line of content with the byte offset just past its line ending
struct LineSpan<'a> {
    text: &'a str,
    end: usize,
    terminated: bool,
}

fn line_spans(content: &str) -> Vec<LineSpan<'_>> {
    let mut end = 0;
    content
        .split_inclusive('\n')
        .map(|raw| {
            end += raw.len();
            let text = raw.strip_suffix('\n').unwrap_or(raw);
            LineSpan {
                text: text.strip_suffix('\r').unwrap_or(text),
                end,
                terminated: raw.ends_with('\n'),
            }
        })
        .collect()
}

/// Write to a temp file in the same directory, then rename into place.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp_name = format!(
        "{}.brag-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("week.md"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    // rename replaces an existing destination, so the old file is never removed first
    if let Err(e) = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(BragError::Io(e));
    }
    Ok(())
}
