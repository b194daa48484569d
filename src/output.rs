//! Comma-delimited text output.
//!
//! Fields are joined as-is with no quoting. Header rows keep a trailing space
//! before the newline so files stay byte-compatible with earlier exports.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

pub const TEAMS_FILE: &str = "teams.txt";
pub const PLAYERS_FILE: &str = "players.txt";
pub const SKATERS_FILE: &str = "skaters_stats.txt";
pub const GOALIES_FILE: &str = "goalie_stats.txt";

pub const TEAMS_HEADER: &[&str] = &["team_id", "team_name"];
pub const PLAYERS_HEADER: &[&str] = &["playerID", "team_id", "fullName", "posType", "position"];
pub const SKATERS_HEADER: &[&str] = &[
    "playerID",
    "season",
    "games",
    "timeOnIce",
    "points",
    "goals",
    "assists",
    "shots",
];
pub const GOALIES_HEADER: &[&str] = &[
    "playerID",
    "season",
    "games",
    "wins",
    "losses",
    "ot_losses",
    "shutouts",
];

const SEP: char = ',';

/// Writes one header row followed by data rows.
pub struct RowWriter<W: Write> {
    inner: W,
    rows: usize,
}

pub type FileRowWriter = RowWriter<BufWriter<File>>;

impl<W: Write> RowWriter<W> {
    pub fn new(mut inner: W, header: &[&str]) -> io::Result<Self> {
        writeln!(inner, "{} ", join(header))?;
        Ok(Self { inner, rows: 0 })
    }

    pub fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        writeln!(self.inner, "{}", join(fields))?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl FileRowWriter {
    /// Create (or truncate) `path` and write `header`.
    pub fn create(path: &Path, header: &[&str]) -> io::Result<Self> {
        RowWriter::new(BufWriter::new(File::create(path)?), header)
    }
}

fn join<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(SEP);
        }
        line.push_str(field.as_ref());
    }
    line
}
