use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Non-empty input lines in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBatch {
    lines: Vec<String>,
}

impl LineBatch {
    /// Splits on `\n`, `\r\n` or `\r` and drops empty lines.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split(['\n', '\r'])
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

pub struct InputReader;

impl InputReader {
    /// Reads the entire file as one string.
    pub fn read_all(path: &str) -> Result<String> {
        let bytes = fs::read(path).with_context(|| format!("Failed to read file: {path}"))?;
        String::from_utf8(bytes).with_context(|| {
            format!(
                "Failed to read file: {}: input is not valid UTF-8",
                Path::new(path).display()
            )
        })
    }

    /// Reads the file and splits it into non-empty lines.
    pub fn read_lines(path: &str) -> Result<LineBatch> {
        Self::read_all(path).map(|text| LineBatch::from_text(&text))
    }
}
