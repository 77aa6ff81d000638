use crate::error::ConfigError;
use crate::grid::grid::Grid;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Parse a grid from a file path
pub fn parse_grid(path: &str) -> Result<Grid, ConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(64 * 1024, file);

    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(row) = parse_row(&line, idx + 1)? {
            rows.push(row);
        }
    }

    Grid::from_rows(rows)
}

/// Parse a grid directly from an in-memory string
pub fn parse_grid_from_str(src: &str) -> Result<Grid, ConfigError> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (idx, line) in src.lines().enumerate() {
        if let Some(row) = parse_row(line, idx + 1)? {
            rows.push(row);
        }
    }

    Grid::from_rows(rows)
}

/// One grid row; `.`/`0` is white, `#`/`1` is black. Blank lines yield `None`.
fn parse_row(line: &str, line_no: usize) -> Result<Option<Vec<bool>>, ConfigError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    line.chars()
        .map(|glyph| match glyph {
            '.' | '0' => Ok(false),
            '#' | '1' => Ok(true),
            _ => Err(ConfigError::InvalidCell {
                line: line_no,
                glyph,
            }),
        })
        .collect::<Result<Vec<bool>, _>>()
        .map(Some)
}
