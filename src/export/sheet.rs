//! Sparse spreadsheet addressed by zero-based `(row, col)`.
//!
//! Spreadsheet-style `A1` names are only produced when a sheet is
//! serialized.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use crate::common::{ExportFormat, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    UInt(u64),
    Float(f64),
    Str(String),
}

impl CellValue {
    fn to_csv_field(&self) -> String {
        match self {
            CellValue::UInt(v) => v.to_string(),
            CellValue::Float(v) => format!("{:.2}", v),
            CellValue::Str(s) => s.clone(),
        }
    }
}

impl From<u64> for CellValue {
    fn from(v: u64) -> Self {
        CellValue::UInt(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Str(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Str(s)
    }
}

/// Bijective base-26 column name: 0 → `A`, 25 → `Z`, 26 → `AA`
pub fn column_name(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// `A1` style address of a zero-based cell
pub fn cell_name(row: usize, col: usize) -> String {
    format!("{}{}", column_name(col), row + 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(usize, usize), CellValue>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<CellValue>) {
        self.cells.insert((row, col), value.into());
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// `(rows, cols)` of the bounding box
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells
            .keys()
            .fold((0, 0), |(rows, cols), (r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// One record per row of the bounding box; gaps become empty fields.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        let (rows, cols) = self.dimensions();
        let mut writer = csv::Writer::from_writer(out);
        for row in 0..rows {
            writer.write_record((0..cols).map(|col| {
                self.get(row, col)
                    .map(CellValue::to_csv_field)
                    .unwrap_or_default()
            }))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Value {
        let cells: serde_json::Map<String, serde_json::Value> = self
            .cells
            .iter()
            .map(|((row, col), value)| {
                (
                    cell_name(*row, *col),
                    serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        serde_json::json!({
            "sheet": self.name,
            "cells": cells,
        })
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.to_json())?;
        writeln!(out)?;
        Ok(())
    }

    /// Write the sheet to `path`, replacing any existing file
    pub fn save(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut out = std::io::BufWriter::new(file);
        match format {
            ExportFormat::Csv => self.write_csv(&mut out)?,
            ExportFormat::Json => self.write_json(&mut out)?,
        }
        out.flush()?;
        let (rows, cols) = self.dimensions();
        tracing::info!(
            "Exported sheet '{}' ({} rows x {} cols) to {}",
            self.name,
            rows,
            cols,
            path.display()
        );
        Ok(())
    }
}
