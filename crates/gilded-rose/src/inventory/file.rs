//! Reading and writing inventories for the command-line harness.
//!
//! CSV files carry a `name,sellIn,quality` header; JSON files hold an array of objects with the
//! same keys. The rules in this crate never touch I/O, so everything here is optional plumbing.

use super::item::Item;
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum InventoryFileError {
    #[error("failed to access inventory file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid inventory CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid inventory JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported inventory format '{0}' (expected csv or json)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventoryFormat {
    #[default]
    Csv,
    Json,
}

impl InventoryFormat {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryFormat::Csv => "csv",
            InventoryFormat::Json => "json",
        }
    }

    /// Guesses the format from a file extension, if it names one we know.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for InventoryFormat {
    type Err = InventoryFileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(InventoryFileError::UnknownFormat(value.to_string())),
        }
    }
}

impl fmt::Display for InventoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn read_items<R: Read>(
    reader: R,
    format: InventoryFormat,
) -> Result<Vec<Item>, InventoryFileError> {
    match format {
        InventoryFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader);
            let mut items = Vec::new();
            for record in csv_reader.deserialize::<Item>() {
                items.push(record?);
            }
            Ok(items)
        }
        InventoryFormat::Json => Ok(serde_json::from_reader(reader)?),
    }
}

pub fn read_items_from_path<P: AsRef<Path>>(
    path: P,
    format: InventoryFormat,
) -> Result<Vec<Item>, InventoryFileError> {
    let file = File::open(path)?;
    read_items(file, format)
}

pub fn write_items<W: Write>(
    mut writer: W,
    items: &[Item],
    format: InventoryFormat,
) -> Result<(), InventoryFileError> {
    match format {
        InventoryFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for item in items {
                csv_writer.serialize(item)?;
            }
            csv_writer.flush()?;
        }
        InventoryFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, items)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
