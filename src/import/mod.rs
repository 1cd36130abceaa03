//! CSV loading boundary
//!
//! Turns bank CSV exports into raw ledger rows for the core. The core itself
//! never touches the filesystem; everything file-shaped lives here.

pub mod csv;

pub use csv::{detect_mapping, load_path, load_reader, ColumnMapping, LoadReport};
