/*! Cleaned-table writing.

Tab-separated output with the fixed five-column schema, shared by the
per-corpus files and the combined file.
!*/
mod table;

pub use table::{TableWriter, OUTPUT_COLUMNS};
