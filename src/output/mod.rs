//! Output module for rendering the extracted roster

mod delimited;

pub use delimited::{format_delimited, format_row, write_delimited, write_delimited_file};
