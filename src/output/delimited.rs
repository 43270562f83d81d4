//! Semicolon-delimited roster output
//!
//! The layout is a header row followed by one row per employee:
//!
//! ```text
//! Firstname;Lastname;Email;Position
//! John;Doe;john.doe@x.com;Engineer
//! ```
//!
//! Files are written through the `csv` writer with `\r\n` row terminators,
//! quoting only the fields that contain the delimiter, a double quote or a
//! line break. The stdout rendering is the same layout with plain `\n`
//! terminators and no quoting.

use crate::extract::EmployeeContact;
use csv::{Terminator, WriterBuilder};
use std::io::{self, Write};
use std::path::Path;

const DELIMITER: u8 = b';';

const SEPARATOR: &str = ";";

/// Column names of the header row
const HEADER: [&str; 4] = ["Firstname", "Lastname", "Email", "Position"];

fn fields(contact: &EmployeeContact) -> [&str; 4] {
    [
        contact.firstname.as_str(),
        contact.lastname.as_str(),
        contact.email.as_str(),
        contact.position.as_str(),
    ]
}

/// Formats one contact as a delimited row, without line terminator
pub fn format_row(contact: &EmployeeContact) -> String {
    fields(contact).join(SEPARATOR)
}

/// Formats the full roster, header included, with `\n` terminators
pub fn format_delimited(contacts: &[EmployeeContact]) -> String {
    let mut out = HEADER.join(SEPARATOR);
    out.push('\n');
    for contact in contacts {
        out.push_str(&format_row(contact));
        out.push('\n');
    }
    out
}

/// Writes the roster to any writer in the [`format_delimited`] layout
pub fn write_delimited<W: Write>(contacts: &[EmployeeContact], writer: &mut W) -> io::Result<()> {
    writer.write_all(format_delimited(contacts).as_bytes())?;
    writer.flush()
}

/// Writes the roster to a file, replacing any existing content
///
/// # Arguments
///
/// * `contacts` - Employees to write, in output order
/// * `output_path` - Destination file
pub fn write_delimited_file(contacts: &[EmployeeContact], output_path: &Path) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::CRLF)
        .from_path(output_path)?;

    writer.write_record(HEADER)?;
    for contact in contacts {
        writer.write_record(fields(contact))?;
    }
    writer.flush()?;
    Ok(())
}
