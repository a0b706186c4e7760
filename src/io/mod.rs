//! I/O module
//!
//! Handles the on-disk line format and report output.
//!
//! # Components
//!
//! - `line_codec` - pipe-delimited line encoding and lenient decoding
//! - `report` - human readable export reports

pub mod line_codec;
pub mod report;

pub use line_codec::{decode_line, decode_record, encode_line, lenient_int, DELIMITER};
pub use report::{export_to_file, report_path, write_customer_report, write_employee_report};
