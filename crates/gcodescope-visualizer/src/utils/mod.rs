//! Utility modules for the file boundary

pub mod file_io;

pub use file_io::{
    default_output_path, read_document, write_document, write_trace, GcodeFileReader,
};
