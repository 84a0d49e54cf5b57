//! File I/O
//!
//! Reads G-code documents, writes scaled output and diagnostic traces, and
//! derives default output file names from the scale factors used.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use gcodescope_core::constants::FILENAME_DECIMAL_MARKER;
use gcodescope_core::{decimal_repr, ScaleFactors};

use crate::visualizer::MotionTrace;

/// Files larger than this are still read, but with a warning
const LARGE_FILE_WARN_BYTES: u64 = 500 * 1024 * 1024;

/// G-code file reader
pub struct GcodeFileReader {
    path: PathBuf,
    file_size: u64,
}

impl GcodeFileReader {
    /// Create a new G-code file reader
    ///
    /// # Errors
    /// Returns error if file does not exist or cannot be accessed
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(anyhow!("File does not exist: {}", path.display()));
        }

        if !path.is_file() {
            return Err(anyhow!("Path is not a file: {}", path.display()));
        }

        let metadata = fs::metadata(&path)?;
        let file_size = metadata.len();

        Ok(Self { path, file_size })
    }

    /// Get file size in bytes
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Get file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read entire file into memory
    ///
    /// # Errors
    /// Returns error if file cannot be read or is not valid UTF-8
    pub fn read_all(&self) -> Result<String> {
        if self.file_size > LARGE_FILE_WARN_BYTES {
            tracing::warn!(
                "Reading very large file ({}MB) into memory",
                self.file_size / (1024 * 1024)
            );
        }

        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read file: {}", self.path.display()))
    }
}

/// Read a whole G-code document
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let reader = GcodeFileReader::new(path)?;
    let document = reader.read_all()?;
    tracing::debug!(
        "Read {} bytes from {}",
        reader.file_size(),
        reader.path().display()
    );
    Ok(document)
}

/// Write a document in a single shot
pub fn write_document(path: impl AsRef<Path>, document: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, document)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Write the stored entries of a trace, one per line
pub fn write_trace(path: impl AsRef<Path>, trace: &MotionTrace) -> Result<()> {
    write_document(path, &trace.render())
}

fn filename_factor(value: f64) -> String {
    decimal_repr(value).replace('.', &FILENAME_DECIMAL_MARKER.to_string())
}

/// Suggested destination for a scaled copy of `input`
///
/// `part.gcode` scaled by x=2, y=0.5, z=1 becomes
/// `part_scaled_x2c0_y0c5_z1c0.gcode`, next to the input.
pub fn default_output_path(input: impl AsRef<Path>, factors: &ScaleFactors) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = input
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let suffix = factors
        .iter()
        .map(|(axis, value)| {
            format!(
                "{}{}",
                axis.letter().to_ascii_lowercase(),
                filename_factor(value)
            )
        })
        .collect::<Vec<_>>()
        .join("_");

    input.with_file_name(format!("{}_scaled_{}{}", stem, suffix, extension))
}
