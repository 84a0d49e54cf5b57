//! File boundary helpers

use gcodescope_core::ScaleFactors;
use gcodescope_visualizer::{
    default_output_path, read_document, reconstruct, scale_document, write_document, write_trace,
    GcodeFileReader, ReconstructOptions,
};
use tempfile::TempDir;

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.gcode");
    let err = read_document(&missing).unwrap_err();
    assert!(err.to_string().contains("File does not exist"));
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = TempDir::new().unwrap();
    assert!(GcodeFileReader::new(dir.path()).is_err());
}

#[test]
fn test_scale_file_to_default_destination() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("part.nc");
    write_document(&input, "G0 X1 Y1\nG1 X2 Y-2\n").unwrap();

    let factors = ScaleFactors::new(2.0, 0.5, 1.0);
    let output = default_output_path(&input, &factors);
    assert_eq!(output, dir.path().join("part_scaled_x2c0_y0c5_z1c0.nc"));

    let scaled = scale_document(&read_document(&input).unwrap(), &factors);
    write_document(&output, &scaled).unwrap();

    assert_eq!(
        read_document(&output).unwrap(),
        "G0 X2.0000 Y0.5000\nG1 X4.0000 Y-1.0000\n"
    );
}

#[test]
fn test_write_trace_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("debug_coordinates.txt");
    let result = reconstruct(
        "G0 X0 Y0\nG1 X1 Y0\nG1 X1 Y2.5\n",
        &ReconstructOptions::with_trace(20),
    );
    write_trace(&path, result.trace.as_ref().unwrap()).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Original: (0.0, 0.0) Parsed: (1.0, 0.0)\nOriginal: (1.0, 0.0) Parsed: (1.0, 2.5)\n"
    );
}
