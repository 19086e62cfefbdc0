/// Column and fill-value constants shared between the pipeline and the CLI.

/// Columns dropped by default, in normalized form. "unnamed:0" is the
/// index-artifact column that dataframe exports prepend when the row
/// index is written out with no header label.
pub const DEFAULT_DROP_COLUMNS: &[&str] = &["unnamed:0"];

/// Placeholder written into categorical cells when a column has no
/// observed value to take a mode from.
pub const CATEGORICAL_FILL: &str = "Unknown";
