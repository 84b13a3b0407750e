//! Report generation port trait.

use std::path::Path;

use crate::domain::comparison::Comparison;
use crate::domain::error::CompareError;

/// Port for writing comparison reports.
pub trait ReportPort {
    fn write(&self, comparison: &Comparison, output_path: &Path) -> Result<(), CompareError>;
}
