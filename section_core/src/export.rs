//! # Export
//!
//! JSON files for a single calculation or the whole standard catalog.
//!
//! ## Atomic Writes
//!
//! Files are written to a `.tmp` sibling, synced, then renamed over the
//! target, so a crash mid-save never leaves a truncated file behind.
//!
//! ## Schema Version
//!
//! Every file carries `schema_version`. Loading rejects a different major
//! version, and while the schema is 0.x, a newer minor version as well.
//!
//! ## Example
//!
//! ```rust,no_run
//! use section_core::export::{load_record, save_record, CalculationRecord};
//! use section_core::shapes::Dimensions;
//! use std::path::Path;
//!
//! let record = CalculationRecord::new(Dimensions::Circle { diameter: 100.0 })?;
//! save_record(&record, Path::new("circle.json"))?;
//! let loaded = load_record(Path::new("circle.json"))?;
//! assert_eq!(loaded.dimensions, record.dimensions);
//! # Ok::<(), section_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculations::{compute, SectionProperties};
use crate::catalog::{StandardCatalog, StandardSection};
use crate::errors::{CalcError, CalcResult};
use crate::shapes::Dimensions;

/// Current export schema version
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One computed section, as saved by `section_cli --output`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub dimensions: Dimensions,
    pub properties: SectionProperties,
}

impl CalculationRecord {
    /// Compute `dimensions` and stamp the result with the current time
    pub fn new(dimensions: Dimensions) -> CalcResult<Self> {
        let properties = compute(&dimensions)?;
        Ok(CalculationRecord {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            dimensions,
            properties,
        })
    }
}

/// Every standard section with its properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogExport {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<StandardSection>,
}

impl CatalogExport {
    pub fn new(catalog: &StandardCatalog) -> Self {
        CatalogExport {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            sections: catalog.iter().cloned().collect(),
        }
    }
}

/// Save a calculation record atomically.
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(CalcError::SerializationError)` - Record could not be encoded
/// * `Err(CalcError::FileError)` - I/O error
pub fn save_record(record: &CalculationRecord, path: &Path) -> CalcResult<()> {
    write_json_atomic(record, path)?;
    info!(path = %path.display(), shape = %record.dimensions.shape(), "calculation saved");
    Ok(())
}

/// Load a calculation record.
///
/// The stored dimensions are validated again, so a hand-edited file with
/// invalid input is rejected the same way `compute` would reject it.
///
/// # Returns
///
/// * `Ok(CalculationRecord)` - Loaded record
/// * `Err(CalcError::VersionMismatch)` - Incompatible schema version
/// * `Err(CalcError::InvalidDimensions)` - Stored dimensions fail validation
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_record(path: &Path) -> CalcResult<CalculationRecord> {
    let record: CalculationRecord = read_json(path)?;
    validate_version(&record.schema_version)?;
    compute(&record.dimensions)?;
    Ok(record)
}

/// Save the whole catalog atomically
pub fn save_catalog(catalog: &StandardCatalog, path: &Path) -> CalcResult<()> {
    let export = CatalogExport::new(catalog);
    write_json_atomic(&export, path)?;
    info!(path = %path.display(), sections = export.sections.len(), "catalog exported");
    Ok(())
}

/// Load a catalog export written by [`save_catalog`]
pub fn load_catalog(path: &Path) -> CalcResult<CatalogExport> {
    let export: CatalogExport = read_json(path)?;
    validate_version(&export.schema_version)?;
    Ok(export)
}

fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    let written = tmp_file
        .write_all(json.as_bytes())
        .and_then(|_| tmp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(tmp_path);
        return Err(CalcError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        ));
    }

    fs::rename(tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Check a file's schema version against [`SCHEMA_VERSION`]
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<(u32, u32)> {
        let mut parts = v.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some((major, minor))
    };

    let (file_major, file_minor) = parse(file_version).ok_or_else(mismatch)?;
    let (major, minor) = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != major {
        return Err(mismatch());
    }
    // 0.x: minor bumps are breaking, older files still load
    if major == 0 && file_minor > minor {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("sectional_test_{}_{}.json", std::process::id(), name))
    }

    #[test]
    fn test_temp_paths_are_per_process() {
        let name = temp_path("any").file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.contains(&std::process::id().to_string()));
    }

    #[test]
    fn test_record_save_and_load() {
        let path = temp_path("record_roundtrip");
        let record = CalculationRecord::new(Dimensions::Pipe {
            outer_diameter: 100.0,
            inner_diameter: 80.0,
        })
        .unwrap();
        save_record(&record, &path).unwrap();

        let loaded = load_record(&path).unwrap();
        assert_eq!(loaded.dimensions, record.dimensions);
        assert_eq!(loaded.generated_at, record.generated_at);
        assert!((loaded.properties.area_mm2 - 2827.43).abs() < 0.01);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_path("atomic");
        let record = CalculationRecord::new(Dimensions::default_for(crate::shapes::ShapeKind::Box)).unwrap();
        save_record(&record, &path).unwrap();

        let mut tmp = path.as_os_str().to_os_string();
        tmp.push(".tmp");
        assert!(!Path::new(&tmp).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_record_rejects_invalid_dimensions() {
        let err = CalculationRecord::new(Dimensions::Circle { diameter: 0.0 }).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSIONS");
    }

    #[test]
    fn test_load_rejects_edited_dimensions() {
        let path = temp_path("edited");
        let mut record = CalculationRecord::new(Dimensions::Circle { diameter: 50.0 }).unwrap();
        record.dimensions = Dimensions::Circle { diameter: -5.0 };
        save_record(&record, &path).unwrap();

        let err = load_record(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSIONS");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_path("newer_schema");
        let mut record = CalculationRecord::new(Dimensions::Circle { diameter: 50.0 }).unwrap();
        record.schema_version = "1.0.0".to_string();
        save_record(&record, &path).unwrap();

        let err = load_record(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_and_garbage() {
        let err = load_record(Path::new("/nonexistent/record.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        let path = temp_path("garbage");
        fs::write(&path, "{ not json").unwrap();
        let err = load_record(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_catalog_export_roundtrip() {
        let path = temp_path("catalog");
        save_catalog(catalog(), &path).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded.sections.len(), catalog().len());
        assert_eq!(loaded.sections[0].id, catalog().iter().next().unwrap().id);

        let _ = fs::remove_file(&path);
    }
}
