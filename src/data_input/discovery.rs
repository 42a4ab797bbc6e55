// src/data_input/discovery.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// One discovered rig CSV: the pilot it belongs to (directory name), the
/// file stem that identifies the test, and the concrete path.
#[derive(Debug, Clone)]
pub struct RigCsvFile {
    pub pilot: String,
    pub stem: String,
    pub path: PathBuf,
}

/// Walks a pilot-per-directory tree and returns every CSV in a stable
/// order: pilot directories sorted by name, then files sorted by name
/// within each pilot. The ordering fixes the summary row order, so it must
/// not depend on filesystem enumeration order.
pub fn discover_rig_csvs(input_root: &Path) -> Result<Vec<RigCsvFile>, Box<dyn Error>> {
    let mut pilot_dirs: Vec<PathBuf> = Vec::new();
    let entries = fs::read_dir(input_root)
        .map_err(|e| format!("Failed to read input root '{}': {}", input_root.display(), e))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            pilot_dirs.push(entry.path());
        }
    }
    pilot_dirs.sort();

    let mut files: Vec<RigCsvFile> = Vec::new();
    for pilot_dir in &pilot_dirs {
        let pilot = match pilot_dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let mut csv_paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(pilot_dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_csv = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false);
            if entry.file_type()?.is_file() && is_csv {
                csv_paths.push(path);
            }
        }
        csv_paths.sort();

        for path in csv_paths {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            files.push(RigCsvFile {
                pilot: pilot.clone(),
                stem,
                path,
            });
        }
    }

    Ok(files)
}
