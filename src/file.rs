// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    config::options::{ExportFormat, ExportOptions},
    error::Result,
    order::OrderRecord,
    present::encode,
};

/// Encode `records` and write them to the format's fixed file name inside the
/// export directory (created if missing). Overwrites. Returns the path.
pub fn write_artifact(
    opts: &ExportOptions,
    format: ExportFormat,
    records: &[OrderRecord],
) -> Result<PathBuf> {
    ensure_directory(opts.out_dir())?;

    let contents = match format {
        ExportFormat::Json => encode::to_json(records)?,
        ExportFormat::Csv => encode::to_csv(records)?,
    };

    let path = opts.out_path(format);
    fs::write(&path, contents)?;
    logf!("Export: {:?} → {} ({} rows)", format, path.display(), records.len());
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
