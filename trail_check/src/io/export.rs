use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{DesignError, Result};
use crate::report::Report;

/// Table lines (header included) as CSV text.
pub fn table_csv_string(table: &[Vec<String>]) -> Result<String> {
    let mut wrtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for line in table {
        wrtr.write_record(line)?;
    }
    let bytes = wrtr
        .into_inner()
        .map_err(|e| DesignError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| DesignError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn report_json_string(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes table lines (header included) as CSV.
pub fn write_table_csv<P: AsRef<Path>>(path: P, table: &[Vec<String>]) -> Result<()> {
    let csv = table_csv_string(table)?;
    super::write_string(path.as_ref(), &csv)?;
    debug!("wrote {} csv lines to {}", table.len(), path.as_ref().display());
    Ok(())
}

pub fn write_report_json<P: AsRef<Path>>(path: P, report: &Report) -> Result<()> {
    let json = report_json_string(report)?;
    super::write_string(path, &json)?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(OsString::from(".partial"));
    PathBuf::from(name)
}

/// Writes every file or none of them. Contents go to `<path>.partial` files
/// first, which are renamed only after all of them were written.
pub fn write_files<P: AsRef<Path>>(files: &[(P, String)]) -> Result<()> {
    let mut staged = Vec::with_capacity(files.len());
    for (path, contents) in files {
        let partial = staging_path(path.as_ref());
        if let Err(e) = super::write_string(&partial, contents) {
            let _ = std::fs::remove_file(&partial);
            for (p, _) in &staged {
                let _ = std::fs::remove_file(p);
            }
            return Err(e.into());
        }
        staged.push((partial, path.as_ref()));
    }
    for (partial, path) in &staged {
        std::fs::rename(partial, path)?;
        debug!("wrote {}", path.display());
    }
    Ok(())
}
