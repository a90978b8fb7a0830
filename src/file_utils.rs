use anyhow::{Result, Context, anyhow};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Output path next to the input file
    // @params: input_file, file_name
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, file_name: &str) -> PathBuf {
        let dir = input_file
            .as_ref()
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        dir.join(file_name)
    }

    /// Write a file through a temporary sibling that is renamed into place.
    ///
    /// The closure receives a buffered writer. If it fails, the temporary file
    /// is removed and `path` is left untouched.
    pub fn write_atomic<P, F>(path: P, write: F) -> Result<()>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<()>,
    {
        let path = path.as_ref();
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::ensure_dir(dir)?;

        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
        {
            let mut writer = BufWriter::new(&mut temp);
            write(&mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to flush temporary file for {:?}", path))?;
        }

        temp.persist(path)
            .map_err(|e| anyhow!("Failed to move output into place at {:?}: {}", path, e.error))?;
        Ok(())
    }
}
