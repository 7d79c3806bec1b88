use crate::errors::AppError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a single-line trigger definition, replacing any previous content.
pub fn write_trigger_file(path: &Path, line: &str) -> Result<(), AppError> {
    debug!("Writing '{}' to {}", line, path.display());
    fs::write(path, format!("{}\n", line.trim_end())).map_err(|e| {
        AppError::Io(format!("Failed to write trigger file '{}': {}", path.display(), e))
    })
}

/// Absolute, symlink-free path of the running executable.
pub fn resolve_program_path() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()
        .map_err(|e| AppError::Io(format!("Cannot determine program path: {}", e)))?;
    Ok(fs::canonicalize(&exe).unwrap_or(exe))
}

/// Directory holding the executable; default location of the YAML files.
pub fn program_directory() -> Result<PathBuf, AppError> {
    let program = resolve_program_path()?;
    program
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::NotFound(format!("No parent directory for '{}'", program.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_exactly_one_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sunrise-front");
        write_trigger_file(&path, "5 7 * * * root /bin/cam -c front -t sunrise").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "5 7 * * * root /bin/cam -c front -t sunrise\n"
        );
    }

    #[test]
    fn overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sunset-front");
        fs::write(&path, "an older, longer definition that should disappear\n").unwrap();
        write_trigger_file(&path, "1 2 * * * root x").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 2 * * * root x\n");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent").join("sunrise-front");
        assert!(matches!(write_trigger_file(&path, "x"), Err(AppError::Io(_))));
    }

    #[test]
    fn program_path_is_absolute() {
        assert!(resolve_program_path().unwrap().is_absolute());
        assert!(program_directory().unwrap().is_dir());
    }
}
