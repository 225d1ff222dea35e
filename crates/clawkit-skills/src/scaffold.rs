use std::path::{Path, PathBuf};
use tracing::info;

use clawkit_core::KitError;

use crate::templates::skill_files;

/// Reject names that are empty or would escape the parent directory.
pub fn validate_name(name: &str) -> clawkit_core::Result<()> {
    if name.trim().is_empty() {
        return Err(KitError::InvalidInput("skill name is empty".into()));
    }
    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(KitError::InvalidInput(format!(
            "'{name}' is not a valid skill directory name"
        )));
    }
    Ok(())
}

/// Create `parent_dir/name` with the standard skill files.
///
/// Refuses with [`KitError::AlreadyExists`] before writing anything if the
/// directory is already there. `main.js` is made executable.
pub fn scaffold(parent_dir: &Path, name: &str) -> clawkit_core::Result<PathBuf> {
    validate_name(name)?;

    let skill_dir = parent_dir.join(name);
    if skill_dir.exists() {
        return Err(KitError::AlreadyExists { path: skill_dir });
    }

    std::fs::create_dir_all(parent_dir)?;
    std::fs::create_dir(&skill_dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => KitError::AlreadyExists {
            path: skill_dir.clone(),
        },
        _ => KitError::Io(e),
    })?;

    for file in skill_files(name) {
        let path = skill_dir.join(file.file_name);
        std::fs::write(&path, &file.contents)?;
        if file.executable {
            make_executable(&path)?;
        }
    }

    info!(skill = name, path = ?skill_dir, "scaffolded skill");
    Ok(skill_dir)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
