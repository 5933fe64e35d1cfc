use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `content` to `path` through a sibling temp file and a rename, so a
/// reader never observes a half-written file.
///
/// An existing `path` keeps its permissions. The temp file is removed on
/// every failure.
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, path, content)
        .and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp(temp_path: &Path, target: &Path, content: &str) -> std::io::Result<()> {
    let file = fs::File::create(temp_path)?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    drop(writer);

    match fs::metadata(target) {
        Ok(metadata) => fs::set_permissions(temp_path, metadata.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
