use anyhow::{Context, Result};
use std::path::PathBuf;

pub const OUTPUT_FILE_NAME: &str = "lyrics.html";

/// Get the application's data directory following XDG standards
/// On Linux: ~/.local/share/loafy
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .context("Failed to determine user data directory")?
        .join("loafy");

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    Ok(data_dir)
}

/// Get the application's log directory
pub fn get_log_dir() -> Result<PathBuf> {
    let log_dir = get_data_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    Ok(log_dir)
}

/// Directory holding the running executable
pub fn get_install_dir() -> Result<PathBuf> {
    let current_exe = std::env::current_exe().context("Failed to get current executable path")?;
    let current_exe = current_exe.canonicalize().unwrap_or(current_exe);

    current_exe
        .parent()
        .map(PathBuf::from)
        .with_context(|| format!("Executable has no parent directory: {}", current_exe.display()))
}

/// Fixed location of the generated lyrics page, next to the executable
pub fn get_output_path() -> Result<PathBuf> {
    Ok(get_install_dir()?.join(OUTPUT_FILE_NAME))
}
