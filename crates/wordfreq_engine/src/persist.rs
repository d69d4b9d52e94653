use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use engine_logging::engine_info;

pub const SAVE_FILE_PREFIX: &str = "web_page_";
pub const SAVE_FILE_SUFFIX: &str = ".html";

/// Create an empty, uniquely named `web_page_*.html` file.
///
/// The file goes into `dir` when it is an existing directory, otherwise into
/// the system temp directory. The file is kept on disk.
pub fn create_save_file(dir: &Path) -> io::Result<PathBuf> {
    let target_dir = if dir.is_dir() {
        dir.to_path_buf()
    } else {
        engine_info!("Directory not found, will save to temp directory");
        std::env::temp_dir()
    };

    let file = tempfile::Builder::new()
        .prefix(SAVE_FILE_PREFIX)
        .suffix(SAVE_FILE_SUFFIX)
        .tempfile_in(&target_dir)?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

/// Copy the whole stream into `path`, replacing any previous content.
pub fn copy_to_file<R: Read + ?Sized>(reader: &mut R, path: &Path) -> io::Result<u64> {
    let mut file = File::create(path)?;
    let bytes = io::copy(reader, &mut file)?;
    file.flush()?;
    file.sync_all()?;
    Ok(bytes)
}
