//! Output writers for `paramwire-inspect`.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::InspectError;

/// Writes `content` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`InspectError::Io`] when the parent directory cannot be opened
/// or the file cannot be written.
pub fn write_file(path: &Utf8Path, content: &str) -> Result<(), InspectError> {
    let io_error = |source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        io_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    dir.write(file_name, content).map_err(io_error)
}

/// Writes `content` to standard output.
///
/// # Errors
///
/// Returns [`InspectError::Io`] when standard output is closed.
pub fn write_stdout(content: &str) -> Result<(), InspectError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| InspectError::Io {
            path: Utf8PathBuf::from("<stdout>"),
            source,
        })
}
