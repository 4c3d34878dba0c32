use std::fs;
use std::path::{Path, PathBuf};

use fdx_api::parse_screenplay;
use fdx_core::{FdxError, Screenplay};

use crate::{map_source_path, map_source_read};

const SUPPORTED_EXTENSIONS: &[&str] = &["fdx", "xml"];

#[derive(Debug, Clone)]
pub(crate) struct LoadedScreenplay {
    pub(crate) path: PathBuf,
    pub(crate) title: String,
    pub(crate) screenplay: Screenplay,
}

pub(crate) fn load_screenplay_file(file: &str) -> Result<LoadedScreenplay, FdxError> {
    let path = resolve_screenplay_path(file)?;
    let raw = fs::read_to_string(&path).map_err(map_source_read)?;
    let screenplay = parse_screenplay(&raw)?;
    let title = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("screenplay")
        .to_string();

    Ok(LoadedScreenplay {
        path,
        title,
        screenplay,
    })
}

pub(crate) fn resolve_screenplay_path(file: &str) -> Result<PathBuf, FdxError> {
    let path = PathBuf::from(file);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir().map_err(map_source_path)?.join(path)
    };

    if !absolute.exists() {
        return Err(FdxError::new(
            "CLI_SOURCE_NOT_FOUND",
            format!("file does not exist: {}", absolute.display()),
        ));
    }

    if !absolute.is_file() {
        return Err(FdxError::new(
            "CLI_SOURCE_NOT_FILE",
            format!("path is not a regular file: {}", absolute.display()),
        ));
    }

    if !has_supported_extension(&absolute) {
        return Err(FdxError::new(
            "CLI_SOURCE_EXT",
            format!(
                "expected a .fdx or .xml file: {}",
                absolute.display()
            ),
        ));
    }

    Ok(absolute)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}
