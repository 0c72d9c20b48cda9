use relative_path::RelativePathBuf;
use std::env;
use std::path::Path;

/// Get a platform-independent version of a file path
///
/// Absolute paths are shown relative to the current directory when possible.
pub fn display_path<P>(path: P) -> String
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_absolute() {
        let relative = env::current_dir()
            .ok()
            .and_then(|current_dir| pathdiff::diff_paths(path, current_dir));

        match relative {
            Some(relative) if !relative.starts_with("..") => to_relative_string(&relative)
                .unwrap_or_else(|| path.display().to_string()),
            _ => path.display().to_string(),
        }
    } else {
        to_relative_string(path).unwrap_or_else(|| String::from("<invalid path>"))
    }
}

fn to_relative_string(path: &Path) -> Option<String> {
    RelativePathBuf::from_path(path)
        .ok()
        .map(|relative_path| relative_path.to_string())
}
