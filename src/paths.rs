//! Output path resolution for built extensions.
//! `CMake` only treats `*_OUTPUT_DIRECTORY` values as directories when they end with a separator.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Directory the packaging system expects the artifact for `ext_name` in.
/// Dotted names map to subdirectories: `pkg.sub.native` -> `<build_lib>/pkg/sub/`.
pub fn extension_output_dir(build_lib: &Path, ext_name: &str) -> std::io::Result<PathBuf> {
    let mut dir = if build_lib.as_os_str().is_empty() {
        std::env::current_dir()?
    } else {
        std::path::absolute(build_lib)?
    };

    let mut components: Vec<&str> = ext_name.split('.').collect();
    components.pop();
    for component in components {
        dir.push(component);
    }

    Ok(dir)
}

/// Render `path` with exactly one trailing separator.
/// Idempotent: normalizing an already normalized path returns it unchanged.
#[must_use]
pub fn with_trailing_separator(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    let trimmed = rendered.trim_end_matches(std::path::is_separator);

    let mut normalized = String::with_capacity(trimmed.len() + 1);
    normalized.push_str(trimmed);
    normalized.push(MAIN_SEPARATOR);
    normalized
}

/// Resolve and normalize the output directory in one step
pub fn resolve_output_dir(build_lib: &Path, ext_name: &str) -> std::io::Result<String> {
    extension_output_dir(build_lib, ext_name).map(|dir| with_trailing_separator(&dir))
}
