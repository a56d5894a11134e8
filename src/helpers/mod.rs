//! Helper utilities

/// Extension of the last path component, dot included
///
/// Returns `""` when the final component has no extension. A leading dot
/// alone (dotfiles like `.gitignore`) does not count as an extension.
///
/// # Examples
/// ```
/// assert_eq!(lintview::helpers::filename_extension("styles/site.css"), ".css");
/// assert_eq!(lintview::helpers::filename_extension("archive.tar.gz"), ".gz");
/// assert_eq!(lintview::helpers::filename_extension("README"), "");
/// ```
pub fn filename_extension(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or("");
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}
