//! Configuration utility functions.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::path::{Path, PathBuf};

/// Bytes left untouched when escaping a single URL path segment.
///
/// Everything else, including `/`, `;`, `,`, `?` and space, is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Escape a string so it can be placed inside a URL path segment.
///
/// # Examples
/// ```ignore
/// path_escape("Jane Doe") -> "Jane%20Doe"
/// path_escape("a/b")      -> "a%2Fb"
/// path_escape("名字")     -> "%E5%90%8D%E5%AD%97"
/// ```
pub fn path_escape(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` that exists is returned as-is.
///
/// # Example
/// ```text
/// /home/user/site/source/post/  ← start
/// /home/user/site/config.toml   ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_path_escape() {
        assert_eq!(path_escape("Jane Doe"), "Jane%20Doe");
        assert_eq!(path_escape("admin"), "admin");
        assert_eq!(path_escape(""), "");

        // Separators inside a segment must not survive
        assert_eq!(path_escape("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(path_escape("a;b,c"), "a%3Bb%2Cc");
        assert_eq!(path_escape("100%"), "100%25");
    }

    #[test]
    fn test_path_escape_keeps_segment_safe_chars() {
        assert_eq!(path_escape("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(path_escape("$&+:=@"), "$&+:=@");
    }

    #[test]
    fn test_path_escape_unicode() {
        assert_eq!(path_escape("名字"), "%E5%90%8D%E5%AD%97");
    }

    #[test]
    fn test_find_config_file_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("source/post");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("config.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("config.toml")).unwrap();
        assert_eq!(found, temp.path().join("config.toml"));
    }

    #[test]
    fn test_find_config_file_prefers_nearest() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("site");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("config.toml"), "").unwrap();
        fs::write(nested.join("config.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("config.toml")).unwrap();
        assert_eq!(found, nested.join("config.toml"));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");

        assert_eq!(find_config_file(Path::new("/"), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = TempDir::new().unwrap();
        let name = Path::new("pugo-config-that-does-not-exist.toml");
        assert_eq!(find_config_file(temp.path(), name), None);
    }
}
