use std::path::{Path, PathBuf};

/// Human-friendly path rendering for logs and error messages.
pub trait PathDisplayExt {
    /// Absolute form of the path when it can be resolved, the path as given
    /// otherwise. Never touches the filesystem beyond `canonicalize`.
    fn best_effort_display(&self) -> String;

    /// The path with `root` stripped, rendered with `/` separators.
    /// Falls back to [`PathDisplayExt::best_effort_display`] when the path
    /// does not live under `root`.
    fn display_relative_to(&self, root: &Path) -> String;
}

impl PathDisplayExt for Path {
    fn best_effort_display(&self) -> String {
        self.canonicalize()
            .or_else(|_| std::path::absolute(self))
            .unwrap_or_else(|_| self.to_path_buf())
            .display()
            .to_string()
    }

    fn display_relative_to(&self, root: &Path) -> String {
        match self.strip_prefix(root) {
            Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => self.best_effort_display(),
        }
    }
}

impl PathDisplayExt for PathBuf {
    fn best_effort_display(&self) -> String {
        self.as_path().best_effort_display()
    }

    fn display_relative_to(&self, root: &Path) -> String {
        self.as_path().display_relative_to(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/project/src/data", "src/data")]
    #[case("/project/README.md", "README.md")]
    #[case("/project", ".")]
    fn relative_display_strips_root(#[case] path: &str, #[case] expected: &str) {
        let root = Path::new("/project");
        assert_eq!(Path::new(path).display_relative_to(root), expected);
    }

    #[test]
    fn relative_display_falls_back_outside_root() {
        let root = Path::new("/project");
        let shown = Path::new("/elsewhere/file.txt").display_relative_to(root);
        assert!(shown.ends_with("file.txt"));
        assert!(shown.contains("elsewhere"));
    }

    #[test]
    fn best_effort_display_is_absolute_for_relative_paths() {
        let shown = PathBuf::from("does/not/exist").best_effort_display();
        assert!(Path::new(&shown).is_absolute());
        assert!(shown.ends_with("exist"));
    }
}
