use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::PathDisplayExt;

pub const README_FILE_NAME: &str = "README.md";
pub const DEFAULT_PROJECT_NAME: &str = "Project Name";

/// Everything below the title line.
const README_BODY: &str = include_str!("readme_body.md");

/// README text with `project_name` as its title.
pub fn render_readme(project_name: &str) -> String {
    format!("# {project_name}\n{README_BODY}")
}

/// Writes `README.md` into `root`, replacing any existing file.
pub async fn write_readme(root: &Path, project_name: &str) -> Result<PathBuf, ReadmeError> {
    let path = root.join(README_FILE_NAME);
    let contents = render_readme(project_name).into_bytes();
    debug!("Writing {} bytes to {}", contents.len(), path.display());

    fs::write(&path, contents).await.0.context(WriteSnafu {
        path: path.clone(),
    })?;
    Ok(path)
}

#[derive(Debug, Snafu)]
pub enum ReadmeError {
    #[snafu(display("Failed to write {}", path.best_effort_display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(DEFAULT_PROJECT_NAME, "# Project Name\n")]
    #[case("churn-model", "# churn-model\n")]
    fn readme_title_uses_project_name(#[case] name: &str, #[case] first_line: &str) {
        assert!(render_readme(name).starts_with(first_line));
    }

    #[test]
    fn readme_documents_the_layout() {
        let readme = render_readme(DEFAULT_PROJECT_NAME);

        for section in [
            "## Project Structure",
            "### 2. `src/` Directory Structure",
            "- **mlflow/**",
            "`test_pipeline.py`",
        ] {
            assert!(readme.contains(section), "README is missing {section:?}");
        }
        assert!(readme.ends_with("_TODO: Add any other important sections here._\n"));
    }

    #[compio::test]
    async fn readme_is_written_to_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let path = write_readme(temp_dir.path(), "demo")
            .await
            .expect("Failed to write README");

        assert_eq!(path, temp_dir.path().join(README_FILE_NAME));
        let written = std::fs::read_to_string(&path).expect("Failed to read README");
        assert_eq!(written, render_readme("demo"));
    }

    #[compio::test]
    async fn readme_replaces_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(README_FILE_NAME);
        std::fs::write(&path, "x".repeat(64 * 1024)).expect("Failed to seed README");

        write_readme(temp_dir.path(), DEFAULT_PROJECT_NAME)
            .await
            .expect("Failed to write README");

        let written = std::fs::read_to_string(&path).expect("Failed to read README");
        assert_eq!(written, render_readme(DEFAULT_PROJECT_NAME));
    }

    #[compio::test]
    async fn readme_fails_when_root_is_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("missing");

        let result = write_readme(&missing, DEFAULT_PROJECT_NAME).await;

        assert!(matches!(result, Err(ReadmeError::WriteError { .. })));
    }
}
