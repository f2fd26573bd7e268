use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::{debug, warn};

use crate::ext::PathDisplayExt;
use crate::filesystem::{DirectoryTree, TreeNode};

/// Creates every directory and empty file described by `tree` beneath `base`.
///
/// Entries are visited depth-first in declaration order. Existing directories
/// are left alone and existing leaf files are truncated, so running this twice
/// converges on the same layout. The first I/O failure aborts the walk; entries
/// created before it stay on disk.
pub async fn materialize(base: &Path, tree: &DirectoryTree) -> Result<(), MaterializeError> {
    for (name, node) in tree {
        let path = base.join(name);
        create_dir(&path).await?;

        match node {
            TreeNode::Files(files) => {
                for file_name in files {
                    create_empty_file(&path.join(file_name)).await?;
                }
            }
            TreeNode::Subtree(subtree) => Box::pin(materialize(&path, subtree)).await?,
            TreeNode::Bare => {}
        }
    }

    Ok(())
}

async fn create_dir(path: &Path) -> Result<(), MaterializeError> {
    debug!("Creating directory {}", path.display());
    fs::create_dir_all(path).await.context(CreateDirSnafu {
        path: path.to_path_buf(),
    })
}

async fn create_empty_file(path: &Path) -> Result<(), MaterializeError> {
    if let Ok(metadata) = path.metadata() {
        if metadata.is_file() && metadata.len() > 0 {
            warn!(
                "Truncating existing file {} ({} bytes)",
                path.display(),
                metadata.len()
            );
        }
    }

    debug!("Creating file {}", path.display());
    fs::File::create(path).await.context(CreateFileSnafu {
        path: path.to_path_buf(),
    })?;
    Ok(())
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Failed to create directory {}", path.best_effort_display()))]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.best_effort_display()))]
    CreateFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}
