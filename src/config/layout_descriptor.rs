use std::{borrow::Cow, path::Path};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::{
    ext::PathDisplayExt,
    filesystem::{DirectoryTree, TreeNode},
};

const STRUCTURE_KEY: &str = "structure";

/// Deepest nesting of directories a descriptor may declare.
pub const MAX_DEPTH: usize = 32;

/// A project layout loaded from a YAML file.
///
/// ```yaml
/// structure:
///   config: [config.yaml, config_prod.yaml]
///   src:
///     utils: [__init__.py, logging.py]
///   notebooks: ~
/// ```
///
/// Sequences become directories of empty files, mappings become nested
/// directories and `null` becomes a bare directory.
#[derive(Debug, Clone)]
pub struct LayoutDescriptor {
    tree: DirectoryTree,
}

impl LayoutDescriptor {
    pub async fn from_path(path: &Path) -> Result<Self, LayoutDescriptorError> {
        debug!("Opening layout descriptor: {}", path.best_effort_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_display(),
        })?;
        debug!("Read layout descriptor: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_display(),
        })?;
        contents.as_str().try_into()
    }

    pub fn tree(&self) -> &DirectoryTree {
        &self.tree
    }

    pub fn into_tree(self) -> DirectoryTree {
        self.tree
    }

    fn parse_tree(
        mapping: &LinkedHashMap<Yaml, Yaml>,
        parent: &str,
        depth: usize,
    ) -> Result<DirectoryTree, LayoutDescriptorError> {
        ensure!(
            depth <= MAX_DEPTH,
            TooDeepSnafu {
                name: parent,
                max_depth: MAX_DEPTH,
            }
        );

        let mut tree = DirectoryTree::new();
        for (key, value) in mapping {
            let name = key.as_str().context(NonStringKeySnafu { parent })?;
            check_name(name)?;

            let node = match value {
                Yaml::Sequence(items) => TreeNode::Files(Self::parse_files(items, name)?),
                Yaml::Mapping(children) => {
                    TreeNode::Subtree(Self::parse_tree(children, name, depth + 1)?)
                }
                Yaml::Value(Scalar::Null) => TreeNode::Bare,
                _ => return UnsupportedValueSnafu { name }.fail(),
            };
            debug!("Parsed '{}' as {}", name, node);
            tree.insert(name, node);
        }

        Ok(tree)
    }

    fn parse_files(items: &[Yaml], directory: &str) -> Result<Vec<String>, LayoutDescriptorError> {
        items
            .iter()
            .map(|item| {
                let file_name = item.as_str().context(InvalidFileEntrySnafu { directory })?;
                check_name(file_name)?;
                Ok::<_, LayoutDescriptorError>(file_name.to_string())
            })
            .collect()
    }
}

impl TryFrom<&str> for LayoutDescriptor {
    type Error = LayoutDescriptorError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents
            .first()
            .ok_or(LayoutDescriptorError::MalformedDescriptor)?;

        let top_level = document
            .as_mapping()
            .ok_or(LayoutDescriptorError::TopLevelNotMap)?;

        let tree = match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(STRUCTURE_KEY))))
        {
            None | Some(Yaml::Value(Scalar::Null)) => {
                debug!("No '{}' section found, using an empty layout", STRUCTURE_KEY);
                DirectoryTree::new()
            }
            Some(structure) => {
                let mapping = structure
                    .as_mapping()
                    .ok_or(LayoutDescriptorError::StructureNotMap)?;
                Self::parse_tree(mapping, STRUCTURE_KEY, 1)?
            }
        };

        Ok(LayoutDescriptor { tree })
    }
}

/// Entry names are joined onto the root, so they must stay a single path
/// component.
fn check_name(name: &str) -> Result<(), LayoutDescriptorError> {
    let reason = if name.is_empty() {
        Some("names must not be empty")
    } else if name == "." || name == ".." {
        Some("names must not refer to the current or parent directory")
    } else if name.contains(['/', '\\']) {
        Some("names must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => InvalidNameSnafu { name, reason }.fail(),
        None => Ok(()),
    }
}

#[derive(Debug, Snafu)]
pub enum LayoutDescriptorError {
    #[snafu(display("Failed to read the layout descriptor: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Layout descriptor {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the layout descriptor"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted layout descriptor"))]
    MalformedDescriptor,
    #[snafu(display("Top level of the layout descriptor should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Structure section should be a map"))]
    StructureNotMap,
    #[snafu(display("Entry under '{}' has a non-string name", parent))]
    NonStringKey { parent: String },
    #[snafu(display("Invalid entry name '{}': {}", name, reason))]
    InvalidName { name: String, reason: String },
    #[snafu(display("File list of '{}' contains a non-string entry", directory))]
    InvalidFileEntry { directory: String },
    #[snafu(display(
        "Entry '{}' should be a list of files, a map of entries or null",
        name
    ))]
    UnsupportedValue { name: String },
    #[snafu(display("Entry '{}' nests deeper than {} levels", name, max_depth))]
    TooDeep { name: String, max_depth: usize },
}
