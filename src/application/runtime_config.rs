use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory the layout is materialized under.
    pub root: PathBuf,
    /// Descriptor file; `None` selects the built-in layout.
    pub layout: Option<PathBuf>,
    pub project_name: String,
    pub skip_readme: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            layout: cli.layout,
            project_name: cli.project_name,
            skip_readme: cli.no_readme,
        }
    }
}
