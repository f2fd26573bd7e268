use std::path::PathBuf;

use clap::Parser;

use crate::{application::data::LogLevel, readme::DEFAULT_PROJECT_NAME};

/// Create a project skeleton of directories and empty placeholder files,
/// together with a README describing it.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory the skeleton is created in
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// YAML layout descriptor to use instead of the built-in layout
    #[clap(long, short = 'f')]
    pub layout: Option<PathBuf>,

    /// Title of the generated README
    #[clap(long, short = 'n', default_value = DEFAULT_PROJECT_NAME)]
    pub project_name: String,

    /// Do not write README.md
    #[clap(long)]
    pub no_readme: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_targets_current_directory() {
        let cli = Cli::try_parse_from(["scaffold"]).expect("Failed to parse arguments");

        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.layout, None);
        assert_eq!(cli.project_name, DEFAULT_PROJECT_NAME);
        assert!(!cli.no_readme);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn all_options_are_parsed() {
        let cli = Cli::try_parse_from([
            "scaffold",
            "--root",
            "/tmp/project",
            "-f",
            "layout.yaml",
            "-n",
            "churn-model",
            "--no-readme",
            "-l",
            "debug",
        ])
        .expect("Failed to parse arguments");

        assert_eq!(cli.root, PathBuf::from("/tmp/project"));
        assert_eq!(cli.layout, Some(PathBuf::from("layout.yaml")));
        assert_eq!(cli.project_name, "churn-model");
        assert!(cli.no_readme);
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result = Cli::try_parse_from(["scaffold", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
