use colored::Colorize;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info, warn};

use crate::application::RuntimeConfig;
use crate::config::{LayoutDescriptor, LayoutDescriptorError, default_layout};
use crate::ext::PathDisplayExt;
use crate::filesystem::{DirectoryTree, MaterializeError, materialize};
use crate::readme::{ReadmeError, write_readme};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let layout = Self::load_layout(&app_config).await?;
        if layout.is_empty() {
            warn!("The layout is empty, no directories will be created");
        }
        debug!("Layout nests {} level(s) deep", layout.depth());
        info!(
            "Creating {} top-level entries in {}",
            layout.len(),
            app_config.root.best_effort_display()
        );
        materialize(&app_config.root, &layout)
            .await
            .context(MaterializeSnafu)?;

        if app_config.skip_readme {
            info!("Skipping README");
        } else {
            let readme_path = write_readme(&app_config.root, &app_config.project_name)
                .await
                .context(ReadmeSnafu)?;
            info!("Wrote {}", readme_path.display_relative_to(&app_config.root));
        }

        println!(
            "{}",
            format!(
                "Project structure has been created in {}.",
                app_config.root.best_effort_display()
            )
            .green()
        );
        Ok(())
    }

    async fn load_layout(app_config: &RuntimeConfig) -> Result<DirectoryTree, ApplicationError> {
        match &app_config.layout {
            Some(path) => {
                let descriptor = LayoutDescriptor::from_path(path)
                    .await
                    .context(LayoutSnafu)?;
                debug!("Loaded layout: {:?}", descriptor);
                Ok(descriptor.into_tree())
            }
            None => {
                debug!("Using the built-in layout");
                Ok(default_layout())
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the layout"))]
    LayoutError { source: LayoutDescriptorError },
    #[snafu(display("Critical failure encountered while creating the project structure"))]
    MaterializeError { source: MaterializeError },
    #[snafu(display("Critical failure encountered while writing the README"))]
    ReadmeError { source: ReadmeError },
}
