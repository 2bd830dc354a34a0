use dirtree::{Tree, TreeError, demo};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        // Color was decided from the CLI
        colored::control::set_override(app_config.render.colorize);

        let output = Self::render_demo(&app_config)?;
        print!("{output}");
        Ok(())
    }

    /// Builds the demonstration tree and renders it with the configured options
    pub fn render_demo(app_config: &RuntimeConfig) -> Result<String, ApplicationError> {
        let mut tree = Tree::new();
        demo::populate(&mut tree).context(PopulateSnafu)?;
        info!(
            "Rendering {} directories and {} files",
            tree.directory_count(),
            tree.file_count()
        );
        Ok(tree.render(&app_config.render))
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to build the demonstration tree"))]
    PopulateError { source: TreeError },
}

#[cfg(test)]
mod tests {
    use dirtree::{Indent, RenderOptions};

    use super::*;

    #[test]
    fn render_demo_uses_configured_indent() {
        let config = RuntimeConfig {
            render: RenderOptions {
                indent: Indent::Spaces(2),
                colorize: false,
            },
        };

        let output = Application::render_demo(&config).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "root");
        assert_eq!(lines[1], "  Directory1");
        assert_eq!(lines[10], "        File4");
        assert_eq!(lines[13], "    File6");
        assert!(!output.contains('\u{1b}'));
    }
}
