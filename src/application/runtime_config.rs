use dirtree::RenderOptions;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub render: RenderOptions,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            render: RenderOptions {
                indent: cli.indent,
                colorize: cli.color.should_colorize(),
            },
        }
    }
}
