pub mod backup;
pub mod configure;
pub mod status;
pub mod unconfigure;

use crate::cli::args::GlobalFlags;
use crate::config::Settings;
use crate::error::Result;
use crate::runner::SystemRunner;
use crate::state::{FilesystemFileStore, FilesystemStateStore};
use crate::tools::{AuthTool, AuthToolFactory, ToolKind};
use crate::traits::{CommandRunner, Logger};
use crate::ui::UiLogger;
use crate::utils::paths;
use std::sync::Arc;

/// Everything a command needs: resolved settings and the chosen facade
pub struct Context {
    pub settings: Settings,
    pub kind: ToolKind,
    pub tool: Box<dyn AuthTool>,
    pub runner: Arc<dyn CommandRunner>,
    pub logger: Arc<dyn Logger>,
}

impl Context {
    pub fn build(global: &GlobalFlags) -> Result<Self> {
        let mut settings = Settings::load(global.config.as_deref())?;
        if let Some(tool) = &global.tool {
            settings.tool = tool.parse()?;
        }
        if let Some(dir) = &global.state_dir {
            settings.state_dir = paths::expand_home(dir)?;
        }

        let kind = AuthToolFactory::resolve(settings.tool, &settings.paths)?;
        let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner::new(settings.timeout));
        let logger: Arc<dyn Logger> = Arc::new(UiLogger);
        let tool = AuthToolFactory::get(kind, &settings.paths, runner.clone(), logger.clone());

        logger.debug(&format!(
            "Using {} at {}",
            kind,
            settings.paths.for_kind(kind).display()
        ));

        Ok(Self {
            settings,
            kind,
            tool,
            runner,
            logger,
        })
    }

    pub fn open_state(&self) -> Result<FilesystemStateStore> {
        FilesystemStateStore::open(&self.settings.state_dir)
    }

    pub fn open_files(&self) -> Result<FilesystemFileStore> {
        FilesystemFileStore::open(&self.settings.state_dir)
    }
}
