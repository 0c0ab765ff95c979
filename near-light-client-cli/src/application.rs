//! NearLightClientCli Abscissa Application

use crate::{commands::EntryPoint, config::AppConfig};
use abscissa_core::{
    application::{self, AppCell},
    config::{self, CfgCell},
    Application, FrameworkError, StandardPaths,
};

/// Application state
pub static APP: AppCell<NearLightClientCliApp> = AppCell::new();

/// NEAR light client CLI application.
#[derive(Debug)]
pub struct NearLightClientCliApp {
    /// Application configuration.
    config: CfgCell<AppConfig>,

    /// Application state.
    state: application::State<Self>,
}

impl Default for NearLightClientCliApp {
    fn default() -> Self {
        Self {
            config: CfgCell::default(),
            state: application::State::default(),
        }
    }
}

impl Application for NearLightClientCliApp {
    /// Entrypoint command for this application.
    type Cmd = EntryPoint;

    /// Application configuration.
    type Cfg = AppConfig;

    /// Paths to resources used by this application.
    type Paths = StandardPaths;

    /// Accessor for application configuration.
    fn config(&self) -> config::Reader<AppConfig> {
        self.config.read()
    }

    /// Borrow the application state immutably.
    fn state(&self) -> &application::State<Self> {
        &self.state
    }

    /// Register all components used by this application.
    fn register_components(&mut self, command: &Self::Cmd) -> Result<(), FrameworkError> {
        let framework_components = self.framework_components(command)?;
        let mut app_components = self.state.components_mut();
        app_components.register(framework_components)
    }

    /// Post-configuration lifecycle callback: called after the application
    /// configuration has been loaded, in order to allow subsequent
    /// configuration checks or other actions to be performed.
    fn after_config(&mut self, config: Self::Cfg) -> Result<(), FrameworkError> {
        let mut components = self.state.components_mut();
        components.after_config(&config)?;
        drop(components);
        self.config.set_once(config);
        Ok(())
    }
}
