//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::TapConfig;
use crate::error::{Error, Result, ResultExt};
use crate::schema::translate_entity;
use crate::service::{load_service, Service, ServiceDocument};
use serde::Serialize;
use serde_json::json;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its output to stdout
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return what it would print
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Discover { advanced } => self.discover(*advanced),
            Commands::Streams { advanced } => self.streams(*advanced),
            Commands::Validate => self.validate(),
        }
    }

    fn load_config(&self) -> Result<TapConfig> {
        if let Some(json) = &self.cli.config_json {
            let config = TapConfig::from_json_str(json).context("Invalid --config-json")?;
            config.validate()?;
            return Ok(config);
        }
        match &self.cli.config {
            Some(path) => TapConfig::load(path),
            None => Ok(TapConfig::default()),
        }
    }

    fn load_service(&self) -> Result<ServiceDocument> {
        let path = self
            .cli
            .metadata
            .as_ref()
            .ok_or_else(|| Error::config("No metadata file given (use --metadata)"))?;
        load_service(path)
    }

    /// Build and render the catalog
    fn discover(&self, advanced: bool) -> Result<String> {
        let config = self.load_config()?;
        let service = self.load_service()?;
        let advanced_enabled = advanced || config.advanced_features_enabled;

        let catalog = config
            .catalog_builder()
            .discover(&service, advanced_enabled)?;
        info!(streams = catalog.len(), "discovery complete");

        self.render(&catalog)
    }

    /// Eligible entity names present in the service, in service order
    fn streams(&self, advanced: bool) -> Result<String> {
        let config = self.load_config()?;
        let service = self.load_service()?;
        let eligible = config
            .entity_selector()
            .select(advanced || config.advanced_features_enabled);

        let names: Vec<&str> = service
            .entities()
            .iter()
            .map(|e| e.name.as_str())
            .filter(|name| eligible.contains(*name))
            .collect();

        self.render(&json!({ "streams": names }))
    }

    /// Translate every entity regardless of selection
    fn validate(&self) -> Result<String> {
        let service = self.load_service()?;
        for entity in service.entities() {
            translate_entity(entity)?;
        }

        self.render(&json!({
            "valid": true,
            "entities": service.entities().len()
        }))
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}
