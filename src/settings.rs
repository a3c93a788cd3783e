use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use dotenv::dotenv;

pub const SETTINGS_FILE: &str = "settings.yaml";

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// Search endpoint queried by the booking form, absolute or relative to the site
    pub search_endpoint: String,
    /// Serve the built-in mock endpoint at /api/mock-search
    #[serde(default)]
    pub mock_search: bool,
    /// Venue catalogue used by the mock endpoint
    #[serde(default)]
    pub mock_venues_file: Option<String>,
}

/// The part of `Settings` the browser needs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientSettings {
    pub search_endpoint: String,
}

impl Settings {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok();

        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings: Settings = serde_yaml::from_str(contents)?;

        settings.search_endpoint = parse_env_var(&settings.search_endpoint)?;
        if let Some(path) = &settings.mock_venues_file {
            settings.mock_venues_file = Some(parse_env_var(path)?);
        }

        Ok(settings)
    }

    pub fn client(&self) -> ClientSettings {
        ClientSettings {
            search_endpoint: self.search_endpoint.clone(),
        }
    }
}

fn parse_env_var(value: &str) -> Result<String, Box<dyn std::error::Error>> {
    if value.starts_with("${") && value.ends_with("}") {
        let env_name = &value[2..value.len() - 1];
        match env::var(env_name) {
            Ok(val) => Ok(val),
            Err(_) => Err(format!("Environment variable '{}' not found", env_name).into()),
        }
    } else {
        Ok(value.to_string())
    }
}
