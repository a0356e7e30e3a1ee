//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::value::{Dict, Map, Tag, Value};
use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["advisor.toml", ".advisor.toml"];

/// Environment variables and the config keys they set.
pub const ENV_OVERRIDES: [(&str, &str); 12] = [
    ("AWS_REGION", "aws.region"),
    ("AWS_IDENTITY_POOL_ID", "aws.identity_pool_id"),
    ("AWS_USER_POOL_ID", "aws.user_pool_id"),
    ("AWS_APP_CLIENT_ID", "aws.app_client_id"),
    ("COGNITO_USERNAME", "cognito.username"),
    ("COGNITO_PASSWORD", "cognito.password"),
    ("AWS_MODEL_ID", "bedrock.model"),
    ("BEDROCK_TEMPERATURE", "bedrock.temperature"),
    ("BEDROCK_TOP_P", "bedrock.top_p"),
    ("BEDROCK_MAX_TOKENS", "bedrock.max_tokens"),
    ("ADVISOR_SYSTEM_PROMPT", "prompt.system_prompt"),
    ("ADVISOR_LOG_DIR", "logging.dir"),
];

/// Variables whose keys hold numbers; every other override is text.
const NUMERIC_ENV: [&str; 3] = ["BEDROCK_TEMPERATURE", "BEDROCK_TOP_P", "BEDROCK_MAX_TOKENS"];

/// Text overrides taken verbatim from the environment.
///
/// [`Env`] parses values into typed scalars, so a password of `20250101`
/// would reach serde as an integer and `0042` would lose its zeros.
struct TextEnv;

impl Provider for TextEnv {
    fn metadata(&self) -> Metadata {
        Metadata::named("environment variable(s)")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let mut root = Dict::new();
        for (name, path) in ENV_OVERRIDES {
            if NUMERIC_ENV.contains(&name) {
                continue;
            }
            let Ok(value) = std::env::var(name) else {
                continue;
            };
            let Some((section, key)) = path.split_once('.') else {
                continue;
            };
            let table = root
                .entry(section.to_string())
                .or_insert_with(|| Value::Dict(Tag::Default, Dict::new()));
            if let Value::Dict(_, table) = table {
                table.insert(key.to_string(), Value::String(Tag::Default, value));
            }
        }

        let mut data = Map::new();
        data.insert(Profile::Default, root);
        Ok(data)
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (see [`ENV_OVERRIDES`])
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./advisor.toml` or `./.advisor.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/course-advisor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::env())
            .merge(TextEnv)
            .extract()
            .map_err(Box::new)
    }

    /// Load defaults and environment only, skipping config files (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env())
            .merge(TextEnv)
            .extract()
            .map_err(Box::new)
    }

    /// Environment provider for the numeric overrides
    fn env() -> Env {
        Env::raw().filter_map(|key| {
            ENV_OVERRIDES
                .iter()
                .filter(|(name, _)| NUMERIC_ENV.contains(name))
                .find(|(name, _)| key == *name)
                .map(|(_, path)| (*path).into())
        })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/course-advisor/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("course-advisor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    ///
    /// Environment variables are listed by name only; values may be secrets.
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        for (name, path) in ENV_OVERRIDES {
            let mark = if std::env::var_os(name).is_some() {
                "SET  "
            } else {
                "     "
            };
            println!("  [{}] Env:     {} -> {}", mark, name, path);
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./advisor.toml or ./.advisor.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}
