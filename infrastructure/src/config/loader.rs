//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["deliberation.toml", ".deliberation.toml"];

/// Prefix of environment overrides (`DELIBERATION_MODELS__GENERATION=...`)
pub const ENV_PREFIX: &str = "DELIBERATION_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `DELIBERATION_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./deliberation.toml` or `./.deliberation.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/deliberation/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/deliberation/config.toml` if set,
    /// otherwise the platform config dir equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("deliberation").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./deliberation.toml or ./.deliberation.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.deliberation.run_count, 3);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("deliberation"));
    }

    #[test]
    fn test_project_file_then_explicit_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "deliberation.toml",
                r#"
[deliberation]
run_count = 5
max_concurrent_runs = 2

[models]
temperature = 0.3
"#,
            )?;
            jail.create_file(
                "override.toml",
                r#"
[deliberation]
run_count = 7
"#,
            )?;
            jail.set_env("DELIBERATION_MODELS__GENERATION", "openai/gpt-4o-mini");

            let explicit = PathBuf::from("override.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;

            assert_eq!(config.deliberation.run_count, 7);
            assert_eq!(config.deliberation.max_concurrent_runs, 2);
            assert_eq!(config.models.temperature, 0.3);
            assert_eq!(config.models.generation, "openai/gpt-4o-mini");
            // Untouched sections keep defaults
            assert_eq!(config.timeouts.generation_seconds, 120);
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".deliberation.toml", "[server]\nbind = \"0.0.0.0:9000\"")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.bind, "0.0.0.0:9000");
            Ok(())
        });
    }
}
