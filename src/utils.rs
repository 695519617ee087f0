use eyre::{Context, Result, eyre};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration required to run the export process.
/// This decouples the logic from how the arguments were parsed (CLI/Config file).
#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub tweets_path: PathBuf,
    pub vault_dir: PathBuf,
    pub namespace: String,
    pub tags: Option<Vec<String>>,
    pub dry_run: bool,
    pub quiet: bool,
}

/// Settings that may be persisted in `config.toml`.
#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub namespace: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tweet-vault-export/config.toml"))
}

/// Load the config file. An explicit path must exist; the default location
/// is optional.
pub fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(p) = explicit_path {
        if !p.exists() {
            return Err(eyre!("Config file not found: {}", p.display()));
        }
        Some(p.to_path_buf())
    } else {
        default_config_path().filter(|p| p.exists())
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .wrap_err_with(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}

/// Check the command-line paths before any export file is read.
pub fn preflight(tweets: &Path, vault: &Path) -> Result<()> {
    if !tweets.exists() {
        return Err(eyre!("Tweets export not found: {}", tweets.display()));
    }
    if !tweets.is_file() {
        return Err(eyre!("Tweets export is not a file: {}", tweets.display()));
    }
    if !vault.exists() {
        return Err(eyre!("Vault directory not found: {}", vault.display()));
    }
    if !vault.is_dir() {
        return Err(eyre!("Vault is not a directory: {}", vault.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_file_config_explicit_missing() {
        let err = load_file_config(Some(Path::new("/nonexistent/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_file_config_explicit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "namespace = \"ARCHIVE\"\ntags = [\"twitter\", \"archive\"]\n").unwrap();

        let cfg = load_file_config(Some(&path)).unwrap();
        assert_eq!(
            cfg,
            FileConfig {
                namespace: Some("ARCHIVE".into()),
                tags: Some(vec!["twitter".into(), "archive".into()]),
            }
        );
    }

    #[test]
    fn test_load_file_config_partial() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tags = [\"x\"]\n").unwrap();

        let cfg = load_file_config(Some(&path)).unwrap();
        assert_eq!(cfg.namespace, None);
        assert_eq!(cfg.tags, Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_load_file_config_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "vault = 3\n").unwrap();

        let err = load_file_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_preflight() {
        let dir = TempDir::new().unwrap();
        let tweets = dir.path().join("tweets.js");
        fs::write(&tweets, "").unwrap();

        assert!(preflight(&tweets, dir.path()).is_ok());
        assert!(preflight(&dir.path().join("missing.js"), dir.path()).is_err());
        assert!(preflight(dir.path(), dir.path()).is_err());
        assert!(preflight(&tweets, &tweets).is_err());
        assert!(preflight(&tweets, &dir.path().join("missing")).is_err());
    }
}
