use super::types::Config;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{from_slice, to_string_pretty};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const CONFIG_PATH: &str = "config.json";
const IDENTITY_PATH: &str = "identity.json";

/// Persisted client settings and the identity token sent with every request
#[derive(Clone, Debug)]
pub struct Repository {
    directory: PathBuf,
    config: Arc<Mutex<Config>>,
    identity: Arc<Mutex<Option<Identity>>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Identity {
    token: String,
}

impl Repository {
    /// Open the repository in the platform configuration directory
    pub fn new() -> Result<Self, String> {
        Self::open(data_directory()?)
    }

    pub fn open(directory: impl Into<PathBuf>) -> Result<Self, String> {
        let directory = directory.into();
        if !directory.exists() {
            std::fs::create_dir_all(&directory).map_err(|e| {
                format!("Could not create directory {}: {e:?}", directory.display())
            })?;
        }
        let config: Config = read(&directory, CONFIG_PATH)?.unwrap_or_default();
        let identity: Option<Identity> = read(&directory, IDENTITY_PATH)?;

        // Try to write the config. Otherwise fail early
        write(&directory, CONFIG_PATH, &config)?;

        Ok(Self {
            directory,
            config: Arc::new(Mutex::new(config)),
            identity: Arc::new(Mutex::new(identity)),
        })
    }

    pub fn config(&self) -> Result<Config, String> {
        Ok(self
            .config
            .lock()
            .map_err(|e| format!("Config Data Error: {e:?}"))?
            .clone())
    }

    pub fn set_config(&self, config: &Config) -> Result<(), String> {
        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config Data Error: {e:?}"))?;
        *current = config.clone();
        if let Err(e) = write(&self.directory, CONFIG_PATH, current.deref()) {
            log::error!("Could not save config: {e:?}");
        }
        Ok(())
    }

    /// The client identity token. Generated on first use, then persisted.
    pub fn token(&self) -> Result<String, String> {
        let mut identity = self
            .identity
            .lock()
            .map_err(|e| format!("Identity Data Error: {e:?}"))?;
        if let Some(ref existing) = *identity {
            return Ok(existing.token.clone());
        }
        let mut token = uuid::Uuid::new_v4().simple().to_string();
        token.truncate(8);
        let created = Identity { token };
        write(&self.directory, IDENTITY_PATH, &created)?;
        log::debug!("Created new identity token");
        let token = created.token.clone();
        identity.replace(created);
        Ok(token)
    }
}

fn read<T: DeserializeOwned>(directory: &Path, name: &str) -> Result<Option<T>, String> {
    let data_path = directory.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(directory: &Path, name: &str, value: &T) -> Result<(), String> {
    let data_path = directory.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> Result<PathBuf, String> {
    use directories_next::ProjectDirs;
    let Some(proj_dirs) = ProjectDirs::from("com", "readable", "readable") else {
        return Err("Couldn't find a folder to save data".to_string());
    };
    Ok(proj_dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let first = Repository::open(dir.path()).unwrap().token().unwrap();
        assert_eq!(first.len(), 8);

        let reopened = Repository::open(dir.path()).unwrap();
        assert_eq!(reopened.token().unwrap(), first);
    }

    #[test]
    fn config_defaults_then_persists() {
        let dir = tempfile::tempdir().unwrap();
        let repository = Repository::open(dir.path()).unwrap();
        assert_eq!(repository.config().unwrap(), Config::default());

        let config = Config {
            server_url: "http://example.com:3001".to_string(),
        };
        repository.set_config(&config).unwrap();

        let reopened = Repository::open(dir.path()).unwrap();
        assert_eq!(reopened.config().unwrap(), config);
    }

    #[test]
    fn broken_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_PATH), "{ not json").unwrap();
        assert!(Repository::open(dir.path()).is_err());
    }
}
