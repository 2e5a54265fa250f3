use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Names an alternative definitions file; `.env` in the working directory otherwise.
pub const ENV_FILE_VAR: &str = "KEVIN_ENV_FILE";
const DEFAULT_ENV_FILE: &str = ".env";

/// Owned copy of the key/value environment the resolver reads from.
///
/// Built once at startup. Definitions file values sit underneath the process
/// environment, so a variable exported in the shell always wins over the file.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Snapshot of the process environment layered over the definitions file.
    pub fn from_process() -> Result<Self> {
        let process: HashMap<String, String> = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();

        let explicit = process
            .get(ENV_FILE_VAR)
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        match explicit {
            Some(path) => Self::layered(&path, true, process),
            None => Self::layered(Path::new(DEFAULT_ENV_FILE), false, process),
        }
    }

    /// Reads `path` as a dotenv file and overlays `process` on top of it.
    ///
    /// A missing file is tolerated unless `required` is set.
    pub fn layered<I>(path: &Path, required: bool, process: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars = HashMap::new();

        match dotenvy::from_path_iter(path) {
            Ok(entries) => {
                for entry in entries {
                    let (key, value) = entry.map_err(|source| ConfigError::DefinitionsFile {
                        path: path.to_path_buf(),
                        source,
                    })?;
                    vars.insert(key, value);
                }
                debug!(path = %path.display(), count = vars.len(), "loaded definitions file");
            }
            Err(error) if error.not_found() && !required => {
                debug!(path = %path.display(), "no definitions file; using process environment only");
            }
            Err(source) => {
                return Err(ConfigError::DefinitionsFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        vars.extend(process);
        Ok(Self { vars })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }

    pub fn required(&self, key: &str) -> Result<String> {
        self.string(key).ok_or_else(|| ConfigError::Missing {
            key: key.to_owned(),
        })
    }

    pub fn boolean(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, is_truthy)
    }

    pub fn integer(&self, key: &str) -> Result<Option<i64>> {
        self.parsed(key, "integer")
    }

    pub fn number(&self, key: &str) -> Result<Option<f64>> {
        self.parsed(key, "number")
    }

    fn parsed<T: FromStr>(&self, key: &str, expected: &'static str) -> Result<Option<T>> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };

        raw.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_owned(),
                value: raw.to_owned(),
                expected,
            })
    }
}

/// Strict truth test: only `true` and `1` (any case) are truthy.
pub fn is_truthy(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true") || raw == "1"
}
