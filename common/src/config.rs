use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, Context, Result};
use hocon::{Hocon, HoconLoader};
use log::debug;

/// Reads settings from a HOCON document. Keys are resolved from, in order: an environment variable
/// named `{SCOPE}_{KEY}` in upper case, the scoped block of the document, the top level of the document.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(anyhow!("The config file {:?} was not found", path));
        }

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        debug!("Loaded config {:?} with scope '{}'", path, scope);

        Ok(Self::from_hocon(hocon, scope, std::env::vars().collect()))
    }

    pub fn from_str(config: &str, scope: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(config)
            .context("Failed to parse config")?
            .hocon()?;

        Ok(Self::from_hocon(hocon, scope, HashMap::new()))
    }

    fn from_hocon(hocon: Hocon, scope: String, env: HashMap<String, String>) -> Self {
        Self { hocon, env, scope }
    }

    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(&self.env_key(name)) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn get_usize(&self, name: &str) -> Result<Option<usize>> {
        self.get_as(name, "an unsigned integer", Value::as_usize)
    }

    pub fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        self.get_as(name, "a boolean", Value::as_bool)
    }

    pub fn get_string(&self, name: &str) -> Result<Option<String>> {
        self.get_as(name, "a string", Value::as_string)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        T::load(self).with_context(|| format!("Failed to load config scope '{}'", self.scope))
    }

    fn get_as<T>(&self, name: &str, expected: &str, map: impl Fn(&Value) -> Option<T>) -> Result<Option<T>> {
        self.get(name)
            .map(|value| {
                map(&value).ok_or_else(|| anyhow!("Config value '{}' must be {}, found {:?}", name, expected, value))
            })
            .transpose()
    }

    fn env_key(&self, name: &str) -> String {
        format!("{}_{}", self.scope, name).to_uppercase()
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(Value::Float(*f64 as f32)),
            Hocon::Integer(i64) => Some(Value::Integer(*i64)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => Hocon::String(val.clone()).as_bool(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => usize::try_from(*val).ok(),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(val) => Some(val.to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        depth = 1
        name = "top"

        match {
            depth = 3
            pruning = false
        }
    "#;

    fn loader() -> ConfigLoader {
        ConfigLoader::from_str(CONFIG, "match".to_string()).unwrap()
    }

    #[test]
    fn test_scoped_value_wins_over_top_level() {
        assert_eq!(loader().get_usize("depth").unwrap(), Some(3));
    }

    #[test]
    fn test_falls_back_to_top_level() {
        assert_eq!(loader().get_string("name").unwrap(), Some("top".to_string()));
    }

    #[test]
    fn test_missing_value_is_none() {
        assert_eq!(loader().get_usize("board_size").unwrap(), None);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(loader().get_usize("pruning").is_err());
    }

    #[test]
    fn test_env_overrides_document() {
        let env = [("MATCH_DEPTH".to_string(), "5".to_string())].into_iter().collect();
        let loader = loader().with_env(env);

        assert_eq!(loader.get_usize("depth").unwrap(), Some(5));
        assert_eq!(loader.get_bool("pruning").unwrap(), Some(false));
    }

    #[test]
    fn test_env_bool_strings() {
        let env = [("MATCH_PRUNING".to_string(), "true".to_string())].into_iter().collect();
        let loader = loader().with_env(env);

        assert_eq!(loader.get_bool("pruning").unwrap(), Some(true));
    }
}
