use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    pub prompt: String,
    pub placeholder: String,
    pub interactive: Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactive {
    /// Prompt only when commands come from a terminal session (no script).
    Auto,
    Always,
    Never,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Text,
            prompt: "> ".to_string(),
            placeholder: "n/a".to_string(),
            interactive: Interactive::Auto,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let output = match env_map
            .get("CALC_OUTPUT")
            .map(|s| s.as_str())
            .unwrap_or("text")
        {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => {
                return Err(ConfigError::InvalidValue(
                    "CALC_OUTPUT".to_string(),
                    format!("must be text or json, got {}", other),
                ))
            }
        };

        let prompt = env_map.get("CALC_PROMPT").cloned().unwrap_or(defaults.prompt);

        let placeholder = match env_map.get("CALC_PLACEHOLDER") {
            Some(s) if s.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(
                    "CALC_PLACEHOLDER".to_string(),
                    "must not be empty".to_string(),
                ))
            }
            Some(s) => s.clone(),
            None => defaults.placeholder,
        };

        let interactive = match env_map
            .get("CALC_INTERACTIVE")
            .map(|s| s.as_str())
            .unwrap_or("auto")
        {
            "auto" => Interactive::Auto,
            "true" | "1" | "yes" => Interactive::Always,
            "false" | "0" | "no" => Interactive::Never,
            other => {
                return Err(ConfigError::InvalidValue(
                    "CALC_INTERACTIVE".to_string(),
                    format!("must be auto, true, or false, got {}", other),
                ))
            }
        };

        Ok(Config {
            output,
            prompt,
            placeholder,
            interactive,
        })
    }

    /// Whether to write a prompt before each line, given whether commands
    /// come from a script file.
    pub fn prompts(&self, from_script: bool) -> bool {
        match self.interactive {
            Interactive::Always => true,
            Interactive::Never => false,
            Interactive::Auto => !from_script && self.output == OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.placeholder, "n/a");
        assert_eq!(config.interactive, Interactive::Auto);
    }

    #[test]
    fn test_json_output() {
        let mut env_map = HashMap::new();
        env_map.insert("CALC_OUTPUT".to_string(), "json".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.prompts(false));
    }

    #[test]
    fn test_invalid_output() {
        let mut env_map = HashMap::new();
        env_map.insert("CALC_OUTPUT".to_string(), "yaml".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "CALC_OUTPUT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let mut env_map = HashMap::new();
        env_map.insert("CALC_PLACEHOLDER".to_string(), "  ".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "CALC_PLACEHOLDER"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_interactive() {
        let mut env_map = HashMap::new();
        env_map.insert("CALC_INTERACTIVE".to_string(), "sometimes".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "CALC_INTERACTIVE"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_prompts_auto_depends_on_script() {
        let config = Config::default();
        assert!(config.prompts(false));
        assert!(!config.prompts(true));

        let mut env_map = HashMap::new();
        env_map.insert("CALC_INTERACTIVE".to_string(), "false".to_string());
        env_map.insert("CALC_PROMPT".to_string(), "calc> ".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.prompt, "calc> ");
        assert!(!config.prompts(false));
    }
}
