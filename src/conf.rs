use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

fn default_port() -> String {
    "3000".into()
}

fn default_provider() -> String {
    "openrouter".into()
}

#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_port")]
    pub listen_port: String,
    #[serde(default = "default_provider")]
    pub ai_provider: String,
    #[serde(default)]
    pub ai_endpoint: String,
    #[serde(default)]
    pub ai_model: String,
    #[serde(default)]
    pub ai_key: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        match s.ai_provider.as_str() {
            "openrouter" => {
                s.ai_endpoint = "https://openrouter.ai/api/v1".into();
                if s.ai_model.is_empty() {
                    s.ai_model = "google/gemini-2.0-flash-001".into();
                }
            }
            "openai" => {
                s.ai_endpoint = "https://api.openai.com/v1".into();
                if s.ai_model.is_empty() {
                    s.ai_model = "gpt-4o-mini".into();
                }
            }
            "ollama" => {
                s.ai_key = "ollama".into();
                s.ai_endpoint = "http://localhost:11434/v1".into();
                if s.ai_model.is_empty() {
                    s.ai_model = "gemma3:12b".into();
                }
            }
            _ => {}
        }
        if s.ai_key.is_empty() {
            return Err(ConfigError::Message("AI_KEY must be set".into()));
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
