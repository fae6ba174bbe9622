use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use word_scramble::{game::DEFAULT_LANGUAGE, FALLBACK_ROOT_WORD};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub start_words_path: String,
    pub language: String,
    /// `None` when ROOT_WORD_FALLBACK is set to an empty string
    pub fallback_root_word: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let fallback = env::var("ROOT_WORD_FALLBACK")
            .unwrap_or_else(|_| FALLBACK_ROOT_WORD.to_string());

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            start_words_path: env::var("START_WORDS_PATH")
                .unwrap_or_else(|_| "./start.txt".to_string()),
            language: env::var("DICTIONARY_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
            fallback_root_word: Some(fallback.trim().to_string()).filter(|w| !w.is_empty()),
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            game: GameConfig {
                dictionary_path: "./dictionary.txt".to_string(),
                start_words_path: "./start.txt".to_string(),
                language: "en".to_string(),
                fallback_root_word: None,
            },
        };
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
