use crate::error::{EvalMailerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SMTPデフォルト（Gmailサブミッションポート）
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// 永続設定（アプリパスワードは保存しない）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sender: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sender: None,
            smtp_host: DEFAULT_SMTP_HOST.into(),
            smtp_port: DEFAULT_SMTP_PORT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EvalMailerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("eval-mailer").join("config.json"))
    }

    pub fn set_sender(&mut self, sender: String) -> Result<()> {
        self.sender = Some(sender);
        self.save()
    }

    pub fn set_smtp_host(&mut self, host: String) -> Result<()> {
        self.smtp_host = host;
        self.save()
    }

    pub fn set_smtp_port(&mut self, port: u16) -> Result<()> {
        self.smtp_port = port;
        self.save()
    }
}
