use crate::auth::Session;
use crate::config::VitrineConfig;
use crate::content::{SectionId, SiteContent};
use crate::model::{PortfolioItem, ServiceItem, SiteSettings, TeamMember};
use std::path::PathBuf;

pub mod config;
pub mod content;
pub mod overview;
pub mod records;
pub mod session;
pub mod settings;

pub use overview::Overview;
pub use records::Collected;

#[derive(Debug, Clone)]
pub struct VitrinePaths {
    /// Directory holding the backing files and `config.json`.
    pub data: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of every command. Clients pick the parts they render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub portfolio: Vec<PortfolioItem>,
    pub services: Vec<ServiceItem>,
    pub team: Vec<TeamMember>,
    pub content: Option<SiteContent>,
    pub section: Option<(SectionId, serde_json::Value)>,
    pub settings: Option<SiteSettings>,
    pub session: Option<Session>,
    pub overview: Option<Overview>,
    pub config: Option<VitrineConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records<R: Collected>(self, records: Vec<R>) -> Self {
        R::attach(self, records)
    }

    pub fn with_content(mut self, content: SiteContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_settings(mut self, settings: SiteSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_config(mut self, config: VitrineConfig) -> Self {
        self.config = Some(config);
        self
    }
}
