//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every vitrine operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the service state**: the five stores and the auth service are
//!   hydrated once in [`VitrineApi::new`] and live as long as the API value
//! - **Gates mutations** behind a signed-in session
//! - **Dispatches** to the appropriate command function
//!
//! It does no I/O of its own beyond what the storage backend does, and it
//! never formats output.
//!
//! ## Generic Over StorageBackend
//!
//! `VitrineApi<B: StorageBackend>` is generic over the durable backing:
//! - Production: `VitrineApi<FsBackend>`
//! - Testing: `VitrineApi<MemBackend>` (or `&MemBackend` to inspect writes)
//!
//! All stores share the one backend through an `Rc`. Each store still writes
//! only its own key.

use crate::auth::{AuthService, SESSION_KEY};
use crate::commands;
use crate::config::VitrineConfig;
use crate::content::{SectionId, SectionValue, SiteContent};
use crate::error::Result;
use crate::model::{
    Document, PortfolioDraft, PortfolioItem, Record, ServiceDraft, ServiceItem, SiteSettings,
    TeamMember, TeamMemberDraft,
};
use crate::store::backend::StorageBackend;
use crate::store::collection::CollectionStore;
use crate::store::document::DocumentStore;
use crate::store::PersistStatus;
use std::rc::Rc;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::records::{PortfolioPatch, ServicePatch, TeamPatch};
pub use crate::commands::settings::SettingsPatch;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Overview, VitrinePaths};

pub struct VitrineApi<B: StorageBackend> {
    portfolio: CollectionStore<PortfolioItem, Rc<B>>,
    services: CollectionStore<ServiceItem, Rc<B>>,
    team: CollectionStore<TeamMember, Rc<B>>,
    content: DocumentStore<SiteContent, Rc<B>>,
    settings: DocumentStore<SiteSettings, Rc<B>>,
    auth: AuthService<Rc<B>>,
    paths: VitrinePaths,
}

impl<B: StorageBackend> VitrineApi<B> {
    /// Hydrate every store from `backend` and restore the session.
    pub fn new(backend: B, paths: VitrinePaths, config: &VitrineConfig) -> Self {
        let backend = Rc::new(backend);
        Self {
            portfolio: CollectionStore::hydrate(Rc::clone(&backend)),
            services: CollectionStore::hydrate(Rc::clone(&backend)),
            team: CollectionStore::hydrate(Rc::clone(&backend)),
            content: DocumentStore::hydrate(Rc::clone(&backend)),
            settings: DocumentStore::hydrate(Rc::clone(&backend)),
            auth: AuthService::restore(backend, config.login_delay()),
            paths,
        }
    }

    pub fn paths(&self) -> &VitrinePaths {
        &self.paths
    }

    // Session

    pub fn login(&mut self, email: &str, secret: &str) -> Result<CmdResult> {
        commands::session::login(&mut self.auth, email, secret)
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        commands::session::logout(&mut self.auth)
    }

    pub fn whoami(&self) -> Result<CmdResult> {
        commands::session::whoami(&self.auth)
    }

    pub fn overview(&self) -> Result<CmdResult> {
        commands::overview::run(&self.portfolio, &self.services, &self.team)
    }

    // Portfolio

    pub fn list_portfolio(&self) -> Result<CmdResult> {
        commands::records::list(&self.portfolio)
    }

    pub fn show_portfolio(&self, id: &str) -> Result<CmdResult> {
        commands::records::show(&self.portfolio, id)
    }

    pub fn add_portfolio(&mut self, draft: PortfolioDraft) -> Result<CmdResult> {
        self.auth.require("add portfolio items")?;
        commands::records::add(&mut self.portfolio, draft)
    }

    pub fn update_portfolio(&mut self, item: PortfolioItem) -> Result<CmdResult> {
        self.auth.require("edit portfolio items")?;
        commands::records::update(&mut self.portfolio, item)
    }

    pub fn patch_portfolio(&mut self, id: &str, patch: PortfolioPatch) -> Result<CmdResult> {
        self.auth.require("edit portfolio items")?;
        commands::records::patch(&mut self.portfolio, id, patch)
    }

    pub fn delete_portfolio(&mut self, id: &str) -> Result<CmdResult> {
        self.auth.require("delete portfolio items")?;
        commands::records::delete(&mut self.portfolio, id)
    }

    // Services

    pub fn list_services(&self) -> Result<CmdResult> {
        commands::records::list(&self.services)
    }

    pub fn show_service(&self, id: &str) -> Result<CmdResult> {
        commands::records::show(&self.services, id)
    }

    pub fn add_service(&mut self, draft: ServiceDraft) -> Result<CmdResult> {
        self.auth.require("add services")?;
        commands::records::add(&mut self.services, draft)
    }

    pub fn update_service(&mut self, item: ServiceItem) -> Result<CmdResult> {
        self.auth.require("edit services")?;
        commands::records::update(&mut self.services, item)
    }

    pub fn patch_service(&mut self, id: &str, patch: ServicePatch) -> Result<CmdResult> {
        self.auth.require("edit services")?;
        commands::records::patch(&mut self.services, id, patch)
    }

    pub fn delete_service(&mut self, id: &str) -> Result<CmdResult> {
        self.auth.require("delete services")?;
        commands::records::delete(&mut self.services, id)
    }

    // Team

    pub fn list_team(&self) -> Result<CmdResult> {
        commands::records::list(&self.team)
    }

    pub fn show_team_member(&self, id: &str) -> Result<CmdResult> {
        commands::records::show(&self.team, id)
    }

    pub fn add_team_member(&mut self, draft: TeamMemberDraft) -> Result<CmdResult> {
        self.auth.require("add team members")?;
        commands::records::add(&mut self.team, draft)
    }

    pub fn update_team_member(&mut self, member: TeamMember) -> Result<CmdResult> {
        self.auth.require("edit team members")?;
        commands::records::update(&mut self.team, member)
    }

    pub fn patch_team_member(&mut self, id: &str, patch: TeamPatch) -> Result<CmdResult> {
        self.auth.require("edit team members")?;
        commands::records::patch(&mut self.team, id, patch)
    }

    pub fn delete_team_member(&mut self, id: &str) -> Result<CmdResult> {
        self.auth.require("delete team members")?;
        commands::records::delete(&mut self.team, id)
    }

    // Site content and settings

    pub fn show_content(&self, section: Option<SectionId>) -> Result<CmdResult> {
        commands::content::show(&self.content, section)
    }

    pub fn save_section(&mut self, value: SectionValue) -> Result<CmdResult> {
        self.auth.require("edit site content")?;
        commands::content::save_section(&mut self.content, value)
    }

    pub fn save_section_json(&mut self, section: SectionId, raw: &str) -> Result<CmdResult> {
        self.auth.require("edit site content")?;
        commands::content::save_section_json(&mut self.content, section, raw)
    }

    pub fn show_settings(&self) -> Result<CmdResult> {
        commands::settings::show(&self.settings)
    }

    pub fn save_settings(&mut self, patch: SettingsPatch) -> Result<CmdResult> {
        self.auth.require("edit site settings")?;
        commands::settings::save(&mut self.settings, patch)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Outcome of the most recent write of every store, keyed by backing key.
    pub fn persist_report(&self) -> Vec<(&'static str, &PersistStatus)> {
        vec![
            (PortfolioItem::STORAGE_KEY, self.portfolio.persist_status()),
            (ServiceItem::STORAGE_KEY, self.services.persist_status()),
            (TeamMember::STORAGE_KEY, self.team.persist_status()),
            (SiteContent::STORAGE_KEY, self.content.persist_status()),
            (SiteSettings::STORAGE_KEY, self.settings.persist_status()),
            (SESSION_KEY, self.auth.persist_status()),
        ]
    }
}
