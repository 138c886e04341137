//! Commands shared by the three record collections (portfolio, services, team).

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VitrineError};
use crate::model::{PortfolioItem, Record, ServiceItem, Socials, TeamMember};
use crate::store::backend::StorageBackend;
use crate::store::collection::CollectionStore;
use crate::validation::Validate;

/// A record kind that has its own slot in [`CmdResult`].
pub trait Collected: Record + Validate {
    fn attach(result: CmdResult, records: Vec<Self>) -> CmdResult;
}

impl Collected for PortfolioItem {
    fn attach(mut result: CmdResult, records: Vec<Self>) -> CmdResult {
        result.portfolio = records;
        result
    }
}

impl Collected for ServiceItem {
    fn attach(mut result: CmdResult, records: Vec<Self>) -> CmdResult {
        result.services = records;
        result
    }
}

impl Collected for TeamMember {
    fn attach(mut result: CmdResult, records: Vec<Self>) -> CmdResult {
        result.team = records;
        result
    }
}

/// A partial edit: `None` keeps the current value.
pub trait Patch<R> {
    fn apply(self, record: &mut R);
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub desafio: Option<String>,
    pub solucao: Option<String>,
    pub resultados: Option<String>,
}

// Optional narrative fields are cleared by patching in an empty string.
fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Patch<PortfolioItem> for PortfolioPatch {
    fn apply(self, item: &mut PortfolioItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(image_url) = self.image_url {
            item.image_url = image_url;
        }
        if let Some(desafio) = self.desafio {
            item.desafio = optional(desafio);
        }
        if let Some(solucao) = self.solucao {
            item.solucao = optional(solucao);
        }
        if let Some(resultados) = self.resultados {
            item.resultados = optional(resultados);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Patch<ServiceItem> for ServicePatch {
    fn apply(self, item: &mut ServiceItem) {
        if let Some(icon) = self.icon {
            item.icon = icon;
        }
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamPatch {
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl Patch<TeamMember> for TeamPatch {
    fn apply(self, member: &mut TeamMember) {
        if let Some(image_url) = self.image_url {
            member.image_url = image_url;
        }
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(bio) = self.bio {
            member.bio = bio;
        }
        let Socials {
            linkedin,
            twitter,
            github,
        } = &mut member.socials;
        if let Some(v) = self.linkedin {
            *linkedin = optional(v);
        }
        if let Some(v) = self.twitter {
            *twitter = optional(v);
        }
        if let Some(v) = self.github {
            *github = optional(v);
        }
    }
}

pub fn list<R: Collected, B: StorageBackend>(store: &CollectionStore<R, B>) -> Result<CmdResult> {
    let records = store.snapshot().to_vec();
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} records.",
            R::KIND.to_lowercase()
        )));
    }
    Ok(result.with_records(records))
}

pub fn show<R: Collected, B: StorageBackend>(
    store: &CollectionStore<R, B>,
    id: &str,
) -> Result<CmdResult> {
    let record = store
        .get(id)
        .cloned()
        .ok_or_else(|| VitrineError::RecordNotFound {
            kind: R::KIND,
            id: id.to_string(),
        })?;
    Ok(CmdResult::default().with_records(vec![record]))
}

pub fn add<R, B>(store: &mut CollectionStore<R, B>, draft: R::Draft) -> Result<CmdResult>
where
    R: Collected,
    R::Draft: Validate,
    B: StorageBackend,
{
    draft.validate()?;
    let id = store.add(draft);
    let record = store.get(&id).cloned().ok_or_else(|| {
        VitrineError::Store(format!("{} vanished after add: {}", R::KIND, id))
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} added ({}): {}",
        R::KIND,
        id,
        record.label()
    )));
    Ok(result.with_records(vec![record]))
}

pub fn update<R: Collected, B: StorageBackend>(
    store: &mut CollectionStore<R, B>,
    record: R,
) -> Result<CmdResult> {
    record.validate()?;
    store.update(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} updated ({}): {}",
        R::KIND,
        record.id(),
        record.label()
    )));
    Ok(result.with_records(vec![record]))
}

/// Apply `patch` on top of the stored record, then update.
pub fn patch<R, P, B>(store: &mut CollectionStore<R, B>, id: &str, patch: P) -> Result<CmdResult>
where
    R: Collected,
    P: Patch<R>,
    B: StorageBackend,
{
    let mut record = store
        .get(id)
        .cloned()
        .ok_or_else(|| VitrineError::RecordNotFound {
            kind: R::KIND,
            id: id.to_string(),
        })?;
    patch.apply(&mut record);
    update(store, record)
}

pub fn delete<R: Collected, B: StorageBackend>(
    store: &mut CollectionStore<R, B>,
    id: &str,
) -> Result<CmdResult> {
    let removed = store.delete(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} deleted ({}): {}",
        R::KIND,
        removed.id(),
        removed.label()
    )));
    Ok(result.with_records(vec![removed]))
}
