use crate::content::expect_object;
use crate::error::Result;
use crate::seed;
use crate::theme;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One entity kind held in a [`crate::store::collection::CollectionStore`].
///
/// A record carries a string id that is unique within its collection. New
/// records are submitted as a [`Record::Draft`] and receive their id from the
/// store.
pub trait Record: Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    type Draft;

    /// Human readable kind, used in messages and errors.
    const KIND: &'static str;

    /// Fixed backing key for the whole collection.
    const STORAGE_KEY: &'static str;

    fn id(&self) -> &str;

    /// Short display name (title or person name).
    fn label(&self) -> &str;

    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Built-in dataset used when nothing valid is persisted.
    fn seed() -> Vec<Self>;
}

/// A singleton document held in a [`crate::store::document::DocumentStore`].
pub trait Document: Clone + std::fmt::Debug + PartialEq + Serialize {
    const KIND: &'static str;
    const STORAGE_KEY: &'static str;

    fn defaults() -> Self;

    /// Decode a persisted blob, filling any missing field from [`Document::defaults`].
    /// Fails when the blob is not JSON or not an object of the expected shape.
    fn decode(raw: &str) -> Result<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    #[serde(rename = "imageurl")]
    pub image_url: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desafio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solucao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resultados: Option<String>,
}

/// A portfolio item before it has been assigned an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDraft {
    #[serde(rename = "imageurl")]
    pub image_url: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub desafio: Option<String>,
    #[serde(default)]
    pub solucao: Option<String>,
    #[serde(default)]
    pub resultados: Option<String>,
}

impl PortfolioDraft {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }
}

impl Record for PortfolioItem {
    type Draft = PortfolioDraft;
    const KIND: &'static str = "Portfolio item";
    const STORAGE_KEY: &'static str = "portfolioData";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn from_draft(id: String, draft: PortfolioDraft) -> Self {
        Self {
            id,
            image_url: draft.image_url,
            title: draft.title,
            category: draft.category,
            desafio: draft.desafio,
            solucao: draft.solucao,
            resultados: draft.resultados,
        }
    }

    fn seed() -> Vec<Self> {
        seed::portfolio()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    /// Inline SVG markup.
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Record for ServiceItem {
    type Draft = ServiceDraft;
    const KIND: &'static str = "Service";
    const STORAGE_KEY: &'static str = "servicesData";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn from_draft(id: String, draft: ServiceDraft) -> Self {
        Self {
            id,
            icon: draft.icon,
            title: draft.title,
            description: draft.description,
        }
    }

    fn seed() -> Vec<Self> {
        seed::services()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub image_url: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub socials: Socials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDraft {
    pub image_url: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub socials: Socials,
}

impl Record for TeamMember {
    type Draft = TeamMemberDraft;
    const KIND: &'static str = "Team member";
    const STORAGE_KEY: &'static str = "teamData";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn from_draft(id: String, draft: TeamMemberDraft) -> Self {
        Self {
            id,
            image_url: draft.image_url,
            name: draft.name,
            role: draft.role,
            bio: draft.bio,
            socials: draft.socials,
        }
    }

    fn seed() -> Vec<Self> {
        seed::team()
    }
}

/// Site-wide settings edited from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub whatsapp_number: String,
    pub accent_color: String,
}

impl SiteSettings {
    /// Accent color as space separated HSL components, ready for a CSS variable.
    pub fn accent_hsl(&self) -> String {
        theme::hex_to_hsl(&self.accent_color)
    }
}

// Persisted settings may predate a field; every field is optional on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSiteSettings {
    site_name: Option<String>,
    whatsapp_number: Option<String>,
    accent_color: Option<String>,
}

impl Document for SiteSettings {
    const KIND: &'static str = "Site settings";
    const STORAGE_KEY: &'static str = "siteSettings";

    fn defaults() -> Self {
        seed::settings()
    }

    fn decode(raw: &str) -> Result<Self> {
        let value = expect_object(raw, Self::KIND)?;
        let stored: StoredSiteSettings = serde_json::from_value(value)?;
        let defaults = Self::defaults();
        Ok(Self {
            site_name: stored.site_name.unwrap_or(defaults.site_name),
            whatsapp_number: stored.whatsapp_number.unwrap_or(defaults.whatsapp_number),
            accent_color: stored.accent_color.unwrap_or(defaults.accent_color),
        })
    }
}
