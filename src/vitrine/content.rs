//! # Site Content Schema
//!
//! The landing pages are driven by one [`SiteContent`] document with four
//! independently editable sections: `hero`, `techStack`, `about` and `process`.
//!
//! ## Versioning and Default Fill
//!
//! Documents carry a `version`. Blobs written before versioning existed have
//! none and are read as version 1. On hydration every section goes through an
//! explicit field-by-field fill: each field present in the stored blob wins,
//! each missing field takes the built-in default. Nested values (`mission`,
//! `teaser`, `steps`, ...) are filled as a whole, not recursively.
//!
//! The `Stored*` structs mirror the public ones with every field optional.
//! Adding a field to a section means adding it in both places and in the
//! matching `fill`.

use crate::error::{Result, VitrineError};
use crate::model::Document;
use crate::seed;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CONTENT_VERSION: u32 = 1;

fn legacy_version() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub h1: String,
    pub h2: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image_url: String,
    pub blur: f64,
    pub brightness: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStackContent {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledText {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutTeaser {
    pub headline: String,
    pub p1: String,
    pub p2: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub headline: String,
    pub subheadline: String,
    pub main_text: String,
    pub mission: TitledText,
    pub vision: TitledText,
    pub values: Vec<CompanyValue>,
    pub teaser: AboutTeaser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
    pub deliverables: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTeaser {
    pub headline: String,
    pub p1: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessContent {
    pub headline: String,
    pub subheadline: String,
    pub steps: Vec<ProcessStep>,
    pub teaser: ProcessTeaser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    #[serde(default = "legacy_version")]
    pub version: u32,
    pub hero: HeroContent,
    pub tech_stack: TechStackContent,
    pub about: AboutContent,
    pub process: ProcessContent,
}

/// Identifies one replaceable section of [`SiteContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    TechStack,
    About,
    Process,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::TechStack,
        SectionId::About,
        SectionId::Process,
    ];

    /// The key used for this section in the persisted document.
    pub fn key(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::TechStack => "techStack",
            SectionId::About => "about",
            SectionId::Process => "process",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionId {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hero" => Ok(SectionId::Hero),
            "techStack" | "tech-stack" | "techstack" => Ok(SectionId::TechStack),
            "about" => Ok(SectionId::About),
            "process" => Ok(SectionId::Process),
            other => Err(VitrineError::InvalidSection {
                section: other.to_string(),
                reason: "expected one of hero, techStack, about, process".to_string(),
            }),
        }
    }
}

/// A complete replacement value for one section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionValue {
    Hero(HeroContent),
    TechStack(TechStackContent),
    About(AboutContent),
    Process(ProcessContent),
}

impl SectionValue {
    pub fn id(&self) -> SectionId {
        match self {
            SectionValue::Hero(_) => SectionId::Hero,
            SectionValue::TechStack(_) => SectionId::TechStack,
            SectionValue::About(_) => SectionId::About,
            SectionValue::Process(_) => SectionId::Process,
        }
    }

    /// Parse a full section payload. Partial payloads are rejected: a save
    /// replaces the whole section.
    pub fn from_json(section: SectionId, raw: &str) -> Result<Self> {
        let invalid = |e: serde_json::Error| VitrineError::InvalidSection {
            section: section.key().to_string(),
            reason: e.to_string(),
        };
        let value = match section {
            SectionId::Hero => SectionValue::Hero(serde_json::from_str(raw).map_err(invalid)?),
            SectionId::TechStack => {
                SectionValue::TechStack(serde_json::from_str(raw).map_err(invalid)?)
            }
            SectionId::About => SectionValue::About(serde_json::from_str(raw).map_err(invalid)?),
            SectionId::Process => {
                SectionValue::Process(serde_json::from_str(raw).map_err(invalid)?)
            }
        };
        Ok(value)
    }
}

impl SiteContent {
    /// Replace exactly one section, leaving the others untouched.
    pub fn with_section(mut self, value: SectionValue) -> Self {
        match value {
            SectionValue::Hero(hero) => self.hero = hero,
            SectionValue::TechStack(tech_stack) => self.tech_stack = tech_stack,
            SectionValue::About(about) => self.about = about,
            SectionValue::Process(process) => self.process = process,
        }
        self
    }

    pub fn section_json(&self, section: SectionId) -> Result<serde_json::Value> {
        let value = match section {
            SectionId::Hero => serde_json::to_value(&self.hero)?,
            SectionId::TechStack => serde_json::to_value(&self.tech_stack)?,
            SectionId::About => serde_json::to_value(&self.about)?,
            SectionId::Process => serde_json::to_value(&self.process)?,
        };
        Ok(value)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSiteContent {
    version: Option<u32>,
    hero: Option<StoredHero>,
    tech_stack: Option<StoredTechStack>,
    about: Option<StoredAbout>,
    process: Option<StoredProcess>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredHero {
    h1: Option<String>,
    h2: Option<String>,
    button_text: Option<String>,
    button_link: Option<String>,
    background_image_url: Option<String>,
    blur: Option<f64>,
    brightness: Option<f64>,
    opacity: Option<f64>,
}

impl StoredHero {
    fn fill(self, d: HeroContent) -> HeroContent {
        HeroContent {
            h1: self.h1.unwrap_or(d.h1),
            h2: self.h2.unwrap_or(d.h2),
            button_text: self.button_text.unwrap_or(d.button_text),
            button_link: self.button_link.unwrap_or(d.button_link),
            background_image_url: self.background_image_url.unwrap_or(d.background_image_url),
            blur: self.blur.unwrap_or(d.blur),
            brightness: self.brightness.unwrap_or(d.brightness),
            opacity: self.opacity.unwrap_or(d.opacity),
        }
    }
}

#[derive(Deserialize)]
struct StoredTechStack {
    title: Option<String>,
    subtitle: Option<String>,
}

impl StoredTechStack {
    fn fill(self, d: TechStackContent) -> TechStackContent {
        TechStackContent {
            title: self.title.unwrap_or(d.title),
            subtitle: self.subtitle.unwrap_or(d.subtitle),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAbout {
    headline: Option<String>,
    subheadline: Option<String>,
    main_text: Option<String>,
    mission: Option<TitledText>,
    vision: Option<TitledText>,
    values: Option<Vec<CompanyValue>>,
    teaser: Option<AboutTeaser>,
}

impl StoredAbout {
    fn fill(self, d: AboutContent) -> AboutContent {
        AboutContent {
            headline: self.headline.unwrap_or(d.headline),
            subheadline: self.subheadline.unwrap_or(d.subheadline),
            main_text: self.main_text.unwrap_or(d.main_text),
            mission: self.mission.unwrap_or(d.mission),
            vision: self.vision.unwrap_or(d.vision),
            values: self.values.unwrap_or(d.values),
            teaser: self.teaser.unwrap_or(d.teaser),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProcess {
    headline: Option<String>,
    subheadline: Option<String>,
    steps: Option<Vec<ProcessStep>>,
    teaser: Option<ProcessTeaser>,
}

impl StoredProcess {
    fn fill(self, d: ProcessContent) -> ProcessContent {
        ProcessContent {
            headline: self.headline.unwrap_or(d.headline),
            subheadline: self.subheadline.unwrap_or(d.subheadline),
            steps: self.steps.unwrap_or(d.steps),
            teaser: self.teaser.unwrap_or(d.teaser),
        }
    }
}

/// Parse `raw` as JSON and require a top-level object.
pub(crate) fn expect_object(raw: &str, kind: &str) -> Result<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(VitrineError::Store(format!(
            "{} must be a JSON object",
            kind
        )));
    }
    Ok(value)
}

impl Document for SiteContent {
    const KIND: &'static str = "Site content";
    const STORAGE_KEY: &'static str = "siteContent";

    fn defaults() -> Self {
        seed::site_content()
    }

    fn decode(raw: &str) -> Result<Self> {
        let value = expect_object(raw, Self::KIND)?;
        let stored: StoredSiteContent = serde_json::from_value(value)?;
        let version = stored.version.unwrap_or_else(legacy_version);
        if version > CONTENT_VERSION {
            return Err(VitrineError::Store(format!(
                "site content version {} is newer than supported version {}",
                version, CONTENT_VERSION
            )));
        }

        let d = Self::defaults();
        Ok(SiteContent {
            version: CONTENT_VERSION,
            hero: match stored.hero {
                Some(hero) => hero.fill(d.hero),
                None => d.hero,
            },
            tech_stack: match stored.tech_stack {
                Some(tech_stack) => tech_stack.fill(d.tech_stack),
                None => d.tech_stack,
            },
            about: match stored.about {
                Some(about) => about.fill(d.about),
                None => d.about,
            },
            process: match stored.process {
                Some(process) => process.fill(d.process),
                None => d.process,
            },
        })
    }
}
