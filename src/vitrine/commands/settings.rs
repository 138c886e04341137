use crate::commands::{CmdMessage, CmdResult};
use crate::commands::content::SAVED;
use crate::error::{FieldError, Result, VitrineError};
use crate::model::SiteSettings;
use crate::store::backend::StorageBackend;
use crate::store::document::DocumentStore;
use crate::theme;

/// Fields to change; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub site_name: Option<String>,
    pub whatsapp_number: Option<String>,
    pub accent_color: Option<String>,
}

pub fn show<B: StorageBackend>(store: &DocumentStore<SiteSettings, B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_settings(store.current().clone()))
}

pub fn save<B: StorageBackend>(
    store: &mut DocumentStore<SiteSettings, B>,
    patch: SettingsPatch,
) -> Result<CmdResult> {
    let mut next = store.current().clone();
    if let Some(site_name) = patch.site_name {
        next.site_name = site_name;
    }
    if let Some(number) = patch.whatsapp_number {
        next.whatsapp_number = number;
    }
    if let Some(accent) = patch.accent_color {
        if !theme::is_hex_color(&accent) {
            return Err(VitrineError::Validation(vec![FieldError::new(
                "accentColor",
                "A cor deve estar no formato #rrggbb.",
            )]));
        }
        next.accent_color = accent;
    }

    let changed = store.save(next);
    let mut result = CmdResult::default().with_settings(store.current().clone());
    if changed {
        result.add_message(CmdMessage::success(SAVED));
    } else {
        result.add_message(CmdMessage::info("Settings unchanged"));
    }
    Ok(result)
}
