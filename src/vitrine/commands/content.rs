use crate::commands::{CmdMessage, CmdResult};
use crate::content::{SectionId, SectionValue, SiteContent};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::document::DocumentStore;

pub const SAVED: &str = "Alterações salvas com sucesso!";

/// The whole document, or a single section as JSON.
pub fn show<B: StorageBackend>(
    store: &DocumentStore<SiteContent, B>,
    section: Option<SectionId>,
) -> Result<CmdResult> {
    let content = store.current();
    match section {
        None => Ok(CmdResult::default().with_content(content.clone())),
        Some(id) => {
            let value = content.section_json(id)?;
            Ok(CmdResult {
                section: Some((id, value)),
                ..Default::default()
            })
        }
    }
}

pub fn save_section<B: StorageBackend>(
    store: &mut DocumentStore<SiteContent, B>,
    value: SectionValue,
) -> Result<CmdResult> {
    let id = value.id();
    let changed = store.save_section(value);
    let mut result = CmdResult::default().with_content(store.current().clone());
    if changed {
        result.add_message(CmdMessage::success(SAVED));
    } else {
        result.add_message(CmdMessage::info(format!("Section {} unchanged", id)));
    }
    Ok(result)
}

/// Parse `raw` as a full payload for `section`, then save it.
pub fn save_section_json<B: StorageBackend>(
    store: &mut DocumentStore<SiteContent, B>,
    section: SectionId,
    raw: &str,
) -> Result<CmdResult> {
    let value = SectionValue::from_json(section, raw)?;
    save_section(store, value)
}
