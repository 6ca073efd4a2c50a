// Message keys and the default English catalog.
// Overrides come from the `[messages]` table of the config file, keyed by id.

use std::collections::HashMap;

use crate::model::prompt::EntityType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AskDeleteSprite,
    AskDeleteCostume,
    AskDeleteSound,
    ConfirmOption,
    CancelOption,
    DeleteHeading,
}

impl MessageKey {
    pub const ALL: [MessageKey; 6] = [
        MessageKey::AskDeleteSprite,
        MessageKey::AskDeleteCostume,
        MessageKey::AskDeleteSound,
        MessageKey::ConfirmOption,
        MessageKey::CancelOption,
        MessageKey::DeleteHeading,
    ];

    /// Stable id used as the override key.
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::AskDeleteSprite => "gui.gui.shouldDeleteSprite",
            MessageKey::AskDeleteCostume => "gui.gui.shouldDeleteCostume",
            MessageKey::AskDeleteSound => "gui.gui.shouldDeleteSound",
            MessageKey::ConfirmOption => "gui.gui.confirm",
            MessageKey::CancelOption => "gui.gui.cancel",
            MessageKey::DeleteHeading => "gui.gui.deleteAssetHeading",
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            MessageKey::AskDeleteSprite => "Are you sure you want to delete this sprite?",
            MessageKey::AskDeleteCostume => "Are you sure you want to delete this costume?",
            MessageKey::AskDeleteSound => "Are you sure you want to delete this sound?",
            MessageKey::ConfirmOption => "yes",
            MessageKey::CancelOption => "no",
            MessageKey::DeleteHeading => "Confirm Asset Deletion",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

/// Confirmation question for `entity_type`.
pub fn select_message(entity_type: EntityType) -> MessageKey {
    match entity_type {
        EntityType::Costume => MessageKey::AskDeleteCostume,
        EntityType::Sound => MessageKey::AskDeleteSound,
        EntityType::Sprite => MessageKey::AskDeleteSprite,
    }
}

/// Same as `select_message` for a raw tag. Unknown tags get the sprite
/// question; they are logged, not rejected.
pub fn select_message_tag(tag: &str) -> MessageKey {
    select_message(EntityType::from_tag_lossy(tag))
}

/// Display strings for the current locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: HashMap<MessageKey, String>,
}

impl Catalog {
    /// Build from an id -> text table. Unknown ids are skipped with a warning.
    pub fn with_overrides(table: &HashMap<String, String>) -> Self {
        let mut overrides = HashMap::new();
        for (id, text) in table {
            match MessageKey::from_id(id) {
                Some(key) => {
                    overrides.insert(key, text.clone());
                }
                None => log::warn!("ignoring override for unknown message id {:?}", id),
            }
        }
        Self { overrides }
    }

    pub fn text(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }
}
