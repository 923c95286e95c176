use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор отрисованной карточки
///
/// Exists only to key the rendered list; two cards built from equal records
/// are still different cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub Uuid);

impl CardId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Название места и ссылка на картинку
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub link: String,
}

impl CardRecord {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название места не может быть пустым".into());
        }
        if self.link.trim().is_empty() {
            return Err("Ссылка на картинку не может быть пустой".into());
        }
        Ok(())
    }
}

// ============================================================================
// Rendered card
// ============================================================================

/// Карточка, отрисованная в галерее
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub record: CardRecord,
    /// Presentation-only flag behind `card__like-button_is-active`.
    pub liked: bool,
}

impl Card {
    pub fn new(record: CardRecord) -> Self {
        Self {
            id: CardId::new_v4(),
            record,
            liked: false,
        }
    }

    pub fn toggle_like(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }
}
