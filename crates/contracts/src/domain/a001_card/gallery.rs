use super::aggregate::{Card, CardId, CardRecord};
use serde::{Deserialize, Serialize};

/// Список карточек на странице
///
/// Index 0 is the first card displayed. New cards are always prepended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    cards: Vec<Card>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every seed record in order, each one at the front.
    ///
    /// The last record of `records` ends up first on the page.
    pub fn from_seed<'a>(records: impl IntoIterator<Item = &'a CardRecord>) -> Self {
        let mut gallery = Self::new();
        for record in records {
            gallery.render(record.clone());
        }
        gallery
    }

    /// Create a card for `record` and put it at the front of the list.
    pub fn render(&mut self, record: CardRecord) -> CardId {
        let card = Card::new(record);
        let id = card.id;
        log::debug!("render card {} ({})", card.record.name, card.id.0);
        self.cards.insert(0, card);
        id
    }

    /// Remove the card with `id`. Removing a card that is already gone is a no-op.
    pub fn delete(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        let card = self.cards.remove(index);
        log::debug!("delete card {} ({})", card.record.name, card.id.0);
        Some(card)
    }

    /// Flip the liked flag; returns the new state or `None` for an unknown card.
    pub fn toggle_like(&mut self, id: CardId) -> Option<bool> {
        self.cards
            .iter_mut()
            .find(|c| c.id == id)
            .map(Card::toggle_like)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
