use filegate_models::{Decision, Photo};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The pending photos of one scan batch and where kept photos go.
///
/// The top card is the photo with the highest id. Ids are unique within a
/// batch, so a decision always removes exactly one photo.
#[derive(Debug, Clone, Default)]
pub struct ReviewStack {
    photos: Vec<Photo>,
    output_dir: Option<PathBuf>,
    visible_cards: usize,
}

impl ReviewStack {
    #[must_use]
    pub fn new(photos: Vec<Photo>, output_dir: PathBuf, visible_cards: usize) -> Self {
        Self {
            photos,
            output_dir: Some(output_dir),
            visible_cards: visible_cards.max(1),
        }
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn max_id(&self) -> Option<usize> {
        self.photos.iter().map(|p| p.id).max()
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn top(&self) -> Option<&Photo> {
        self.photos.iter().max_by_key(|p| p.id)
    }

    /// Photos whose id falls in the last `visible_cards` ids below and
    /// including the top, ordered from the bottom of the pile to the top.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<&Photo> {
        let Some(max_id) = self.max_id() else {
            return Vec::new();
        };
        let lowest = max_id.saturating_sub(self.visible_cards.saturating_sub(1));

        let mut cards: Vec<&Photo> = self.photos.iter().filter(|p| p.id >= lowest).collect();
        cards.sort_by_key(|p| p.id);
        cards
    }

    /// Removes the photo with `id` from the stack and hands it back for
    /// committing. Unknown ids are a no-op.
    pub fn decide(&mut self, id: usize, decision: Decision) -> Option<Photo> {
        let index = self.photos.iter().position(|p| p.id == id)?;
        let photo = self.photos.remove(index);
        debug!("ReviewStack: {} {} ({} left)", decision, photo.filename, self.photos.len());
        Some(photo)
    }

    /// Decides the top card.
    pub fn decide_top(&mut self, decision: Decision) -> Option<Photo> {
        let id = self.top()?.id;
        self.decide(id, decision)
    }
}
