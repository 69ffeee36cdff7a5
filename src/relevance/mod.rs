//! Per-item relevance gate: a five-star rating that conditionally reveals a
//! notes field.
//!
//! Pure presentation state with no external effects. The hosting layer owns
//! the informational body content; the gate only tells it how to render
//! (status text, muted or not, notes visible or not).

use serde::{Deserialize, Serialize};

/// The three observable states of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceState {
    /// No rating selected yet.
    Unset,
    /// Rated 1-2: item marked as low relevance, body rendered muted.
    Low,
    /// Rated 3-5: item marked relevant, notes field revealed.
    Relevant,
}

/// One rateable item. Created unset with empty notes; destroyed with its
/// hosting context, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceItem {
    id: String,
    label: Option<String>,
    rating: u8,
    notes: String,
}

impl RelevanceItem {
    pub fn new(id: impl Into<String>, label: Option<String>) -> Self {
        Self {
            id: id.into(),
            label,
            rating: 0,
            notes: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current rating, 0 meaning unset.
    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Select a rating. Values clamp into [1, 5]; once a rating has been
    /// selected there is no way back to the unset state.
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.clamp(1, 5);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn state(&self) -> RelevanceState {
        match self.rating {
            0 => RelevanceState::Unset,
            1..=2 => RelevanceState::Low,
            _ => RelevanceState::Relevant,
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self.state() {
            RelevanceState::Unset => "Not marked",
            RelevanceState::Low => "Marked low relevance",
            RelevanceState::Relevant => "Marked relevant",
        }
    }

    /// "n/5" once rated, "Not set" before.
    pub fn rating_text(&self) -> String {
        if self.rating == 0 {
            "Not set".to_string()
        } else {
            format!("{}/5", self.rating)
        }
    }

    /// Whether the host should reveal the free-text notes field.
    pub fn notes_visible(&self) -> bool {
        self.state() == RelevanceState::Relevant
    }

    /// Whether the host should render the body in its muted secondary mode.
    pub fn muted(&self) -> bool {
        self.state() == RelevanceState::Low
    }

    /// Label for the notes field: the explicit label if one was given,
    /// otherwise derived from the item id.
    pub fn note_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("Notes for {}", self.id))
    }
}
