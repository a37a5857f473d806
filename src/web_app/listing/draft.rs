// web_app/listing/draft.rs - Uncommitted textbox content per range control
//
// Typing only touches the draft; nothing is parsed or validated until the
// control commits (blur or slider release).

use super::range::{CommittedRange, Dimension};

pub type DraftPair = [String; 2];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftBuffer {
    drafts: [DraftPair; 4],
}

impl DraftBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: Dimension) -> &DraftPair {
        &self.drafts[dimension.index()]
    }

    pub fn set_min(&mut self, dimension: Dimension, text: impl Into<String>) {
        self.drafts[dimension.index()][0] = text.into();
    }

    pub fn set_max(&mut self, dimension: Dimension, text: impl Into<String>) {
        self.drafts[dimension.index()][1] = text.into();
    }

    /// Overwrites the draft with the committed values, discarding whatever
    /// the user had typed.
    pub fn reset_from(&mut self, dimension: Dimension, committed: CommittedRange) {
        self.drafts[dimension.index()] = committed.to_draft();
    }

    /// Writes `pair` only if it differs from the current text.
    /// Returns whether the draft was rewritten.
    pub fn replace_if_different(&mut self, dimension: Dimension, pair: DraftPair) -> bool {
        let slot = &mut self.drafts[dimension.index()];
        if *slot == pair {
            return false;
        }
        *slot = pair;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drafts_hold_raw_text() {
        let mut drafts = DraftBuffer::new();
        drafts.set_min(Dimension::Price, "abc");
        drafts.set_max(Dimension::Price, "");

        assert_eq!(drafts.get(Dimension::Price), &["abc".to_string(), String::new()]);
        assert_eq!(drafts.get(Dimension::Area), &[String::new(), String::new()]);
    }

    #[test]
    fn test_reset_from_overwrites_typed_text() {
        let mut drafts = DraftBuffer::new();
        drafts.set_min(Dimension::Floor, "abc");

        drafts.reset_from(Dimension::Floor, CommittedRange::new(Some(3.0), None));
        assert_eq!(drafts.get(Dimension::Floor), &["3".to_string(), String::new()]);
    }

    #[test]
    fn test_replace_if_different() {
        let mut drafts = DraftBuffer::new();
        let pair = ["1".to_string(), "2".to_string()];

        assert!(drafts.replace_if_different(Dimension::Parking, pair.clone()));
        assert!(!drafts.replace_if_different(Dimension::Parking, pair));
    }
}
