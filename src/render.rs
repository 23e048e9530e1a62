//! DataView renderer: rebuilds the four display regions from a snapshot.
//!
//! Rendering is pure view construction; hosts decide how the regions reach a
//! screen (TUI frame, stdout). Every apply is a full replacement: the regions
//! reflect exactly one snapshot at a time.

use crate::snapshot::Snapshot;

/// Stable names hosts use to label the four output regions.
pub const TIMELINE_REGION: &str = "timeline";
pub const INTEGRITY_REGION: &str = "integrity";
pub const TRAIT_CLOUD_REGION: &str = "trait-cloud";
pub const YIELD_REGION: &str = "yield";

/// The four named display regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    /// One line per reflection, in sequence order.
    pub timeline: Vec<String>,
    /// Integrity score, verbatim text.
    pub integrity: String,
    /// One `trait(count)` tag per cloud entry, in mapping order.
    pub trait_cloud: Vec<String>,
    /// Yield value, verbatim text.
    pub vault_yield: String,
}

impl DashboardView {
    /// Build a view directly from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut view = Self::default();
        view.apply(snapshot);
        view
    }

    /// Clear and repopulate every region from `snapshot`.
    pub fn apply(&mut self, snapshot: &Snapshot) {
        self.timeline.clear();
        self.timeline
            .extend(snapshot.reflections.iter().enumerate().map(|(i, r)| {
                format!(
                    "{}. {} [{}] ({})",
                    i + 1,
                    r.text,
                    r.sentiment,
                    r.traits.join(", ")
                )
            }));

        self.integrity = snapshot.integrity_score.to_string();

        self.trait_cloud.clear();
        self.trait_cloud.extend(
            snapshot
                .trait_cloud
                .iter()
                .map(|(name, count)| format!("{name}({count})")),
        );

        self.vault_yield = snapshot.vaultfire_yield.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(doc: &str) -> Snapshot {
        serde_json::from_str(doc).unwrap()
    }

    #[test]
    fn test_timeline_line_format() {
        let snap = snapshot(
            r#"{
                "reflections": [
                    {"text": "Saw light", "sentiment": "calm", "traits": ["patient", "curious"]}
                ],
                "integrity_score": 87,
                "trait_cloud": {"curious": 3, "bold": 1},
                "vaultfire_yield": 42
            }"#,
        );
        let view = DashboardView::from_snapshot(&snap);

        assert_eq!(view.timeline, vec!["1. Saw light [calm] (patient, curious)"]);
        assert_eq!(view.integrity, "87");
        assert_eq!(view.trait_cloud, vec!["curious(3)", "bold(1)"]);
        assert_eq!(view.vault_yield, "42");
    }

    #[test]
    fn test_timeline_is_one_based_and_ordered() {
        let snap = snapshot(
            r#"{
                "reflections": [
                    {"text": "first", "sentiment": "neutral", "traits": []},
                    {"text": "second", "sentiment": "positive", "traits": ["honesty"]},
                    {"text": "third", "sentiment": "negative", "traits": ["fear", "doubt"]}
                ],
                "integrity_score": -1,
                "trait_cloud": {},
                "vaultfire_yield": 0
            }"#,
        );
        let view = DashboardView::from_snapshot(&snap);

        assert_eq!(
            view.timeline,
            vec![
                "1. first [neutral] ()",
                "2. second [positive] (honesty)",
                "3. third [negative] (fear, doubt)",
            ]
        );
        assert_eq!(view.integrity, "-1");
    }

    #[test]
    fn test_empty_snapshot_clears_lists_but_sets_scalars() {
        let snap = snapshot(
            r#"{
                "reflections": [],
                "integrity_score": 0,
                "trait_cloud": {},
                "vaultfire_yield": "🔆 Simulated yield: 0.05 pts"
            }"#,
        );
        let view = DashboardView::from_snapshot(&snap);

        assert!(view.timeline.is_empty());
        assert!(view.trait_cloud.is_empty());
        assert_eq!(view.integrity, "0");
        assert_eq!(view.vault_yield, "🔆 Simulated yield: 0.05 pts");
    }

    #[test]
    fn test_apply_replaces_wholesale() {
        let first = snapshot(
            r#"{
                "reflections": [
                    {"text": "old entry", "sentiment": "neutral", "traits": ["doubt"]},
                    {"text": "older entry", "sentiment": "negative", "traits": []}
                ],
                "integrity_score": 5,
                "trait_cloud": {"doubt": 2, "fear": 1},
                "vaultfire_yield": "0.4 pts"
            }"#,
        );
        let second = snapshot(
            r#"{
                "reflections": [
                    {"text": "new entry", "sentiment": "positive", "traits": ["compassion"]}
                ],
                "integrity_score": 6,
                "trait_cloud": {"compassion": 1},
                "vaultfire_yield": "0.5 pts"
            }"#,
        );

        let mut view = DashboardView::default();
        view.apply(&first);
        view.apply(&second);

        assert_eq!(view.timeline, vec!["1. new entry [positive] (compassion)"]);
        assert_eq!(view.integrity, "6");
        assert_eq!(view.trait_cloud, vec!["compassion(1)"]);
        assert_eq!(view.vault_yield, "0.5 pts");
    }

    #[test]
    fn test_trait_cloud_follows_document_order() {
        let snap = snapshot(
            r#"{
                "reflections": [],
                "integrity_score": 0,
                "trait_cloud": {"fear": 4, "honesty": 2, "compassion": 7, "doubt": 1},
                "vaultfire_yield": 0
            }"#,
        );
        let view = DashboardView::from_snapshot(&snap);

        assert_eq!(
            view.trait_cloud,
            vec!["fear(4)", "honesty(2)", "compassion(7)", "doubt(1)"]
        );
    }
}
