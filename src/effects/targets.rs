//! Target maps: caller-supplied effect selections.
//!
//! A target map pairs effect identifiers with ordered lists of chosen card
//! names. Presence of a key is itself meaningful: it marks the effect as
//! selected to activate even when the target list is empty (many effects
//! take no arguments). Absence of a key leaves an optional effect inert.
//!
//! Because keys are effect identifiers rather than tree positions, a caller
//! can pre-supply targets for effects nested arbitrarily deep, including
//! effects that only exist because a copying effect duplicates another
//! card's tree.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::effect::EffectId;

/// Mapping from effect identifier to chosen target card names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetMap {
    chosen: FxHashMap<EffectId, Vec<String>>,
}

impl TargetMap {
    /// Create an empty target map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an effect with the given targets (builder pattern).
    #[must_use]
    pub fn with_targets<S: Into<String>>(
        mut self,
        effect: EffectId,
        targets: impl IntoIterator<Item = S>,
    ) -> Self {
        self.select_with(effect, targets);
        self
    }

    /// Select an effect that takes no targets (builder pattern).
    #[must_use]
    pub fn with_selected(mut self, effect: EffectId) -> Self {
        self.select(effect);
        self
    }

    /// Select an effect that takes no targets.
    pub fn select(&mut self, effect: EffectId) {
        self.chosen.entry(effect).or_default();
    }

    /// Select an effect with the given targets, replacing any prior entry.
    pub fn select_with<S: Into<String>>(
        &mut self,
        effect: EffectId,
        targets: impl IntoIterator<Item = S>,
    ) {
        self.chosen
            .insert(effect, targets.into_iter().map(Into::into).collect());
    }

    /// Whether the effect is selected to activate.
    #[must_use]
    pub fn is_selected(&self, effect: EffectId) -> bool {
        self.chosen.contains_key(&effect)
    }

    /// Targets chosen for an effect. `None` when the effect is not selected.
    #[must_use]
    pub fn targets(&self, effect: EffectId) -> Option<&[String]> {
        self.chosen.get(&effect).map(Vec::as_slice)
    }

    /// Number of selected effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Whether no effects are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Iterate over selections in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (EffectId, &[String])> {
        self.chosen.iter().map(|(id, t)| (*id, t.as_slice()))
    }

    /// Selected effect ids in ascending order, for deterministic rendering.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<EffectId> {
        let mut ids: Vec<EffectId> = self.chosen.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
