//! # Filter State Machine
//!
//! [`FacetFilter`] owns a [`ValueIndex`], the user's [`Selection`] (at most one
//! value per dimension) and the derived per-value [`ValueState`].
//!
//! ## Toggle
//!
//! A toggle on (D, v):
//! 1. fails with `UnknownValue` if v was never indexed in D;
//! 2. is ignored if v is currently disabled;
//! 3. clears D if v is D's active selection, otherwise selects v;
//! 4. recomputes all state.
//!
//! ## Recompute
//!
//! State is never patched in place. Every change builds a fresh [`FacetState`]:
//! all values start enabled, `selected` mirrors the selection, then each
//! selected value disables every value of every *other* dimension it never
//! co-occurs with. The result is the union over selected dimensions, so it does
//! not depend on evaluation order.
//!
//! A selected value can never end up disabled. Co-occurrence is symmetric, and
//! a value is only selectable while it co-occurs with every other active
//! selection, so all active selections stay pairwise compatible.

use crate::error::{FacetzError, Result};
use crate::index::ValueIndex;
use crate::model::{Dimension, Item, Token};
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Derived flags for one (dimension, value) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValueState {
    pub selected: bool,
    pub disabled: bool,
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Selected,
    Cleared,
    /// The value was disabled; nothing changed.
    Ignored,
}

/// One slot per dimension, each holding the active value or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<D: Dimension, V> {
    slots: Vec<Option<V>>,
    _dimension: PhantomData<D>,
}

impl<D: Dimension, V: Token> Default for Selection<D, V> {
    fn default() -> Self {
        Self {
            slots: vec![None; D::ALL.len()],
            _dimension: PhantomData,
        }
    }
}

impl<D: Dimension, V: Token> Selection<D, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: D) -> Option<&V> {
        self.slots[dimension.ordinal()].as_ref()
    }

    pub fn set(&mut self, dimension: D, value: V) {
        self.slots[dimension.ordinal()] = Some(value);
    }

    pub fn unset(&mut self, dimension: D) {
        self.slots[dimension.ordinal()] = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Active selections in declared dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (D, &V)> + '_ {
        D::ALL
            .iter()
            .zip(&self.slots)
            .filter_map(|(&d, slot)| slot.as_ref().map(|v| (d, v)))
    }

    /// An item matches when it agrees with every active selection.
    pub fn matches(&self, item: &Item<D, V>) -> bool {
        self.iter().all(|(d, v)| item.get(d) == Some(v))
    }
}

/// Value states for every indexed value, aligned with [`ValueIndex::values`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetState {
    dimensions: Vec<Vec<ValueState>>,
}

impl FacetState {
    /// Derive state from scratch for `selection` over `index`.
    pub fn compute<D: Dimension, V: Token>(
        index: &ValueIndex<D, V>,
        selection: &Selection<D, V>,
    ) -> Self {
        let mut dimensions: Vec<Vec<ValueState>> = D::ALL
            .iter()
            .map(|&d| {
                let active = selection.get(d);
                index
                    .values(d)
                    .iter()
                    .map(|v| ValueState {
                        selected: active == Some(v),
                        disabled: false,
                    })
                    .collect()
            })
            .collect();

        for (da, sa) in selection.iter() {
            let Some(pos) = index.position(da, sa) else {
                continue;
            };
            for &db in D::ALL.iter().filter(|&&db| db != da) {
                let compatible = index.cooccurring_at(da, pos, db);
                let states = &mut dimensions[db.ordinal()];
                for (vb, state) in index.values(db).iter().zip(states.iter_mut()) {
                    if !compatible.contains(vb) {
                        state.disabled = true;
                    }
                }
            }
        }

        trace!(
            disabled = dimensions.iter().flatten().filter(|s| s.disabled).count(),
            "recomputed facet state"
        );
        Self { dimensions }
    }

    fn get<D: Dimension>(&self, dimension: D, pos: usize) -> ValueState {
        self.dimensions[dimension.ordinal()][pos]
    }
}

/// A (value, selected, disabled) triple for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueView<V> {
    pub value: V,
    pub selected: bool,
    pub disabled: bool,
}

/// All value triples of one dimension, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetView<V> {
    pub dimension: &'static str,
    pub values: Vec<ValueView<V>>,
}

/// The filter session: index, selection and derived state.
#[derive(Debug, Clone)]
pub struct FacetFilter<D: Dimension, V> {
    index: ValueIndex<D, V>,
    selection: Selection<D, V>,
    state: FacetState,
}

impl<D: Dimension, V: Token> FacetFilter<D, V> {
    /// Start a session with nothing selected and nothing disabled.
    pub fn new(index: ValueIndex<D, V>) -> Self {
        let selection = Selection::new();
        let state = FacetState::compute(&index, &selection);
        Self {
            index,
            selection,
            state,
        }
    }

    pub fn index(&self) -> &ValueIndex<D, V> {
        &self.index
    }

    pub fn selection(&self) -> &Selection<D, V> {
        &self.selection
    }

    pub fn facet_state(&self) -> &FacetState {
        &self.state
    }

    /// State of one value, or `None` if it was never indexed.
    pub fn state(&self, dimension: D, value: &V) -> Option<ValueState> {
        let pos = self.index.position(dimension, value)?;
        Some(self.state.get(dimension, pos))
    }

    pub fn is_selected(&self, dimension: D, value: &V) -> bool {
        self.state(dimension, value).is_some_and(|s| s.selected)
    }

    pub fn is_disabled(&self, dimension: D, value: &V) -> bool {
        self.state(dimension, value).is_some_and(|s| s.disabled)
    }

    /// Select `value` in `dimension`, or clear it if it is already selected.
    pub fn toggle(&mut self, dimension: D, value: &V) -> Result<Toggled> {
        let pos = self
            .index
            .position(dimension, value)
            .ok_or_else(|| FacetzError::UnknownValue {
                dimension: dimension.name(),
                value: value.to_string(),
            })?;

        if self.state.get(dimension, pos).disabled {
            debug!(dimension = dimension.name(), %value, "ignored toggle on disabled value");
            return Ok(Toggled::Ignored);
        }

        let outcome = if self.selection.get(dimension) == Some(value) {
            self.selection.unset(dimension);
            Toggled::Cleared
        } else {
            self.selection.set(dimension, value.clone());
            Toggled::Selected
        };
        debug!(dimension = dimension.name(), %value, ?outcome, "toggled");

        self.state = FacetState::compute(&self.index, &self.selection);
        Ok(outcome)
    }

    /// Drop every selection.
    pub fn clear_all(&mut self) {
        self.selection = Selection::new();
        self.state = FacetState::compute(&self.index, &self.selection);
    }

    /// Value triples per dimension, in declared order.
    pub fn views(&self) -> Vec<FacetView<V>> {
        D::ALL
            .iter()
            .map(|&d| FacetView {
                dimension: d.name(),
                values: self
                    .index
                    .values(d)
                    .iter()
                    .enumerate()
                    .map(|(pos, v)| {
                        let state = self.state.get(d, pos);
                        ValueView {
                            value: v.clone(),
                            selected: state.selected,
                            disabled: state.disabled,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}
