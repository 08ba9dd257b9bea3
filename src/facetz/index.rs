//! # Value Index
//!
//! The index records, for every value observed in a dimension, which values of
//! every *other* dimension appear alongside it on at least one item. That is the
//! only relation the filter needs: two values are compatible iff they co-occur.
//!
//! ```text
//! items:  {red, 9, narrow} {red, 10, standard} {blue, 9, standard}
//!
//! colors/red   -> sizes: {9, 10}   widths: {narrow, standard}
//! colors/blue  -> sizes: {9}       widths: {standard}
//! sizes/10     -> colors: {red}    widths: {standard}
//! ...
//! ```
//!
//! Values keep the order in which they first appear in the item list, so
//! clients get a stable button order. Co-occurrence sets are plain `HashSet`s;
//! membership is the only question ever asked of them.
//!
//! The index is built in one pass and is read-only afterwards. A new item list
//! means a new index.

use crate::error::{FacetzError, Result};
use crate::model::{Dimension, Item, Token};
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use tracing::debug;

#[derive(Debug, Clone)]
struct DimensionIndex<V> {
    values: Vec<V>,
    positions: HashMap<V, usize>,
    // [value position][other dimension ordinal]; the own-dimension slot stays empty
    cooccurring: Vec<Vec<HashSet<V>>>,
}

impl<V: Token> DimensionIndex<V> {
    fn new() -> Self {
        Self {
            values: Vec::new(),
            positions: HashMap::new(),
            cooccurring: Vec::new(),
        }
    }

    fn intern(&mut self, value: &V, width: usize) -> usize {
        if let Some(&pos) = self.positions.get(value) {
            return pos;
        }
        let pos = self.values.len();
        self.values.push(value.clone());
        self.positions.insert(value.clone(), pos);
        self.cooccurring.push(vec![HashSet::new(); width]);
        pos
    }
}

/// Per-dimension co-occurrence index over a catalog.
#[derive(Debug, Clone)]
pub struct ValueIndex<D: Dimension, V> {
    dimensions: Vec<DimensionIndex<V>>,
    _dimension: PhantomData<D>,
}

impl<D: Dimension, V: Token> ValueIndex<D, V> {
    /// Build the index from `items`, over the dimensions in `D::ALL`.
    ///
    /// Every item must carry a value for every dimension. The first item that
    /// does not fails the whole build with [`FacetzError::MalformedItem`].
    pub fn build(items: &[Item<D, V>]) -> Result<Self> {
        let width = D::ALL.len();
        let mut dimensions: Vec<DimensionIndex<V>> =
            (0..width).map(|_| DimensionIndex::new()).collect();

        for (position, item) in items.iter().enumerate() {
            let row = D::ALL
                .iter()
                .map(|&d| {
                    item.get(d).ok_or(FacetzError::MalformedItem {
                        item: position,
                        dimension: d.name(),
                    })
                })
                .collect::<Result<Vec<&V>>>()?;

            for (a, value) in row.iter().enumerate() {
                let slot = dimensions[a].intern(value, width);
                for (b, other) in row.iter().enumerate() {
                    if a != b {
                        dimensions[a].cooccurring[slot][b].insert((*other).clone());
                    }
                }
            }
        }

        let index = Self {
            dimensions,
            _dimension: PhantomData,
        };
        debug!(
            items = items.len(),
            values = index.value_count(),
            "built value index"
        );
        Ok(index)
    }

    fn dim(&self, dimension: D) -> &DimensionIndex<V> {
        &self.dimensions[dimension.ordinal()]
    }

    /// Distinct values of `dimension`, in first-appearance order.
    pub fn values(&self, dimension: D) -> &[V] {
        &self.dim(dimension).values
    }

    pub fn contains(&self, dimension: D, value: &V) -> bool {
        self.dim(dimension).positions.contains_key(value)
    }

    /// Position of `value` within [`ValueIndex::values`].
    pub fn position(&self, dimension: D, value: &V) -> Option<usize> {
        self.dim(dimension).positions.get(value).copied()
    }

    /// Values of `other` seen on items where `dimension == value`.
    ///
    /// `None` when the value was never indexed or `other == dimension`.
    pub fn cooccurring(&self, dimension: D, value: &V, other: D) -> Option<&HashSet<V>> {
        if dimension == other {
            return None;
        }
        let pos = self.position(dimension, value)?;
        Some(self.cooccurring_at(dimension, pos, other))
    }

    pub(crate) fn cooccurring_at(&self, dimension: D, pos: usize, other: D) -> &HashSet<V> {
        &self.dim(dimension).cooccurring[pos][other.ordinal()]
    }

    /// Whether `a` (in `da`) and `b` (in `db`) share at least one item.
    pub fn compatible(&self, da: D, a: &V, db: D, b: &V) -> bool {
        self.cooccurring(da, a, db)
            .is_some_and(|set| set.contains(b))
    }

    /// Total distinct (dimension, value) pairs.
    pub fn value_count(&self) -> usize {
        self.dimensions.iter().map(|d| d.values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.value_count() == 0
    }
}
