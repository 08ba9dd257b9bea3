use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A flat catalog record as handed over by a [`crate::store::CatalogStore`].
pub type Record = serde_json::Map<String, Value>;

/// Anything usable as a value within a dimension.
pub trait Token: Clone + Eq + Hash + Display + Debug {}

impl<T: Clone + Eq + Hash + Display + Debug> Token for T {}

/// A closed, ordered set of attribute axes.
///
/// `ALL` lists the dimensions in declared order and `ordinal()` must return a
/// dimension's position in `ALL`. Per-dimension data throughout the crate is
/// stored in vectors indexed by that ordinal.
pub trait Dimension: Copy + Eq + Hash + Debug + 'static {
    const ALL: &'static [Self];

    fn ordinal(self) -> usize;

    /// Display name, e.g. "colors".
    fn name(self) -> &'static str;

    /// Record field the value is read from, e.g. "color".
    fn field(self) -> &'static str {
        self.name()
    }

    /// Look a dimension up by its name or its record field.
    fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s || d.field() == s)
    }
}

/// The shoe catalog axes: colors, sizes and widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShoeDimension {
    Colors,
    Sizes,
    Widths,
}

impl Dimension for ShoeDimension {
    const ALL: &'static [Self] = &[
        ShoeDimension::Colors,
        ShoeDimension::Sizes,
        ShoeDimension::Widths,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            ShoeDimension::Colors => "colors",
            ShoeDimension::Sizes => "sizes",
            ShoeDimension::Widths => "widths",
        }
    }

    fn field(self) -> &'static str {
        match self {
            ShoeDimension::Colors => "color",
            ShoeDimension::Sizes => "size",
            ShoeDimension::Widths => "width",
        }
    }
}

/// One catalog entry: a value per dimension.
///
/// Items built from records may lack a dimension; [`crate::index::ValueIndex::build`]
/// rejects those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<D: Dimension, V> {
    values: HashMap<D, V>,
}

impl<D: Dimension, V: Token> Item<D, V> {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (D, V)>,
    {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, dimension: D) -> Option<&V> {
        self.values.get(&dimension)
    }

    /// Values in declared dimension order, skipping missing ones.
    pub fn pairs(&self) -> impl Iterator<Item = (D, &V)> + '_ {
        D::ALL
            .iter()
            .filter_map(move |&d| self.values.get(&d).map(|v| (d, v)))
    }
}

impl<D: Dimension> Item<D, String> {
    /// Build an item from a raw record, reading each dimension from the field
    /// `field_for` names. Nulls, arrays and objects count as missing.
    pub fn from_record<F>(record: &Record, field_for: F) -> Self
    where
        F: Fn(D) -> String,
    {
        let values = D::ALL
            .iter()
            .filter_map(|&d| {
                let field = field_for(d);
                record.get(&field).and_then(scalar_token).map(|v| (d, v))
            })
            .collect();
        Self { values }
    }
}

fn scalar_token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_token(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// Integral floats collapse onto their integer form so `10` and `10.0` are one value.
fn number_token(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

/// An item as reported to clients: its catalog position and its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub position: usize,
    pub values: Vec<(String, String)>,
}

impl ItemView {
    pub fn new<D: Dimension, V: Token>(position: usize, item: &Item<D, V>) -> Self {
        Self {
            position,
            values: item
                .pairs()
                .map(|(d, v)| (d.name().to_string(), v.to_string()))
                .collect(),
        }
    }
}
