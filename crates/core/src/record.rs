//! Episode-like records and field-path resolution.
//!
//! The projector never touches the data layer. It consumes anything that
//! implements [`Record`]: an identifiable object whose fields can be looked
//! up by name, with related records reachable as nested field sources. The
//! host application's ORM entities are adapted behind this seam; the concrete
//! in-memory models in [`crate::episode`] are one such adapter.

use crate::path::FieldPath;
use wardround_types::CellValue;

/// A single field looked up by name on a [`Fields`] source.
pub enum Field<'a> {
    /// A terminal scalar value. `None` means the field exists but holds no
    /// value (e.g. an episode that has not yet been discharged).
    Scalar(Option<CellValue>),
    /// A related record that further path segments traverse into.
    Nested(&'a dyn Fields),
}

/// Name-addressable field access over an episode-like record.
///
/// Implementations return `None` for field names they do not know about;
/// unknown names are a per-cell concern, never an error.
pub trait Fields {
    fn field(&self, name: &str) -> Option<Field<'_>>;
}

/// A record the projector can turn into a table row: field access plus the
/// record's own identifier, which every projected row carries.
pub trait Record: Fields {
    fn id(&self) -> i64;
}

/// Resolve a dotted field path against a record, hop by hop.
///
/// Returns `None` (an empty cell) whenever the path cannot be followed to a
/// scalar: a missing hop, a scalar met before the final segment, or a nested
/// record at the terminal segment. Resolution never fails.
pub fn resolve(source: &dyn Fields, path: &FieldPath) -> Option<CellValue> {
    let (last, hops) = path.segments().split_last()?;

    let mut current = source;
    for hop in hops {
        match current.field(hop)? {
            Field::Nested(next) => current = next,
            Field::Scalar(_) => return None,
        }
    }

    match current.field(last)? {
        Field::Scalar(value) => value,
        Field::Nested(_) => None,
    }
}

/// An ordered collection of episode records, plus whether the supplier
/// applied an explicit ordering of its own.
///
/// When the supplier ordered the records (`explicit_order == true`) the
/// projector preserves that order verbatim, including descending orders.
/// Otherwise the projector applies the default sort by the table's first
/// column.
#[derive(Clone, Debug)]
pub struct EpisodeSet<R> {
    records: Vec<R>,
    explicit_order: bool,
}

impl<R: Record> EpisodeSet<R> {
    /// An episode set the supplier has already ordered.
    pub fn ordered(records: Vec<R>) -> Self {
        Self {
            records,
            explicit_order: true,
        }
    }

    /// An episode set with no ordering promise; the projector will apply the
    /// default first-column sort.
    pub fn unordered(records: Vec<R>) -> Self {
        Self {
            records,
            explicit_order: false,
        }
    }

    /// Keep only the records whose id appears in `ids`, preserving record
    /// order and the explicit-order flag. Backs the find-patient view.
    pub fn retain_ids(mut self, ids: &[i64]) -> Self {
        self.records.retain(|r| ids.contains(&r.id()));
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn explicit_order(&self) -> bool {
        self.explicit_order
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
