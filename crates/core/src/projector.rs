//! The row projector: episode sets in, flat serialisable tables out.
//!
//! Projection resolves every configured column path on every record, then
//! settles row order. Suppliers that ordered their episodes keep that order
//! verbatim; otherwise rows are sorted ascending by the first column, with
//! empty cells first and ties left in input order.

use crate::column::ColumnSpec;
use crate::record::{resolve, EpisodeSet, Record};
use serde::ser::SerializeMap;
use serde::Serialize;
use wardround_types::CellValue;

/// Identity of the table being rendered: which round it is and whether the
/// client should start stepping through it immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableInfo {
    pub name: String,
    pub description: String,
    pub auto_start: bool,
}

/// One projected table row: the source record's id plus one resolved cell
/// per configured column, in column order.
///
/// Serialises as a flat map — `id` plus one key per display label — which is
/// the shape the table templates and API clients consume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectedRow {
    id: i64,
    cells: Vec<(String, Option<CellValue>)>,
}

impl ProjectedRow {
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The cell for a display label, if that label is configured.
    /// The outer `Option` is presence of the column; the inner is the value.
    pub fn cell(&self, label: &str) -> Option<&Option<CellValue>> {
        self.cells
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, value)| value)
    }

    fn sort_key(&self) -> &Option<CellValue> {
        // Invariant: projection writes one cell per column and column specs
        // are non-empty.
        &self.cells[0].1
    }
}

impl Serialize for ProjectedRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.cells.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (label, value) in &self.cells {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// A fully rendered ward-round table. Owned data throughout: later changes
/// to the record source never show through a result already produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableResult {
    pub name: String,
    pub description: String,
    pub auto_start: bool,
    pub columns: Vec<String>,
    pub fields: Vec<String>,
    pub episodes: Vec<ProjectedRow>,
}

/// Project an episode set through a column spec into a [`TableResult`].
///
/// Every record becomes exactly one row; a path that cannot be resolved on a
/// record yields an empty cell for that row, never an error. `columns` and
/// `fields` are the spec's labels in insertion order even when the episode
/// set is empty.
pub fn project<R: Record>(
    info: &TableInfo,
    episodes: &EpisodeSet<R>,
    columns: &ColumnSpec,
) -> TableResult {
    let mut rows: Vec<ProjectedRow> = episodes
        .records()
        .iter()
        .map(|record| ProjectedRow {
            id: record.id(),
            cells: columns
                .iter()
                .map(|column| (column.label().to_owned(), resolve(record, column.path())))
                .collect(),
        })
        .collect();

    if !episodes.explicit_order() {
        // Stable sort: equal first-column values keep their input order.
        rows.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    }

    tracing::debug!(
        round = %info.name,
        rows = rows.len(),
        explicit_order = episodes.explicit_order(),
        "projected ward-round table"
    );

    let labels = columns.labels();
    TableResult {
        name: info.name.clone(),
        description: info.description.clone(),
        auto_start: info.auto_start,
        columns: labels.clone(),
        fields: labels,
        episodes: rows,
    }
}
