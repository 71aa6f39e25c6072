//! The `WardRound` plugin surface.
//!
//! Individual rounds implement this trait: identify themselves, supply their
//! episodes, and optionally override the column sets. The two table
//! operations are provided and delegate to the projector.

use crate::column::{default_list_columns, ColumnSpec};
use crate::projector::{project, TableInfo, TableResult};
use crate::record::{EpisodeSet, Record};

/// A named ward round over a supply of patient episodes.
///
/// A minimal round only supplies `name`, `description` and `episodes`; the
/// stock column set and behaviour defaults cover the rest. Rounds that need
/// extra context override `list_columns`, and the find-patient search view
/// typically appends an identifying column via `find_patient_columns`.
pub trait WardRound {
    /// The episode record type this round projects.
    type Record: Record;

    /// Short identifier, used as the table name.
    fn name(&self) -> &str;

    /// Human-readable description shown alongside the table.
    fn description(&self) -> &str;

    /// Whether the client should start stepping through episodes as soon as
    /// the table loads.
    fn auto_start(&self) -> bool {
        true
    }

    /// Columns for the default list view.
    fn list_columns(&self) -> ColumnSpec {
        default_list_columns()
    }

    /// Columns for the find-patient search view. Defaults to the list
    /// columns; override to append identifying columns such as sex.
    fn find_patient_columns(&self) -> ColumnSpec {
        self.list_columns()
    }

    /// The episodes this round covers, with the supplier's ordering promise.
    fn episodes(&self) -> EpisodeSet<Self::Record>;

    /// Render the default list view.
    fn list_view_table(&self) -> TableResult {
        project(&self.table_info(), &self.episodes(), &self.list_columns())
    }

    /// Render the find-patient view, restricted to the given episode ids.
    /// Episode order and the supplier's ordering promise are preserved
    /// through the filter.
    fn find_patient_table(&self, episode_ids: &[i64]) -> TableResult {
        project(
            &self.table_info(),
            &self.episodes().retain_ids(episode_ids),
            &self.find_patient_columns(),
        )
    }

    fn table_info(&self) -> TableInfo {
        TableInfo {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            auto_start: self.auto_start(),
        }
    }
}
