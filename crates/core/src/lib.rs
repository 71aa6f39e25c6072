//! # Wardround Core
//!
//! Ward-round table views for a clinical records application.
//!
//! A ward round is a named, configurable table of patient episodes: a fixed
//! set of columns (each a dotted field path into the episode and its related
//! patient demographics) rendered for every episode the round covers. This
//! crate contains the pure presentation/query logic:
//! - Field paths and their resolution against episode-like records
//! - Column specifications (ordered path → display-label mappings)
//! - The row projector that turns an episode set into a flat, serialisable table
//! - The [`WardRound`] trait that individual rounds implement
//!
//! **No web concerns**: routing, authentication, HTML templates and the data
//! store all belong to the host application. Episodes arrive here as an
//! already-fetched, optionally pre-ordered collection.

pub mod column;
pub mod episode;
pub mod path;
pub mod projector;
pub mod record;
pub mod wardround;

pub use column::{default_list_columns, ColumnSpec};
pub use episode::{Demographics, Episode, Patient};
pub use path::FieldPath;
pub use projector::{project, ProjectedRow, TableInfo, TableResult};
pub use record::{resolve, EpisodeSet, Field, Fields, Record};
pub use wardround::WardRound;

pub use wardround_types::CellValue;

/// Errors returned by the wardround core crate.
///
/// All of these are configuration errors raised while constructing field
/// paths or column specifications. Projection itself never fails: a value
/// that cannot be resolved becomes an empty cell.
#[derive(Debug, thiserror::Error)]
pub enum WardRoundError {
    #[error("invalid field path '{path}': {reason}")]
    InvalidFieldPath { path: String, reason: String },

    #[error("column specification cannot be empty")]
    EmptyColumnSpec,

    #[error("duplicate column label '{0}'")]
    DuplicateColumnLabel(String),
}

/// Type alias for Results that can fail with a [`WardRoundError`].
pub type WardRoundResult<T> = Result<T, WardRoundError>;
