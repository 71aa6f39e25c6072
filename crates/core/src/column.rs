//! Column specifications: ordered field-path → display-label mappings.
//!
//! Insertion order is the contract here. It fixes both the left-to-right
//! column order of the rendered table and the default sort key (the first
//! column), so a `ColumnSpec` is immutable once built.

use crate::path::FieldPath;
use crate::{WardRoundError, WardRoundResult};

/// A single table column: where its value comes from and what to call it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    path: FieldPath,
    label: String,
}

impl Column {
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An ordered, immutable set of table columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    columns: Vec<Column>,
}

impl ColumnSpec {
    /// Build a column spec from `(dotted path, display label)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`WardRoundError`] if the pairs are empty, a path fails to
    /// parse, or two columns share a label (labels key the projected row
    /// map, so they must be unique).
    pub fn new<P, L>(pairs: impl IntoIterator<Item = (P, L)>) -> WardRoundResult<Self>
    where
        P: AsRef<str>,
        L: Into<String>,
    {
        let mut columns = Vec::new();
        for (path, label) in pairs {
            let path = FieldPath::parse(path.as_ref())?;
            let label = label.into();
            if columns.iter().any(|c: &Column| c.label == label) {
                return Err(WardRoundError::DuplicateColumnLabel(label));
            }
            columns.push(Column { path, label });
        }

        if columns.is_empty() {
            return Err(WardRoundError::EmptyColumnSpec);
        }

        Ok(Self { columns })
    }

    /// A copy of this spec with one column appended. Used to derive the
    /// find-patient variant from a round's list columns.
    ///
    /// # Errors
    ///
    /// Returns a [`WardRoundError`] if the path is malformed or the label
    /// already exists.
    pub fn with_column(&self, path: &str, label: &str) -> WardRoundResult<Self> {
        let path = FieldPath::parse(path)?;
        if self.columns.iter().any(|c| c.label == label) {
            return Err(WardRoundError::DuplicateColumnLabel(label.to_owned()));
        }

        let mut columns = self.columns.clone();
        columns.push(Column {
            path,
            label: label.to_owned(),
        });
        Ok(Self { columns })
    }

    /// The first column, which supplies the default sort key.
    pub fn first(&self) -> &Column {
        // Invariant: construction rejects empty specs.
        &self.columns[0]
    }

    /// Display labels in column order.
    pub fn labels(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The stock ward-round column set.
///
/// Hospital number leads so that unordered rounds default-sort by it.
pub fn default_list_columns() -> ColumnSpec {
    ColumnSpec::new([
        ("patient.demographics.hospital_number", "Hospital #"),
        ("patient.demographics.first_name", "First Name"),
        ("patient.demographics.surname", "Surname"),
        ("patient.demographics.date_of_birth", "DOB"),
        ("date_of_admission", "Admitted"),
        ("discharge_date", "Discharged"),
    ])
    .expect("stock column set is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let spec = ColumnSpec::new([
            ("patient.demographics.hospital_number", "Hospital #"),
            ("patient.demographics.surname", "Surname"),
        ])
        .expect("valid spec");

        assert_eq!(spec.labels(), ["Hospital #", "Surname"]);
        assert_eq!(
            spec.first().path().to_string(),
            "patient.demographics.hospital_number"
        );
    }

    #[test]
    fn rejects_empty_spec() {
        let pairs: [(&str, &str); 0] = [];
        let err = ColumnSpec::new(pairs).expect_err("should reject empty spec");
        assert!(matches!(err, WardRoundError::EmptyColumnSpec));
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = ColumnSpec::new([
            ("patient.demographics.first_name", "Name"),
            ("patient.demographics.surname", "Name"),
        ])
        .expect_err("should reject duplicate label");
        match err {
            WardRoundError::DuplicateColumnLabel(label) => assert_eq!(label, "Name"),
            other => panic!("expected DuplicateColumnLabel, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_path() {
        let err = ColumnSpec::new([("patient..surname", "Surname")])
            .expect_err("should reject malformed path");
        assert!(matches!(err, WardRoundError::InvalidFieldPath { .. }));
    }

    #[test]
    fn with_column_extends_without_mutating() {
        let base = default_list_columns();
        let extended = base
            .with_column("patient.demographics.sex", "Sex")
            .expect("valid extension");

        assert_eq!(base.len(), 6);
        assert_eq!(extended.len(), 7);
        assert_eq!(extended.labels().last().map(String::as_str), Some("Sex"));
    }

    #[test]
    fn with_column_rejects_existing_label() {
        let err = default_list_columns()
            .with_column("patient.demographics.surname", "Surname")
            .expect_err("should reject duplicate label");
        assert!(matches!(err, WardRoundError::DuplicateColumnLabel(_)));
    }

    #[test]
    fn stock_columns_match_expected_labels() {
        assert_eq!(
            default_list_columns().labels(),
            ["Hospital #", "First Name", "Surname", "DOB", "Admitted", "Discharged"]
        );
    }
}
