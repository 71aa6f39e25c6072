//! Leaf value types shared across the wardround workspace.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// A scalar value carried in a ward-round table cell.
///
/// Cells hold whatever a dotted field path resolved to on an episode record:
/// free text (names, hospital numbers), integers, or calendar dates. Absent
/// values are represented as `Option::None` at the cell level, not as a
/// variant here.
///
/// # Ordering
///
/// `CellValue` carries a total order so that tables can be default-sorted by
/// their first column even when that column's values are of mixed types.
/// Values of the same variant compare naturally (numeric, calendar, or
/// lexicographic); values of different variants compare by a fixed variant
/// rank: `Integer < Date < Text`. Mixed-type columns therefore sort
/// deterministically rather than failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    /// Free text, e.g. a name or a hospital number.
    Text(String),
    /// A whole number.
    Integer(i64),
    /// A calendar date, e.g. a date of birth or admission.
    Date(NaiveDate),
}

impl CellValue {
    fn variant_rank(&self) -> u8 {
        match self {
            CellValue::Integer(_) => 0,
            CellValue::Date(_) => 1,
            CellValue::Text(_) => 2,
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (a, b) => a.variant_rank().cmp(&b.variant_rank()),
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(n) => write!(f, "{n}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

// Cells serialise as bare JSON scalars (no enum tagging): consumers of the
// table wire format see `"Jameson"`, `42`, or `"1985-10-01"`.
impl serde::Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Integer(n) => serializer.serialize_i64(*n),
            CellValue::Date(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn text_compares_lexicographically() {
        assert!(CellValue::from("10") < CellValue::from("20"));
        assert!(CellValue::from("Jameson") < CellValue::from("Smithson"));
    }

    #[test]
    fn dates_compare_by_calendar_order() {
        assert!(CellValue::from(date(1980, 10, 1)) < CellValue::from(date(1985, 10, 1)));
    }

    #[test]
    fn mixed_variants_compare_by_rank() {
        let number = CellValue::from(7);
        let day = CellValue::from(date(1990, 1, 1));
        let text = CellValue::from("abc");
        assert!(number < day);
        assert!(day < text);
        assert!(number < text);
    }

    #[test]
    fn serialises_as_bare_scalars() {
        assert_eq!(
            serde_json::to_string(&CellValue::from("Sue")).expect("serialise text"),
            r#""Sue""#
        );
        assert_eq!(
            serde_json::to_string(&CellValue::from(42)).expect("serialise integer"),
            "42"
        );
        assert_eq!(
            serde_json::to_string(&CellValue::from(date(1985, 10, 1))).expect("serialise date"),
            r#""1985-10-01""#
        );
    }

    #[test]
    fn displays_in_wire_form() {
        assert_eq!(CellValue::from(date(1985, 10, 1)).to_string(), "1985-10-01");
        assert_eq!(CellValue::from(3).to_string(), "3");
    }
}
