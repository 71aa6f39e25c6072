//! In-memory episode and demographics models.
//!
//! Flat carriers mirroring the host application's patient/episode shapes,
//! wired up as [`Fields`] sources so ward rounds and tests can project them
//! without a database. A deployment backed by the real ORM implements
//! [`Fields`]/[`Record`] for its own entities instead.

use crate::record::{Field, Fields, Record};
use chrono::NaiveDate;
use wardround_types::CellValue;

/// Patient demographics as captured at registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demographics {
    /// Hospital-assigned patient number. Textual: leading zeros and
    /// site prefixes are significant.
    pub hospital_number: Option<String>,

    /// Given name.
    pub first_name: Option<String>,

    /// Family name.
    pub surname: Option<String>,

    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,

    /// Recorded sex.
    pub sex: Option<String>,
}

impl Fields for Demographics {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        let value = match name {
            "hospital_number" => self.hospital_number.clone().map(CellValue::Text),
            "first_name" => self.first_name.clone().map(CellValue::Text),
            "surname" => self.surname.clone().map(CellValue::Text),
            "date_of_birth" => self.date_of_birth.map(CellValue::Date),
            "sex" => self.sex.clone().map(CellValue::Text),
            _ => return None,
        };
        Some(Field::Scalar(value))
    }
}

/// A patient, reachable from an episode as `patient.<...>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Patient {
    pub demographics: Demographics,
}

impl Fields for Patient {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "demographics" => Some(Field::Nested(&self.demographics)),
            _ => None,
        }
    }
}

/// A clinical encounter for a patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Episode {
    pub id: i64,
    pub patient: Patient,
    pub date_of_admission: Option<NaiveDate>,
    pub discharge_date: Option<NaiveDate>,
}

impl Episode {
    pub fn new(id: i64, patient: Patient) -> Self {
        Self {
            id,
            patient,
            date_of_admission: None,
            discharge_date: None,
        }
    }
}

impl Fields for Episode {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "patient" => Some(Field::Nested(&self.patient)),
            "date_of_admission" => {
                Some(Field::Scalar(self.date_of_admission.map(CellValue::Date)))
            }
            "discharge_date" => Some(Field::Scalar(self.discharge_date.map(CellValue::Date))),
            _ => None,
        }
    }
}

impl Record for Episode {
    fn id(&self) -> i64 {
        self.id
    }
}
