//! Hand-written records shared by the unit tests.

use chrono::{DateTime, Utc};

use crate::shape::{CursorTag, FieldDef, FieldType, Record, Shape};
use crate::value::{CursorValue, IntoCursorValue};

pub(crate) fn micros(us: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(us).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Object {
    pub(crate) id: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) seq: i64,
}

impl Object {
    pub(crate) fn new(id: &str, created_at: DateTime<Utc>, seq: i64) -> Self {
        Self {
            id: id.to_string(),
            created_at,
            seq,
        }
    }
}

impl Record for Object {
    fn shape() -> &'static Shape {
        static SHAPE: Shape = Shape::new(
            "Object",
            &[
                FieldDef::new("ID", FieldType::String, Some(CursorTag::SELECTABLE)),
                FieldDef::new(
                    "CreatedAt",
                    FieldType::Timestamp,
                    Some(CursorTag::DEFAULT.desc()),
                ),
                FieldDef::new("Seq", FieldType::Integer, Some(CursorTag::SELECTABLE)),
                FieldDef::new("Kind", FieldType::Integer, None),
            ],
        );
        &SHAPE
    }

    fn cursor_value(&self, field: &str) -> Option<CursorValue> {
        match field {
            "ID" => Some(self.id.to_cursor_value()),
            "CreatedAt" => Some(self.created_at.to_cursor_value()),
            "Seq" => Some(self.seq.to_cursor_value()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ObjectWithoutDefault {
    pub(crate) id: String,
}

impl Record for ObjectWithoutDefault {
    fn shape() -> &'static Shape {
        static SHAPE: Shape = Shape::new(
            "ObjectWithoutDefault",
            &[FieldDef::new(
                "ID",
                FieldType::String,
                Some(CursorTag::SELECTABLE),
            )],
        );
        &SHAPE
    }

    fn cursor_value(&self, field: &str) -> Option<CursorValue> {
        (field == "ID").then(|| self.id.to_cursor_value())
    }
}
