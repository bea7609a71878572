use chrono::{DateTime, Utc};
use keyset_cursor::{Cursor, CursorValue, Record};

// Mixed tagged, untagged and unsupported fields
#[derive(Record)]
struct Object {
    #[cursor(rename = "ID")]
    id: String,
    #[cursor(default, desc, rename = "CreatedAt")]
    created_at: DateTime<Utc>,
    #[cursor]
    score: f64,
    kind: i64,
}

fn main() {
    let object = Object {
        id: "a".into(),
        created_at: DateTime::from_timestamp_micros(1).unwrap(),
        score: 0.5,
        kind: 1,
    };
    let _ = (object.score, object.kind);

    assert_eq!(Object::shape().name(), "Object");
    assert_eq!(Object::shape().fields().len(), 4);
    assert_eq!(object.cursor_value("ID"), Some(CursorValue::Text("a".into())));
    assert_eq!(object.cursor_value("score"), None);
    assert_eq!(object.cursor_value("kind"), None);

    let cursor = Cursor::first_page::<Object>().unwrap();
    assert_eq!(cursor.field(), "CreatedAt");
}
