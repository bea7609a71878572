use std::time::SystemTime;

use keyset_cursor::{Cursor, Record};

// Generic and borrowing records
#[derive(Record)]
struct Wrapper<'a, T> {
    #[cursor(default)]
    seq: u32,
    #[cursor]
    name: &'a str,
    #[cursor]
    seen: SystemTime,
    payload: T,
}

#[derive(Record)]
struct Keyword {
    #[cursor(default)]
    r#type: i16,
}

fn main() {
    let w = Wrapper {
        seq: 7,
        name: "n",
        seen: SystemTime::UNIX_EPOCH,
        payload: vec![1u8],
    };
    let _ = &w.payload;

    let cursor = Cursor::first_page::<Wrapper<'_, Vec<u8>>>().unwrap();
    let id = cursor.create_id(&w);
    assert_ne!(id, keyset_cursor::INVALID_ID);

    assert_eq!(Keyword::shape().fields()[0].name, "type");
    assert!(Keyword { r#type: 1 }.cursor_value("type").is_some());
}
