//! Property-based tests for cursor ids and query generation using proptest.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use keyset_cursor::{
    Backend, Cursor, CursorValue, Direction, INVALID_ID, MAX_LIMIT, Record, normalize_limit,
};
use proptest::prelude::*;

#[derive(Debug, Clone, Record)]
struct Event {
    #[cursor(rename = "ID")]
    id: String,
    #[cursor(default, desc, rename = "CreatedAt")]
    created_at: DateTime<Utc>,
    #[cursor(rename = "Seq")]
    seq: i64,
}

fn event(id: &str, micros: i64, seq: i64) -> Event {
    Event {
        id: id.to_string(),
        created_at: DateTime::from_timestamp_micros(micros).unwrap(),
        seq,
    }
}

/// A cursor positioned on `field`, seeded from a throwaway record.
fn cursor_on(field: &str) -> Cursor {
    let raw = event("seed", 0, 0).cursor_value(field).unwrap().to_id_string();
    Cursor::first_page::<Event>()
        .unwrap()
        .with_id(&base64_id(field, &raw))
        .unwrap()
}

fn base64_id(field: &str, value: &str) -> String {
    STANDARD.encode(format!("{field}:{value}"))
}

// =============================================================================
// Id Round Trip Property Tests
// =============================================================================

proptest! {
    /// Any integer survives create_id followed by with_id
    #[test]
    fn integer_ids_round_trip(seq in any::<i64>()) {
        let cursor = cursor_on("Seq");
        let id = cursor.create_id(&event("x", 0, seq));
        prop_assert_ne!(id.as_str(), INVALID_ID);

        let decoded = cursor.with_id(&id).unwrap();
        prop_assert_eq!(decoded.value(), Some(&CursorValue::Integer(seq)));
    }

    /// Text without ':' survives the round trip
    #[test]
    fn text_ids_round_trip(text in "[^:]{0,64}") {
        let cursor = cursor_on("ID");
        let id = cursor.create_id(&event(&text, 0, 0));

        let decoded = cursor.with_id(&id).unwrap();
        prop_assert_eq!(decoded.value(), Some(&CursorValue::Text(text)));
    }

    /// Timestamps keep microsecond precision
    #[test]
    fn timestamp_ids_round_trip(micros in -62_135_596_800_000_000i64..253_402_300_799_999_999i64) {
        let cursor = Cursor::first_page::<Event>().unwrap();
        let record = event("x", micros, 0);
        let id = cursor.create_id(&record);

        let decoded = cursor.with_id(&id).unwrap();
        prop_assert_eq!(
            decoded.value(),
            Some(&CursorValue::Timestamp(record.created_at))
        );
    }
}

// =============================================================================
// Robustness Property Tests
// =============================================================================

proptest! {
    /// Arbitrary ids never panic, and failures are always id errors
    #[test]
    fn arbitrary_ids_never_panic(id in ".{1,200}") {
        let cursor = Cursor::first_page::<Event>().unwrap();
        if let Err(err) = cursor.with_id(&id) {
            prop_assert!(err.is_cursor_id_error(), "unexpected error: {err}");
        }
    }

    /// Well-formed base64 of arbitrary text never panics either
    #[test]
    fn arbitrary_decoded_text_never_panics(text in ".{0,100}") {
        let cursor = Cursor::first_page::<Event>().unwrap();
        let id = STANDARD.encode(&text);
        if let Err(err) = cursor.with_id(&id) {
            prop_assert!(err.is_cursor_id_error(), "unexpected error: {err}");
        }
    }

    /// Normalized limits are always within 1..=MAX_LIMIT
    #[test]
    fn limits_are_normalized(limit in any::<u32>()) {
        let normalized = normalize_limit(limit);
        prop_assert!((1..=MAX_LIMIT).contains(&normalized));
        if (1..=MAX_LIMIT).contains(&limit) {
            prop_assert_eq!(normalized, limit);
        }

        let cursor = Cursor::first_page::<Event>().unwrap().with_limit(limit);
        let sql = cursor.builder(Backend::Spanner).to_sql().sql;
        let expected = format!("LIMIT {}", normalized + 1);
        prop_assert!(sql.ends_with(&expected));
    }
}

// =============================================================================
// Sign Logic Property Tests
// =============================================================================

proptest! {
    /// Reversing direction flips both the comparison and the ORDER BY
    #[test]
    fn backward_flips_forward(seq in any::<i64>(), field_idx in 0usize..3) {
        let field = ["ID", "CreatedAt", "Seq"][field_idx];
        let cursor = cursor_on(field);
        let id = cursor.create_id(&event("x", 0, seq));
        let forward = cursor.with_id(&id).unwrap();
        let backward = forward.clone().with_direction(Direction::Backward);

        let f = forward.builder(Backend::Spanner).fragment();
        let b = backward.builder(Backend::Spanner).fragment();

        let f_cond = f.condition.unwrap();
        let b_cond = b.condition.unwrap();
        prop_assert_eq!(f_cond.contains(" > "), b_cond.contains(" < "));
        prop_assert_eq!(f.order.ends_with("ASC"), b.order.ends_with("DESC"));
        prop_assert_eq!(f.params, b.params);
    }
}
