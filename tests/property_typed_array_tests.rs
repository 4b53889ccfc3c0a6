use chrono::{TimeZone, Utc};
use plotly_client::PlotlyError;
use plotly_client::core::{ArrayKind, ArrayValue, TypedArray};
use proptest::prelude::*;

fn any_element() -> impl Strategy<Value = ArrayValue> {
    prop_oneof![
        any::<i64>().prop_map(ArrayValue::Integer),
        (-1.0e9f64..1.0e9).prop_map(ArrayValue::Float),
        "[a-z]{0,8}".prop_map(ArrayValue::String),
        (0i64..4_000_000_000).prop_map(|secs| {
            ArrayValue::Time(Utc.timestamp_opt(secs, 0).single().expect("in range"))
        }),
    ]
}

proptest! {
    #[test]
    fn kind_of_reports_the_first_element_only(
        first in any_element(),
        rest in prop::collection::vec(any_element(), 0..16)
    ) {
        let expected = first.kind();
        let values: TypedArray = std::iter::once(first).chain(rest).collect();

        prop_assert_eq!(values.kind_of(), expected);
    }

    #[test]
    fn integers_convert_back_unchanged(ints in prop::collection::vec(any::<i64>(), 0..64)) {
        let values = TypedArray::integers(ints.clone());

        prop_assert_eq!(values.as_integers().expect("integers"), ints);
    }

    #[test]
    fn integer_channel_widens_to_floats(
        ints in prop::collection::vec(-1_000_000i64..1_000_000, 1..64)
    ) {
        let values = TypedArray::integers(ints.clone());
        let widened: Vec<f64> = ints.iter().map(|&int| int as f64).collect();

        prop_assert_eq!(values.as_floats().expect("floats"), widened);
    }

    #[test]
    fn mismatch_reports_first_offending_index(
        prefix in prop::collection::vec(any::<i64>(), 0..16),
        intruder in "[a-z]{1,8}"
    ) {
        let index = prefix.len();
        let values: TypedArray = prefix
            .into_iter()
            .map(ArrayValue::Integer)
            .chain(std::iter::once(ArrayValue::String(intruder)))
            .collect();

        match values.as_integers().expect_err("mismatch") {
            PlotlyError::KindMismatch { index: reported, expected, found } => {
                prop_assert_eq!(reported, index);
                prop_assert_eq!(expected, ArrayKind::Integer);
                prop_assert_eq!(found, ArrayKind::String);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn empty_array_has_empty_kind_and_converts_to_nothing() {
    let values = TypedArray::default();

    assert_eq!(values.kind_of(), ArrayKind::Empty);
    assert!(values.as_integers().expect("integers").is_empty());
    assert!(values.as_strings().expect("strings").is_empty());
}

#[test]
fn setters_replace_previous_contents() {
    let mut values = TypedArray::strings(["a", "b", "c"]);
    values.set_floats([1.5]);

    assert_eq!(values.kind_of(), ArrayKind::Float);
    assert_eq!(values.len(), 1);
    assert!(values.as_strings().is_err());
}

#[test]
fn times_encode_in_service_date_format() {
    let at = Utc.with_ymd_and_hms(2014, 3, 9, 17, 5, 0).single().expect("valid");
    let encoded = serde_json::to_value(TypedArray::times([at])).expect("encode");

    assert_eq!(encoded, serde_json::json!(["2014-03-09 17:05:00"]));
}
