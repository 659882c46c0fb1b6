use audit_lens::adapters::static_lookup::StaticLookup;
use audit_lens::domain::diff::diff;
use audit_lens::domain::format::{ValueFormatter, format_value};
use audit_lens::domain::humanize::{capitalize_first, humanize};
use audit_lens::domain::snapshot::{DENYLIST, Snapshot, is_denylisted, sanitize_map};
use audit_lens::services::reference_resolver::{REFERENCE_FIELDS, resolve_references};
use proptest::prelude::*;
use serde_json::Value;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        "[a-zA-Z0-9 :-]{0,24}".prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

/// Keys drawn from plain names, denylisted names in random case, and
/// `isX` booleans.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-zA-Z]{0,8}",
        (prop::sample::select(DENYLIST.to_vec()), any::<bool>()).prop_map(|(key, upper)| {
            if upper { key.to_uppercase() } else { key.to_string() }
        }),
        "[a-z]{1,8}".prop_map(|rest| format!("is{}", capitalize_first(&rest))),
    ]
}

fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    prop::collection::vec((arb_key(), arb_json()), 0..10)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    /// Sanitized snapshots never contain a denylisted key, whatever the casing.
    #[test]
    fn sanitize_never_returns_denylisted_keys(s in arb_snapshot()) {
        let sanitized = sanitize_map(s);
        for key in sanitized.keys() {
            prop_assert!(!is_denylisted(key), "leaked {key}");
        }
    }

    /// `isFoo` always comes out as `foo` with the value untouched.
    #[test]
    fn sanitize_renames_boolean_prefixes(
        bases in prop::collection::btree_set("[a-z]{2,8}", 1..6),
        value in arb_json(),
    ) {
        let bases: Vec<String> = bases.into_iter().filter(|b| !is_denylisted(b)).collect();
        let input: Snapshot = bases
            .iter()
            .map(|b| (format!("is{}", capitalize_first(b)), value.clone()))
            .collect();

        let sanitized = sanitize_map(input);

        prop_assert_eq!(sanitized.len(), bases.len());
        for base in &bases {
            prop_assert_eq!(sanitized.get(base), Some(&value));
        }
    }

    /// Nothing changed, nothing reported.
    #[test]
    fn diff_of_identical_snapshots_is_empty(s in arb_snapshot()) {
        let s = sanitize_map(s);
        prop_assert!(diff(Some(&s), Some(&s), &ValueFormatter::default()).is_empty());
    }

    /// Resolution removes every raw foreign key and fills its target with text,
    /// whether the lookup succeeds, misses, fails or errors.
    #[test]
    fn resolve_replaces_every_foreign_key(
        picks in prop::collection::vec((0..REFERENCE_FIELDS.len(), 0u8..5), 1..8),
    ) {
        let lookup = StaticLookup::new()
            .with_name("roles", "ok", "Admin")
            .with_name("users", "ok", "Ada")
            .with_failure("brands", "fail")
            .with_error("roles", "boom")
            .with_error("users", "boom");

        let mut input = Snapshot::new();
        input.insert("name".into(), Value::from("Widget"));
        for (idx, kind) in &picks {
            let value = match kind {
                0 => Value::from("ok"),
                1 => Value::from("missing"),
                2 => Value::from("fail"),
                3 => Value::from("boom"),
                _ => Value::from(7),
            };
            input.insert(REFERENCE_FIELDS[*idx].field.into(), value);
        }

        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let resolved = rt.block_on(resolve_references(&lookup, input));

        prop_assert_eq!(resolved.get("name"), Some(&Value::from("Widget")));
        for (idx, _) in &picks {
            let rf = &REFERENCE_FIELDS[*idx];
            prop_assert!(!resolved.contains_key(rf.field));
            prop_assert!(resolved.get(rf.target).is_some_and(Value::is_string));
        }
    }

    /// Any JSON value formats without panicking; outside of arrays (whose
    /// elements are joined as-is) the result is never blank.
    #[test]
    fn formatter_handles_any_value(v in arb_json()) {
        let shown = format_value(Some(&v));
        if !v.is_array() {
            prop_assert!(!shown.is_empty());
        }
    }

    /// Humanized labels are never empty.
    #[test]
    fn humanize_never_returns_empty(key in "[a-zA-Z0-9_ ]{0,16}") {
        prop_assert!(!humanize(&key).is_empty());
    }
}
