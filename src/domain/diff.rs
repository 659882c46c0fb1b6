use {
    super::audit::FieldChange,
    super::format::ValueFormatter,
    super::humanize::humanize,
    super::snapshot::Snapshot,
    serde_json::Value,
};

/// Never diffed, even if a snapshot slipped past sanitising.
pub const SENSITIVE_FIELDS: [&str; 3] = ["password", "token", "secret"];

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_FIELDS
        .iter()
        .any(|sensitive| sensitive.eq_ignore_ascii_case(key))
}

/// Field-level changes between two snapshots, in the "after" snapshot's
/// field order.
///
/// Driven by the keys of `new` only: a field dropped entirely from the
/// "after" snapshot is not reported.
pub fn diff(
    old: Option<&Snapshot>,
    new: Option<&Snapshot>,
    formatter: &ValueFormatter,
) -> Vec<FieldChange> {
    let (Some(old), Some(new)) = (old, new) else {
        return Vec::new();
    };

    new.iter()
        .filter(|(key, _)| !is_sensitive(key))
        .filter_map(|(key, new_value)| {
            let old_value = old.get(key);
            if old_value.is_some_and(|old_value| same_value(old_value, new_value)) {
                return None;
            }
            Some(FieldChange {
                field: key.clone(),
                label: humanize(key),
                old_display: formatter.format(old_value),
                new_display: formatter.format(Some(new_value)),
            })
        })
        .collect()
}

/// Keys whose values differ between the two snapshots, looking at both key
/// sets. Used to word update descriptions.
pub fn changed_keys(old: Option<&Snapshot>, new: Option<&Snapshot>) -> Vec<String> {
    let empty = Snapshot::new();
    let old = old.unwrap_or(&empty);
    let new = new.unwrap_or(&empty);

    let old_side = old
        .iter()
        .filter(|(key, value)| {
            !new
                .get(key.as_str())
                .is_some_and(|new_value| same_value(value, new_value))
        })
        .map(|(key, _)| key.clone());
    let new_only = new
        .keys()
        .filter(|key| !old.contains_key(key.as_str()))
        .cloned();

    old_side.chain(new_only).collect()
}

/// Structural equality with numbers compared by value, so `100` and `100.0`
/// are the same. Object key order is ignored.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => a == b,
            _ => match (a.as_u64(), b.as_u64()) {
                (Some(a), Some(b)) => a == b,
                _ => a.as_f64() == b.as_f64(),
            },
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same_value(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| same_value(a, b)))
        }
        _ => a == b,
    }
}
