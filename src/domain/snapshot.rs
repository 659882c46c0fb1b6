use {
    super::audit::RawSnapshot,
    super::error::EnrichError,
    serde_json::Value,
};

/// Field name → raw value, in the order the fields were recorded.
pub type Snapshot = serde_json::Map<String, Value>;

/// Fields never shown in the audit trail. Matched case-insensitively.
pub const DENYLIST: [&str; 8] = [
    "slug",
    "sku",
    "password",
    "token",
    "secret",
    "translations",
    "permissions",
    "id",
];

pub fn is_denylisted(key: &str) -> bool {
    DENYLIST.iter().any(|denied| denied.eq_ignore_ascii_case(key))
}

/// `isActive` → `active`. Returns `None` for keys that are not boolean-prefixed.
pub fn strip_boolean_prefix(key: &str) -> Option<String> {
    let rest = key.strip_prefix("is")?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    let mut renamed = String::with_capacity(rest.len());
    renamed.push(first.to_ascii_lowercase());
    renamed.push_str(chars.as_str());
    Some(renamed)
}

/// Decode a raw snapshot into a field map.
///
/// Blank text and JSON `null` count as "no snapshot". Text that is not JSON
/// fails with [`EnrichError::MalformedSnapshot`]; JSON that is not an object
/// fails with [`EnrichError::InvalidSnapshot`].
pub fn decode(raw: &RawSnapshot) -> Result<Option<Snapshot>, EnrichError> {
    match raw {
        RawSnapshot::Decoded(map) => Ok(Some(map.clone())),
        RawSnapshot::Encoded(json) if json.trim().is_empty() => Ok(None),
        RawSnapshot::Encoded(json) => match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Some(map)),
            Value::Null => Ok(None),
            other => Err(EnrichError::InvalidSnapshot(format!(
                "expected a JSON object, got: {other}"
            ))),
        },
    }
}

/// Drop denylisted fields and normalise `isX` names to `x`.
///
/// The denylist is checked both before and after the rename.
///
/// If both `isActive` and `active` are present, whichever comes later in the
/// input wins.
pub fn sanitize_map(snapshot: Snapshot) -> Snapshot {
    let mut sanitized = Snapshot::new();
    for (key, value) in snapshot {
        if is_denylisted(&key) {
            continue;
        }
        let key = strip_boolean_prefix(&key).unwrap_or(key);
        // `isId`, `isToken` and friends must not come back in through the rename.
        if is_denylisted(&key) {
            continue;
        }
        sanitized.insert(key, value);
    }
    sanitized
}

pub fn sanitize(raw: Option<&RawSnapshot>) -> Result<Option<Snapshot>, EnrichError> {
    match raw {
        Some(raw) => Ok(decode(raw)?.map(sanitize_map)),
        None => Ok(None),
    }
}
