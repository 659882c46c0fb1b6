use {
    crate::domain::format::EMPTY,
    crate::domain::id::ReferenceId,
    crate::domain::lookup::{LookupResponse, ReferenceLookup},
    crate::domain::snapshot::Snapshot,
    futures::future::join_all,
    serde_json::Value,
};

/// A foreign-key field and where its display value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceField {
    pub field: &'static str,
    pub target: &'static str,
    pub collection: &'static str,
}

pub static REFERENCE_FIELDS: [ReferenceField; 8] = [
    ReferenceField {
        field: "roleId",
        target: "role",
        collection: "roles",
    },
    ReferenceField {
        field: "authorId",
        target: "author",
        collection: "users",
    },
    ReferenceField {
        field: "categoryId",
        target: "category",
        collection: "categories",
    },
    ReferenceField {
        field: "brandId",
        target: "brand",
        collection: "brands",
    },
    ReferenceField {
        field: "catalogId",
        target: "catalog",
        collection: "catalogs",
    },
    ReferenceField {
        field: "repliedBy",
        target: "repliedByUser",
        collection: "users",
    },
    ReferenceField {
        field: "createdBy",
        target: "createdByUser",
        collection: "users",
    },
    ReferenceField {
        field: "updatedBy",
        target: "updatedByUser",
        collection: "users",
    },
];

pub fn reference_field(key: &str) -> Option<&'static ReferenceField> {
    REFERENCE_FIELDS.iter().find(|rf| rf.field == key)
}

/// Replace every foreign-key field with its resolved display value.
///
/// Lookups for the different fields run concurrently. The resolved value
/// takes the raw field's position and wins over a pre-existing field of the
/// target name. A failed lookup only affects its own field.
pub async fn resolve_references(lookup: &dyn ReferenceLookup, snapshot: Snapshot) -> Snapshot {
    let pending = snapshot
        .iter()
        .filter_map(|(key, value)| reference_field(key).map(|rf| resolve_field(lookup, rf, value)));
    let mut displays = join_all(pending).await.into_iter();

    let mut resolved = Snapshot::new();
    for (key, value) in snapshot {
        match reference_field(&key) {
            Some(rf) => {
                let display = displays.next().unwrap_or_else(|| EMPTY.to_string());
                resolved.insert(rf.target.to_string(), Value::String(display));
            }
            None => {
                resolved.entry(key).or_insert(value);
            }
        }
    }
    resolved
}

pub async fn resolve_optional(
    lookup: &dyn ReferenceLookup,
    snapshot: Option<Snapshot>,
) -> Option<Snapshot> {
    match snapshot {
        Some(snapshot) => Some(resolve_references(lookup, snapshot).await),
        None => None,
    }
}

async fn resolve_field(lookup: &dyn ReferenceLookup, rf: &ReferenceField, value: &Value) -> String {
    let Some(id) = ReferenceId::from_value(value) else {
        return EMPTY.to_string();
    };

    match lookup.lookup(rf.collection, &id).await {
        Ok(LookupResponse {
            success: true,
            data: Some(target),
        }) => [target.name, target.title]
            .into_iter()
            .flatten()
            .find(|label| !label.is_empty())
            .unwrap_or_else(|| id.into_inner()),
        Ok(response) => {
            tracing::debug!(
                collection = rf.collection,
                id = %id,
                success = response.success,
                "referenced record not found"
            );
            format!("[Deleted] {id}")
        }
        Err(e) => {
            tracing::warn!(
                collection = rf.collection,
                id = %id,
                error = %e,
                "reference lookup failed"
            );
            format!("[Error] {id}")
        }
    }
}
