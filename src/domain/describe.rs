use {
    super::action::{ParsedAction, VerbFamily},
    super::audit::AuditRecord,
    super::diff::changed_keys,
    super::humanize::{capitalize_first, humanize},
    super::snapshot::Snapshot,
    crate::config::EnrichConfig,
};

/// Checked in this order; the first non-empty string value names the record.
pub const IDENTIFIER_FIELDS: [&str; 6] = ["name", "title", "username", "email", "code", "id"];

const CLIENT_ENTITIES: [&str; 2] = ["client", "clients"];

/// `PRODUCT` → `Product`. Capitalises the first letter only.
pub fn entity_display(entity: Option<&str>) -> String {
    match entity.map(str::trim).filter(|e| !e.is_empty()) {
        Some(entity) => capitalize_first(&entity.to_lowercase()),
        None => "Record".to_string(),
    }
}

/// `SOFT_DELETE` → `Soft delete`.
pub fn verb_display(verb: &str) -> String {
    capitalize_first(&verb.to_lowercase().replace('_', " "))
}

pub fn record_identifier(snapshot: Option<&Snapshot>, max_chars: usize) -> Option<String> {
    let snapshot = snapshot?;
    let found = IDENTIFIER_FIELDS
        .iter()
        .find_map(|field| {
            snapshot
                .get(*field)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
        })?;

    if found.chars().count() > max_chars {
        Some(format!("{}...", found.chars().take(max_chars).collect::<String>()))
    } else {
        Some(found.to_string())
    }
}

/// One-sentence summary of what an audit record did.
pub fn describe(
    action: Option<&str>,
    table_name: Option<&str>,
    old: Option<&Snapshot>,
    new: Option<&Snapshot>,
    config: &EnrichConfig,
) -> String {
    if action.is_none_or(|a| a.trim().is_empty()) {
        return "Unknown action".to_string();
    }

    let parsed = ParsedAction::parse(action, table_name);
    let family = parsed.family();
    let entity = entity_display(parsed.entity.as_deref());

    let source = if family.reads_old_values() { old } else { new };
    let identifier = record_identifier(source, config.identifier_max_chars);
    let quoted = identifier
        .as_deref()
        .map(|id| format!(" \"{id}\""))
        .unwrap_or_default();

    match family {
        VerbFamily::Create => format!("Created new {entity}{quoted}"),
        VerbFamily::Update => {
            let changed = changed_keys(old, new);
            match changed.as_slice() {
                [] => format!("Updated {entity} record"),
                [field] => format!("Changed {} in {entity}", humanize(field)),
                fields => format!("Updated {} fields in {entity}", fields.len()),
            }
        }
        VerbFamily::Delete => match identifier {
            Some(_) => format!("Deleted {entity}{quoted}"),
            None => format!("Deleted {entity} record"),
        },
        VerbFamily::Login => "User logged in to the system".to_string(),
        VerbFamily::Logout => "User logged out of the system".to_string(),
        VerbFamily::Restore => format!("Restored {entity}{quoted}"),
        VerbFamily::Archive => format!("Archived {entity}{quoted}"),
        VerbFamily::Approve => format!("Approved {entity}{quoted}"),
        VerbFamily::Reject => format!("Rejected {entity}{quoted}"),
        VerbFamily::Activate => format!("Activated {entity}{quoted}"),
        VerbFamily::Deactivate => format!("Deactivated {entity}{quoted}"),
        VerbFamily::Export => format!("Exported {entity} data"),
        VerbFamily::Import => format!("Imported {entity} data"),
        VerbFamily::Download => format!("Downloaded {entity}{quoted}"),
        VerbFamily::Upload => format!("Uploaded {entity}{quoted}"),
        VerbFamily::Send => format!("Sent {entity}{quoted}"),
        VerbFamily::Receive => format!("Received {entity}{quoted}"),
        VerbFamily::Other => format!("{} {entity}{quoted}", verb_display(&parsed.verb)),
    }
}

/// Who to show as the actor of a record.
///
/// Records without an actor are attributed to the system, except client
/// creations, which arrive through the public intake form without a session.
pub fn actor_label(record: &AuditRecord, config: &EnrichConfig) -> String {
    if let Some(actor) = record
        .actor_name
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
    {
        return actor.to_string();
    }

    if is_public_client_submission(record) {
        config.public_submission_label.clone()
    } else {
        config.system_actor_label.clone()
    }
}

fn is_public_client_submission(record: &AuditRecord) -> bool {
    let is_client = |name: &str| {
        CLIENT_ENTITIES
            .iter()
            .any(|client| client.eq_ignore_ascii_case(name.trim()))
    };

    let Some(table) = record.table_name.as_deref() else {
        return false;
    };
    if !is_client(table) {
        return false;
    }

    let parsed = ParsedAction::parse(record.action.as_deref(), Some(table));
    parsed.family() == VerbFamily::Create && parsed.entity.as_deref().is_some_and(is_client)
}
