pub const UNKNOWN_VERB: &str = "UNKNOWN";

/// An action tag split into its verb and target entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAction {
    pub verb: String,
    pub entity: Option<String>,
}

impl ParsedAction {
    /// `CREATE_PRODUCT` → (`CREATE`, `PRODUCT`); `SOFT_DELETE_PRODUCT` →
    /// (`SOFT_DELETE`, `PRODUCT`); `LOGIN` → (`LOGIN`, `fallback_table`).
    pub fn parse(action: Option<&str>, fallback_table: Option<&str>) -> Self {
        let Some(action) = action.map(str::trim).filter(|a| !a.is_empty()) else {
            return Self {
                verb: UNKNOWN_VERB.to_string(),
                entity: None,
            };
        };

        let action = action.to_uppercase();
        let fallback = || fallback_table.map(str::to_string);

        match action.rsplit_once('_') {
            None => Self {
                verb: action,
                entity: fallback(),
            },
            Some((verb, entity)) if entity.is_empty() => Self {
                verb: verb.to_string(),
                entity: fallback(),
            },
            Some((verb, entity)) => Self {
                verb: verb.to_string(),
                entity: Some(entity.to_string()),
            },
        }
    }

    pub fn family(&self) -> VerbFamily {
        VerbFamily::from_verb(&self.verb)
    }
}

/// Verbs grouped by the sentence template that describes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbFamily {
    Create,
    Update,
    Delete,
    Login,
    Logout,
    Restore,
    Archive,
    Approve,
    Reject,
    Activate,
    Deactivate,
    Export,
    Import,
    Download,
    Upload,
    Send,
    Receive,
    Other,
}

impl VerbFamily {
    pub fn from_verb(verb: &str) -> Self {
        match verb.to_uppercase().as_str() {
            "CREATE" | "INSERT" | "ADD" => Self::Create,
            "UPDATE" | "EDIT" | "MODIFY" | "CHANGE" => Self::Update,
            "DELETE" | "REMOVE" | "DESTROY" => Self::Delete,
            "LOGIN" | "SIGNIN" => Self::Login,
            "LOGOUT" | "SIGNOUT" => Self::Logout,
            "RESTORE" => Self::Restore,
            "ARCHIVE" => Self::Archive,
            "APPROVE" => Self::Approve,
            "REJECT" => Self::Reject,
            "ACTIVATE" | "ENABLE" => Self::Activate,
            "DEACTIVATE" | "DISABLE" => Self::Deactivate,
            "EXPORT" => Self::Export,
            "IMPORT" => Self::Import,
            "DOWNLOAD" => Self::Download,
            "UPLOAD" => Self::Upload,
            "SEND" => Self::Send,
            "RECEIVE" => Self::Receive,
            _ => Self::Other,
        }
    }

    /// The "before" snapshot identifies the record for deletions; everything
    /// else reads the "after" snapshot.
    pub fn reads_old_values(&self) -> bool {
        matches!(self, Self::Delete)
    }
}
