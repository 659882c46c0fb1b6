use {
    super::error::LookupError,
    super::id::ReferenceId,
    serde::{Deserialize, Serialize},
    std::{future::Future, pin::Pin},
};

/// The display-relevant part of a referenced record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTarget {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// What a lookup collaborator answers for `collection/id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<LookupTarget>,
}

impl LookupResponse {
    pub fn found(target: LookupTarget) -> Self {
        Self {
            success: true,
            data: Some(target),
        }
    }

    pub fn missing() -> Self {
        Self {
            success: true,
            data: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
        }
    }
}

/// Fetches referenced records by id. Timeouts and retries are the
/// implementor's business; the resolver treats any `Err` as a broken link.
pub trait ReferenceLookup: Send + Sync {
    fn lookup<'a>(
        &'a self,
        collection: &'a str,
        id: &'a ReferenceId,
    ) -> Pin<Box<dyn Future<Output = Result<LookupResponse, LookupError>> + Send + 'a>>;
}
