use {
    crate::domain::{
        error::{EnrichError, LookupError},
        id::ReferenceId,
        lookup::{LookupResponse, LookupTarget, ReferenceLookup},
    },
    std::{
        collections::{HashMap, HashSet},
        future::{Future, ready},
        pin::Pin,
    },
};

type Collections = HashMap<String, HashMap<String, LookupTarget>>;

/// In-memory [`ReferenceLookup`] for embedders without a backend and for
/// tests.
///
/// Unknown ids answer "not found". Ids can be scripted to report failure or
/// to error outright.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    collections: Collections,
    failing: HashSet<(String, String)>,
    erroring: HashSet<(String, String)>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from `{"roles": {"r1": {"name": "Admin"}}, ...}`.
    pub fn from_json(json: &str) -> Result<Self, EnrichError> {
        let collections: Collections = serde_json::from_str(json)?;
        Ok(Self {
            collections,
            ..Self::default()
        })
    }

    pub fn with_record(
        mut self,
        collection: impl Into<String>,
        id: impl Into<String>,
        target: LookupTarget,
    ) -> Self {
        self.insert(collection, id, target);
        self
    }

    pub fn with_name(
        self,
        collection: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.with_record(
            collection,
            id,
            LookupTarget {
                name: Some(name.into()),
                title: None,
            },
        )
    }

    /// Answer `{success: false}` for this id.
    pub fn with_failure(mut self, collection: impl Into<String>, id: impl Into<String>) -> Self {
        self.failing.insert((collection.into(), id.into()));
        self
    }

    /// Return an error for this id.
    pub fn with_error(mut self, collection: impl Into<String>, id: impl Into<String>) -> Self {
        self.erroring.insert((collection.into(), id.into()));
        self
    }

    pub fn insert(
        &mut self,
        collection: impl Into<String>,
        id: impl Into<String>,
        target: LookupTarget,
    ) {
        self.collections
            .entry(collection.into())
            .or_default()
            .insert(id.into(), target);
    }

    fn answer(&self, collection: &str, id: &str) -> Result<LookupResponse, LookupError> {
        let key = (collection.to_string(), id.to_string());
        if self.erroring.contains(&key) {
            return Err(LookupError::Unavailable(format!("{collection}/{id}")));
        }
        if self.failing.contains(&key) {
            return Ok(LookupResponse::failed());
        }
        Ok(self
            .collections
            .get(collection)
            .and_then(|records| records.get(id))
            .cloned()
            .map(LookupResponse::found)
            .unwrap_or_else(LookupResponse::missing))
    }
}

impl ReferenceLookup for StaticLookup {
    fn lookup<'a>(
        &'a self,
        collection: &'a str,
        id: &'a ReferenceId,
    ) -> Pin<Box<dyn Future<Output = Result<LookupResponse, LookupError>> + Send + 'a>> {
        Box::pin(ready(self.answer(collection, id.as_str())))
    }
}
