use serde::Serialize;
use serde::de::DeserializeOwned;

/// A named server-side collection exposed via CRUD endpoints.
///
/// Implemented by the `Out` model of each entity. The associated types tie
/// the collection to its key and payload shapes so the client can only send
/// what the backend route accepts.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Path segment under the API base URL, e.g. `parcelas`.
    const PATH: &'static str;

    /// Whether requests against this collection must carry a bearer token.
    const PROTECTED: bool = false;

    /// Whether the frontend restricts mutations to the ADMIN group.
    /// The server stays authoritative; this only gates the local UI.
    const ADMIN_MANAGED: bool = false;

    /// Shown in place of an empty collection.
    const EMPTY_MESSAGE: &'static str;

    type Key: ResourceKey + Send + Sync;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;
}

/// Renders a record key as URL path segments.
///
/// Simple keys are a single segment. Composite keys expand to one segment
/// per column in the order the backend route declares them.
pub trait ResourceKey {
    fn as_path(&self) -> String;
}

impl ResourceKey for i64 {
    fn as_path(&self) -> String {
        self.to_string()
    }
}

impl ResourceKey for String {
    fn as_path(&self) -> String {
        self.clone()
    }
}

/// Update payload for collections whose routes expose no PUT.
///
/// Uninhabited, so an update call cannot even be written for them.
#[derive(Debug, Serialize)]
pub enum NoUpdate {}
