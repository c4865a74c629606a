use crate::application::dto::Actor;
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Resolves an opaque request credential to the acting identity. `Ok(None)`
/// means the operation runs as the system. Real authentication lives behind
/// this seam and is out of scope here.
#[async_trait]
pub trait ActorProvider: Send + Sync {
    async fn resolve(&self, credential: Option<&str>) -> ApplicationResult<Option<Actor>>;
}
