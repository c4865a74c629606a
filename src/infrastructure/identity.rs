use crate::application::dto::Actor;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::identity::ActorProvider;
use async_trait::async_trait;

/// Parses an `<id>:<username>` credential, the shape the reverse proxy or
/// auth gateway in front of this service forwards. No credential means the
/// operation runs as the system.
#[derive(Default, Clone)]
pub struct ForwardedIdentityProvider;

#[async_trait]
impl ActorProvider for ForwardedIdentityProvider {
    async fn resolve(&self, credential: Option<&str>) -> ApplicationResult<Option<Actor>> {
        let Some(raw) = credential else {
            return Ok(None);
        };

        let (id, username) = raw.split_once(':').ok_or_else(|| {
            ApplicationError::validation("actor credential must be '<id>:<username>'")
        })?;

        let id: i64 = id
            .parse()
            .map_err(|_| ApplicationError::validation("actor id must be an integer"))?;
        if id <= 0 || username.trim().is_empty() {
            return Err(ApplicationError::validation(
                "actor credential must carry a positive id and a username",
            ));
        }

        Ok(Some(Actor {
            id,
            username: username.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credential_resolves_to_system() {
        let provider = ForwardedIdentityProvider;
        assert_eq!(provider.resolve(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn well_formed_credential_resolves_to_actor() {
        let provider = ForwardedIdentityProvider;
        let actor = provider.resolve(Some("42:alice")).await.unwrap().unwrap();
        assert_eq!(actor.id, 42);
        assert_eq!(actor.username, "alice");
    }

    #[tokio::test]
    async fn malformed_credentials_are_rejected() {
        let provider = ForwardedIdentityProvider;
        for raw in ["alice", "x:alice", "-1:alice", "42:", "42:   "] {
            assert!(provider.resolve(Some(raw)).await.is_err(), "{raw}");
        }
    }
}
