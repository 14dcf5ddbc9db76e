use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::identity::Authenticator;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAuthenticator {
    tokens: RwLock<HashMap<String, UserId>>,
}

impl InMemoryAuthenticator {
    pub fn with_tokens(tokens: impl IntoIterator<Item = (String, UserId)>) -> Self {
        Self {
            tokens: RwLock::new(tokens.into_iter().collect()),
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for InMemoryAuthenticator {
    async fn resolve(&self, token: &str) -> Option<UserId> {
        self.tokens.read().await.get(token).cloned()
    }
}

#[cfg(test)]
mod in_memory_authenticator_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_resolve_a_seeded_token() {
        let authenticator = InMemoryAuthenticator::with_tokens([(
            "token-0001".to_string(),
            UserId::new("user-0001"),
        )]);
        assert_eq!(
            authenticator.resolve("token-0001").await,
            Some(UserId::new("user-0001"))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_resolve_an_unknown_token() {
        let authenticator = InMemoryAuthenticator::with_tokens([(
            "token-0001".to_string(),
            UserId::new("user-0001"),
        )]);
        assert_eq!(authenticator.resolve("nope").await, None);
        assert_eq!(authenticator.resolve("TOKEN-0001").await, None);
    }
}
