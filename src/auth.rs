use async_trait::async_trait;
use subtle::ConstantTimeEq;

/// Caller credential presented with every service request: a bearer token
/// plus the operator's shared secret key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret_key: secret_key.into(),
        }
    }
}

/// Pluggable credential verification the service gates on before invoking
/// the engine. Implementations may consult remote identity providers, hence
/// async.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credentials: &Credentials) -> bool;
}

/// Verifier holding a static expected token and secret.
///
/// Comparison is constant-time so the check leaks nothing about how much of
/// a guessed credential matched.
pub struct StaticSecretVerifier {
    token: String,
    secret_key: String,
}

impl StaticSecretVerifier {
    pub fn new(token: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret_key: secret_key.into(),
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaticSecretVerifier {
    async fn verify(&self, credentials: &Credentials) -> bool {
        let token_ok = credentials.token.as_bytes().ct_eq(self.token.as_bytes());
        let secret_ok = credentials
            .secret_key
            .as_bytes()
            .ct_eq(self.secret_key.as_bytes());
        bool::from(token_ok & secret_ok)
    }
}
