//! bcrypt-backed password hasher

use async_trait::async_trait;

use super::traits::PasswordHasher;

/// Hashes passwords with bcrypt on the blocking thread pool
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the work factor (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, String> {
        let plaintext = plaintext.to_string();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| format!("hashing task failed: {}", e))?
            .map_err(|e| e.to_string())
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let plaintext = plaintext.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash).unwrap_or(false))
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::with_cost(4);
        let hash = hasher.hash("secret1").await.unwrap();

        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$2"));
        assert!(hasher.verify("secret1", &hash).await);
        assert!(!hasher.verify("secret2", &hash).await);
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = BcryptPasswordHasher::with_cost(4);
        let first = hasher.hash("same").await.unwrap();
        let second = hasher.hash("same").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_verify_against_garbage_hash() {
        let hasher = BcryptPasswordHasher::with_cost(4);
        assert!(!hasher.verify("secret", "not-a-hash").await);
    }

    #[tokio::test]
    async fn test_invalid_cost_is_error() {
        let hasher = BcryptPasswordHasher::with_cost(2);
        assert!(hasher.hash("secret").await.is_err());
    }
}
