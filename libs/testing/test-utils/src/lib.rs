//! Shared test utilities for the users service
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic, format-valid user fields (always available)
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let email = builder.email("primary");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Every value it produces passes the user format rules: names are letters and
/// spaces, emails are well-formed, phones are exactly 10 digits.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Letters-only name, e.g. `"Test Bcdfa"`
    pub fn name(&self) -> String {
        let letters: String = self
            .seed
            .to_string()
            .bytes()
            .take(6)
            .map(|digit| (b'a' + (digit - b'0')) as char)
            .collect();
        format!("Test {}", letters)
    }

    /// Unique email per seed and `suffix`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(42);
    /// assert_eq!(builder.email("main"), "test.42.main@example.com");
    /// ```
    pub fn email(&self, suffix: &str) -> String {
        format!("test.{}.{}@example.com", self.seed, suffix)
    }

    /// Ten-digit mobile number derived from the seed
    pub fn phone(&self) -> String {
        format!("{:010}", self.seed % 10_000_000_000)
    }
}
