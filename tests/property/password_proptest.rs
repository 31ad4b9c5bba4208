//! Property-based tests for password hashing
//!
//! Runs at bcrypt's minimum cost with a small case count; each case still
//! performs one hash and two verifications.

use proptest::prelude::*;
use userauth::backend::auth::PasswordHasher;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_verifies_only_same_password(password in "[a-zA-Z0-9!@#$%^&*]{1,40}") {
        let rt = runtime();
        let hasher = PasswordHasher::new(4).unwrap();

        let hash = rt.block_on(hasher.hash(&password)).unwrap();
        prop_assert_ne!(&hash, &password);
        prop_assert!(rt.block_on(hasher.verify(&password, &hash)).unwrap());

        let other = format!("{}x", password);
        prop_assert!(!rt.block_on(hasher.verify(&other, &hash)).unwrap());
    }

    #[test]
    fn test_hashes_are_salted(password in "[a-z]{1,16}") {
        let rt = runtime();
        let hasher = PasswordHasher::new(4).unwrap();

        let first = rt.block_on(hasher.hash(&password)).unwrap();
        let second = rt.block_on(hasher.hash(&password)).unwrap();
        prop_assert_ne!(first, second);
    }
}
