//! Property-based tests for record-id generation
//!
//! Uses proptest to generate random exclusion sets and verify the generator's
//! guarantees: fixed length, alphanumeric charset, and exclusion-respecting.

#[cfg(feature = "ssr")]
mod tests {
    use proptest::prelude::*;
    use std::collections::HashSet;

    use formcraft::backend::forms::ident::{generate_record_id, RECORD_ID_LEN};

    proptest! {
        #[test]
        fn ids_have_fixed_length_and_charset(
            excluded in proptest::collection::hash_set("[A-Za-z0-9]{25}", 0..64)
        ) {
            let id = generate_record_id(&excluded).unwrap();
            prop_assert_eq!(id.len(), RECORD_ID_LEN);
            prop_assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
            prop_assert!(!excluded.contains(&id));
        }

        #[test]
        fn batch_generation_yields_distinct_ids(batch_size in 1usize..50) {
            let mut seen: HashSet<String> = HashSet::new();
            for _ in 0..batch_size {
                let id = generate_record_id(&seen).unwrap();
                prop_assert!(seen.insert(id));
            }
            prop_assert_eq!(seen.len(), batch_size);
        }
    }
}
