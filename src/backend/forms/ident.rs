//! Record Identifier Generation
//!
//! Form and question records carry a 25-character alphanumeric identifier
//! generated at creation. Generation is collision-checked against a caller
//! supplied exclusion set: candidates are drawn until one is not a member,
//! with a bounded number of attempts.

use std::collections::HashSet;

use rand::{distributions::Alphanumeric, Rng};

use crate::backend::error::BackendError;

/// Length of every generated record identifier
pub const RECORD_ID_LEN: usize = 25;

/// Retry budget for the collision loop
pub const MAX_ATTEMPTS: u32 = 10;

/// Draw one random alphanumeric candidate
fn candidate() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RECORD_ID_LEN)
        .map(char::from)
        .collect()
}

/// Generate a record id not present in `exclude`.
///
/// Retries up to [`MAX_ATTEMPTS`] times before giving up with
/// [`BackendError::IdSpaceExhausted`].
pub fn generate_record_id(exclude: &HashSet<String>) -> Result<String, BackendError> {
    generate_unique(candidate, exclude)
}

fn generate_unique<F>(mut next: F, exclude: &HashSet<String>) -> Result<String, BackendError>
where
    F: FnMut() -> String,
{
    for _ in 0..MAX_ATTEMPTS {
        let id = next();
        if !exclude.contains(&id) {
            return Ok(id);
        }
    }
    Err(BackendError::IdSpaceExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_25_alphanumeric_chars() {
        let id = generate_record_id(&HashSet::new()).unwrap();
        assert_eq!(id.len(), RECORD_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn sequential_generation_never_collides_within_a_batch() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let id = generate_record_id(&seen).unwrap();
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn exhausted_retry_budget_is_an_error() {
        let mut exclude = HashSet::new();
        exclude.insert("stuck".to_string());
        let result = generate_unique(|| "stuck".to_string(), &exclude);
        assert!(matches!(
            result,
            Err(BackendError::IdSpaceExhausted { attempts: MAX_ATTEMPTS })
        ));
    }

    #[test]
    fn excluded_candidates_are_skipped() {
        let mut calls = 0;
        let mut exclude = HashSet::new();
        exclude.insert("first".to_string());
        let id = generate_unique(
            || {
                calls += 1;
                if calls == 1 {
                    "first".to_string()
                } else {
                    "second".to_string()
                }
            },
            &exclude,
        )
        .unwrap();
        assert_eq!(id, "second");
    }
}
