//! Process-level scoring-run ID.
//!
//! Every response the service produces carries the ULID of the process that
//! scored it, so a caller reporting a surprising number can be traced back to
//! one deployment, one config, one engine version. ULIDs sort by creation
//! time, which makes run IDs comparable across restarts for free.

use once_cell::sync::Lazy;
use ulid::Ulid;

static PROCESS_RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// The ID shared by everything this process scores. First call mints it;
/// later calls return the same value.
#[inline]
pub fn get() -> &'static str {
    &PROCESS_RUN_ID
}

/// A fresh ULID, for sub-operations that need their own identity (request
/// IDs, batch partitions).
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_id_is_stable() {
        assert_eq!(get(), get());
        assert_eq!(get().len(), 26);
    }

    #[test]
    fn generated_ids_are_unique_and_time_ordered() {
        let earlier = generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let later = generate();

        assert_ne!(earlier, later);
        assert!(earlier < later);
    }
}
