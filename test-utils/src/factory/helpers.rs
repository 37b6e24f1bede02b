//! Shared helpers for factory methods.

/// Counter for generating unique identifiers in tests.
///
/// Each factory-created entity draws from this counter so unique columns
/// (usernames, emails, draft positions) never collide within a test run.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
