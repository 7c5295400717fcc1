use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a new element id: `element-{unix_millis}-{sequence}`
///
/// The process-wide sequence keeps ids unique even when several elements
/// are created within the same millisecond.
pub fn next_element_id() -> String {
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed) + 1;
    format!(
        "element-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        sequence
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_within_same_tick() {
        let ids: HashSet<String> = (0..1000).map(|_| next_element_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_prefix() {
        assert!(next_element_id().starts_with("element-"));
    }
}
