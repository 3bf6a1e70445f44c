//! # Service Flow Tests
//!
//! End-to-end use of `QueueService` through the `QueueApi` port: lifecycle,
//! absent handles, bounded removal, limits and metrics.

#[cfg(test)]
mod tests {
    use lq_queue::{
        QueueApi, QueueConfigBuilder, QueueError, QueueService, SystemAllocator,
    };

    fn service() -> QueueService<SystemAllocator> {
        let mut service = QueueService::new(SystemAllocator);
        service.create().unwrap();
        service
    }

    fn contents(service: &QueueService<SystemAllocator>) -> Vec<String> {
        service
            .queue()
            .map(|q| q.values().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    #[test]
    fn test_reference_scenario() {
        let mut service = service();
        for value in ["banana", "apple", "cherry"] {
            service.insert_tail(value).unwrap();
        }
        assert_eq!(service.size(), 3);

        service.sort();
        assert_eq!(contents(&service), ["apple", "banana", "cherry"]);

        service.reverse();
        assert_eq!(contents(&service), ["cherry", "banana", "apple"]);

        let mut buf = [0xFFu8; 4];
        assert_eq!(service.remove_head(Some(&mut buf)).unwrap(), 3);
        assert_eq!(&buf, b"che\0");
        assert_eq!(service.size(), 2);
        assert_eq!(contents(&service), ["banana", "apple"]);

        // Tail stays correct after sort and reverse
        service.insert_tail("date").unwrap();
        assert_eq!(contents(&service), ["banana", "apple", "date"]);
        service.queue().unwrap().check_invariants().unwrap();
    }

    #[test]
    fn test_absent_handle_semantics() {
        let mut service = QueueService::new(SystemAllocator);

        assert_eq!(service.insert_head("a"), Err(QueueError::InvalidHandle));
        assert_eq!(service.insert_tail("a"), Err(QueueError::InvalidHandle));
        assert_eq!(service.remove_head(None), Err(QueueError::InvalidHandle));
        assert_eq!(service.size(), 0);
        service.reverse();
        service.sort();
        service.destroy();

        assert!(service.queue().is_none());
        assert_eq!(service.metrics().invalid_handle_calls, 5);
    }

    #[test]
    fn test_destroy_then_recreate_starts_empty() {
        let mut service = service();
        service.insert_tail("a").unwrap();
        service.insert_tail("b").unwrap();
        service.destroy();
        assert!(!service.has_queue());

        service.create().unwrap();
        assert_eq!(service.size(), 0);
        assert_eq!(service.remove_head(None), Err(QueueError::EmptyQueue));

        let metrics = service.metrics();
        assert_eq!(metrics.queues_created, 2);
        assert_eq!(metrics.queues_destroyed, 1);
    }

    #[test]
    fn test_create_replaces_existing_queue() {
        let mut service = service();
        service.insert_tail("old").unwrap();
        service.create().unwrap();
        assert_eq!(service.size(), 0);
    }

    // =========================================================================
    // REMOVAL BUFFERS
    // =========================================================================

    #[test]
    fn test_removal_buffer_edge_cases() {
        let mut service = service();
        for value in ["exact", "longer value", "", "x"] {
            service.insert_tail(value).unwrap();
        }

        // Exactly fits with terminator
        let mut buf = [0xFFu8; 6];
        assert_eq!(service.remove_head(Some(&mut buf)).unwrap(), 5);
        assert_eq!(&buf, b"exact\0");

        // Truncated
        let mut buf = [0xFFu8; 5];
        assert_eq!(service.remove_head(Some(&mut buf)).unwrap(), 4);
        assert_eq!(&buf, b"long\0");

        // Empty value
        let mut buf = [0xFFu8; 3];
        assert_eq!(service.remove_head(Some(&mut buf)).unwrap(), 0);
        assert_eq!(buf, [0, 0xFF, 0xFF]);

        // Zero-capacity buffer is left alone but the element is still removed
        let mut buf: [u8; 0] = [];
        assert_eq!(service.remove_head(Some(&mut buf)).unwrap(), 0);
        assert_eq!(service.size(), 0);
    }

    #[test]
    fn test_pop_head_returns_owned_values_in_order() {
        let mut service = service();
        service.insert_tail("b").unwrap();
        service.insert_head("a").unwrap();
        service.insert_tail("c").unwrap();

        assert_eq!(service.pop_head().unwrap(), "a");
        assert_eq!(service.pop_head().unwrap(), "b");
        assert_eq!(service.pop_head().unwrap(), "c");
        assert_eq!(service.pop_head(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_inserted_values_are_copies() {
        let mut service = service();
        let mut source = String::from("mutable");
        service.insert_tail(&source).unwrap();
        source.clear();
        source.push_str("changed");

        assert_eq!(service.pop_head().unwrap(), "mutable");
    }

    // =========================================================================
    // LIMITS
    // =========================================================================

    #[test]
    fn test_limits_refuse_without_partial_state() {
        let config = QueueConfigBuilder::new()
            .max_elements(2)
            .max_value_bytes(4)
            .build()
            .unwrap();
        let mut service = QueueService::with_config(SystemAllocator, config).unwrap();
        service.create().unwrap();

        assert!(matches!(
            service.insert_tail("too long"),
            Err(QueueError::ValueTooLarge { len: 8, max: 4 })
        ));
        service.insert_tail("a").unwrap();
        service.insert_head("b").unwrap();
        assert!(matches!(
            service.insert_tail("c"),
            Err(QueueError::CapacityExceeded { capacity: 2 })
        ));

        assert_eq!(contents(&service), ["b", "a"]);
        service.queue().unwrap().check_invariants().unwrap();
    }

    // =========================================================================
    // METRICS
    // =========================================================================

    #[test]
    fn test_metrics_track_operations() {
        let mut service = service();
        service.insert_head("a").unwrap();
        service.insert_tail("b").unwrap();
        service.insert_tail("c").unwrap();
        service.reverse();
        service.sort();
        service.remove_head(None).unwrap();
        let _ = service.remove_head(None);
        let _ = service.remove_head(None);
        let _ = service.remove_head(None);

        let metrics = service.metrics();
        assert_eq!(metrics.head_inserts, 1);
        assert_eq!(metrics.tail_inserts, 2);
        assert_eq!(metrics.total_inserts(), 3);
        assert_eq!(metrics.reversals, 1);
        assert_eq!(metrics.sorts, 1);
        assert_eq!(metrics.removals, 3);
        assert_eq!(metrics.failed_removals, 1);
    }

    // =========================================================================
    // SCALE
    // =========================================================================

    #[test]
    fn test_large_queue_sort_and_teardown() {
        let mut service = service();
        for i in (0..100_000u32).rev() {
            service.insert_tail(&format!("{:06}", i)).unwrap();
        }
        service.sort();
        let queue = service.queue().unwrap();
        assert_eq!(queue.peek_head(), Some("000000"));
        assert_eq!(queue.peek_tail(), Some("099999"));
        queue.check_invariants().unwrap();

        service.reverse();
        assert_eq!(service.queue().unwrap().peek_head(), Some("099999"));
        service.destroy();
    }
}
