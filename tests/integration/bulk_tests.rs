//! Bulk create integration tests
//!
//! Run the orchestrator against the real in-memory store.

#[cfg(test)]
mod tests {
    use crate::common::ProduceFactory;
    use std::sync::Arc;
    use supermarket::core::bulk::{BulkCreateOrchestrator, BulkCreateStatus};
    use supermarket::storage::{InMemoryProduceStore, ProduceStore};
    use supermarket::Produce;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_large_batch_every_record_accounted_for() {
        let store = Arc::new(InMemoryProduceStore::new());
        let orchestrator = BulkCreateOrchestrator::new(store.clone());

        let mut batch = ProduceFactory::batch(500);
        batch.push(ProduceFactory::malformed());

        let outcome = orchestrator.create_all(batch).await.unwrap();

        assert_eq!(outcome.status(), BulkCreateStatus::Partial);
        assert_eq!(outcome.created.len(), 500);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(store.len(), 500);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_same_code_twice_in_one_batch_creates_once() {
        let store = Arc::new(InMemoryProduceStore::new());
        let orchestrator = BulkCreateOrchestrator::new(store.clone());

        let batch = vec![
            Produce::new("First", "ab12-cd34-ef56-gh78", 1.0),
            Produce::new("Second", "AB12-CD34-EF56-GH78", 2.0),
        ];
        let outcome = orchestrator.create_all(batch).await.unwrap();

        assert_eq!(outcome.created.len(), 1);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(store.len(), 1);

        let stored = store.get("AB12-CD34-EF56-GH78").await.unwrap().unwrap();
        assert_eq!(stored, outcome.created[0]);
    }

    #[tokio::test]
    async fn test_resubmitting_a_batch_fails_every_record() {
        let store = Arc::new(InMemoryProduceStore::new());
        let orchestrator = BulkCreateOrchestrator::new(store.clone());

        let first = orchestrator
            .create_all(ProduceFactory::batch(10))
            .await
            .unwrap();
        assert_eq!(first.status(), BulkCreateStatus::AllCreated);

        let second = orchestrator
            .create_all(ProduceFactory::batch(10))
            .await
            .unwrap();
        assert_eq!(second.status(), BulkCreateStatus::AllFailed);
        assert_eq!(second.failed, ProduceFactory::batch(10));
        assert_eq!(store.len(), 10);
    }

    #[tokio::test]
    async fn test_created_records_are_normalized() {
        let store = Arc::new(InMemoryProduceStore::new());
        let orchestrator = BulkCreateOrchestrator::new(store.clone());

        let outcome = orchestrator
            .create_all(vec![Produce::new("Kiwi", "kw12-kw34-kw56-kw78", 0.125)])
            .await
            .unwrap();

        assert_eq!(outcome.created[0].produce_code, "KW12-KW34-KW56-KW78");
        assert_eq!(outcome.created[0].unit_price, 0.13);
        assert_eq!(store.list().await.unwrap(), outcome.created);
    }
}
