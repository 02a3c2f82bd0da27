//! Sequenced lookup/save workflows reporting to the UI task.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::application::dto::{ControllerEvent, CryptoOperation, RequestId};
use crate::application::use_cases::{
    LoadSavedCryptosUseCase, ManageCryptoUseCase, SearchCryptoUseCase,
};
use crate::domain::entities::CryptoId;
use crate::domain::ports::CryptoApiPort;

/// Drives backend requests and reports every step as a [`ControllerEvent`].
///
/// Request ids are allocated when a workflow is created, not when it first
/// runs, so the order in which the UI issues searches decides which response
/// is current.
#[derive(Clone)]
pub struct ViewController {
    search_use_case: SearchCryptoUseCase,
    load_saved_use_case: LoadSavedCryptosUseCase,
    manage_use_case: ManageCryptoUseCase,
    search_seq: Arc<AtomicU64>,
    list_seq: Arc<AtomicU64>,
    last_search: Arc<Mutex<Option<CryptoId>>>,
    events: mpsc::UnboundedSender<ControllerEvent>,
}

impl ViewController {
    /// Creates controller reporting over `events`.
    #[must_use]
    pub fn new(
        api: Arc<dyn CryptoApiPort>,
        events: mpsc::UnboundedSender<ControllerEvent>,
    ) -> Self {
        Self {
            search_use_case: SearchCryptoUseCase::new(api.clone()),
            load_saved_use_case: LoadSavedCryptosUseCase::new(api.clone()),
            manage_use_case: ManageCryptoUseCase::new(api),
            search_seq: Arc::new(AtomicU64::new(0)),
            list_seq: Arc::new(AtomicU64::new(0)),
            last_search: Arc::new(Mutex::new(None)),
            events,
        }
    }

    /// Starts a search and returns the workflow to run.
    ///
    /// `SearchStarted` is emitted immediately; `SearchFinished` once the
    /// returned future completes.
    pub fn search(
        &self,
        crypto_id: CryptoId,
    ) -> impl Future<Output = RequestId> + Send + use<> {
        let request = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(request, crypto_id = %crypto_id, "Search issued");
        *self.last_search.lock() = Some(crypto_id.clone());

        self.emit(ControllerEvent::SearchStarted {
            request,
            crypto_id: crypto_id.clone(),
        });

        let this = self.clone();
        async move {
            let result = this.search_use_case.execute(crypto_id.as_str()).await;
            this.emit(ControllerEvent::SearchFinished {
                request,
                crypto_id,
                result,
            });
            request
        }
    }

    /// Starts reloading the saved list and returns the workflow to run.
    pub fn refresh_saved_list(&self) -> impl Future<Output = RequestId> + Send + use<> {
        let request = self.list_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(request, "Saved list refresh issued");

        self.emit(ControllerEvent::SavedListStarted { request });

        let this = self.clone();
        async move {
            let result = this.load_saved_use_case.execute().await;
            this.emit(ControllerEvent::SavedListLoaded { request, result });
            request
        }
    }

    /// Runs an operation followed by its follow-up steps, one after another.
    ///
    /// - save: refresh the list, then re-run the newest search
    /// - update: refresh the list
    /// - delete: refresh the list
    ///
    /// Follow-ups only run when the operation succeeded. `OperationSettled`
    /// is always emitted last.
    pub async fn perform(&self, operation: CryptoOperation) {
        let result = self.manage_use_case.execute(&operation).await;
        let succeeded = result.is_ok();

        self.emit(ControllerEvent::OperationFinished {
            operation: operation.clone(),
            result,
        });

        if succeeded {
            self.refresh_saved_list().await;

            if let CryptoOperation::Save(saved) = &operation {
                let latest = self
                    .last_search
                    .lock()
                    .clone()
                    .unwrap_or_else(|| saved.clone());
                if &latest != saved {
                    debug!(saved = %saved, latest = %latest, "Newer search issued during save");
                }
                self.search(latest).await;
            }
        }

        info!(operation = %operation, succeeded, "Operation settled");
        self.emit(ControllerEvent::OperationSettled { operation });
    }

    fn emit(&self, event: ControllerEvent) {
        if self.events.send(event).is_err() {
            debug!("Event receiver closed, dropping controller event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CryptoSummary;
    use crate::domain::errors::ApiError;
    use crate::domain::ports::mocks::InMemoryCryptoApi;

    fn coin(id: &str, name: &str, symbol: &str) -> CryptoSummary {
        CryptoSummary {
            id: Some(id.to_string()),
            name: name.to_string(),
            symbol: symbol.to_string(),
            price_usd: 1.5,
            market_cap: Some(1_000_000.0),
            volume_24h: Some(50_000.0),
            price_change_24h: None,
            last_updated: Some("2024-05-01T12:00:00Z".to_string()),
            exists_in_db: false,
        }
    }

    fn setup() -> (
        Arc<InMemoryCryptoApi>,
        ViewController,
        mpsc::UnboundedReceiver<ControllerEvent>,
    ) {
        let api = Arc::new(InMemoryCryptoApi::new(vec![
            coin("bitcoin", "Bitcoin", "btc"),
            coin("ethereum", "Ethereum", "eth"),
        ]));
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = ViewController::new(api.clone(), tx);
        (api, controller, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ControllerEvent>) -> Vec<ControllerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn id(raw: &str) -> CryptoId {
        CryptoId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_search_reports_start_and_result() {
        let (_api, controller, mut rx) = setup();

        let request = controller.search(id("bitcoin")).await;

        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            ControllerEvent::SearchStarted { request: r, .. } if *r == request
        ));
        match &events[1] {
            ControllerEvent::SearchFinished {
                request: r,
                result: Ok(summary),
                ..
            } => {
                assert_eq!(*r, request);
                assert_eq!(summary.name, "Bitcoin");
                assert!(!summary.exists_in_db);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_ids_follow_issue_order() {
        let (_api, controller, mut rx) = setup();

        let first = controller.search(id("bitcoin"));
        let second = controller.search(id("ethereum"));

        // Run the later search to completion first.
        let second_id = second.await;
        let first_id = first.await;

        assert!(second_id > first_id);

        let finished: Vec<_> = drain(&mut rx)
            .into_iter()
            .filter_map(|event| match event {
                ControllerEvent::SearchFinished {
                    request, crypto_id, ..
                } => Some((request, crypto_id.into_inner())),
                _ => None,
            })
            .collect();
        assert_eq!(
            finished,
            vec![
                (second_id, "ethereum".to_string()),
                (first_id, "bitcoin".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_save_refreshes_list_then_searches_again() {
        let (api, controller, mut rx) = setup();

        controller
            .perform(CryptoOperation::Save(id("bitcoin")))
            .await;

        assert!(api.is_saved("bitcoin").await);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 6);
        assert!(matches!(
            &events[0],
            ControllerEvent::OperationFinished {
                operation: CryptoOperation::Save(_),
                result: Ok(())
            }
        ));
        assert!(matches!(&events[1], ControllerEvent::SavedListStarted { .. }));
        match &events[2] {
            ControllerEvent::SavedListLoaded {
                result: Ok(saved), ..
            } => assert_eq!(saved.len(), 1),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(&events[3], ControllerEvent::SearchStarted { .. }));
        match &events[4] {
            ControllerEvent::SearchFinished {
                result: Ok(summary),
                ..
            } => assert!(summary.exists_in_db),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(
            &events[5],
            ControllerEvent::OperationSettled {
                operation: CryptoOperation::Save(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_save_re_runs_newer_search() {
        let (api, controller, mut rx) = setup();

        controller.search(id("bitcoin")).await;
        drain(&mut rx);

        let save = controller.perform(CryptoOperation::Save(id("bitcoin")));
        let newer = controller.search(id("ethereum"));
        save.await;
        newer.await;

        assert!(api.is_saved("bitcoin").await);

        let searched: Vec<_> = drain(&mut rx)
            .into_iter()
            .filter_map(|event| match event {
                ControllerEvent::SearchStarted { request, crypto_id } => {
                    Some((request, crypto_id.into_inner()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            searched,
            vec![(2, "ethereum".to_string()), (3, "ethereum".to_string())]
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_refresh_list_only() {
        let (api, controller, mut rx) = setup();
        controller
            .perform(CryptoOperation::Save(id("ethereum")))
            .await;
        drain(&mut rx);

        controller
            .perform(CryptoOperation::Update(id("ethereum")))
            .await;
        let events = drain(&mut rx);
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[2], ControllerEvent::SavedListLoaded { .. }));

        controller
            .perform(CryptoOperation::Delete(id("ethereum")))
            .await;
        let events = drain(&mut rx);
        assert_eq!(events.len(), 4);
        match &events[2] {
            ControllerEvent::SavedListLoaded {
                result: Ok(saved), ..
            } => assert!(saved.is_empty()),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(!api.is_saved("ethereum").await);
    }

    #[tokio::test]
    async fn test_failed_operation_skips_follow_ups() {
        let (api, controller, mut rx) = setup();

        controller
            .perform(CryptoOperation::Update(id("bitcoin")))
            .await;

        assert_eq!(api.request_count(), 1);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        match &events[0] {
            ControllerEvent::OperationFinished {
                operation,
                result: Err(err),
            } => assert_eq!(
                err.user_message(&operation.failure_fallback()),
                "Cryptocurrency bitcoin not found"
            ),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(&events[1], ControllerEvent::OperationSettled { .. }));
    }

    #[tokio::test]
    async fn test_list_failure_is_reported() {
        let api = Arc::new(InMemoryCryptoApi::new(Vec::new()).offline());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let controller = ViewController::new(api, tx);

        let first = controller.refresh_saved_list().await;
        let second = controller.refresh_saved_list().await;
        assert_eq!((first, second), (1, 2));

        let events = drain(&mut rx);
        assert!(matches!(&events[0], ControllerEvent::SavedListStarted { request: 1 }));
        assert!(matches!(
            &events[1],
            ControllerEvent::SavedListLoaded {
                request: 1,
                result: Err(ApiError::Network { .. })
            }
        ));
    }

    #[tokio::test]
    async fn test_closed_receiver_does_not_fail_workflows() {
        let (_api, controller, rx) = setup();
        drop(rx);

        let request = controller.search(id("bitcoin")).await;
        assert_eq!(request, 1);
    }
}
