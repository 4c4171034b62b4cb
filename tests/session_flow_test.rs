use async_trait::async_trait;
use brigade_needs::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn test_catalog() -> Catalog {
    let brigade = |id: u32, name: &str| Brigade {
        id,
        name: name.to_string(),
        active_members: 10,
        commander_contact: "+34 600 000 000".to_string(),
        logistics_officer: "Officer".to_string(),
        logistics_contact: "+34 600 000 001".to_string(),
        emergency_number: None,
    };
    let item = |id: u32, name: &str, category_id: u32, requires_size: bool| Item {
        id,
        name: name.to_string(),
        category_id,
        requires_size,
        value_kind: ValueKind::Quantity,
        size_kind: None,
        category: None,
    };

    Catalog::new(
        vec![brigade(1, "Central"), brigade(2, "North")],
        vec![
            Category {
                id: 1,
                name: "Protective clothing".to_string(),
            },
            Category {
                id: 2,
                name: "Protective equipment".to_string(),
            },
        ],
        vec![
            item(1, "Forest Boots", 1, true),
            item(2, "Helmet", 2, false),
        ],
        vec![
            Size {
                id: 1,
                kind: SizeKind::Clothing,
                value: "M".to_string(),
            },
            Size {
                id: 2,
                kind: SizeKind::Boots,
                value: "42".to_string(),
            },
        ],
    )
}

/// Gateway that always fails, counting how often it was called
#[derive(Default)]
struct UnreachableGateway {
    calls: AtomicUsize,
}

#[async_trait]
impl NeedsGateway for UnreachableGateway {
    async fn submit(&self, _needs: &[NeedPayload]) -> Result<SubmissionReceipt, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::general("connection refused"))
    }
}

fn fill(session: &mut Session) {
    session.select_brigade(Some(1));
    session.select_category(Some(1));
    session.select_item(Some(1));
    session.select_size(Some(2));
    session.set_value("10");
    session.commit().unwrap();

    session.select_brigade(Some(2));
    session.select_category(Some(2));
    session.select_item(Some(2));
    session.set_value("3");
    session.commit().unwrap();
}

#[tokio::test]
async fn test_submit_success_clears_list() {
    let api = MockApi::new(test_catalog());
    let mut session = Session::new();
    session.load_catalog(&api).await.unwrap();
    assert_eq!(session.load_state(), &RequestState::Succeeded);

    fill(&mut session);
    assert_eq!(session.draft().len(), 2);
    let boots = session.draft().get(0).unwrap();
    assert_eq!(boots.item_name, "Forest Boots");
    assert_eq!(boots.size_value.as_deref(), Some("42"));

    let receipt = session.submit(&api).await.unwrap();
    assert_eq!(receipt.accepted, 2);
    assert!(session.draft().is_empty());
    assert_eq!(session.submit_state(), &RequestState::Succeeded);

    let sent = api.submissions();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][0].size_id, Some(2));
    assert_eq!(sent[0][1].size_id, None);
    assert_eq!(sent[0][1].value, 3.0);
}

#[tokio::test]
async fn test_submit_failure_keeps_list() {
    let mut session = Session::with_catalog(test_catalog());
    fill(&mut session);

    let gateway = UnreachableGateway::default();
    match session.submit(&gateway).await {
        Err(Error::SubmissionFailed(message)) => assert_eq!(message, "connection refused"),
        other => panic!("expected submission failure, got {:?}", other),
    }
    assert_eq!(session.draft().len(), 2);
    assert_eq!(session.submit_state().failure(), Some("connection refused"));

    // retry goes through once the back-end is reachable again
    let api = MockApi::new(test_catalog());
    session.submit(&api).await.unwrap();
    assert!(session.draft().is_empty());
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_mock_server_error_keeps_list() {
    let api = MockApi::new(test_catalog()).failing("Error interno del servidor");
    let mut session = Session::with_catalog(test_catalog());
    fill(&mut session);

    let err = session.submit(&api).await.unwrap_err();
    assert!(matches!(err, Error::SubmissionFailed(_)));
    assert_eq!(session.draft().len(), 2);
}

#[tokio::test]
async fn test_failed_catalog_load_keeps_previous_catalog() {
    struct BrokenSource;

    #[async_trait]
    impl CatalogSource for BrokenSource {
        async fn load_catalog(&self) -> Result<Catalog, Error> {
            Err(Error::api(503, "unavailable"))
        }
    }

    let mut session = Session::with_catalog(test_catalog());
    assert!(session.load_catalog(&BrokenSource).await.is_err());
    assert!(session.load_state().failure().is_some());
    assert_eq!(session.catalog(), &test_catalog());
}

#[test]
fn test_stats_across_brigades() {
    let mut session = Session::with_catalog(test_catalog());
    fill(&mut session);
    session.select_brigade(Some(2));
    session.select_category(Some(2));
    session.select_item(Some(2));
    session.set_value("1");
    session.commit().unwrap();

    let stats = session.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.brigades, 2);
    assert_eq!(stats.categories, 2);
}

#[tokio::test]
async fn test_timed_out_submit_can_be_retried() {
    let slow = MockApi::new(test_catalog())
        .with_delays(std::time::Duration::ZERO, std::time::Duration::from_secs(5));
    let mut session = Session::with_catalog(test_catalog());
    fill(&mut session);

    let outcome = tokio::time::timeout(
        std::time::Duration::from_millis(50),
        session.submit(&slow),
    )
    .await;
    assert!(outcome.is_err());
    assert!(!session.submit_state().is_in_flight());
    assert_eq!(session.submit_state().failure(), Some("cancelled"));
    assert_eq!(session.draft().len(), 2);
    assert!(slow.submissions().is_empty());

    let api = MockApi::new(test_catalog());
    let receipt = session.submit(&api).await.unwrap();
    assert_eq!(receipt.accepted, 2);
    assert!(session.draft().is_empty());
}

#[tokio::test]
async fn test_timed_out_catalog_load_can_be_retried() {
    let slow = MockApi::new(test_catalog())
        .with_delays(std::time::Duration::from_secs(5), std::time::Duration::ZERO);
    let mut session = Session::new();

    let outcome = tokio::time::timeout(
        std::time::Duration::from_millis(50),
        session.load_catalog(&slow),
    )
    .await;
    assert!(outcome.is_err());
    assert_eq!(session.load_state().failure(), Some("cancelled"));
    assert!(session.catalog().is_empty());

    session.load_catalog(&MockApi::new(test_catalog())).await.unwrap();
    assert_eq!(session.load_state(), &RequestState::Succeeded);
    assert_eq!(session.catalog(), &test_catalog());
}
