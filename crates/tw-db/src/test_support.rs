//! Shared test utilities for tw-db unit tests.

pub(crate) mod helpers {
    use tw_core::identity::AuthIdentity;

    use crate::TwDb;
    use crate::service::TaskService;

    pub const ALICE: &str = "user_alice";
    pub const BOB: &str = "user_bob";

    /// In-memory service acting as [`ALICE`].
    pub async fn test_service() -> TaskService {
        let db = TwDb::open_local(":memory:").await.unwrap();
        TaskService::from_db(db, Some(AuthIdentity::new(ALICE)))
    }

    /// In-memory service with no caller identity.
    pub async fn anonymous_service() -> TaskService {
        let db = TwDb::open_local(":memory:").await.unwrap();
        TaskService::from_db(db, None)
    }
}
