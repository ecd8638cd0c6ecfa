use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::{
    models::{DbAppointment, DbPromotionalBanner},
    repositories::{AppointmentRepository, BannerRepository, SessionStore},
};

// Mock repositories for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentRepository for AppointmentRepo {
        async fn list_for_user(&self, user_id: Uuid) -> eyre::Result<Vec<DbAppointment>>;

        async fn cancel(&self, id: Uuid, user_id: Uuid) -> eyre::Result<u64>;

        async fn reschedule(
            &self,
            id: Uuid,
            user_id: Uuid,
            date: NaiveDate,
            time: NaiveTime,
        ) -> eyre::Result<u64>;
    }
}

mock! {
    pub BannerRepo {}

    #[async_trait]
    impl BannerRepository for BannerRepo {
        async fn list_visible(&self, now: DateTime<Utc>) -> eyre::Result<Vec<DbPromotionalBanner>>;
    }
}

mock! {
    pub SessionRepo {}

    #[async_trait]
    impl SessionStore for SessionRepo {
        async fn current_user(&self, token: &str) -> eyre::Result<Option<Uuid>>;
    }
}
