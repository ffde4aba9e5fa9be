//! Reservation read port

use async_trait::async_trait;

use super::model::Reservation;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait ReservationLister: Send + Sync {
    /// Every known reservation, any status. No filtering or paging.
    async fn list_all_reservations(&self) -> DomainResult<Vec<Reservation>>;
}
