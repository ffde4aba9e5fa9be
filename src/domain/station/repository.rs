//! Station read port

use async_trait::async_trait;

use super::model::Station;
use crate::shared::errors::DomainResult;

/// Read access to the station collection owned by the station-management
/// side of the system.
#[async_trait]
pub trait StationLister: Send + Sync {
    /// Every known station, in a stable order. No filtering or paging.
    async fn list_all_stations(&self) -> DomainResult<Vec<Station>>;
}
