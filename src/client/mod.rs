//! Team directory API client

use async_trait::async_trait;

use crate::error::Result;

pub mod directory;
pub mod models;

pub use directory::{ApiVersion, DirectoryClient};
pub use models::TeamRecord;

/// Read-only view of the team directory.
///
/// One call, one fetch: implementations hold no state between calls and
/// never retry on their own.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch every team in the directory, preserving source order.
    async fn fetch_teams(&self) -> Result<Vec<TeamRecord>>;
}
