//! Team directory data models

use serde::{Deserialize, Serialize};

/// One team in the directory listing.
///
/// The directory has grown fields over time, so everything beyond `id` is
/// optional and decodes to `None` when the endpoint does not send it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Unique identifier of the team
    pub id: String,

    /// Human-readable team name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Department the team belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Business domain the team operates in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Cloud organization the team deploys to.
    ///
    /// Older directory revisions send this as `snpaas_org`.
    #[serde(default, alias = "snpaas_org", skip_serializing_if = "Option::is_none")]
    pub cloud_org: Option<String>,
}
