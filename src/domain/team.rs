use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team member card. Records carry a synthetic id so edits and
/// deletions address a specific member rather than a list position.
/// Snapshots written before ids existed deserialize fine: a missing
/// `id` gets a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default = "new_member_id")]
    pub id: String,
    pub name: String,
    pub designation: String,
    pub photo_url: String,
    pub linkedin_url: String,
    pub email: String,
    pub bio: String,
}

pub(crate) fn new_member_id() -> String {
    Uuid::new_v4().to_string()
}

/// Admin panel rows may start out blank, so no field here is required
/// to be non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub designation: String,
    pub photo_url: String,
    pub linkedin_url: String,
    pub email: String,
    pub bio: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}
