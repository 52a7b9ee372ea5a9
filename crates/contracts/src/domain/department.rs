use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::MasterStatus;
use crate::entity_id;

entity_id!(DepartmentId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub status: MasterStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
