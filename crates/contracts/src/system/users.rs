use serde::{Deserialize, Serialize};

use crate::domain::common::MasterStatus;
use crate::system::auth::Role;

/// Directory entry used to populate assignee and employee pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: Option<MasterStatus>,
}
