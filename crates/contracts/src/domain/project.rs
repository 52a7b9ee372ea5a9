use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity_id;
use crate::system::users::User;

entity_id!(ProjectId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    #[default]
    Pending,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Pending];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Pending => "Pending",
        }
    }
}

/// Projects are soft-deleted: DELETE flags the record, list endpoints stop
/// returning it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    /// Deadline; named after the original field to keep the wire stable.
    pub time_limit: NaiveDate,
    pub status: ProjectStatus,
    #[serde(default)]
    pub employees: Vec<User>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub time_limit: Option<NaiveDate>,
    pub status: ProjectStatus,
    /// Assigned employee ids.
    pub employees: Vec<String>,
}

impl ProjectPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".into());
        }
        let start = self.start_date.ok_or("Start date is required")?;
        let deadline = self.time_limit.ok_or("Time limit is required")?;
        if deadline < start {
            return Err("Time limit cannot precede the start date".into());
        }
        Ok(())
    }
}

/// Response of project creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreated {
    pub message: String,
    pub project_id: ProjectId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ProjectPayload {
        ProjectPayload {
            name: "Payroll revamp".into(),
            description: "Replace the legacy payroll exports".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10),
            time_limit: NaiveDate::from_ymd_opt(2025, 3, 31),
            status: ProjectStatus::Active,
            employees: vec!["u-1".into()],
        }
    }

    #[test]
    fn test_payload_validation() {
        assert!(valid_payload().validate().is_ok());

        let mut p = valid_payload();
        p.name = "  ".into();
        assert!(p.validate().is_err());

        let mut p = valid_payload();
        p.time_limit = NaiveDate::from_ymd_opt(2024, 12, 31);
        assert!(p.validate().is_err());

        let mut p = valid_payload();
        p.start_date = None;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!(serde_json::to_string(&ProjectStatus::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&ProjectStatus::Pending).unwrap(), "\"pending\"");
    }
}
