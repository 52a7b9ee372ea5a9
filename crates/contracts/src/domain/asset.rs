use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity_id;
use crate::shared::pagination::DEFAULT_PAGE_SIZE;
use crate::system::users::User;

entity_id!(AssetId);
entity_id!(AllocationId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    InStock,
    Allocated,
    Repair,
    Retired,
    Lost,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 5] = [
        AssetStatus::InStock,
        AssetStatus::Allocated,
        AssetStatus::Repair,
        AssetStatus::Retired,
        AssetStatus::Lost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::InStock => "In Stock",
            AssetStatus::Allocated => "Allocated",
            AssetStatus::Repair => "Repair",
            AssetStatus::Retired => "Retired",
            AssetStatus::Lost => "Lost",
        }
    }

    /// Wire form, for query strings built by hand.
    pub fn as_wire(self) -> &'static str {
        match self {
            AssetStatus::InStock => "IN_STOCK",
            AssetStatus::Allocated => "ALLOCATED",
            AssetStatus::Repair => "REPAIR",
            AssetStatus::Retired => "RETIRED",
            AssetStatus::Lost => "LOST",
        }
    }
}

/// One allocation of an asset to an employee; `returned_on` set means the
/// allocation is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub id: AllocationId,
    pub asset_id: AssetId,
    pub allocated_to: User,
    pub allocated_on: NaiveDate,
    #[serde(default)]
    pub expected_return_on: Option<NaiveDate>,
    #[serde(default)]
    pub returned_on: Option<NaiveDate>,
    #[serde(default)]
    pub allocated_by: Option<User>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub return_condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub asset_code: String,
    #[serde(default)]
    pub serial_no: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub cost: Option<f64>,
    pub status: AssetStatus,
    #[serde(default)]
    pub current_allocation: Option<AssetAllocation>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Filterable, paginated asset list query. Serialized to a query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self {
            q: None,
            status: None,
            category: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Create/update payload for an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetPayload {
    pub asset_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_no: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub status: AssetStatus,
}

impl AssetPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.asset_code.trim().is_empty() {
            return Err("Asset code is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if let Some(cost) = self.cost {
            if cost < 0.0 {
                return Err("Cost cannot be negative".into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllocateAssetPayload {
    pub employee_id: String,
    #[serde(default)]
    pub allocated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AllocateAssetPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.employee_id.trim().is_empty() {
            return Err("Employee is required".into());
        }
        if self.allocated_on.is_none() {
            return Err("Allocation date is required".into());
        }
        if let (Some(from), Some(until)) = (self.allocated_on, self.expected_return_on) {
            if until < from {
                return Err("Expected return cannot precede the allocation date".into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReturnAssetPayload {
    #[serde(default)]
    pub returned_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReturnAssetPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.returned_on.is_none() {
            return Err("Return date is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_form() {
        assert_eq!(serde_json::to_string(&AssetStatus::InStock).unwrap(), "\"IN_STOCK\"");
        assert_eq!(serde_json::to_string(&AssetStatus::Lost).unwrap(), "\"LOST\"");
        let parsed: AssetStatus = serde_json::from_str("\"ALLOCATED\"").unwrap();
        assert_eq!(parsed, AssetStatus::Allocated);
    }

    #[test]
    fn test_asset_payload_validation() {
        let mut p = AssetPayload {
            asset_code: "AST-001".into(),
            name: "ThinkPad T14".into(),
            ..Default::default()
        };
        assert!(p.validate().is_ok());

        p.cost = Some(-1.0);
        assert!(p.validate().is_err());

        p.cost = None;
        p.name = " ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_allocate_payload_date_order() {
        let p = AllocateAssetPayload {
            employee_id: "u-1".into(),
            allocated_on: NaiveDate::from_ymd_opt(2025, 6, 1),
            expected_return_on: NaiveDate::from_ymd_opt(2025, 5, 1),
            notes: None,
        };
        assert!(p.validate().is_err());
    }
}
