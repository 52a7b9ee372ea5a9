use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed entity identifier with a string round-trip for URLs and render
/// keys.
pub trait EntityId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a newtype ID over `Uuid` with the `EntityId` plumbing.
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl $crate::domain::common::EntityId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| format!("Invalid id: {}", e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Lifecycle status shared by every master entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MasterStatus {
    #[default]
    Active,
    Inactive,
}

impl MasterStatus {
    pub const ALL: [MasterStatus; 2] = [MasterStatus::Active, MasterStatus::Inactive];

    pub fn label(self) -> &'static str {
        match self {
            MasterStatus::Active => "Active",
            MasterStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, MasterStatus::Active)
    }
}

/// Create/update payload shared by the name+status masters (departments
/// and designations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MasterPayload {
    pub name: String,
    pub status: MasterStatus,
}

impl MasterPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        Ok(())
    }

    /// Payload with surrounding whitespace stripped, as sent to the server.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_payload_requires_name() {
        let empty = MasterPayload::default();
        assert!(empty.validate().is_err());

        let blank = MasterPayload {
            name: "   ".into(),
            status: MasterStatus::Active,
        };
        assert!(blank.validate().is_err());

        let ok = MasterPayload {
            name: "  Engineering ".into(),
            status: MasterStatus::Inactive,
        };
        assert!(ok.validate().is_ok());
        assert_eq!(ok.normalized().name, "Engineering");
    }

    #[test]
    fn test_master_status_wire_form() {
        assert_eq!(serde_json::to_string(&MasterStatus::Active).unwrap(), "\"Active\"");
        assert_eq!(serde_json::to_string(&MasterStatus::Inactive).unwrap(), "\"Inactive\"");
    }
}
