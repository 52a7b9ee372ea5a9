use serde::{Deserialize, Serialize};

/// Body of every non-2xx response, and of `{message}` acknowledgments
/// returned by mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Bare list body used by endpoints that return `{items}` without paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

/// Tolerant response body: some endpoints wrap their payload in a
/// `{data: ...}` envelope, others return it bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Thing {
        name: String,
    }

    #[test]
    fn test_envelope_unwraps_both_shapes() {
        let wrapped: Envelope<Thing> =
            serde_json::from_str(r#"{"data":{"name":"hr"}}"#).unwrap();
        assert_eq!(wrapped.into_inner().name, "hr");

        let bare: Envelope<Thing> = serde_json::from_str(r#"{"name":"hr"}"#).unwrap();
        assert_eq!(bare.into_inner().name, "hr");
    }
}
