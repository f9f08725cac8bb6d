//! Strongly-typed identifiers used across the client.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Failure to parse an identifier from its textual form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier ({kind}): {message}")]
pub struct InvalidId {
    kind: &'static str,
    message: String,
}

impl InvalidId {
    fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Client-generated idempotency token attached to new-order submissions.
///
/// UUIDv4, matching what the remote ERP expects in the `requestId` field. A
/// token belongs to a single draft order: it is minted when the cart first
/// becomes non-empty and discarded when the cart empties again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RequestId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| InvalidId::new("RequestId", e.to_string()))?;
        Ok(Self(uuid))
    }
}

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .parse::<i64>()
                    .map_err(|e| InvalidId::new($name, e.to_string()))?;
                Ok(Self(value))
            }
        }
    };
}

/// Remote-system identifier of a previously created order/document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocEntry(i64);

/// Human-facing document number of a posted order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocNum(i64);

/// Identifier of the sales employee the session belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesPersonCode(i64);

impl_int_newtype!(DocEntry, "DocEntry");
impl_int_newtype!(DocNum, "DocNum");
impl_int_newtype!(SalesPersonCode, "SalesPersonCode");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_unique_per_generate() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn request_id_round_trips_through_display() {
        let id = RequestId::generate();
        let parsed: RequestId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn doc_entry_parses_and_serializes_transparently() {
        let entry: DocEntry = "500".parse().unwrap();
        assert_eq!(entry.value(), 500);
        assert_eq!(serde_json::to_string(&entry).unwrap(), "500");
        let back: DocEntry = serde_json::from_str("500").unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn invalid_doc_entry_is_rejected() {
        assert!("not-a-number".parse::<DocEntry>().is_err());
    }
}
