// SPDX-License-Identifier: MPL-2.0

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identifier of a [`Service`].
///
/// Backends hand out numbers or strings; both are kept as text so ids from
/// different sources compare the same way.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawServiceId", into = "String")]
pub struct ServiceId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawServiceId {
    Number(i64),
    Text(String),
}

impl From<RawServiceId> for ServiceId {
    fn from(raw: RawServiceId) -> Self {
        match raw {
            RawServiceId::Number(n) => ServiceId(n.to_string()),
            RawServiceId::Text(s) => ServiceId(s),
        }
    }
}

impl From<ServiceId> for String {
    fn from(id: ServiceId) -> Self {
        id.0
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        ServiceId(s.to_string())
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        ServiceId(s)
    }
}

impl From<i64> for ServiceId {
    fn from(n: i64) -> Self {
        ServiceId(n.to_string())
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A service record as delivered by a source. Never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawService")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
}

/// Wire form: the id may come as `id`, `serviceId` or both. `id` wins.
#[derive(Deserialize)]
struct RawService {
    id: Option<ServiceId>,
    #[serde(rename = "serviceId")]
    service_id: Option<ServiceId>,
    name: String,
}

impl TryFrom<RawService> for Service {
    type Error = String;

    fn try_from(raw: RawService) -> std::result::Result<Self, Self::Error> {
        let id = raw
            .id
            .or(raw.service_id)
            .ok_or_else(|| "missing field `id` or `serviceId`".to_string())?;
        Ok(Service { id, name: raw.name })
    }
}

impl Service {
    pub fn new(id: impl Into<ServiceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Decodes the JSON array answered by `GET /service`.
pub fn decode_services(body: &str) -> Result<Vec<Service>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    #[test]
    fn decodes_backend_payload() {
        let body = r#"[
            {"serviceId": 1, "name": "A", "instances": []},
            {"serviceId": 2, "name": "B", "instances": [
                {"instanceId": 7, "serviceId": 2, "name": "b-1",
                 "urlHealthCheck": "http://b-1/health", "status": "UP"}
            ]}
        ]"#;

        let services = decode_services(body).unwrap();

        assert_eq!(services, vec![Service::new("1", "A"), Service::new("2", "B")]);
    }

    #[test]
    fn accepts_plain_id_key_and_string_ids() {
        let services = decode_services(r#"[{"id": "cache", "name": "Cache"}]"#).unwrap();

        assert_eq!(services[0].id, ServiceId::from("cache"));
        assert_eq!(services[0].name, "Cache");
    }

    #[test]
    fn empty_array_decodes_to_empty_list() {
        assert!(decode_services("[]").unwrap().is_empty());
    }

    #[test]
    fn null_name_is_rejected() {
        let err = decode_services(r#"[{"serviceId": 1, "name": null}]"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn numeric_and_text_ids_compare_as_text() {
        assert_eq!(ServiceId::from(42_i64), ServiceId::from("42"));
        assert!(ServiceId::from("a") < ServiceId::from("b"));
        assert_eq!(ServiceId::from(3_i64).to_string(), "3");
    }

    #[test]
    fn ids_serialize_as_strings() {
        let json = serde_json::to_string(&Service::new(5_i64, "E")).unwrap();
        assert_eq!(json, r#"{"id":"5","name":"E"}"#);
    }

    #[test]
    fn both_id_keys_prefer_id() {
        let services =
            decode_services(r#"[{"id": "a", "serviceId": 1, "name": "A"}]"#).unwrap();

        assert_eq!(services[0].id, ServiceId::from("a"));
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = decode_services(r#"[{"name": "A"}]"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(reason) if reason.contains("serviceId")));
    }

    #[test]
    fn null_id_is_rejected() {
        assert!(decode_services(r#"[{"serviceId": null, "name": "A"}]"#).is_err());
    }
}
