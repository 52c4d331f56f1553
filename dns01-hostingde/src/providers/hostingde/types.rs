//! hosting.de API 类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_domain_name;
use crate::utils::log_sanitizer::mask_secret;

use super::PROVIDER_NAME;

// ============ Request ============

/// Selects the zone a `zoneUpdate` call applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSelector {
    /// Zone name, e.g. `example.com`.
    pub name: String,
}

impl ZoneSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Whether a mutation adds or deletes a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Add,
    Delete,
}

/// DNS record type. Only TXT is written by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "TXT")]
    Txt,
}

/// A single requested record change.
///
/// Serialized as `{ name, type, content, ttl }` for additions and
/// `{ name, type, content }` for deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordMutation {
    #[serde(skip)]
    kind: MutationKind,
    name: String,
    #[serde(rename = "type")]
    record_type: RecordType,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
}

impl RecordMutation {
    /// TXT addition. A trailing dot on `name` is removed.
    pub fn add_txt(name: &str, content: impl Into<String>, ttl: u32) -> Self {
        Self {
            kind: MutationKind::Add,
            name: normalize_domain_name(name),
            record_type: RecordType::Txt,
            content: content.into(),
            ttl: Some(ttl),
        }
    }

    /// TXT deletion. A trailing dot on `name` is removed.
    pub fn delete_txt(name: &str, content: impl Into<String>) -> Self {
        Self {
            kind: MutationKind::Delete,
            name: normalize_domain_name(name),
            record_type: RecordType::Txt,
            content: content.into(),
            ttl: None,
        }
    }

    pub fn kind(&self) -> MutationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }
}

/// Body of a `zoneUpdate` request.
///
/// Mutations are routed into `recordsToAdd` or `recordsToDelete` by their
/// kind, so the lists can never hold the wrong kind. Both lists are always
/// serialized, empty ones as `[]`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnvelope {
    auth_token: String,
    zone_config: ZoneSelector,
    records_to_add: Vec<RecordMutation>,
    records_to_delete: Vec<RecordMutation>,
}

impl UpdateEnvelope {
    pub fn new(auth_token: impl Into<String>, zone: ZoneSelector) -> Self {
        Self {
            auth_token: auth_token.into(),
            zone_config: zone,
            records_to_add: Vec::new(),
            records_to_delete: Vec::new(),
        }
    }

    /// Append a mutation to the list matching its kind, keeping order.
    #[must_use]
    pub fn with_mutation(mut self, mutation: RecordMutation) -> Self {
        match mutation.kind {
            MutationKind::Add => self.records_to_add.push(mutation),
            MutationKind::Delete => self.records_to_delete.push(mutation),
        }
        self
    }

    pub fn zone(&self) -> &ZoneSelector {
        &self.zone_config
    }

    pub fn records_to_add(&self) -> &[RecordMutation] {
        &self.records_to_add
    }

    pub fn records_to_delete(&self) -> &[RecordMutation] {
        &self.records_to_delete
    }

    /// Encode the request body.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ProviderError::SerializationError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })
    }

    /// Request body for logging, with the auth token masked.
    pub fn redacted_json(&self) -> String {
        let mut redacted = self.clone();
        redacted.auth_token = mask_secret(&self.auth_token);
        serde_json::to_string_pretty(&redacted).unwrap_or_else(|_| "无法序列化请求体".to_string())
    }
}

impl std::fmt::Debug for UpdateEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateEnvelope")
            .field("auth_token", &mask_secret(&self.auth_token))
            .field("zone_config", &self.zone_config)
            .field("records_to_add", &self.records_to_add)
            .field("records_to_delete", &self.records_to_delete)
            .finish()
    }
}

// ============ Response ============

/// Status value the API returns for an accepted update.
pub const STATUS_SUCCESS: &str = "success";

/// Decoded `zoneUpdate` response.
///
/// Only `status` is interpreted. The remaining fields are kept as untyped
/// JSON; typed views are available through [`records`](Self::records) and
/// [`zone_config`](Self::zone_config).
///
/// Decodes from a JSON object only; arrays and scalars are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "serde_json::Map<String, Value>")]
pub struct UpdateOutcome {
    /// `"success"` for accepted updates; anything else is a failure.
    pub status: String,
    pub response: Value,
    pub errors: Value,
    pub warnings: Value,
    pub metadata: Value,
    /// HTTP status code of the exchange.
    pub http_status: u16,
    /// Response body exactly as received.
    pub raw_body: String,
}

/// Wire fields of the response document.
#[derive(Deserialize)]
struct OutcomeDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    status: String,
    #[serde(default)]
    response: Value,
    #[serde(default)]
    errors: Value,
    #[serde(default)]
    warnings: Value,
    #[serde(default)]
    metadata: Value,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TryFrom<serde_json::Map<String, Value>> for UpdateOutcome {
    type Error = serde_json::Error;

    fn try_from(map: serde_json::Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let doc: OutcomeDocument = serde_json::from_value(Value::Object(map))?;
        Ok(Self {
            status: doc.status,
            response: doc.response,
            errors: doc.errors,
            warnings: doc.warnings,
            metadata: doc.metadata,
            http_status: 0,
            raw_body: String::new(),
        })
    }
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Records the API echoed back in `response.records`.
    pub fn records(&self) -> Result<Vec<EchoedRecord>> {
        #[derive(Deserialize)]
        struct Records {
            #[serde(default)]
            records: Vec<EchoedRecord>,
        }

        if self.response.is_null() {
            return Ok(Vec::new());
        }
        let parsed: Records =
            serde_json::from_value(self.response.clone()).map_err(decode_error)?;
        Ok(parsed.records)
    }

    /// Zone configuration echoed back in `response.zoneConfig`.
    pub fn zone_config(&self) -> Result<Option<ZoneConfig>> {
        match self.response.get("zoneConfig") {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(decode_error),
        }
    }
}

fn decode_error(e: serde_json::Error) -> ProviderError {
    ProviderError::DecodeError {
        provider: PROVIDER_NAME.to_string(),
        detail: e.to_string(),
    }
}

/// hosting.de DNS record as returned in update responses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoedRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub content: Option<String>,
    pub ttl: Option<u32>,
    /// Integer for MX/SRV, null otherwise.
    pub priority: Option<Value>,
    pub last_change_date: Option<String>,
    pub record_template_id: Option<String>,
    pub zone_config_id: Option<String>,
}

/// hosting.de zone configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub email_address: Option<String>,
    pub last_change_date: Option<String>,
    pub master_ip: Option<String>,
    pub name: Option<String>,
    pub name_unicode: Option<String>,
    pub soa_values: Option<SoaValues>,
    pub status: Option<String>,
    pub template_values: Option<Value>,
    #[serde(rename = "type")]
    pub zone_type: Option<String>,
    #[serde(default)]
    pub zone_transfer_whitelist: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoaValues {
    pub expire: Option<u32>,
    pub negative_ttl: Option<u32>,
    pub refresh: Option<u32>,
    pub retry: Option<u32>,
    pub serial: Option<String>,
    pub ttl: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_mutation_serializes_ttl() {
        let m = RecordMutation::add_txt("_acme-challenge.example.com.", "abc", 120);
        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            json!({
                "name": "_acme-challenge.example.com",
                "type": "TXT",
                "content": "abc",
                "ttl": 120
            })
        );
    }

    #[test]
    fn delete_mutation_has_no_ttl() {
        let m = RecordMutation::delete_txt("_acme-challenge.example.com", "abc");
        let value = serde_json::to_value(&m).unwrap();
        assert!(value.get("ttl").is_none());
        assert_eq!(value["type"], "TXT");
        assert_eq!(m.kind(), MutationKind::Delete);
    }

    #[test]
    fn envelope_routes_mutations_by_kind() {
        let envelope = UpdateEnvelope::new("token", ZoneSelector::new("example.com"))
            .with_mutation(RecordMutation::delete_txt("a.example.com", "x"))
            .with_mutation(RecordMutation::add_txt("b.example.com", "y", 60));
        assert_eq!(envelope.records_to_add().len(), 1);
        assert_eq!(envelope.records_to_add()[0].name(), "b.example.com");
        assert_eq!(envelope.records_to_delete().len(), 1);
        assert_eq!(envelope.records_to_delete()[0].name(), "a.example.com");
    }

    #[test]
    fn envelope_wire_format() {
        let envelope = UpdateEnvelope::new("token", ZoneSelector::new("example.com"))
            .with_mutation(RecordMutation::add_txt("_acme-challenge.example.com", "v", 120));
        let value: Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "authToken": "token",
                "zoneConfig": { "name": "example.com" },
                "recordsToAdd": [
                    { "name": "_acme-challenge.example.com", "type": "TXT", "content": "v", "ttl": 120 }
                ],
                "recordsToDelete": []
            })
        );
    }

    #[test]
    fn redacted_json_masks_token() {
        let envelope = UpdateEnvelope::new("supersecrettoken", ZoneSelector::new("example.com"));
        let logged = envelope.redacted_json();
        assert!(!logged.contains("supersecrettoken"));
        assert!(logged.contains("supe***"));
        assert!(!format!("{envelope:?}").contains("supersecrettoken"));
    }

    #[test]
    fn outcome_decodes_minimal_document() {
        let outcome: UpdateOutcome = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(outcome.is_success());
        assert!(outcome.records().unwrap().is_empty());
        assert!(outcome.zone_config().unwrap().is_none());
    }

    #[test]
    fn outcome_without_status_is_not_success() {
        let outcome: UpdateOutcome = serde_json::from_str(r#"{"errors":[]}"#).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.status, "");
    }

    #[test]
    fn outcome_null_status_reads_as_empty() {
        let outcome: UpdateOutcome = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.status, "");
    }

    #[test]
    fn outcome_rejects_non_object_documents() {
        for body in [r#"["success"]"#, "[]", r#""success""#, "null", "42"] {
            let result = serde_json::from_str::<UpdateOutcome>(body);
            assert!(result.is_err(), "{body} decoded as {result:?}");
        }
    }

    #[test]
    fn outcome_exposes_echoed_records_and_zone() {
        let body = json!({
            "status": "success",
            "errors": [],
            "warnings": [],
            "metadata": { "clientTransactionId": "", "serverTransactionId": "abc" },
            "response": {
                "records": [{
                    "id": "r1",
                    "name": "_acme-challenge.example.com",
                    "type": "TXT",
                    "content": "\"value\"",
                    "ttl": 120,
                    "priority": null,
                    "lastChangeDate": "2024-01-01T00:00:00Z",
                    "recordTemplateId": null,
                    "zoneConfigId": "z1"
                }],
                "zoneConfig": {
                    "id": "z1",
                    "name": "example.com",
                    "nameUnicode": "example.com",
                    "type": "NATIVE",
                    "soaValues": { "expire": 1209600, "negativeTtl": 180, "refresh": 86400, "retry": 7200, "serial": "2024010101", "ttl": 86400 },
                    "zoneTransferWhitelist": []
                }
            }
        });
        let outcome: UpdateOutcome = serde_json::from_value(body).unwrap();
        let records = outcome.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].zone_config_id.as_deref(), Some("z1"));
        let zone = outcome.zone_config().unwrap().unwrap();
        assert_eq!(zone.name.as_deref(), Some("example.com"));
        assert_eq!(zone.soa_values.unwrap().negative_ttl, Some(180));
    }

    #[test]
    fn malformed_records_surface_decode_error() {
        let outcome: UpdateOutcome =
            serde_json::from_value(json!({ "status": "success", "response": { "records": "nope" } }))
                .unwrap();
        assert!(matches!(
            outcome.records(),
            Err(ProviderError::DecodeError { .. })
        ));
    }
}
