//! Response envelope shared by every Reptoid endpoint.
//!
//! Each response body has the shape `{result: "ok" | "error", data?, reason?}`.
//! Decoding maps it to either the `data` payload or a [`ServerError`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ServerError};

/// Value of `result` in a successful envelope.
pub const RESULT_OK: &str = "ok";

/// Value of `result` in a failed envelope.
pub const RESULT_ERROR: &str = "error";

/// The `{result, data, reason}` response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// "ok" on success; anything else is a failure
    pub result: String,
    /// Operation-specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ResponseEnvelope {
    /// Build a successful envelope around `data`.
    #[must_use]
    pub fn ok(data: Value) -> Self {
        Self {
            result: RESULT_OK.to_string(),
            data: Some(data),
            reason: None,
        }
    }

    /// Build a failed envelope carrying `reason`.
    #[must_use]
    pub fn error(reason: &str) -> Self {
        Self {
            result: RESULT_ERROR.to_string(),
            data: None,
            reason: Some(reason.to_string()),
        }
    }

    /// Whether the server reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result == RESULT_OK
    }

    /// Unwrap the envelope into its payload.
    ///
    /// Absent or null `data` on an `ok` envelope becomes `Value::Null`; any
    /// other `result` becomes [`Error::Server`] with the envelope's reason.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Server`] when `result` is not `"ok"`.
    pub fn into_data(self) -> Result<Value, Error> {
        if self.is_ok() {
            return Ok(self.data.unwrap_or(Value::Null));
        }
        Err(ServerError::new(self.reason.unwrap_or_default()).into())
    }
}

/// Deserialize the whole payload, which must be present.
pub(crate) fn required<T: DeserializeOwned>(data: Value) -> Result<T, Error> {
    if data.is_null() {
        return Err(Error::InvalidResponse("Missing data in response".to_string()));
    }
    serde_json::from_value(data).map_err(Error::from)
}

/// Project `data[field]` as a list, treating an absent or null field as empty.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the field is present but its items do
/// not match `T`.
pub fn list_field<T: DeserializeOwned>(data: &Value, field: &str) -> Result<Vec<T>, Error> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items.clone()).map_err(Error::from),
    }
}

/// Project `data[field]` as a string, which must be present.
pub(crate) fn string_field(data: &Value, field: &str) -> Result<String, Error> {
    data.get(field)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| Error::InvalidResponse(format!("Missing {field} in response")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_yields_data() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"result": "ok", "data": {"id": "w1"}}))
                .expect("valid envelope");

        assert!(envelope.is_ok());
        assert_eq!(envelope.into_data().expect("ok"), json!({"id": "w1"}));
    }

    #[test]
    fn test_ok_envelope_without_data_is_null() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"result": "ok"})).expect("valid envelope");

        assert_eq!(envelope.into_data().expect("ok"), Value::Null);
    }

    #[test]
    fn test_error_envelope_yields_server_error() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"result": "error", "reason": "no-access"}))
                .expect("valid envelope");

        let err = envelope.into_data().expect_err("should fail");
        assert_eq!(err.to_string(), "Error:no-access");
        assert!(err.is_server());
    }

    #[test]
    fn test_error_builder_wire_shape() {
        let envelope = ResponseEnvelope::error("workspace-not-found");

        assert!(!envelope.is_ok());
        assert_eq!(
            serde_json::to_value(&envelope).expect("serialize"),
            json!({"result": "error", "reason": "workspace-not-found"})
        );
        assert_eq!(
            envelope.into_data().expect_err("should fail").to_string(),
            "Error:workspace-not-found"
        );
    }

    #[test]
    fn test_unknown_result_is_failure() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"result": "pending", "reason": "later"}))
                .expect("valid envelope");

        assert!(!envelope.is_ok());
        assert_eq!(
            envelope.into_data().expect_err("should fail").to_string(),
            "Error:later"
        );
    }

    #[test]
    fn test_missing_result_is_rejected() {
        let parsed = serde_json::from_value::<ResponseEnvelope>(json!({"data": {}}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_list_field_defaults_to_empty() {
        let absent: Vec<Value> = list_field(&json!({}), "repos").expect("absent");
        let null: Vec<Value> = list_field(&json!({"repos": null}), "repos").expect("null");
        let no_data: Vec<Value> = list_field(&Value::Null, "repos").expect("no data");

        assert!(absent.is_empty());
        assert!(null.is_empty());
        assert!(no_data.is_empty());
    }

    #[test]
    fn test_list_field_keeps_order() {
        let names: Vec<String> =
            list_field(&json!({"repos": ["b", "a", "c"]}), "repos").expect("list");
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_required_rejects_null() {
        let err = required::<Value>(Value::Null).expect_err("null payload");
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_string_field() {
        let data = json!({"accessToken": "gho_123"});

        assert_eq!(string_field(&data, "accessToken").expect("present"), "gho_123");
        assert!(matches!(
            string_field(&data, "missing"),
            Err(Error::InvalidResponse(_))
        ));
    }
}
