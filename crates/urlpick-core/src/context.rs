//! Per-request metadata handed to every user-supplied function.

use serde::{Deserialize, Serialize};

/// Identity of the process that asked for the URL to be opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInfo {
    pub name: String,
    #[serde(alias = "bundleID")]
    pub bundle_id: String,
    pub path: String,
}

/// Request context: the requesting pid plus, when known, the opener.
///
/// Serialized form puts the opener fields next to `pid`
/// (`{"pid":42,"name":"Mail","bundleId":"com.apple.mail","path":"/..."}`),
/// never under an `opener` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub pid: i32,
    #[serde(flatten)]
    pub opener: Option<ProcessInfo>,
}

impl RequestContext {
    pub fn new(pid: i32, opener: Option<ProcessInfo>) -> Self {
        Self { pid, opener }
    }

    pub fn name(&self) -> Option<&str> {
        self.opener.as_ref().map(|o| o.name.as_str())
    }

    pub fn bundle_id(&self) -> Option<&str> {
        self.opener.as_ref().map(|o| o.bundle_id.as_str())
    }

    pub fn path(&self) -> Option<&str> {
        self.opener.as_ref().map(|o| o.path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail() -> ProcessInfo {
        ProcessInfo {
            name: "Mail".to_string(),
            bundle_id: "com.apple.mail".to_string(),
            path: "/System/Applications/Mail.app".to_string(),
        }
    }

    #[test]
    fn opener_fields_serialize_flat() {
        let ctx = RequestContext::new(42, Some(mail()));
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pid": 42,
                "name": "Mail",
                "bundleId": "com.apple.mail",
                "path": "/System/Applications/Mail.app",
            })
        );
        assert!(json.get("opener").is_none());
    }

    #[test]
    fn missing_opener_serializes_pid_only() {
        let ctx = RequestContext::new(7, None);
        assert_eq!(
            serde_json::to_value(&ctx).unwrap(),
            serde_json::json!({ "pid": 7 })
        );
        assert_eq!(ctx.name(), None);
        assert_eq!(ctx.bundle_id(), None);
    }

    #[test]
    fn accessors_expose_flattened_view() {
        let ctx = RequestContext::new(1, Some(mail()));
        assert_eq!(ctx.name(), Some("Mail"));
        assert_eq!(ctx.bundle_id(), Some("com.apple.mail"));
        assert_eq!(ctx.path(), Some("/System/Applications/Mail.app"));
    }

    #[test]
    fn process_info_accepts_legacy_bundle_key() {
        let info: ProcessInfo = serde_json::from_str(
            r#"{"name":"Mail","bundleID":"com.apple.mail","path":"/x"}"#,
        )
        .unwrap();
        assert_eq!(info.bundle_id, "com.apple.mail");
    }
}
