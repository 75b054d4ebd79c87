// src/object/mod.rs
mod gvk;
mod identifier;

pub use gvk::GroupVersionKind;
pub use identifier::{human_name, HumanName};

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("Manifest is not a mapping")]
    NotAnObject,

    #[error("Failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// An unstructured cluster object.
///
/// Only the type and identity fields are read; everything else is carried
/// along untouched for the status engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    raw: Map<String, Value>,
}

impl Object {
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        let mut raw = Map::new();
        raw.insert("apiVersion".to_string(), Value::String(api_version.into()));
        raw.insert("kind".to_string(), Value::String(kind.into()));
        Self { raw }
    }

    pub fn from_value(value: Value) -> Result<Self, ObjectError> {
        match value {
            Value::Object(raw) => Ok(Self { raw }),
            _ => Err(ObjectError::NotAnObject),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ObjectError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ObjectError> {
        Self::from_value(serde_yaml::from_str(s)?)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata_mut()
            .insert("namespace".to_string(), Value::String(namespace.into()));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.metadata_mut()
            .insert("name".to_string(), Value::String(name.into()));
        self
    }

    pub fn api_version(&self) -> &str {
        self.raw.get("apiVersion").and_then(Value::as_str).unwrap_or("")
    }

    pub fn kind(&self) -> &str {
        self.raw.get("kind").and_then(Value::as_str).unwrap_or("")
    }

    pub fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::from_api_version(self.api_version(), self.kind())
    }

    /// Empty for cluster-scoped objects.
    pub fn namespace(&self) -> &str {
        self.metadata_str("namespace")
    }

    pub fn name(&self) -> &str {
        self.metadata_str("name")
    }

    pub fn human_name(&self) -> HumanName<'_> {
        HumanName::new(self)
    }

    pub fn as_value(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.raw)
    }

    fn metadata_str(&self, field: &str) -> &str {
        self.raw
            .get("metadata")
            .and_then(|m| m.get(field))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    fn metadata_mut(&mut self) -> &mut Map<String, Value> {
        let metadata = self
            .raw
            .entry("metadata")
            .or_insert_with(|| Value::Object(Map::new()));

        // A non-mapping metadata field cannot hold names; replace it.
        if !metadata.is_object() {
            *metadata = Value::Object(Map::new());
        }

        match metadata {
            Value::Object(map) => map,
            _ => unreachable!("metadata was just set to a mapping"),
        }
    }
}

impl TryFrom<Value> for Object {
    type Error = ObjectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_from_yaml() {
        let obj = Object::from_yaml_str(
            r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  namespace: prod
spec:
  replicas: 3
"#,
        )
        .unwrap();

        assert_eq!(obj.kind(), "Deployment");
        assert_eq!(obj.api_version(), "apps/v1");
        assert_eq!(obj.namespace(), "prod");
        assert_eq!(obj.name(), "web");
        assert_eq!(obj.as_value()["spec"]["replicas"], json!(3));
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let obj = Object::from_value(json!({})).unwrap();

        assert_eq!(obj.kind(), "");
        assert_eq!(obj.api_version(), "");
        assert_eq!(obj.namespace(), "");
        assert_eq!(obj.name(), "");
    }

    #[test]
    fn test_non_mapping_is_rejected() {
        assert!(matches!(
            Object::from_value(json!(["a", "b"])),
            Err(ObjectError::NotAnObject)
        ));
        assert!(matches!(
            Object::from_json_str("{ not json"),
            Err(ObjectError::Json(_))
        ));
        assert!(matches!(
            Object::from_yaml_str("- just\n- a list\n"),
            Err(ObjectError::NotAnObject)
        ));
    }

    #[test]
    fn test_builder_replaces_scalar_metadata() {
        let obj = Object::from_value(json!({ "kind": "Pod", "metadata": "bogus" }))
            .unwrap()
            .with_name("x");

        assert_eq!(obj.name(), "x");
        assert_eq!(obj.into_value()["metadata"], json!({ "name": "x" }));
    }
}
