use serde_json::Value;

use crate::errors::AbiError;

/// A resolved contract interface: the JSON ABI exactly as the resolver returned it.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractAbi(Value);

impl ContractAbi {
    /// Accepts a bare ABI array, or a build artifact carrying it under `abi`.
    pub fn from_json(value: Value) -> Result<Self, AbiError> {
        let entries = match value {
            Value::Object(mut artifact) => artifact.remove("abi").ok_or(AbiError::NotAnArray)?,
            other => other,
        };
        let Some(items) = entries.as_array() else {
            return Err(AbiError::NotAnArray);
        };
        if let Some(i) = items.iter().position(|entry| !entry.is_object()) {
            return Err(AbiError::MalformedEntry(i));
        }
        Ok(Self(entries))
    }

    /// The `function` entry named `name`, if the interface declares one.
    pub fn function(&self, name: &str) -> Option<&Value> {
        self.entries().iter().find(|entry| {
            entry.get("type").and_then(Value::as_str) == Some("function")
                && entry.get("name").and_then(Value::as_str) == Some(name)
        })
    }

    pub fn entries(&self) -> &[Value] {
        self.0.as_array().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}
