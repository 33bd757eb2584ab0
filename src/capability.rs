use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Snapshot of what a host needs to register a capability.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub data_tags: Vec<u32>,
}

/// A function-calling handler, independent of any particular host SDK.
///
/// The host reads `description` and `input_schema` to advertise the function
/// to the model, and calls `invoke` for every message tagged with one of
/// `data_tags`.
#[async_trait]
pub trait Capability: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn input_schema(&self) -> Value;

    fn data_tags(&self) -> &[u32];

    fn subscribes_to(&self, tag: u32) -> bool {
        self.data_tags().contains(&tag)
    }

    fn descriptor(&self) -> CapabilityDescriptor {
        CapabilityDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
            data_tags: self.data_tags().to_vec(),
        }
    }

    /// Runs the handler on the model's function-call arguments.
    async fn invoke(&self, arguments: Value) -> anyhow::Result<String>;
}
