use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "ils_reference";

/// One ILS framework behaviour: a capability × level × behaviour row with its
/// descriptive standard. Seeded once at startup; read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: String,
    pub capability_name: String,
    pub aps_level: String,
    pub behaviour: String,
    pub description: String,
}
