use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportDraft {
    pub name: String,
    pub price_per_person: f64,
    pub transport_type_id: i32,
}
