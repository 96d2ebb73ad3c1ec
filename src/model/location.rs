use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDraft {
    pub name: String,
    pub country: String,
    pub description: Option<String>,
    pub location_type_id: i32,
}
