use serde::{Deserialize, Serialize};

use crate::model::db::{MealModel, MealTypeModel};

/// User-edited meal fields; `meal_type_ids` is the full desired association set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDraft {
    pub name: String,
    pub meals_per_day: i32,
    pub cost_per_day: f64,
    pub meal_type_ids: Option<Vec<i32>>,
}

/// A meal with its meal types resolved.
#[derive(Debug, Clone)]
pub struct MealDetails {
    pub meal: MealModel,
    pub meal_types: Vec<MealTypeModel>,
}
