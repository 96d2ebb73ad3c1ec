use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::db::{LocationModel, MealModel, TourModel, TourTypeModel, TransportModel};

/// User-edited tour fields, used for both create and update.
///
/// `location_ids` is the full desired association set: the save path replaces
/// whatever is currently linked. `None` and an empty list both mean "no
/// locations".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourDraft {
    pub description: String,
    pub tour_type_id: i32,
    pub transport_id: Option<i32>,
    pub meal_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: f64,
    pub active: bool,
    pub location_ids: Option<Vec<i32>>,
}

/// A tour with its related objects resolved for a detail view.
///
/// Related fields are `None` when the referenced row is absent; callers must
/// check rather than assume referential integrity.
#[derive(Debug, Clone)]
pub struct TourDetails {
    pub tour: TourModel,
    pub tour_type: Option<TourTypeModel>,
    pub transport: Option<TransportModel>,
    pub meal: Option<MealModel>,
    pub locations: Vec<LocationModel>,
}
