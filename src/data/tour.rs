use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    JoinType, ModelTrait, QuerySelect, RelationTrait, Select, Set,
};

use crate::{
    data::{
        filter::FilterSet,
        link::TourLocationRepository,
        search::{self, Searchable},
    },
    model::{
        db::TourModel,
        tour::{TourDetails, TourDraft},
    },
};

pub struct TourRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TourRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the draft's scalar fields; location links are the caller's job.
    pub async fn create(&self, draft: &TourDraft) -> Result<TourModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::tour::ActiveModel {
            description: Set(draft.description.clone()),
            tour_type_id: Set(draft.tour_type_id),
            transport_id: Set(draft.transport_id),
            meal_id: Set(draft.meal_id),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            price: Set(draft.price),
            active: Set(draft.active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites every editable field from the draft; `None` when the id does
    /// not exist.
    pub async fn update(&self, id: i32, draft: &TourDraft) -> Result<Option<TourModel>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.description = Set(draft.description.clone());
        active.tour_type_id = Set(draft.tour_type_id);
        active.transport_id = Set(draft.transport_id);
        active.meal_id = Set(draft.meal_id);
        active.start_date = Set(draft.start_date);
        active.end_date = Set(draft.end_date);
        active.price = Set(draft.price);
        active.active = Set(draft.active);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tour::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get(&self, id: i32) -> Result<Option<TourModel>, DbErr> {
        entity::prelude::Tour::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<TourModel>, DbErr> {
        entity::prelude::Tour::find().all(self.db).await
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<TourModel>, DbErr> {
        search::search::<entity::prelude::Tour, _>(self.db, filters).await
    }

    /// Loads a tour with its type, transport, meal, and locations resolved.
    pub async fn get_with_details(&self, id: i32) -> Result<Option<TourDetails>, DbErr> {
        let Some(tour) = self.get(id).await? else {
            return Ok(None);
        };

        let tour_type = tour
            .find_related(entity::prelude::TourType)
            .one(self.db)
            .await?;
        let transport = tour
            .find_related(entity::prelude::Transport)
            .one(self.db)
            .await?;
        let meal = tour.find_related(entity::prelude::Meal).one(self.db).await?;
        let locations = TourLocationRepository::new(self.db)
            .locations_for_tour(tour.id)
            .await?;

        Ok(Some(TourDetails {
            tour,
            tour_type,
            transport,
            meal,
            locations,
        }))
    }
}

impl Searchable for entity::tour::Entity {
    fn join_related(select: Select<Self>) -> Select<Self> {
        select
            .join(JoinType::LeftJoin, entity::tour::Relation::Transport.def())
            .join(JoinType::LeftJoin, entity::tour::Relation::TourLocations.def())
            .join(
                JoinType::LeftJoin,
                entity::tour_location::Relation::Location.def(),
            )
    }

    fn filter_column(key: &str) -> Option<Expr> {
        let column = match key {
            "keyword" | "description" => {
                Expr::col((entity::prelude::Tour, entity::tour::Column::Description))
            }
            "tour_type" => Expr::col((entity::prelude::Tour, entity::tour::Column::TourTypeId)),
            "transport_type" => Expr::col((
                entity::prelude::Transport,
                entity::transport::Column::TransportTypeId,
            )),
            "active" => Expr::col((entity::prelude::Tour, entity::tour::Column::Active)),
            "min_price" | "max_price" => {
                Expr::col((entity::prelude::Tour, entity::tour::Column::Price))
            }
            "starts_after" => Expr::col((entity::prelude::Tour, entity::tour::Column::StartDate)),
            "ends_before" => Expr::col((entity::prelude::Tour, entity::tour::Column::EndDate)),
            "country" => Expr::col((entity::prelude::Location, entity::location::Column::Country)),
            "location" => Expr::col((
                entity::prelude::TourLocation,
                entity::tour_location::Column::LocationId,
            )),
            _ => return None,
        };

        Some(column)
    }
}
