use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Set,
};

use crate::{
    data::{
        filter::FilterSet,
        search::{self, Searchable},
    },
    model::{
        db::{TransportModel, TransportTypeModel},
        transport::TransportDraft,
    },
};

pub struct TransportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, draft: &TransportDraft) -> Result<TransportModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::transport::ActiveModel {
            name: Set(draft.name.clone()),
            price_per_person: Set(draft.price_per_person),
            transport_type_id: Set(draft.transport_type_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        draft: &TransportDraft,
    ) -> Result<Option<TransportModel>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = Set(draft.name.clone());
        active.price_per_person = Set(draft.price_per_person);
        active.transport_type_id = Set(draft.transport_type_id);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Transport::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get(&self, id: i32) -> Result<Option<TransportModel>, DbErr> {
        entity::prelude::Transport::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<TransportModel>, DbErr> {
        entity::prelude::Transport::find().all(self.db).await
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<TransportModel>, DbErr> {
        search::search::<entity::prelude::Transport, _>(self.db, filters).await
    }

    pub async fn get_with_type(
        &self,
        id: i32,
    ) -> Result<Option<(TransportModel, Option<TransportTypeModel>)>, DbErr> {
        entity::prelude::Transport::find_by_id(id)
            .find_also_related(entity::prelude::TransportType)
            .one(self.db)
            .await
    }
}

impl Searchable for entity::transport::Entity {
    fn filter_column(key: &str) -> Option<Expr> {
        let column = match key {
            "name" => Expr::col((entity::prelude::Transport, entity::transport::Column::Name)),
            "transport_type" => Expr::col((
                entity::prelude::Transport,
                entity::transport::Column::TransportTypeId,
            )),
            "min_price" | "max_price" => Expr::col((
                entity::prelude::Transport,
                entity::transport::Column::PricePerPerson,
            )),
            _ => return None,
        };

        Some(column)
    }
}
