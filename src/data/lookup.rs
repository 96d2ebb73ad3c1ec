use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, Set,
};

/// A reference table shaped as `id` plus a unique `name`.
///
/// Tour types, transport types, meal types, and location types all share this
/// shape, so they share one repository. User types carry permission flags and
/// get their own repository in [`crate::data::user`].
pub trait LookupEntity: EntityTrait {
    type ActiveModel: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;

    /// Label used in error messages, e.g. "tour type".
    const LABEL: &'static str;

    fn name_column() -> Self::Column;
    fn new_with_name(name: &str) -> <Self as LookupEntity>::ActiveModel;
    fn rename(model: Self::Model, name: &str) -> <Self as LookupEntity>::ActiveModel;
    fn id(model: &Self::Model) -> i32;
    fn name(model: &Self::Model) -> &str;
}

pub struct LookupRepository<'a, C: ConnectionTrait, E: LookupEntity> {
    db: &'a C,
    entity: PhantomData<E>,
}

pub type TourTypeRepository<'a, C> = LookupRepository<'a, C, entity::prelude::TourType>;
pub type TransportTypeRepository<'a, C> = LookupRepository<'a, C, entity::prelude::TransportType>;
pub type MealTypeRepository<'a, C> = LookupRepository<'a, C, entity::prelude::MealType>;
pub type LocationTypeRepository<'a, C> = LookupRepository<'a, C, entity::prelude::LocationType>;

impl<'a, C, E> LookupRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: LookupEntity,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<<E as LookupEntity>::ActiveModel>,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn create(&self, name: &str) -> Result<E::Model, DbErr> {
        E::new_with_name(name).insert(self.db).await
    }

    /// Renames an entry; `None` when the id does not exist.
    pub async fn rename(&self, id: i32, name: &str) -> Result<Option<E::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let updated = E::rename(existing, name).update(self.db).await?;

        Ok(Some(updated))
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = E::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::name_column().eq(name))
            .one(self.db)
            .await
    }
}

macro_rules! impl_lookup_entity {
    ($module:ident, $label:literal) => {
        impl LookupEntity for entity::$module::Entity {
            type ActiveModel = entity::$module::ActiveModel;

            const LABEL: &'static str = $label;

            fn name_column() -> Self::Column {
                entity::$module::Column::Name
            }

            fn new_with_name(name: &str) -> entity::$module::ActiveModel {
                let now = Utc::now().naive_utc();
                entity::$module::ActiveModel {
                    name: Set(name.to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
            }

            fn rename(model: Self::Model, name: &str) -> entity::$module::ActiveModel {
                let mut active = model.into_active_model();
                active.name = Set(name.to_string());
                active.updated_at = Set(Utc::now().naive_utc());
                active
            }

            fn id(model: &Self::Model) -> i32 {
                model.id
            }

            fn name(model: &Self::Model) -> &str {
                &model.name
            }
        }
    };
}

impl_lookup_entity!(tour_type, "tour type");
impl_lookup_entity!(transport_type, "transport type");
impl_lookup_entity!(meal_type, "meal type");
impl_lookup_entity!(location_type, "location type");
