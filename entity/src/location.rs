use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub country: String,
    pub description: Option<String>,
    pub location_type_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location_type::Entity",
        from = "Column::LocationTypeId",
        to = "super::location_type::Column::Id"
    )]
    LocationType,
    #[sea_orm(has_many = "super::tour_location::Entity")]
    TourLocations,
}

impl Related<super::location_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationType.def()
    }
}

impl Related<super::tour_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourLocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
