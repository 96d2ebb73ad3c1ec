use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price_per_person: f64,
    pub transport_type_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transport_type::Entity",
        from = "Column::TransportTypeId",
        to = "super::transport_type::Column::Id"
    )]
    TransportType,
    #[sea_orm(has_many = "super::tour::Entity")]
    Tours,
}

impl Related<super::transport_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransportType.def()
    }
}

impl Related<super::tour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tours.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
