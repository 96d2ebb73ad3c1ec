use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub tour_type_id: i32,
    pub transport_id: Option<i32>,
    pub meal_id: Option<i32>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub price: f64,
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour_type::Entity",
        from = "Column::TourTypeId",
        to = "super::tour_type::Column::Id"
    )]
    TourType,
    #[sea_orm(
        belongs_to = "super::transport::Entity",
        from = "Column::TransportId",
        to = "super::transport::Column::Id"
    )]
    Transport,
    #[sea_orm(
        belongs_to = "super::meal::Entity",
        from = "Column::MealId",
        to = "super::meal::Column::Id"
    )]
    Meal,
    #[sea_orm(has_many = "super::tour_location::Entity")]
    TourLocations,
    #[sea_orm(has_many = "super::user_tour::Entity")]
    UserTours,
}

impl Related<super::tour_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourType.def()
    }
}

impl Related<super::transport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transport.def()
    }
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meal.def()
    }
}

impl Related<super::tour_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourLocations.def()
    }
}

impl Related<super::user_tour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserTours.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
