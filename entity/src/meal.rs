use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub meals_per_day: i32,
    pub cost_per_day: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_meal_type::Entity")]
    MealMealTypes,
    #[sea_orm(has_many = "super::tour::Entity")]
    Tours,
}

impl Related<super::meal_meal_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealMealTypes.def()
    }
}

impl Related<super::tour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tours.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
