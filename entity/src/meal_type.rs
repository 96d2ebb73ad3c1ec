use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "meal_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_meal_type::Entity")]
    MealMealTypes,
}

impl Related<super::meal_meal_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealMealTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
