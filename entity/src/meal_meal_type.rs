use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "meal_meal_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub meal_id: i32,
    pub meal_type_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meal::Entity",
        from = "Column::MealId",
        to = "super::meal::Column::Id"
    )]
    Meal,
    #[sea_orm(
        belongs_to = "super::meal_type::Entity",
        from = "Column::MealTypeId",
        to = "super::meal_type::Column::Id"
    )]
    MealType,
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meal.def()
    }
}

impl Related<super::meal_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
