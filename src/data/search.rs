use sea_orm::{
    sea_query::{Condition, Expr},
    ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect, Select,
};

use crate::data::filter::FilterSet;

/// Metadata an entity exposes to the search builder.
///
/// `join_related` attaches every table the entity's filter keys may reach,
/// `filter_column` resolves a logical key to a qualified column of the joined
/// query. Keeping both on the entity means repositories share one generic
/// [`search`] instead of each assembling its own WHERE clause.
pub trait Searchable: EntityTrait {
    /// Joins the related tables referenced by this entity's filter keys.
    fn join_related(select: Select<Self>) -> Select<Self> {
        select
    }

    /// Resolves a logical filter key to a column expression, or `None` for
    /// keys this entity does not recognize.
    fn filter_column(key: &str) -> Option<Expr>;
}

/// Builds a filtered select for `E` without executing it.
///
/// Criteria are ANDed in insertion order; keys the entity does not map are
/// skipped rather than rejected. The result set is de-duplicated because
/// link-table joins can fan out one row per association.
pub fn build_query<E: Searchable>(filters: &FilterSet) -> Select<E> {
    let mut condition = Condition::all();

    for (key, criterion) in filters.iter() {
        let Some(column) = E::filter_column(key) else {
            continue;
        };

        condition = condition.add(criterion.clone().into_expr(column));
    }

    E::join_related(E::find()).filter(condition).distinct()
}

/// Runs a [`FilterSet`] against `E` and returns the matching rows.
pub async fn search<E, C>(db: &C, filters: &FilterSet) -> Result<Vec<E::Model>, DbErr>
where
    E: Searchable,
    C: ConnectionTrait,
{
    build_query::<E>(filters).all(db).await
}
