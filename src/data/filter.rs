use chrono::NaiveDate;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    Value,
};
use serde::{Deserialize, Serialize};

/// A typed filter value, convertible into a bound query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
}

impl From<FilterValue> for Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Int(v) => Value::from(v),
            FilterValue::Float(v) => Value::from(v),
            FilterValue::Text(v) => Value::from(v),
            FilterValue::Bool(v) => Value::from(v),
            FilterValue::Date(v) => Value::from(v),
        }
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Int(v as i64)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Float(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(v: NaiveDate) -> Self {
        FilterValue::Date(v)
    }
}

/// One comparison against a mapped column.
///
/// The caller picks the operator explicitly instead of the query builder
/// inferring it from the key name or the value's runtime type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Criterion {
    Equals(FilterValue),
    /// Case-insensitive substring match.
    Contains(String),
    GreaterOrEqual(FilterValue),
    LessOrEqual(FilterValue),
    In(Vec<FilterValue>),
}

impl Criterion {
    /// Renders the criterion against the given column expression.
    ///
    /// Every value ends up as a bound parameter. An empty `In` list matches
    /// nothing: the caller asked for membership in an empty set.
    pub(crate) fn into_expr(self, column: Expr) -> Expr {
        match self {
            Criterion::Equals(value) => column.eq(Value::from(value)),
            Criterion::Contains(text) => {
                Func::lower(column).like(format!("%{}%", text.to_lowercase()))
            }
            Criterion::GreaterOrEqual(value) => column.gte(Value::from(value)),
            Criterion::LessOrEqual(value) => column.lte(Value::from(value)),
            Criterion::In(values) if values.is_empty() => Expr::value(false),
            Criterion::In(values) => column.is_in(values.into_iter().map(Value::from)),
        }
    }
}

/// Ordered set of `(logical key, criterion)` pairs.
///
/// Keys are logical names resolved per entity by
/// [`Searchable::filter_column`](crate::data::search::Searchable::filter_column);
/// distinct keys may resolve to the same column (`min_price` and `max_price`
/// both target the price column). An empty set means no constraint at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSet {
    criteria: Vec<(String, Criterion)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, criterion: Criterion) -> Self {
        self.insert(key, criterion);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, criterion: Criterion) {
        self.criteria.push((key.into(), criterion));
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Criterion)> {
        self.criteria.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_set_keeps_insertion_order() {
        let filters = FilterSet::new()
            .with("min_price", Criterion::GreaterOrEqual(200.0.into()))
            .with("max_price", Criterion::LessOrEqual(500.0.into()))
            .with("keyword", Criterion::Contains("beach".to_string()));

        let keys: Vec<&str> = filters.iter().map(|(key, _)| key.as_str()).collect();

        assert_eq!(keys, vec!["min_price", "max_price", "keyword"]);
    }

    #[test]
    fn empty_filter_set_reports_empty() {
        assert!(FilterSet::new().is_empty());
        assert!(!FilterSet::new()
            .with("active", Criterion::Equals(true.into()))
            .is_empty());
    }

    #[test]
    fn filter_values_convert_from_native_types() {
        assert_eq!(FilterValue::from(7), FilterValue::Int(7));
        assert_eq!(FilterValue::from("x"), FilterValue::Text("x".to_string()));
        assert_eq!(FilterValue::from(1.5), FilterValue::Float(1.5));
        assert_eq!(FilterValue::from(true), FilterValue::Bool(true));
    }
}
