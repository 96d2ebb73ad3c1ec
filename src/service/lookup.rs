use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, IntoActiveModel, PrimaryKeyTrait};

use crate::{
    data::lookup::{LookupEntity, LookupRepository},
    error::{conflict, ConflictError, Error, ValidationError},
};

/// Shared service for the name-only reference tables.
///
/// Rejects blank names, reports duplicate names as conflicts, and maps a
/// missing id to [`Error::NotFound`] using the entity's label.
pub struct LookupService<'a, E: LookupEntity> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

pub type TourTypeService<'a> = LookupService<'a, entity::prelude::TourType>;
pub type TransportTypeService<'a> = LookupService<'a, entity::prelude::TransportType>;
pub type MealTypeService<'a> = LookupService<'a, entity::prelude::MealType>;
pub type LocationTypeService<'a> = LookupService<'a, entity::prelude::LocationType>;

impl<'a, E> LookupService<'a, E>
where
    E: LookupEntity,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<<E as LookupEntity>::ActiveModel>,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    fn repository(&self) -> LookupRepository<'_, DatabaseConnection, E> {
        LookupRepository::new(self.db)
    }

    fn validated(name: &str) -> Result<&str, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        Ok(trimmed)
    }

    pub async fn create(&self, name: &str) -> Result<E::Model, Error> {
        let name = Self::validated(name)?;

        if self.repository().get_by_name(name).await?.is_some() {
            return Err(ConflictError::DuplicateName {
                entity: E::LABEL,
                name: name.to_string(),
            }
            .into());
        }

        let created = self.repository().create(name).await.map_err(|err| {
            conflict::unique_violation(
                err,
                ConflictError::DuplicateName {
                    entity: E::LABEL,
                    name: name.to_string(),
                },
            )
        })?;

        tracing::info!(entity = E::LABEL, name = E::name(&created), "created");

        Ok(created)
    }

    pub async fn rename(&self, id: i32, name: &str) -> Result<E::Model, Error> {
        let name = Self::validated(name)?;

        if let Some(existing) = self.repository().get_by_name(name).await? {
            // Renaming an entry to its own current name is a no-op, not a
            // conflict.
            if E::id(&existing) != id {
                return Err(ConflictError::DuplicateName {
                    entity: E::LABEL,
                    name: name.to_string(),
                }
                .into());
            }
        }

        self.repository()
            .rename(id, name)
            .await
            .map_err(|err| {
                conflict::unique_violation(
                    err,
                    ConflictError::DuplicateName {
                        entity: E::LABEL,
                        name: name.to_string(),
                    },
                )
            })?
            .ok_or(Error::NotFound {
                entity: E::LABEL,
                id,
            })
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        if !self.repository().delete(id).await? {
            return Err(Error::NotFound {
                entity: E::LABEL,
                id,
            });
        }

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<E::Model, Error> {
        self.repository()
            .get(id)
            .await?
            .ok_or(Error::NotFound {
                entity: E::LABEL,
                id,
            })
    }

    pub async fn get_all(&self) -> Result<Vec<E::Model>, Error> {
        Ok(self.repository().get_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use wayfare_test_utils::prelude::*;

    use super::*;
    use crate::error::{ConflictError, Error, ValidationError};

    mod create {
        use super::*;

        #[tokio::test]
        async fn rejects_blank_name() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::TourType)?;
            let service = TourTypeService::new(&test.db);

            let result = service.create("   ").await;

            assert!(matches!(
                result,
                Err(Error::Validation(ValidationError::MissingField("name")))
            ));
            Ok(())
        }

        #[tokio::test]
        async fn trims_name_before_saving() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::TourType)?;
            let service = TourTypeService::new(&test.db);

            let created = service.create("  Hiking  ").await.unwrap();

            assert_eq!(created.name, "Hiking");
            Ok(())
        }

        #[tokio::test]
        async fn duplicate_name_is_a_structured_conflict() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::MealType)?;
            let service = MealTypeService::new(&test.db);

            service.create("Vegetarian").await.unwrap();
            let result = service.create("Vegetarian").await;

            assert!(matches!(
                result,
                Err(Error::Conflict(ConflictError::DuplicateName { entity, name }))
                    if entity == "meal type" && name == "Vegetarian"
            ));
            Ok(())
        }
    }

    mod rename {
        use super::*;

        #[tokio::test]
        async fn renaming_to_own_name_is_allowed() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::TransportType)?;
            let service = TransportTypeService::new(&test.db);

            let created = service.create("Coach").await.unwrap();
            let renamed = service.rename(created.id, "Coach").await.unwrap();

            assert_eq!(renamed.name, "Coach");
            Ok(())
        }

        #[tokio::test]
        async fn renaming_to_another_entrys_name_conflicts() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::TransportType)?;
            let service = TransportTypeService::new(&test.db);

            service.create("Coach").await.unwrap();
            let plane = service.create("Plane").await.unwrap();
            let result = service.rename(plane.id, "Coach").await;

            assert!(matches!(
                result,
                Err(Error::Conflict(ConflictError::DuplicateName { .. }))
            ));
            Ok(())
        }

        #[tokio::test]
        async fn missing_id_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::TransportType)?;
            let service = TransportTypeService::new(&test.db);

            let result = service.rename(404, "Coach").await;

            assert!(matches!(result, Err(Error::NotFound { id: 404, .. })));
            Ok(())
        }
    }

    mod delete {
        use super::*;

        #[tokio::test]
        async fn missing_id_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LocationType)?;
            let service = LocationTypeService::new(&test.db);

            let result = service.delete(404).await;

            assert!(matches!(
                result,
                Err(Error::NotFound { entity: "location type", id: 404 })
            ));
            Ok(())
        }
    }
}
