use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        filter::FilterSet,
        link::UserTourRepository,
        user::{UserRepository, UserTypeRepository},
    },
    error::{conflict, ConflictError, Error, ValidationError},
    model::{
        db::{UserModel, UserTypeModel},
        user::UserDraft,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn validate(draft: &UserDraft) -> Result<(), ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        // Shallow shape check only; deliverability is not this layer's
        // problem.
        let email = draft.email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(ValidationError::InvalidEmail(draft.email.clone()));
        }

        Ok(())
    }

    pub async fn create(&self, draft: &UserDraft) -> Result<UserModel, Error> {
        Self::validate(draft)?;

        let repository = UserRepository::new(self.db);
        if repository.get_by_email(&draft.email).await?.is_some() {
            return Err(ConflictError::DuplicateEmail(draft.email.clone()).into());
        }

        let created = repository.create(draft).await.map_err(|err| {
            conflict::unique_violation(err, ConflictError::DuplicateEmail(draft.email.clone()))
        })?;

        tracing::info!(user_id = created.id, "registered user");

        Ok(created)
    }

    pub async fn update(&self, id: i32, draft: &UserDraft) -> Result<UserModel, Error> {
        Self::validate(draft)?;

        let repository = UserRepository::new(self.db);
        if let Some(existing) = repository.get_by_email(&draft.email).await? {
            if existing.id != id {
                return Err(ConflictError::DuplicateEmail(draft.email.clone()).into());
            }
        }

        repository
            .update(id, draft)
            .await
            .map_err(|err| {
                conflict::unique_violation(err, ConflictError::DuplicateEmail(draft.email.clone()))
            })?
            .ok_or(Error::NotFound { entity: "user", id })
    }

    /// Deletes a user along with their bookings.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        UserTourRepository::new(&txn).cancel_all_for_user(id).await?;
        if !UserRepository::new(&txn).delete(id).await? {
            return Err(Error::NotFound { entity: "user", id });
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get(id)
            .await?
            .ok_or(Error::NotFound { entity: "user", id })
    }

    pub async fn get_with_type(&self, id: i32) -> Result<(UserModel, Option<UserTypeModel>), Error> {
        UserRepository::new(self.db)
            .get_with_type(id)
            .await?
            .ok_or(Error::NotFound { entity: "user", id })
    }

    pub async fn get_all(&self) -> Result<Vec<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<UserModel>, Error> {
        Ok(UserRepository::new(self.db).search(filters).await?)
    }
}

/// Management of user types and their permission flags.
pub struct UserTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        admin: bool,
        manager: bool,
    ) -> Result<UserTypeModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        let repository = UserTypeRepository::new(self.db);
        if repository.get_by_name(name).await?.is_some() {
            return Err(ConflictError::DuplicateName {
                entity: "user type",
                name: name.to_string(),
            }
            .into());
        }

        let created = repository.create(name, admin, manager).await.map_err(|err| {
            conflict::unique_violation(
                err,
                ConflictError::DuplicateName {
                    entity: "user type",
                    name: name.to_string(),
                },
            )
        })?;

        Ok(created)
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        admin: bool,
        manager: bool,
    ) -> Result<UserTypeModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        let repository = UserTypeRepository::new(self.db);
        if let Some(existing) = repository.get_by_name(name).await? {
            if existing.id != id {
                return Err(ConflictError::DuplicateName {
                    entity: "user type",
                    name: name.to_string(),
                }
                .into());
            }
        }

        repository
            .update(id, name, admin, manager)
            .await?
            .ok_or(Error::NotFound {
                entity: "user type",
                id,
            })
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        if !UserTypeRepository::new(self.db).delete(id).await? {
            return Err(Error::NotFound {
                entity: "user type",
                id,
            });
        }

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<UserTypeModel, Error> {
        UserTypeRepository::new(self.db)
            .get(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "user type",
                id,
            })
    }

    pub async fn get_all(&self) -> Result<Vec<UserTypeModel>, Error> {
        Ok(UserTypeRepository::new(self.db).get_all().await?)
    }
}
