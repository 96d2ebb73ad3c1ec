use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};

use crate::{
    data::{
        filter::FilterSet,
        search::{self, Searchable},
    },
    model::{
        db::{UserModel, UserTypeModel},
        user::UserDraft,
    },
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, draft: &UserDraft) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::user::ActiveModel {
            name: Set(draft.name.clone()),
            email: Set(draft.email.clone()),
            user_type_id: Set(draft.user_type_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(&self, id: i32, draft: &UserDraft) -> Result<Option<UserModel>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = Set(draft.name.clone());
        active.email = Set(draft.email.clone());
        active.user_type_id = Set(draft.user_type_id);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get(&self, id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<UserModel>, DbErr> {
        search::search::<entity::prelude::User, _>(self.db, filters).await
    }

    pub async fn get_with_type(
        &self,
        id: i32,
    ) -> Result<Option<(UserModel, Option<UserTypeModel>)>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::UserType)
            .one(self.db)
            .await
    }
}

impl Searchable for entity::user::Entity {
    fn filter_column(key: &str) -> Option<Expr> {
        let column = match key {
            "name" => Expr::col((entity::prelude::User, entity::user::Column::Name)),
            "email" => Expr::col((entity::prelude::User, entity::user::Column::Email)),
            "user_type" => Expr::col((entity::prelude::User, entity::user::Column::UserTypeId)),
            _ => return None,
        };

        Some(column)
    }
}

/// User types carry permission flags, so they do not fit the shared
/// [`LookupRepository`](crate::data::lookup::LookupRepository) shape.
pub struct UserTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        admin: bool,
        manager: bool,
    ) -> Result<UserTypeModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::user_type::ActiveModel {
            name: Set(name.to_string()),
            admin: Set(admin),
            manager: Set(manager),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        admin: bool,
        manager: bool,
    ) -> Result<Option<UserTypeModel>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = Set(name.to_string());
        active.admin = Set(admin);
        active.manager = Set(manager);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get(&self, id: i32) -> Result<Option<UserTypeModel>, DbErr> {
        entity::prelude::UserType::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<UserTypeModel>, DbErr> {
        entity::prelude::UserType::find().all(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<UserTypeModel>, DbErr> {
        entity::prelude::UserType::find()
            .filter(entity::user_type::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use wayfare_test_utils::prelude::*;

    use super::*;
    use crate::data::filter::Criterion;

    fn draft(name: &str, email: &str, user_type_id: i32) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            user_type_id,
        }
    }

    mod create {
        use super::*;

        #[tokio::test]
        async fn persists_draft_fields() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = UserRepository::new(&test.db);

            let user_type = test.users().insert_user_type("Customer", false, false).await?;
            let created = repository
                .create(&draft("Ada", "ada@example.com", user_type.id))
                .await?;

            assert_eq!(created.name, "Ada");
            assert_eq!(created.email, "ada@example.com");
            Ok(())
        }

        #[tokio::test]
        async fn rejects_duplicate_email() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = UserRepository::new(&test.db);

            let user_type = test.users().insert_user_type("Customer", false, false).await?;
            repository
                .create(&draft("Ada", "ada@example.com", user_type.id))
                .await?;
            let result = repository
                .create(&draft("Other Ada", "ada@example.com", user_type.id))
                .await;

            assert!(matches!(
                result.map_err(|err| err.sql_err()),
                Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
            ));
            Ok(())
        }
    }

    mod get_by_email {
        use super::*;

        #[tokio::test]
        async fn finds_exact_address() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = UserRepository::new(&test.db);

            let user_type = test.users().insert_user_type("Customer", false, false).await?;
            test.users()
                .insert_user("Ada", "ada@example.com", user_type.id)
                .await?;

            let found = repository.get_by_email("ada@example.com").await?;

            assert_eq!(found.map(|user| user.name), Some("Ada".to_string()));
            assert!(repository.get_by_email("none@example.com").await?.is_none());
            Ok(())
        }
    }

    mod search {
        use super::*;

        #[tokio::test]
        async fn filters_by_user_type() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = UserRepository::new(&test.db);

            let customer = test.users().insert_user_type("Customer", false, false).await?;
            let manager = test.users().insert_user_type("Manager", false, true).await?;
            test.users().insert_user("Ada", "ada@example.com", customer.id).await?;
            test.users()
                .insert_user("Grace", "grace@example.com", manager.id)
                .await?;

            let filters =
                FilterSet::new().with("user_type", Criterion::Equals(manager.id.into()));
            let found = repository.search(&filters).await?;

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].name, "Grace");
            Ok(())
        }
    }

    mod user_types {
        use super::*;

        #[tokio::test]
        async fn create_and_update_keep_permission_flags() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = UserTypeRepository::new(&test.db);

            let created = repository.create("Manager", false, true).await?;
            assert!(!created.admin);
            assert!(created.manager);

            let updated = repository
                .update(created.id, "Administrator", true, true)
                .await?
                .unwrap();
            assert!(updated.admin);
            assert_eq!(updated.name, "Administrator");
            Ok(())
        }

        #[tokio::test]
        async fn get_by_name_matches_exactly() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = UserTypeRepository::new(&test.db);

            repository.create("Customer", false, false).await?;

            assert!(repository.get_by_name("Customer").await?.is_some());
            assert!(repository.get_by_name("customer").await?.is_none());
            Ok(())
        }
    }
}
