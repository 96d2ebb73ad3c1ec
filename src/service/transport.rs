use sea_orm::DatabaseConnection;

use crate::{
    data::{filter::FilterSet, transport::TransportRepository},
    error::{Error, ValidationError},
    model::{
        db::{TransportModel, TransportTypeModel},
        transport::TransportDraft,
    },
};

pub struct TransportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn validate(draft: &TransportDraft) -> Result<(), ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if draft.price_per_person < 0.0 {
            return Err(ValidationError::NegativePrice(draft.price_per_person));
        }

        Ok(())
    }

    pub async fn create(&self, draft: &TransportDraft) -> Result<TransportModel, Error> {
        Self::validate(draft)?;

        Ok(TransportRepository::new(self.db).create(draft).await?)
    }

    pub async fn update(&self, id: i32, draft: &TransportDraft) -> Result<TransportModel, Error> {
        Self::validate(draft)?;

        TransportRepository::new(self.db)
            .update(id, draft)
            .await?
            .ok_or(Error::NotFound {
                entity: "transport",
                id,
            })
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        if !TransportRepository::new(self.db).delete(id).await? {
            return Err(Error::NotFound {
                entity: "transport",
                id,
            });
        }

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<TransportModel, Error> {
        TransportRepository::new(self.db)
            .get(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "transport",
                id,
            })
    }

    pub async fn get_with_type(
        &self,
        id: i32,
    ) -> Result<(TransportModel, Option<TransportTypeModel>), Error> {
        TransportRepository::new(self.db)
            .get_with_type(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "transport",
                id,
            })
    }

    pub async fn get_all(&self) -> Result<Vec<TransportModel>, Error> {
        Ok(TransportRepository::new(self.db).get_all().await?)
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<TransportModel>, Error> {
        Ok(TransportRepository::new(self.db).search(filters).await?)
    }
}
