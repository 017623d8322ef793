use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::{prelude::*, users};
use game_types::User;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_user(model: users::Model) -> User {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            reminders: model.reminders,
        }
    }

    /// Users who opted into reminders and have an address on file.
    pub async fn find_reminder_subscribers(&self) -> Result<Vec<User>> {
        let models = Users::find()
            .filter(users::Column::Reminders.eq(true))
            .filter(users::Column::Email.is_not_null())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::model_to_user).collect())
    }
}

#[async_trait]
impl game_core::repository::UserRepository for UserRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        let model = Users::find()
            .filter(users::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(model.map(Self::model_to_user))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let model = Users::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Self::model_to_user))
    }

    async fn create(&self, user: &User) -> Result<()> {
        let model = users::ActiveModel {
            id: sea_orm::ActiveValue::Set(user.id),
            name: sea_orm::ActiveValue::Set(user.name.clone()),
            email: sea_orm::ActiveValue::Set(user.email.clone()),
            reminders: sea_orm::ActiveValue::Set(user.reminders),
        };

        Users::insert(model).exec(&self.db).await?;
        Ok(())
    }
}
