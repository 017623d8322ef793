use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{prelude::*, scores};
use game_types::Score;

/// Append-only score history. Records are never mutated once written.
pub struct ScoreRepository {
    db: DatabaseConnection,
}

impl ScoreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_score(model: scores::Model) -> Score {
        Score {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            won: model.won,
            lost: model.lost,
        }
    }

    pub async fn insert(&self, user_id: Uuid, date: NaiveDate, won: bool, lost: bool) -> Result<()> {
        let model = scores::ActiveModel {
            id: sea_orm::ActiveValue::Set(Uuid::new_v4()),
            user_id: sea_orm::ActiveValue::Set(user_id),
            date: sea_orm::ActiveValue::Set(date),
            won: sea_orm::ActiveValue::Set(won),
            lost: sea_orm::ActiveValue::Set(lost),
        };

        Scores::insert(model).exec(&self.db).await?;
        Ok(())
    }

    pub async fn all(&self) -> Result<Vec<Score>> {
        let models = Scores::find()
            .order_by_asc(scores::Column::Date)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::model_to_score).collect())
    }

    pub async fn for_user(&self, user_id: Uuid) -> Result<Vec<Score>> {
        let models = Scores::find()
            .filter(scores::Column::UserId.eq(user_id))
            .order_by_asc(scores::Column::Date)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::model_to_score).collect())
    }
}
