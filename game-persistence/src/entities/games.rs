use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub player1: Uuid,
    pub player2: Uuid,
    /// Board in wire form, e.g. "-,-,-,-,-,-,-,-,-".
    pub board: String,
    pub moves: i32,
    pub game_over: bool,
    /// "player1" or "player2" when won, NULL while live or drawn.
    pub winner: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
