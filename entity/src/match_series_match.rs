use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_series_match")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub match_series_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_match_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::match_series::Entity",
        from = "Column::MatchSeriesId",
        to = "super::match_series::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MatchSeries,
    #[sea_orm(
        belongs_to = "super::game_match::Entity",
        from = "Column::GameMatchId",
        to = "super::game_match::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GameMatch,
}

impl ActiveModelBehavior for ActiveModel {}
