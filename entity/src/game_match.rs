use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub goals1: i32,
    pub goals2: i32,
    pub is_finished: bool,
    pub played_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::Team1Id",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team1,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::Team2Id",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team2,
}

impl Related<super::match_series::Entity> for Entity {
    fn to() -> RelationDef {
        super::match_series_match::Relation::MatchSeries.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::match_series_match::Relation::GameMatch.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
