use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_series")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Many-to-many via match_series_match
impl Related<super::game_match::Entity> for Entity {
    fn to() -> RelationDef {
        super::match_series_match::Relation::GameMatch.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::match_series_match::Relation::MatchSeries.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
