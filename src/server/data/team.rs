//! Team data repository for database operations.
//!
//! Teams are scoped to a tournament: the same name may appear in different tournaments
//! but only once per tournament. Group labels are free text; a NULL or empty label means
//! the team has not been assigned to a group yet.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::team::{CreateTeamParams, Team, TeamDetail, UpdateTeamParams};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new TeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new team.
    ///
    /// # Arguments
    /// - `params` - Team fields; callers check name uniqueness within the tournament first
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            account_id: ActiveValue::Set(params.account_id),
            tournament_id: ActiveValue::Set(params.tournament_id),
            name: ActiveValue::Set(params.name),
            group: ActiveValue::Set(params.group),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds the team owned by an account.
    pub async fn find_by_account_id(&self, account_id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::AccountId.eq(account_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// All teams called `name` across every tournament, oldest first.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Checks whether `name` is already used inside a tournament.
    ///
    /// # Arguments
    /// - `name` - Team name to look for
    /// - `tournament_id` - Tournament the name must be unique in
    /// - `exclude_id` - Team to ignore, used when renaming or moving a team
    ///
    /// # Returns
    /// - `Ok(true)` - Another team in the tournament has this name
    /// - `Ok(false)` - Name is free
    pub async fn name_taken(
        &self,
        name: &str,
        tournament_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .filter(entity::team::Column::TournamentId.eq(tournament_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::team::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Lists teams by name, optionally narrowed to a group and/or tournament.
    pub async fn get_filtered(
        &self,
        group: Option<&str>,
        tournament_id: Option<i32>,
    ) -> Result<Vec<Team>, DbErr> {
        let mut query = entity::prelude::Team::find();

        if let Some(group) = group {
            query = query.filter(entity::team::Column::Group.eq(group));
        }
        if let Some(tournament_id) = tournament_id {
            query = query.filter(entity::team::Column::TournamentId.eq(tournament_id));
        }

        let entities = query
            .order_by_asc(entity::team::Column::Name)
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// All teams of a tournament ordered by group, then name.
    pub async fn get_by_tournament(&self, tournament_id: i32) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .order_by_asc(entity::team::Column::Group)
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Teams of a tournament with a NULL or empty group label.
    pub async fn get_ungrouped(&self, tournament_id: i32) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .filter(
                Condition::any()
                    .add(entity::team::Column::Group.is_null())
                    .add(entity::team::Column::Group.eq("")),
            )
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Teams a given team may play: same tournament, same group, not itself.
    ///
    /// A team without a group has no opponents.
    pub async fn get_opponents(&self, team: &Team) -> Result<Vec<Team>, DbErr> {
        let Some(group) = team.group_label() else {
            return Ok(Vec::new());
        };

        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::TournamentId.eq(team.tournament_id))
            .filter(entity::team::Column::Group.eq(group))
            .filter(entity::team::Column::Id.ne(team.id))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Team::find().count(self.db).await
    }

    pub async fn count_by_tournament(&self, tournament_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .count(self.db)
            .await
    }

    /// Sets the group label of a team that belongs to the given tournament.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team updated
    /// - `Ok(None)` - No such team in that tournament
    pub async fn set_group(
        &self,
        id: i32,
        tournament_id: i32,
        group: Option<String>,
    ) -> Result<Option<Team>, DbErr> {
        let Some(existing) = entity::prelude::Team::find_by_id(id)
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = existing.into();
        active.group = ActiveValue::Set(group);

        let entity = active.update(self.db).await?;

        Ok(Some(Team::from_entity(entity)))
    }

    /// Sets the group label of a team only while it has none.
    ///
    /// The group check is part of the update itself, so a label written by someone else in
    /// the meantime is never replaced.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team updated
    /// - `Ok(None)` - No such team in that tournament, or it already has a group
    pub async fn set_group_if_ungrouped(
        &self,
        id: i32,
        tournament_id: i32,
        group: String,
    ) -> Result<Option<Team>, DbErr> {
        let result = entity::prelude::Team::update_many()
            .col_expr(entity::team::Column::Group, Expr::value(group))
            .filter(entity::team::Column::Id.eq(id))
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .filter(
                Condition::any()
                    .add(entity::team::Column::Group.is_null())
                    .add(entity::team::Column::Group.eq("")),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Moves a team into another tournament.
    pub async fn set_tournament(&self, id: i32, tournament_id: i32) -> Result<Option<Team>, DbErr> {
        let Some(existing) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = existing.into();
        active.tournament_id = ActiveValue::Set(tournament_id);

        let entity = active.update(self.db).await?;

        Ok(Some(Team::from_entity(entity)))
    }

    pub async fn update(&self, params: UpdateTeamParams) -> Result<Option<Team>, DbErr> {
        let Some(existing) = entity::prelude::Team::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = existing.into();
        active.tournament_id = ActiveValue::Set(params.tournament_id);
        active.name = ActiveValue::Set(params.name);
        active.group = ActiveValue::Set(params.group);

        let entity = active.update(self.db).await?;

        Ok(Some(Team::from_entity(entity)))
    }

    /// Deletes a team along with its participants, classification and matches.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads tournament names and contact phone numbers for a batch of teams.
    ///
    /// Runs two queries regardless of the number of teams. The phone number is the first
    /// one found among the team's participants, by participant ID.
    pub async fn with_details(&self, teams: Vec<Team>) -> Result<Vec<TeamDetail>, DbErr> {
        if teams.is_empty() {
            return Ok(Vec::new());
        }

        let tournament_ids: HashSet<i32> = teams.iter().map(|t| t.tournament_id).collect();
        let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

        let tournament_names: HashMap<i32, String> = entity::prelude::Tournament::find()
            .filter(entity::tournament::Column::Id.is_in(tournament_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        let participants = entity::prelude::Participant::find()
            .filter(entity::participant::Column::TeamId.is_in(team_ids))
            .filter(entity::participant::Column::PhoneNumber.is_not_null())
            .order_by_asc(entity::participant::Column::Id)
            .all(self.db)
            .await?;

        let mut phone_numbers: HashMap<i32, String> = HashMap::new();
        for participant in participants {
            if let Some(phone) = participant.phone_number.filter(|p| !p.is_empty()) {
                phone_numbers.entry(participant.team_id).or_insert(phone);
            }
        }

        Ok(teams
            .into_iter()
            .map(|team| TeamDetail {
                tournament_name: tournament_names
                    .get(&team.tournament_id)
                    .cloned()
                    .unwrap_or_default(),
                phone_number: phone_numbers.get(&team.id).cloned(),
                team,
            })
            .collect())
    }
}
