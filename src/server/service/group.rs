//! Group assignment for the teams of a tournament.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{team::TeamRepository, tournament::TournamentRepository},
    error::AppError,
    model::{
        group::{draw_groups, GroupAssignment, RandomGroupsParams},
        team::{Team, TeamDetail},
    },
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies explicit team to group assignments.
    ///
    /// All assignments are applied in one transaction; one unknown team cancels them all.
    ///
    /// # Arguments
    /// - `tournament_id` - Tournament every assigned team must belong to
    /// - `assignments` - Non-empty list of assignments
    ///
    /// # Returns
    /// - `Ok(Vec<TeamDetail>)` - The updated teams in request order
    /// - `Err(AppError::NotFound)` - Tournament missing, or a team not in the tournament
    pub async fn assign(
        &self,
        tournament_id: i32,
        assignments: Vec<GroupAssignment>,
    ) -> Result<Vec<TeamDetail>, AppError> {
        self.require_tournament(tournament_id).await?;

        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);

        let mut updated = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let team = team_repo
                .set_group(assignment.team_id, tournament_id, assignment.group)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "Team {} not found in this tournament",
                        assignment.team_id
                    ))
                })?;
            updated.push(team);
        }

        txn.commit().await?;

        tracing::info!(
            tournament_id,
            teams = updated.len(),
            "Assigned groups to teams"
        );

        Ok(TeamRepository::new(self.db).with_details(updated).await?)
    }

    /// Gives teams a uniformly drawn group label.
    ///
    /// Only teams without a group are drawn unless `overwrite` is set, in which case every
    /// team of the tournament is drawn again. Without `overwrite`, a team that received a
    /// group after it was selected keeps that group.
    ///
    /// # Returns
    /// - `Ok(Vec<TeamDetail>)` - The teams that were drawn
    /// - `Err(AppError::NotFound)` - Tournament missing
    pub async fn randomize(
        &self,
        tournament_id: i32,
        params: &RandomGroupsParams,
    ) -> Result<Vec<TeamDetail>, AppError> {
        self.require_tournament(tournament_id).await?;

        let txn = self.db.begin().await?;
        let txn_repo = TeamRepository::new(&txn);

        let teams = if params.overwrite {
            txn_repo.get_by_tournament(tournament_id).await?
        } else {
            txn_repo.get_ungrouped(tournament_id).await?
        };

        let draws = draw_groups(teams.len(), &params.groups);

        let mut assigned: Vec<Team> = Vec::with_capacity(teams.len());
        for (team, group) in teams.into_iter().zip(draws) {
            let updated = if params.overwrite {
                txn_repo
                    .set_group(team.id, tournament_id, Some(group))
                    .await?
            } else {
                txn_repo
                    .set_group_if_ungrouped(team.id, tournament_id, group)
                    .await?
            };

            if let Some(team) = updated {
                assigned.push(team);
            }
        }

        txn.commit().await?;

        tracing::info!(
            tournament_id,
            teams = assigned.len(),
            overwrite = params.overwrite,
            "Randomly assigned groups"
        );

        Ok(TeamRepository::new(self.db).with_details(assigned).await?)
    }

    async fn require_tournament(&self, tournament_id: i32) -> Result<(), AppError> {
        TournamentRepository::new(self.db)
            .find_by_id(tournament_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Tournament not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn random(groups: &[&str], overwrite: bool) -> RandomGroupsParams {
        RandomGroupsParams {
            groups: groups.iter().map(|g| g.to_string()).collect(),
            overwrite,
        }
    }

    /// Tests that random assignment leaves grouped teams alone.
    ///
    /// Expected: Only the ungrouped team is drawn, from the candidates
    #[tokio::test]
    async fn random_skips_grouped_teams() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let tournament = factory::create_tournament(db).await?;
        let grouped = factory::team::TeamFactory::new(db, tournament.id)
            .group(Some("Z"))
            .build()
            .await?;
        let ungrouped = factory::create_team(db, tournament.id).await?;

        let assigned = GroupService::new(db)
            .randomize(tournament.id, &random(&["X", "Y"], false))
            .await?;

        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].team.id, ungrouped.id);
        assert!(matches!(assigned[0].team.group.as_deref(), Some("X" | "Y")));

        let untouched = TeamRepository::new(db).find_by_id(grouped.id).await?.unwrap();
        assert_eq!(untouched.group.as_deref(), Some("Z"));

        Ok(())
    }

    /// Tests a random draw running alongside an explicit assignment.
    ///
    /// Expected: The explicitly assigned group survives whichever runs first
    #[tokio::test]
    async fn random_keeps_concurrent_explicit_group() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let tournament = factory::create_tournament(db).await?;
        let team = factory::create_team(db, tournament.id).await?;

        let service = GroupService::new(db);
        let params = random(&["X"], false);
        let (drawn, assigned) = tokio::join!(
            service.randomize(tournament.id, &params),
            service.assign(
                tournament.id,
                vec![GroupAssignment {
                    team_id: team.id,
                    group: Some("Z".to_string()),
                }]
            )
        );
        drawn?;
        assigned?;

        let stored = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();
        assert_eq!(stored.group.as_deref(), Some("Z"));

        Ok(())
    }

    /// Tests that overwrite re-draws every team.
    ///
    /// Expected: All teams drawn from the single candidate
    #[tokio::test]
    async fn random_overwrite_redraws_everyone() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (tournament, _a, _b) = factory::helpers::create_opponents(db, Some("Z")).await?;
        factory::create_team(db, tournament.id).await?;

        let assigned = GroupService::new(db)
            .randomize(tournament.id, &random(&["Q"], true))
            .await?;

        assert_eq!(assigned.len(), 3);
        assert!(assigned
            .iter()
            .all(|t| t.team.group.as_deref() == Some("Q")));

        Ok(())
    }

    /// Tests that one foreign team cancels an explicit assignment.
    ///
    /// Verifies that the valid assignment earlier in the list is rolled back
    /// when a later team does not belong to the tournament.
    ///
    /// Expected: Err(NotFound) and the first team still ungrouped
    #[tokio::test]
    async fn explicit_assignment_is_all_or_nothing() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;
        let (_other, foreign) = factory::helpers::create_team_with_dependencies(db).await?;

        let result = GroupService::new(db)
            .assign(
                tournament.id,
                vec![
                    GroupAssignment {
                        team_id: team.id,
                        group: Some("A".to_string()),
                    },
                    GroupAssignment {
                        team_id: foreign.id,
                        group: Some("A".to_string()),
                    },
                ],
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        let unchanged = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();
        assert!(unchanged.group.is_none());

        Ok(())
    }

    /// Tests a successful explicit assignment.
    ///
    /// Expected: Ok with both teams in their requested groups
    #[tokio::test]
    async fn explicit_assignment_updates_teams() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (tournament, first, second) = factory::helpers::create_opponents(db, None).await?;

        let updated = GroupService::new(db)
            .assign(
                tournament.id,
                vec![
                    GroupAssignment {
                        team_id: first.id,
                        group: Some("A".to_string()),
                    },
                    GroupAssignment {
                        team_id: second.id,
                        group: Some("B".to_string()),
                    },
                ],
            )
            .await?;

        let groups: Vec<_> = updated
            .iter()
            .map(|t| t.team.group.clone().unwrap_or_default())
            .collect();
        assert_eq!(groups, vec!["A", "B"]);

        Ok(())
    }
}
