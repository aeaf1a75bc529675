use axum::{
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin, auth, classification, gallery, game_match, match_series, participant, team,
        tournament,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Tourney API"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        auth::opponents,
        auth::load_match,
        auth::my_matches,
        auth::assign_tournament,
        auth::tournaments,
        admin::login,
        admin::get_tournaments,
        admin::create_tournament,
        admin::get_tournament_teams,
        admin::assign_groups,
        admin::random_groups,
        admin::rank_tournament,
        tournament::get_tournaments,
        tournament::get_tournament_by_id,
        tournament::create_tournament,
        tournament::update_tournament,
        tournament::delete_tournament,
        team::get_teams,
        team::get_team_by_id,
        team::create_team,
        team::update_team,
        team::delete_team,
        classification::get_classifications,
        classification::get_table,
        classification::get_classification_by_id,
        classification::create_classification,
        classification::update_classification,
        classification::delete_classification,
        participant::get_participants,
        participant::get_active_participants,
        participant::get_participant_by_id,
        participant::create_participant,
        participant::update_participant,
        participant::delete_participant,
        game_match::get_matches,
        game_match::get_recent_matches,
        game_match::get_finished_matches,
        game_match::get_match_by_id,
        game_match::create_match,
        game_match::update_match,
        game_match::delete_match,
        match_series::get_match_series,
        match_series::get_match_series_by_id,
        match_series::create_match_series,
        match_series::update_match_series,
        match_series::delete_match_series,
        match_series::add_match,
        match_series::remove_match,
        gallery::get_images,
        gallery::get_image_by_id,
        gallery::create_image,
        gallery::update_image,
        gallery::delete_image,
    ),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by authenticated endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        // Team authentication
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/opponents", get(auth::opponents))
        .route("/api/auth/load-match", post(auth::load_match))
        .route("/api/auth/my-matches", get(auth::my_matches))
        .route("/api/auth/assign-tournament", post(auth::assign_tournament))
        .route("/api/auth/tournaments", get(auth::tournaments))
        // Admin
        .route("/api/admin/login", post(admin::login))
        .route(
            "/api/admin/tournaments",
            get(admin::get_tournaments).post(admin::create_tournament),
        )
        .route(
            "/api/admin/tournaments/{id}/teams",
            get(admin::get_tournament_teams),
        )
        .route(
            "/api/admin/tournaments/{id}/assign-groups",
            post(admin::assign_groups),
        )
        .route(
            "/api/admin/tournaments/{id}/random-groups",
            post(admin::random_groups),
        )
        .route("/api/admin/tournaments/{id}/rank", post(admin::rank_tournament))
        // Collections
        .route(
            "/api/tournaments",
            get(tournament::get_tournaments).post(tournament::create_tournament),
        )
        .route(
            "/api/tournaments/{id}",
            get(tournament::get_tournament_by_id)
                .put(tournament::update_tournament)
                .delete(tournament::delete_tournament),
        )
        .route("/api/teams", get(team::get_teams).post(team::create_team))
        .route(
            "/api/teams/{id}",
            get(team::get_team_by_id)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route(
            "/api/classifications",
            get(classification::get_classifications).post(classification::create_classification),
        )
        .route("/api/classifications/table", get(classification::get_table))
        .route(
            "/api/classifications/{id}",
            get(classification::get_classification_by_id)
                .put(classification::update_classification)
                .delete(classification::delete_classification),
        )
        .route(
            "/api/participants",
            get(participant::get_participants).post(participant::create_participant),
        )
        .route(
            "/api/participants/active",
            get(participant::get_active_participants),
        )
        .route(
            "/api/participants/{id}",
            get(participant::get_participant_by_id)
                .put(participant::update_participant)
                .delete(participant::delete_participant),
        )
        .route(
            "/api/matches",
            get(game_match::get_matches).post(game_match::create_match),
        )
        .route("/api/matches/recent", get(game_match::get_recent_matches))
        .route("/api/matches/finished", get(game_match::get_finished_matches))
        .route(
            "/api/matches/{id}",
            get(game_match::get_match_by_id)
                .put(game_match::update_match)
                .delete(game_match::delete_match),
        )
        .route(
            "/api/match-series",
            get(match_series::get_match_series).post(match_series::create_match_series),
        )
        .route(
            "/api/match-series/{id}",
            get(match_series::get_match_series_by_id)
                .put(match_series::update_match_series)
                .delete(match_series::delete_match_series),
        )
        .route(
            "/api/match-series/{id}/add-match",
            post(match_series::add_match),
        )
        .route(
            "/api/match-series/{id}/remove-match",
            post(match_series::remove_match),
        )
        .route(
            "/api/gallery",
            get(gallery::get_images).post(gallery::create_image),
        )
        .route(
            "/api/gallery/{id}",
            get(gallery::get_image_by_id)
                .put(gallery::update_image)
                .delete(gallery::delete_image),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use sea_orm::DatabaseConnection;
    use serde_json::{json, Value};
    use test_utils::{builder::TestBuilder, factory};
    use tower::ServiceExt;

    use super::*;

    fn app(db: &DatabaseConnection) -> Router {
        router().with_state(AppState::new(db.clone()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn admin_token(db: &DatabaseConnection) -> String {
        let admin = factory::account::AccountFactory::new(db)
            .staff(true)
            .build()
            .await
            .unwrap();

        let (status, body) = send(
            app(db),
            post_json(
                "/api/admin/login",
                None,
                json!({ "username": admin.username, "password": factory::account::DEFAULT_PASSWORD }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().unwrap().to_string()
    }

    fn registration(team_name: &str, tournament_id: i32) -> Value {
        json!({
            "team_name": team_name,
            "password": "secret",
            "tournament_id": tournament_id,
            "participants": [
                { "name": "Ana", "phone_number": "555-0101" },
                { "name": "Luis" }
            ]
        })
    }

    /// Tests the team flow from registration to a recorded match.
    ///
    /// Registers two teams, groups them through the admin endpoint and reports a
    /// 3-1 win from the first team.
    ///
    /// Expected: 201 on load-match and the winner leads the standings table
    #[tokio::test]
    async fn registers_teams_and_loads_match() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tournament = factory::create_tournament(db).await.unwrap();

        let (status, home) = send(
            app(db),
            post_json("/api/auth/register", None, registration("Los Pumas", tournament.id)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(home["team"]["phone_number"], "555-0101");
        let home_token = home["token"].as_str().unwrap().to_string();

        let (status, away) = send(
            app(db),
            post_json("/api/auth/register", None, registration("Las Aguilas", tournament.id)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let away_id = away["team"]["id"].as_i64().unwrap();

        let admin = admin_token(db).await;
        let (status, _) = send(
            app(db),
            post_json(
                &format!("/api/admin/tournaments/{}/random-groups", tournament.id),
                Some(&admin),
                json!({ "groups": ["A"] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, opponents) = send(app(db), get("/api/auth/opponents", Some(&home_token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(opponents["teams"][0]["id"].as_i64(), Some(away_id));

        let (status, recorded) = send(
            app(db),
            post_json(
                "/api/auth/load-match",
                Some(&home_token),
                json!({ "opponent_team_id": away_id, "user_goals": 3, "opponent_goals": 1 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(recorded["match"]["winner_name"], "Los Pumas");

        let (status, table) = send(app(db), get("/api/classifications/table", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(table[0]["team_name"], "Los Pumas");
        assert_eq!(table[0]["points"], 3);
        assert_eq!(table[1]["games_lost"], 1);
    }

    /// Tests that registration input is checked before anything is stored.
    ///
    /// Expected: 400 with an error body and no team created
    #[tokio::test]
    async fn rejects_registration_with_one_participant() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tournament = factory::create_tournament(db).await.unwrap();

        let (status, body) = send(
            app(db),
            post_json(
                "/api/auth/register",
                None,
                json!({
                    "team_name": "Solo",
                    "password": "secret",
                    "tournament_id": tournament.id,
                    "participants": [{ "name": "Ana" }]
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, teams) = send(app(db), get("/api/teams", None)).await;
        assert_eq!(teams.as_array().map(Vec::len), Some(0));
    }

    /// Tests the admin guard on collection writes.
    ///
    /// Expected: 401 without a token, 403 for a team account, 201 for staff
    #[tokio::test]
    async fn collection_writes_require_admin() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tournament = factory::create_tournament(db).await.unwrap();
        let form = json!({
            "name": "Spring Cup",
            "start_date": "2026-03-01",
            "estimated_end_date": "2026-03-31"
        });

        let (status, _) = send(app(db), post_json("/api/tournaments", None, form.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (_, team) = send(
            app(db),
            post_json("/api/auth/register", None, registration("Los Pumas", tournament.id)),
        )
        .await;
        let team_token = team["token"].as_str().unwrap().to_string();
        let (status, _) = send(
            app(db),
            post_json("/api/tournaments", Some(&team_token), form.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let admin = admin_token(db).await;
        let (status, created) = send(app(db), post_json("/api/tournaments", Some(&admin), form)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Spring Cup");
    }

    /// Tests series membership endpoints.
    ///
    /// Expected: 400 without `match_id`, then a status acknowledgement and a series
    /// counting the added match
    #[tokio::test]
    async fn adds_match_to_series() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (_, team1, team2) = factory::helpers::create_opponents(db, Some("A"))
            .await
            .unwrap();
        let game = factory::game_match::MatchFactory::new(db, team1.id, team2.id)
            .score(2, 0)
            .finished(true)
            .build()
            .await
            .unwrap();
        let series = factory::create_match_series(db).await.unwrap();
        let admin = admin_token(db).await;
        let uri = format!("/api/match-series/{}/add-match", series.id);

        let (status, _) = send(app(db), post_json(&uri, Some(&admin), json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            app(db),
            post_json(&uri, Some(&admin), json!({ "match_id": game.id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "match added");

        let (_, detail) = send(
            app(db),
            get(&format!("/api/match-series/{}", series.id), None),
        )
        .await;
        assert_eq!(detail["total_matches"], 1);
        assert_eq!(detail["finished_matches"], 1);
    }

    /// Tests that missing resources produce a JSON error body.
    ///
    /// Expected: 404 with `{"error": ...}`
    #[tokio::test]
    async fn missing_team_is_not_found() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (status, body) = send(app(db), get("/api/teams/42", None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Team not found");
    }

    /// Tests that the OpenAPI document is served.
    ///
    /// Expected: 200 with the load-match path documented
    #[tokio::test]
    async fn serves_openapi_document() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (status, body) = send(app(db), get("/api/openapi.json", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/auth/load-match"].is_object());
    }
}
