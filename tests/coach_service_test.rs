use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use wecare_cli::api::CoachService;
use wecare_cli::config::Config;
use wecare_cli::models::{Coach, Gender};
use wecare_cli::pages::UserHomePage;

fn config_for(server: &ServerGuard) -> Config {
    let mut config = Config::default();
    config.api.base_url = server.url();
    config.api.coaches_endpoint = "/coaches".to_string();
    config
}

fn rose() -> serde_json::Value {
    json!({
        "id": "CI-0001",
        "name": "Rose",
        "phone": "+44 1234567890",
        "specialty": "Confidence Issues",
        "gender": "female"
    })
}

#[tokio::test]
async fn test_get_coaches_unwraps_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/coaches")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": true, "data": [rose()], "message": "ok"}).to_string())
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coaches = service.get_coaches().await;

    mock.assert_async().await;
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].name, "Rose");
    assert_eq!(coaches[0].gender, Gender::Female);
}

#[tokio::test]
async fn test_get_coaches_accepts_bare_array() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([rose()]).to_string())
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coaches = service.get_coaches().await;

    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].id, "CI-0001");
}

#[tokio::test]
async fn test_get_coaches_falls_back_on_server_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches")
        .with_status(500)
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coaches = service.get_coaches().await;

    assert_eq!(coaches, Coach::fallback_roster());
    assert_eq!(coaches.len(), 6);
}

#[tokio::test]
async fn test_get_coaches_falls_back_on_connection_error() {
    let mut config = Config::default();
    // Nothing listens here
    config.api.base_url = "http://127.0.0.1:9".to_string();
    config.api.timeout_seconds = 1;

    let service = CoachService::new(&config).unwrap();
    let coaches = service.get_coaches().await;

    assert_eq!(coaches.len(), 6);
}

#[tokio::test]
async fn test_get_coaches_falls_back_on_malformed_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coaches = service.get_coaches().await;

    assert_eq!(coaches.len(), 6);
}

#[tokio::test]
async fn test_get_coaches_empty_array_is_not_a_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coaches = service.get_coaches().await;

    assert!(coaches.is_empty());
}

#[tokio::test]
async fn test_get_coach_by_id_unwraps_envelope() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches/CI-0001")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": true, "data": rose()}).to_string())
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coach = service.get_coach_by_id("CI-0001").await;

    assert_eq!(coach.map(|c| c.name), Some("Rose".to_string()));
}

#[tokio::test]
async fn test_get_coach_by_id_accepts_bare_record() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches/CI-0001")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(rose().to_string())
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coach = service.get_coach_by_id("CI-0001").await;

    assert!(coach.is_some());
}

#[tokio::test]
async fn test_get_coach_by_id_returns_none_on_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches/CI-9999")
        .with_status(404)
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coach = service.get_coach_by_id("CI-9999").await;

    assert!(coach.is_none());
}

#[tokio::test]
async fn test_get_coaches_by_specialty_encodes_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/coaches")
        .match_query(Matcher::UrlEncoded(
            "specialty".to_string(),
            "Confidence Issues".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": true, "data": [rose()]}).to_string())
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coaches = service.get_coaches_by_specialty("Confidence Issues").await;

    mock.assert_async().await;
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].specialty, "Confidence Issues");
}

#[tokio::test]
async fn test_user_home_load_populates_roster() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([rose()]).to_string())
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let mut page = UserHomePage::new();

    page.load(&service).await;

    assert!(!page.loading);
    assert!(page.error.is_none());
    assert_eq!(page.coaches.len(), 1);
}

#[tokio::test]
async fn test_user_home_empty_roster_is_retryable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let mut page = UserHomePage::new();

    page.load(&service).await;
    assert!(page.error.is_some());
    assert!(page.coaches.is_empty());

    // Retry re-issues the same fetch
    page.retry(&service).await;
    assert!(page.error.is_some());
}

#[tokio::test]
async fn test_get_coaches_by_specialty_returns_empty_on_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/coaches")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let service = CoachService::new(&config_for(&server)).unwrap();
    let coaches = service.get_coaches_by_specialty("Career Guidance").await;

    assert!(coaches.is_empty());
}
