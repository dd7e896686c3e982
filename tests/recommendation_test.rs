//! End-to-end conversation tests against a mocked recommendation backend

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use BudBuddy::config::ApiConfig;
use BudBuddy::models::PrefKey;
use BudBuddy::state::flow::steps;
use BudBuddy::{ChatEngine, RecommendService};

fn engine_for(server: &MockServer) -> ChatEngine {
    let recommender = RecommendService::new(&ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 2,
    })
    .unwrap();
    ChatEngine::new(recommender).unwrap()
}

fn strain(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "type": "Hybrid",
        "thc_content": "18-22%",
        "cbd_content": "0.2%",
        "effects": ["Relaxed", "Happy"],
        "flavors": ["Berry", "Earthy"],
        "description": "A mellow, well-rounded pick."
    })
}

/// Walk the standard path up to the effect question
async fn walk_to_effect(engine: &mut ChatEngine) {
    engine.start().unwrap();
    engine.handle_choice("Find the right strain").await.unwrap();
    engine.handle_choice("New to cannabis").await.unwrap();
}

#[tokio::test]
async fn successful_response_renders_one_card_per_recommendation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .and(body_partial_json(json!({
            "preferences": {
                "experience": "New to cannabis",
                "effect": "Relaxation"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [strain("Blue Dream"), strain("Harlequin"), strain("Cannatonic")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut engine = engine_for(&server);
    walk_to_effect(&mut engine).await;
    let reply = engine.handle_choice("Relaxation").await.unwrap();

    assert_eq!(reply.cards.len(), 3);
    assert_eq!(reply.step, steps::EXPLORE_MORE);
    assert!(reply.messages.iter().any(|m| m.contains("recommendations")));
    assert!(reply.choices.contains(&"Find another strain".to_string()));
}

#[tokio::test]
async fn empty_result_renders_no_cards_but_still_offers_explore_more() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "recommendations": [] })))
        .mount(&server)
        .await;

    let mut engine = engine_for(&server);
    walk_to_effect(&mut engine).await;
    let reply = engine.handle_choice("Sleep").await.unwrap();

    assert!(reply.cards.is_empty());
    assert_eq!(reply.step, steps::EXPLORE_MORE);
    assert!(reply.choices.contains(&"Find another strain".to_string()));
}

#[tokio::test]
async fn response_description_is_shown_as_a_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [strain("Northern Lights")],
            "description": "Great picks for winding down."
        })))
        .mount(&server)
        .await;

    let mut engine = engine_for(&server);
    walk_to_effect(&mut engine).await;
    let reply = engine.handle_choice("Sleep").await.unwrap();

    assert!(reply
        .messages
        .iter()
        .any(|m| m == "Great picks for winding down."));
}

#[tokio::test]
async fn non_2xx_shows_no_matches_and_keeps_preferences() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "No matching strains found",
            "recommendations": []
        })))
        .mount(&server)
        .await;

    let mut engine = engine_for(&server);
    walk_to_effect(&mut engine).await;
    let reply = engine.handle_choice("Energy").await.unwrap();

    assert_eq!(reply.step, steps::NO_MATCHES);
    assert!(reply.choices.contains(&"Start over".to_string()));
    assert_eq!(
        engine.context().preferences.get(PrefKey::Experience),
        Some("New to cannabis")
    );
    assert_eq!(engine.context().preferences.get(PrefKey::Effect), Some("Energy"));
}

#[tokio::test]
async fn garbage_response_falls_back_to_retry_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut engine = engine_for(&server);
    walk_to_effect(&mut engine).await;
    let reply = engine.handle_choice("Creativity").await.unwrap();

    assert_eq!(reply.step, steps::RETRY);
    assert!(reply.choices.contains(&"Start over".to_string()));
    assert_eq!(engine.context().preferences.get(PrefKey::Effect), Some("Creativity"));
}

#[tokio::test]
async fn start_over_after_failure_resets_everything() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Internal server error" })))
        .mount(&server)
        .await;

    let mut engine = engine_for(&server);
    walk_to_effect(&mut engine).await;
    engine.handle_choice("Pain Relief").await.unwrap();

    let reply = engine.handle_choice("Start over").await.unwrap();
    assert_eq!(reply.step, steps::WELCOME);
    assert!(engine.context().preferences.is_empty());
}

#[tokio::test]
async fn medical_path_sends_mapped_effect_with_experience() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .and(body_partial_json(json!({
            "preferences": {
                "experience": "Occasional user",
                "effect": "Sleep"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [strain("Granddaddy Purple")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut engine = engine_for(&server);
    engine.start().unwrap();
    engine.handle_choice("Medical benefits").await.unwrap();
    let reply = engine.handle_choice("Sleep issues").await.unwrap();
    assert_eq!(reply.step, steps::MEDICAL_EXPERIENCE);

    let reply = engine.handle_choice("Occasional user").await.unwrap();
    assert_eq!(reply.cards.len(), 1);
    assert_eq!(reply.step, steps::EXPLORE_MORE);
}

#[tokio::test]
async fn find_another_strain_keeps_the_session_going() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [strain("Blue Dream")]
        })))
        .mount(&server)
        .await;

    let mut engine = engine_for(&server);
    walk_to_effect(&mut engine).await;
    engine.handle_choice("Relaxation").await.unwrap();

    let reply = engine.handle_choice("Find another strain").await.unwrap();
    assert_eq!(reply.step, steps::EXPERIENCE_LEVEL);
    // Accumulated preferences survive until an explicit start over
    assert_eq!(engine.context().preferences.get(PrefKey::Effect), Some("Relaxation"));
}
