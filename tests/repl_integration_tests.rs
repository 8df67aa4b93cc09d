//! Integration Tests for REPL Sessions
//!
//! Drives scripted sessions against a wiremock catalog and checks both the
//! printed output and which requests actually reached the network.

use std::time::Duration;

use pokedex_cli::repl::{self, Flow};
use pokedex_cli::{Client, Config, Session};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// == Helper Functions ==

async fn catalog() -> MockServer {
    let server = MockServer::start().await;
    let uri = server.uri();

    let page = |offset: u32, names: &[&str], previous: Value| {
        let next = if offset == 0 {
            json!(format!("{}/location-area?offset=20&limit=20", uri))
        } else {
            Value::Null
        };
        json!({
            "count": 40,
            "next": next,
            "previous": previous,
            "results": names.iter().map(|n| json!({"name": n, "url": ""})).collect::<Vec<_>>(),
        })
    };

    Mock::given(method("GET"))
        .and(path("/location-area"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            0,
            &["canalave-city-area", "eterna-city-area"],
            Value::Null,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/location-area"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            20,
            &["mt-coronet-1f-route-216"],
            json!(format!("{}/location-area?offset=0&limit=20", uri)),
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/location-area/pastoria-city-area"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 10,
            "name": "pastoria-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": ""}},
                {"pokemon": {"name": "magikarp", "url": ""}}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/location-area/empty-cave"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "name": "empty-cave",
            "pokemon_encounters": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/magikarp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 129,
            "name": "magikarp",
            "base_experience": 36,
            "height": 9,
            "weight": 100,
            "stats": [
                {"base_stat": 20, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 80, "stat": {"name": "speed", "url": ""}},
                {"base_stat": 15, "stat": {"name": "special-attack", "url": ""}}
            ],
            "types": [{"slot": 1, "type": {"name": "water", "url": ""}}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/arceus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 493,
            "name": "arceus",
            "base_experience": 608,
            "height": 32,
            "weight": 3200
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

fn session_for(server: &MockServer) -> Session {
    colored::control::set_override(false);
    let config = Config::with_base_url(server.uri());
    let mut session = Session::with_client(Client::new(&config).unwrap(), Duration::ZERO);
    session.seed(7);
    session
}

async fn requests_to(server: &MockServer, wanted: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == wanted)
        .count()
}

async fn run_script(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    repl::run(session, script.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

// == Navigation ==

#[tokio::test]
async fn test_map_pages_forward_and_back() {
    let server = catalog().await;
    let mut session = session_for(&server);

    let output = run_script(&mut session, "map\nmap\nmapb\nmapb\n").await;

    assert!(output.contains(" 1. canalave-city-area"));
    assert!(output.contains(" 2. eterna-city-area"));
    assert!(output.contains(" 1. mt-coronet-1f-route-216"));
    assert!(output.contains("Type 'map' for more locations"));
    assert!(output.contains("You're on the first page"));

    // Two distinct pages, everything else answered from the cache
    assert_eq!(requests_to(&server, "/location-area").await, 2);
}

#[tokio::test]
async fn test_map_tracks_cursors() {
    let server = catalog().await;
    let mut session = session_for(&server);
    let mut out = Vec::new();

    assert_eq!(session.handle_line("map", &mut out).await.unwrap(), Flow::Continue);
    assert!(session.next_page().unwrap().contains("offset=20"));
    assert_eq!(session.previous_page(), None);

    session.handle_line("map", &mut out).await.unwrap();
    assert_eq!(session.next_page(), None);
    assert!(session.previous_page().unwrap().contains("offset=0"));
}

// == Exploration ==

#[tokio::test]
async fn test_explore_lists_encounters() {
    let server = catalog().await;
    let mut session = session_for(&server);

    let output = run_script(&mut session, "explore Pastoria-City-Area\nexplore empty-cave\n").await;

    assert!(output.contains("Exploring pastoria-city-area..."));
    assert!(output.contains("Pokémon Found in pastoria-city-area"));
    assert!(output.contains(" 1. tentacool"));
    assert!(output.contains(" 2. magikarp"));
    assert!(output.contains("No Pokémon found in this area"));
}

#[tokio::test]
async fn test_catch_inspect_and_pokedex() {
    let server = catalog().await;
    let mut session = session_for(&server);

    let output = run_script(
        &mut session,
        "catch magikarp\ncatch magikarp\ninspect magikarp\npokedex\n",
    )
    .await;

    assert!(output.contains("Throwing a Pokéball at magikarp..."));
    assert!(output.contains("Wobble... Wobble... Wobble..."));
    assert!(output.contains("Gotcha! magikarp was caught!"));
    assert!(output.contains("You've already caught magikarp!"));
    assert!(output.contains("MAGIKARP"));
    assert!(output.contains("Height: 9 decimetres"));
    assert!(output.contains("Weight: 100 hectograms"));
    assert!(output.contains("• water"));
    assert!(output.contains("special attack:"));
    assert!(output.contains("YOUR POKÉDEX (1)"));
    assert!(output.contains(" 1. magikarp (base exp 36)"));
    assert!(output.contains("You caught 1 Pokémon"));

    assert!(session.pokedex().contains("magikarp"));
    // Inspect reuses the cached catch response
    assert_eq!(requests_to(&server, "/pokemon/magikarp").await, 1);
}

#[tokio::test]
async fn test_hardest_pokemon_always_breaks_free() {
    let server = catalog().await;
    let mut session = session_for(&server);

    let output = run_script(&mut session, "catch arceus\ncatch arceus\npokedex\n").await;

    assert_eq!(output.matches("Oh no! arceus broke free!").count(), 2);
    assert!(output.contains("Catch rate: 0.0% - Try again!"));
    assert!(output.contains("Your Pokédex is empty!"));
    assert_eq!(requests_to(&server, "/pokemon/arceus").await, 1);
}

#[tokio::test]
async fn test_command_errors_do_not_end_the_session() {
    let server = catalog().await;
    let mut session = session_for(&server);

    let output = run_script(&mut session, "catch missingno\ncatch\nfly\nhelp\nexit\n").await;

    assert!(output.contains("Error: Not found: pokemon 'missingno'"));
    assert!(output.contains("Error: usage: catch <pokemon_name>"));
    assert!(output.contains("Unknown command"));
    assert!(output.contains("POKÉDEX COMMANDS"));
    assert!(output.contains("Thanks for using Pokédex!"));
}
