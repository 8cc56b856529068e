use reqwest::StatusCode;
use serde_json::{json, Value};
use videogame_api_rest::app;
use videogame_shared::config::ApplicationConfiguration;
use videogame_store::{in_memory, startup_records::startup_records, state::initialize};

/// Serves a freshly seeded catalog on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let config = ApplicationConfiguration::default();
    let state = in_memory::videogame_state(&config.catalog);
    initialize(&state, startup_records()).await;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(state, &config)).await.unwrap();
    });

    format!("http://{address}")
}

#[tokio::test]
async fn test_videogame_lifecycle() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let videogames: Vec<Value> = client
        .get(format!("{base_url}/videogames"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(videogames.len(), 5);

    let response = client
        .post(format!("{base_url}/videogames"))
        .json(&json!({
            "name": "The Legend of Zelda: Twilight Princess",
            "publisher": "Nintendo",
            "rating": 95,
            "releaseYear": 2006
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["id"], 5);

    let response = client.get(format!("{base_url}/videogames/5")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), created);

    let response = client.delete(format!("{base_url}/videogames/5")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client.get(format!("{base_url}/videogames/5")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_by_name() {
    let base_url = spawn_server().await;

    let videogames: Vec<Value> = reqwest::Client::new()
        .get(format!("{base_url}/videogames"))
        .query(&[("name", "mario")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(videogames.len(), 1);
    assert_eq!(videogames[0]["name"], "Super Mario");
}
