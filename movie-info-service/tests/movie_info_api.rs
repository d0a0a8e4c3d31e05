//! CRUD round trips against a server bound on an ephemeral port.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Value, json};

use movie_info_service::{AppState, InMemoryMovieInfoStore, build_router};

async fn spawn_service() -> String {
    let state = AppState {
        store: Arc::new(InMemoryMovieInfoStore::new()),
    };
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1/movieinfos")
}

fn batman_begins() -> Value {
    json!({
        "movieInfoId": null,
        "name": "Batman Begins",
        "year": 2005,
        "cast": ["Christian Bale", "Michael Cane"],
        "releaseDate": "2005-06-15"
    })
}

#[tokio::test]
async fn add_and_fetch_movie_info() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&base)
        .json(&batman_begins())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let stored: Value = response.json().await.unwrap();
    let id = stored["movieInfoId"].as_str().unwrap().to_string();

    let found: Value = client
        .get(format!("{base}/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found["name"], "Batman Begins");
}

#[tokio::test]
async fn get_all_supports_a_year_filter() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    client
        .post(&base)
        .json(&batman_begins())
        .send()
        .await
        .unwrap();
    client
        .post(&base)
        .json(&json!({
            "movieInfoId": null,
            "name": "The Dark Knight",
            "year": 2008,
            "cast": ["Christian Bale", "Heath Ledger"],
            "releaseDate": "2008-07-18"
        }))
        .send()
        .await
        .unwrap();

    let all: Value = client
        .get(&base)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 2);

    let from_2005: Value = client
        .get(format!("{base}?year=2005"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(from_2005.as_array().unwrap().len(), 1);
    assert_eq!(from_2005[0]["name"], "Batman Begins");
}

#[tokio::test]
async fn unknown_id_returns_404() {
    let base = spawn_service().await;

    let response = reqwest::get(format!("{base}/missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_the_mutable_fields() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let stored: Value = client
        .post(&base)
        .json(&batman_begins())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = stored["movieInfoId"].as_str().unwrap().to_string();

    let response = client
        .put(format!("{base}/{id}"))
        .json(&json!({
            "movieInfoId": null,
            "name": "Batman Begins",
            "year": 2005,
            "cast": ["Christian Bale", "Michael Cane", "Katie Holmes"],
            "releaseDate": "2005-06-15"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["cast"].as_array().unwrap().len(), 3);
    assert_eq!(updated["movieInfoId"], id.as_str());
}

#[tokio::test]
async fn update_of_unknown_id_returns_404() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{base}/missing"))
        .json(&batman_begins())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_no_content() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let stored: Value = client
        .post(&base)
        .json(&batman_begins())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = stored["movieInfoId"].as_str().unwrap().to_string();

    let response = client
        .delete(format!("{base}/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = reqwest::get(format!("{base}/{id}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_movie_info_returns_400_with_sorted_messages() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&base)
        .json(&json!({
            "movieInfoId": null,
            "name": "",
            "year": -2005,
            "cast": [""],
            "releaseDate": "2005-06-15"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        "movieInfo.cast must be present, movieInfo.name must be present, movieInfo.year must be a Positive Value"
    );
}
