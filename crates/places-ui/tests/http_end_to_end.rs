//! End-to-end tests: a controller built from YAML configuration talking HTTP
//! to an in-process Axum backend.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use places_ui::{
    DetailsOutcome, MemoryView, PlacesCard, PlacesConfig, PlacesController, Screen, SearchOutcome,
};
use serde_json::{Value, json};

type Received = Arc<Mutex<Vec<Value>>>;

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{addr}/api")
}

fn places_backend(received: &Received) -> Router {
    Router::new()
        .route(
            "/api/search",
            post(|Json(body): Json<Value>| async move {
                if body["query"] == "Paris" {
                    Json(json!([
                        {"name": "Paris", "country": "France", "lat": 48.8566, "lon": 2.3522, "osm_type": "relation"}
                    ]))
                } else {
                    Json(Value::Null)
                }
            }),
        )
        .route(
            "/api/location/details",
            post(
                |State(received): State<Received>, Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body.clone());
                    Json(json!({
                        "location": body["location"],
                        "weather": {
                            "description": "ясно",
                            "icon": "01d",
                            "temp": 17.5,
                            "feels_like": 16.4,
                            "humidity": 55,
                            "wind_speed": 2.0
                        },
                        "places": [
                            {"xid": "N1", "name": "Лувр", "kinds": "museums,cultural", "lat": 48.8606, "lon": 2.3376},
                            {"xid": "N2", "name": "", "kinds": "", "lat": 48.85, "lon": 2.35}
                        ]
                    }))
                },
            ),
        )
        .with_state(Arc::clone(received))
}

fn config(base_url: &str, locale: &str) -> PlacesConfig {
    PlacesConfig::parse(&format!(
        "api:\n  base_url: \"{base_url}\"\nui:\n  locale: {locale}\n"
    ))
    .unwrap()
}

#[tokio::test]
async fn russian_locale_full_journey() {
    let received = Received::default();
    let base_url = spawn_backend(places_backend(&received)).await;
    let controller =
        PlacesController::from_config(&config(&base_url, "ru"), MemoryView::default()).unwrap();

    assert_eq!(
        controller.search("Paris").await.unwrap(),
        SearchOutcome::Found { count: 1 }
    );
    let candidate = controller.with_view(|view| {
        assert_eq!(view.search_label(), "Поиск");
        view.location_rows()[0].candidate.clone()
    });

    let outcome = controller.select_location(&candidate).await.unwrap();

    assert_eq!(
        outcome,
        DetailsOutcome::Rendered {
            places: 2,
            weather: true
        }
    );
    assert_eq!(
        received.lock().unwrap()[0],
        json!({"location": {"name": "Paris", "country": "France", "lat": 48.8566, "lon": 2.3522, "osm_type": "relation"}})
    );
    assert_eq!(controller.screen(), Screen::Results);
    controller.with_view(|view| {
        assert!(view.weather_html().contains("18°C"));
        assert!(view.weather_html().contains("Ощущается"));
        let Some(PlacesCard::List { header_html, rows }) = view.places_card() else {
            panic!("expected places list");
        };
        assert!(header_html.contains("Интересные места (2)"));
        assert!(rows[0].html.contains("Лувр"));
        assert!(rows[1].html.contains("Без названия"));
        assert!(rows[1].html.contains("Нажмите для просмотра деталей"));
    });

    controller.show_modal(0).unwrap();
    controller.with_view(|view| {
        assert!(view.modal_visible());
        assert!(view.modal_body().contains("Лувр"));
        assert!(view.modal_body().contains("🗺️ Карта"));
    });
}

#[tokio::test]
async fn null_search_result_is_not_found() {
    let received = Received::default();
    let base_url = spawn_backend(places_backend(&received)).await;
    let controller =
        PlacesController::from_config(&config(&base_url, "en"), MemoryView::default()).unwrap();

    let outcome = controller.search("Atlantis").await.unwrap();

    assert_eq!(outcome, SearchOutcome::NotFound);
    controller.with_view(|view| assert!(view.error_html().contains("No locations found")));
}

#[tokio::test]
async fn backend_error_returns_to_search_with_message() {
    let router = Router::new().route(
        "/api/location/details",
        post(|| async { (StatusCode::BAD_GATEWAY, "weather provider down") }),
    );
    let base_url = spawn_backend(router).await;
    let controller =
        PlacesController::from_config(&config(&base_url, "en"), MemoryView::default()).unwrap();
    let paris = serde_json::from_value(json!({"name": "Paris", "lat": 48.8566, "lon": 2.3522}))
        .unwrap();

    let outcome = controller.select_location(&paris).await.unwrap();

    assert_eq!(
        outcome,
        DetailsOutcome::Failed {
            message: "server returned 502: weather provider down".to_owned()
        }
    );
    assert_eq!(controller.screen(), Screen::Search);
    controller.with_view(|view| {
        assert!(
            view.error_html()
                .contains("Error: server returned 502: weather provider down")
        );
    });
}
