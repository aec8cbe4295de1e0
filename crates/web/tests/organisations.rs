use database::MemoryDatabase;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use web::WebState;

struct TestApp {
    base_url: String,
    client: Client,
}

impl TestApp {
    async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(web::serve(listener, WebState::new(MemoryDatabase::new())));

        Self {
            base_url: format!("http://{}/api", address),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/organisations{}", self.base_url, path)
    }

    async fn create_organisation(&self, name: &str) -> Value {
        let response = self
            .client
            .post(self.url("/create"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.unwrap()
    }

    async fn create_location(
        &self,
        organisation_id: &Value,
        name: &str,
        longitude: f64,
        latitude: f64,
    ) -> reqwest::Response {
        self.client
            .post(self.url("/create/location"))
            .json(&json!({
                "organisation_id": organisation_id,
                "location_name": name,
                "longitude": longitude,
                "latitude": latitude,
            }))
            .send()
            .await
            .unwrap()
    }

    async fn locations(&self, organisation_id: &Value, bounding_box: Option<[f64; 4]>) -> Value {
        let mut request = self
            .client
            .get(self.url(&format!("/{}/locations", organisation_id)));
        if let Some(bounding_box) = bounding_box {
            let params = bounding_box
                .iter()
                .map(|value| ("bounding_box", *value))
                .collect::<Vec<_>>();
            request = request.query(&params);
        }
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.unwrap()
    }
}

fn location_names(locations: &Value) -> Vec<&str> {
    locations
        .as_array()
        .unwrap()
        .iter()
        .map(|location| location["location_name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn created_organisation_is_listed_once() {
    let app = TestApp::spawn().await;
    let created = app.create_organisation("Acme").await;
    assert!(created["id"].is_i64());
    assert_eq!(created["name"], "Acme");

    let organisations: Value = app
        .client
        .get(app.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let acmes = organisations
        .as_array()
        .unwrap()
        .iter()
        .filter(|organisation| organisation["name"] == "Acme")
        .collect::<Vec<_>>();
    assert_eq!(acmes.len(), 1);
    assert!(!acmes[0]["id"].is_null());
}

#[tokio::test]
async fn organisation_names_need_not_be_unique() {
    let app = TestApp::spawn().await;
    let first = app.create_organisation("Acme").await;
    let second = app.create_organisation("Acme").await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn fetching_by_id_returns_the_created_record() {
    let app = TestApp::spawn().await;
    let created = app.create_organisation("Acme").await;

    let response = app
        .client
        .get(app.url(&format!("/{}", created["id"])))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn fetching_an_unknown_id_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/999999")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "The requested item does not exist.");
    assert_eq!(body["requestedUri"], "/api/organisations/999999");
}

#[tokio::test]
async fn created_location_is_listed_without_ids() {
    let app = TestApp::spawn().await;
    let organisation = app.create_organisation("Acme").await;

    let response = app.create_location(&organisation["id"], "HQ", 10.0, 20.0).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = response.json().await.unwrap();
    assert!(created["id"].is_i64());
    assert_eq!(created["organisation_id"], organisation["id"]);
    assert_eq!(created["location_name"], "HQ");

    let locations = app.locations(&organisation["id"], None).await;
    assert_eq!(
        locations,
        json!([{ "location_name": "HQ", "longitude": 10.0, "latitude": 20.0 }])
    );
}

#[tokio::test]
async fn bounding_box_narrows_the_listing() {
    let app = TestApp::spawn().await;
    let organisation = app.create_organisation("Acme").await;
    let id = &organisation["id"];
    app.create_location(id, "near", 5.0, 5.0).await;
    app.create_location(id, "far", 50.0, 50.0).await;

    let small = app.locations(id, Some([0.0, 0.0, 10.0, 10.0])).await;
    assert_eq!(location_names(&small), vec!["near"]);

    let large = app.locations(id, Some([0.0, 0.0, 100.0, 100.0])).await;
    assert_eq!(location_names(&large), vec!["near", "far"]);

    let elsewhere = app.locations(id, Some([60.0, 60.0, 70.0, 70.0])).await;
    assert!(location_names(&elsewhere).is_empty());
}

#[tokio::test]
async fn bounding_box_bounds_are_inclusive() {
    let app = TestApp::spawn().await;
    let organisation = app.create_organisation("Acme").await;
    let id = &organisation["id"];
    app.create_location(id, "corner", 10.0, 10.0).await;

    let locations = app.locations(id, Some([0.0, 0.0, 10.0, 10.0])).await;
    assert_eq!(location_names(&locations), vec!["corner"]);
}

#[tokio::test]
async fn locations_of_other_organisations_are_not_listed() {
    let app = TestApp::spawn().await;
    let acme = app.create_organisation("Acme").await;
    let other = app.create_organisation("Other").await;
    app.create_location(&acme["id"], "HQ", 1.0, 1.0).await;
    app.create_location(&other["id"], "Depot", 1.0, 1.0).await;

    let locations = app.locations(&acme["id"], None).await;
    assert_eq!(location_names(&locations), vec!["HQ"]);
}

#[tokio::test]
async fn organisation_without_locations_has_an_empty_listing() {
    let app = TestApp::spawn().await;
    let organisation = app.create_organisation("Acme").await;

    assert_eq!(app.locations(&organisation["id"], None).await, json!([]));
    assert_eq!(app.locations(&json!(999999), None).await, json!([]));
}

#[tokio::test]
async fn location_of_unknown_organisation_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.create_location(&json!(999999), "HQ", 10.0, 20.0).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Referential integrity violated"));
}

#[tokio::test]
async fn malformed_input_is_unprocessable() {
    let app = TestApp::spawn().await;

    let missing_name = app
        .client
        .post(app.url("/create"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_name.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let wrong_type = app
        .client
        .post(app.url("/create/location"))
        .json(&json!({
            "organisation_id": 1,
            "location_name": "HQ",
            "longitude": "east",
            "latitude": 20.0,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_type.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let not_an_id = app.client.get(app.url("/abc")).send().await.unwrap();
    assert_eq!(not_an_id.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let organisation = app.create_organisation("Acme").await;
    let short_box = app
        .client
        .get(app.url(&format!("/{}/locations", organisation["id"])))
        .query(&[("bounding_box", 1.0), ("bounding_box", 2.0)])
        .send()
        .await
        .unwrap();
    assert_eq!(short_box.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let not_a_number = app
        .client
        .get(app.url(&format!("/{}/locations", organisation["id"])))
        .query(&[("bounding_box", "north")])
        .send()
        .await
        .unwrap();
    assert_eq!(not_a_number.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn service_endpoints() {
    let app = TestApp::spawn().await;

    let ping: Value = app
        .client
        .get(format!("{}/ping", app.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ping, json!({ "message": "pong!" }));

    let schema = app.client.get(app.url("/schema")).send().await.unwrap();
    assert_eq!(schema.status(), StatusCode::OK);
    let schema: Value = schema.json().await.unwrap();
    assert!(schema.is_object());

    let missing = app
        .client
        .get(format!("{}/nothing/here", app.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
