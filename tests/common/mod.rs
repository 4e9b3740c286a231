#![allow(dead_code)]

use httpmock::MockServer;
use nasa_explorer::{api, create_router, AppState, ServerConfig};
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const TEST_API_KEY: &str = "TEST_KEY";

/// 本機啟動的 API 伺服器，NASA 上游以 httpmock 取代
pub struct TestServer {
    pub base_url: String,
    pub upstream: MockServer,
    client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    pub async fn start_with(configure: impl FnOnce(&mut ServerConfig)) -> Self {
        let upstream = MockServer::start_async().await;

        let mut config = ServerConfig {
            nasa_base_url: upstream.base_url(),
            nasa_api_key: TEST_API_KEY.to_string(),
            ..ServerConfig::default()
        };
        configure(&mut config);

        let app = create_router(AppState::from_config(&config), &config);
        let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _ = api::serve(listener, app, async move {
                let _ = rx.await;
            })
            .await;
        });

        Self {
            base_url: format!("http://{addr}"),
            upstream,
            client: reqwest::Client::new(),
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    pub async fn get_json(&self, path: &str) -> (u16, Value) {
        let response = self.get(path).await;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap();
        (status, body)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

pub fn apod_json(date: &str, title: &str, media_type: &str) -> Value {
    json!({
        "date": date,
        "title": title,
        "explanation": format!("Explanation for {title}"),
        "url": format!("https://apod.nasa.gov/apod/image/{date}.jpg"),
        "hdurl": format!("https://apod.nasa.gov/apod/image/{date}_hd.jpg"),
        "media_type": media_type,
        "service_version": "v1",
        "copyright": "\nJane Doe\n"
    })
}

pub fn rover_photo_json(id: u64, sol: u32, camera: &str, earth_date: &str) -> Value {
    json!({
        "id": id,
        "sol": sol,
        "camera": {"id": 20, "name": camera, "rover_id": 5, "full_name": "Camera"},
        "img_src": format!("https://mars.nasa.gov/{id}.jpg"),
        "earth_date": earth_date,
        "rover": {
            "id": 5,
            "name": "Curiosity",
            "landing_date": "2012-08-06",
            "launch_date": "2011-11-26",
            "status": "active"
        }
    })
}

pub fn manifest_json() -> Value {
    json!({
        "photo_manifest": {
            "name": "Curiosity",
            "landing_date": "2012-08-06",
            "launch_date": "2011-11-26",
            "status": "active",
            "max_sol": 2,
            "max_date": "2012-08-16",
            "total_photos": 301,
            "photos": [
                {"sol": 1, "earth_date": "2012-08-07", "total_photos": 100, "cameras": ["MAST", "FHAZ"]},
                {"sol": 2, "earth_date": "2012-08-08", "total_photos": 201, "cameras": ["MAST"]}
            ]
        }
    })
}

fn diameter(min: f64, max: f64) -> Value {
    json!({"estimated_diameter_min": min, "estimated_diameter_max": max})
}

pub fn neo_json(id: &str, name: &str, diameter_max_km: f64, miss_distance_km: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "nasa_jpl_url": format!("https://ssd.jpl.nasa.gov/?sstr={id}"),
        "absolute_magnitude_h": 22.1,
        "estimated_diameter": {
            "kilometers": diameter(diameter_max_km / 2.0, diameter_max_km),
            "meters": diameter(diameter_max_km * 500.0, diameter_max_km * 1000.0),
            "miles": diameter(0.1, 0.2),
            "feet": diameter(100.0, 200.0)
        },
        "is_potentially_hazardous_asteroid": diameter_max_km > 0.5,
        "close_approach_data": [{
            "close_approach_date": "2024-01-01",
            "relative_velocity": {
                "kilometers_per_second": "10.5",
                "kilometers_per_hour": "37800",
                "miles_per_hour": "23487"
            },
            "miss_distance": {
                "astronomical": "0.01",
                "lunar": "3.9",
                "kilometers": miss_distance_km,
                "miles": "100000"
            },
            "orbiting_body": "Earth"
        }]
    })
}
