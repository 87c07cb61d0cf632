use clap::Parser;
use pixel_avatar::{
    app::Application,
    config::{AppConfig, Stage},
    telemetry::{build_telemetry, register_telemetry},
};
use std::sync::LazyLock;

static TELEMETRY: LazyLock<()> = LazyLock::new(|| {
    let name = "test".to_string();
    let filter = "info".to_string();

    // Keep test output quiet unless TEST_LOG is set
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = build_telemetry(name, filter, Stage::Dev, std::io::stdout);
        register_telemetry(subscriber).expect("failed to register telemetry");
    } else {
        let subscriber = build_telemetry(name, filter, Stage::Dev, std::io::sink);
        register_telemetry(subscriber).expect("failed to register telemetry");
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn get_avatar(&self, name: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/generate-avatar", &self.address))
            .query(&[("name", name)])
            .send()
            .await
            .expect("failed to execute request")
    }
}

pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TELEMETRY);

    let app_config = {
        let mut c = AppConfig::parse_from(["pixel-avatar"]);

        // Use a random OS port
        c.app_application_host = "127.0.0.1".to_string();
        c.app_application_port = 0;

        c
    };

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let app = Application::build(app_config).await.unwrap();

    let test_app = TestApp {
        address: format!("http://127.0.0.1:{}", &app.port),
        port: app.port,
        api_client,
    };

    _ = tokio::spawn(app.run_until_stopped());

    test_app
}
