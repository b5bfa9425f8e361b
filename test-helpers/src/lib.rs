use api::time::TimeSource;

pub mod mock;
use api::{Config, telemetry};
use payloads::{Tutorial, requests};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub const START_TIME: &str = "2025-01-01T00:00:00Z";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    pub time_source: TimeSource,
}

impl TestApp {
    /// Create the three standard test tutorials, returning them in creation
    /// order.
    pub async fn create_test_tutorials(&self) -> anyhow::Result<Vec<Tutorial>> {
        let mut created = Vec::new();
        for details in [
            tutorial_details_a(),
            tutorial_details_b(),
            tutorial_details_c(),
        ] {
            let tutorial = self.client.create_tutorial(&details).await?;
            assert_eq!(tutorial.title, details.title);
            assert_eq!(tutorial.description, details.description);
            assert_eq!(tutorial.published, details.published);
            created.push(tutorial);
        }
        Ok(created)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    #[cfg(feature = "mock-time")]
    let time_source = TimeSource::new(START_TIME.parse().unwrap());

    #[cfg(not(feature = "mock-time"))]
    let time_source = TimeSource::new();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = api::build(&mut config, time_source.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        time_source,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn tutorial_details_a() -> requests::CreateTutorial {
    requests::CreateTutorial {
        title: "React Basics".into(),
        description: "Components, props and state".into(),
        published: true,
    }
}

pub fn tutorial_details_b() -> requests::CreateTutorial {
    requests::CreateTutorial {
        title: "Advanced React Hooks".into(),
        description: "Writing your own data fetching hooks".into(),
        published: false,
    }
}

pub fn tutorial_details_c() -> requests::CreateTutorial {
    requests::CreateTutorial {
        title: "Rust Ownership".into(),
        description: "Borrowing without tears".into(),
        published: true,
    }
}
