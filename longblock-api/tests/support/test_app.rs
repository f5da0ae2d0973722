#![allow(dead_code)]

use std::io;
use std::net::TcpListener;
use std::sync::Arc;

use longblock::module::DebugModule;
use longblock::pauser::gate::Gate;
use longblock_api::startup::run;

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub gate: Arc<Gate>,
    pub module: DebugModule,
    server_handle: tokio::task::JoinHandle<io::Result<()>>,
}

impl TestApp {
    pub async fn health_check(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn openapi(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api-docs/openapi.json", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn pause(&self) -> reqwest::Response {
        self.api_client
            .post(format!("{}/v1/debug/pause", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn resume(&self) -> reqwest::Response {
        self.api_client
            .post(format!("{}/v1/debug/resume", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

pub async fn spawn_test_app(gate: Gate) -> TestApp {
    let base_address = "127.0.0.1";
    let listener =
        TcpListener::bind(format!("{base_address}:0")).expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let gate = Arc::new(gate);
    let module = DebugModule::new(gate.clone());

    let server = run(listener, &module).expect("failed to bind address");
    let server_handle = tokio::spawn(server);

    TestApp {
        address: format!("http://{base_address}:{port}"),
        api_client: reqwest::Client::new(),
        gate,
        module,
        server_handle,
    }
}
