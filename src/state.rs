use std::{sync::Arc, time::Duration};

use reqwest::Client;

use super::{
    codeforces::{self, CodeforcesClient},
    config::Config,
    leetcode::{self, LeetCodeClient},
    projects::{Project, catalog},
};

pub struct AppState {
    pub config: Config,
    pub projects: Vec<Project>,
    pub leetcode: LeetCodeClient,
    pub codeforces: CodeforcesClient,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let http = build_client();

        let leetcode = LeetCodeClient::new(
            http.clone(),
            leetcode::GRAPHQL_ENDPOINT,
            config.leetcode_username.as_str(),
        );
        let codeforces = CodeforcesClient::new(
            http,
            codeforces::API_BASE,
            config.codeforces_handle.as_str(),
        );

        Arc::new(Self {
            config,
            projects: catalog(),
            leetcode,
            codeforces,
        })
    }
}

// One bounded client shared by both upstreams. Without the timeout a hung
// upstream would stall the stats request indefinitely.
fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client")
}
