//! LeetCode solved counts, fetched through the public GraphQL endpoint.
//!
//! One query per request. The interesting part of the response is the
//! `acSubmissionNum` list, which reports accepted-submission counts per
//! difficulty bucket plus an `All` total.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

pub const GRAPHQL_ENDPOINT: &str = "https://leetcode.com/graphql";

const PROFILE_QUERY: &str = r#"
    query getUserProfile($username: String!) {
      matchedUser(username: $username) {
        submitStatsGlobal {
          acSubmissionNum {
            difficulty
            count
          }
        }
      }
    }
"#;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeStats {
    pub username: String,
    pub total_solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    submit_stats_global: Option<SubmitStats>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    ac_submission_num: Option<Vec<DifficultyCount>>,
}

#[derive(Debug, Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: u64,
}

pub struct LeetCodeClient {
    http: Client,
    endpoint: String,
    username: String,
}

impl LeetCodeClient {
    pub fn new(http: Client, endpoint: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            username: username.into(),
        }
    }

    pub async fn fetch_stats(&self) -> Result<LeetCodeStats, AppError> {
        let body = json!({
            "query": PROFILE_QUERY,
            "variables": { "username": self.username },
        });

        let response: GraphqlResponse = self
            .http
            .post(&self.endpoint)
            .header("Referer", "https://leetcode.com")
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(parse_counts(&self.username, response))
    }
}

fn parse_counts(username: &str, response: GraphqlResponse) -> LeetCodeStats {
    // An unknown user or a reshaped response leaves the path empty. That is
    // an all-zero profile, not an error.
    let counts = response
        .data
        .and_then(|data| data.matched_user)
        .and_then(|user| user.submit_stats_global)
        .and_then(|stats| stats.ac_submission_num)
        .unwrap_or_default();

    let mut stats = LeetCodeStats {
        username: username.to_string(),
        total_solved: 0,
        easy_solved: 0,
        medium_solved: 0,
        hard_solved: 0,
    };

    for entry in counts {
        match entry.difficulty.as_str() {
            "All" => stats.total_solved = entry.count,
            "Easy" => stats.easy_solved = entry.count,
            "Medium" => stats.medium_solved = entry.count,
            "Hard" => stats.hard_solved = entry.count,
            _ => {}
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LeetCodeStats {
        parse_counts("someone", serde_json::from_str(json).unwrap())
    }

    #[test]
    fn counts_map_to_difficulty_buckets() {
        let stats = parse(
            r#"{"data":{"matchedUser":{"submitStatsGlobal":{"acSubmissionNum":[
                {"difficulty":"Easy","count":10},
                {"difficulty":"Medium","count":5},
                {"difficulty":"All","count":15}
            ]}}}}"#,
        );

        assert_eq!(stats.total_solved, 15);
        assert_eq!(stats.easy_solved, 10);
        assert_eq!(stats.medium_solved, 5);
        assert_eq!(stats.hard_solved, 0);
    }

    #[test]
    fn unknown_difficulty_labels_are_ignored() {
        let stats = parse(
            r#"{"data":{"matchedUser":{"submitStatsGlobal":{"acSubmissionNum":[
                {"difficulty":"Hard","count":3},
                {"difficulty":"Impossible","count":99}
            ]}}}}"#,
        );

        assert_eq!(stats.hard_solved, 3);
        assert_eq!(stats.total_solved, 0);
    }

    #[test]
    fn missing_user_degrades_to_zeroes() {
        let stats = parse(r#"{"data":{"matchedUser":null}}"#);

        assert_eq!(stats.username, "someone");
        assert_eq!(stats.total_solved, 0);
        assert_eq!(stats.easy_solved, 0);
        assert_eq!(stats.medium_solved, 0);
        assert_eq!(stats.hard_solved, 0);
    }

    #[test]
    fn missing_data_degrades_to_zeroes() {
        let stats = parse(r#"{}"#);

        assert_eq!(stats.total_solved, 0);
    }
}
