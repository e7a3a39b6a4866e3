//! Codeforces rating and solve history, fetched through the public REST API.
//!
//! Two calls per request: `user.info` for rating and rank, `user.status` for
//! the full submission list. From the submissions we derive
//!
//! - the number of distinct problems solved, where a problem is identified
//!   by its `(contestId, index)` pair and only `OK` verdicts count, and
//! - the current daily streak: consecutive local calendar days ending today
//!   with at least one accepted submission. A day without an accepted
//!   submission breaks the chain, so a streak can only be nonzero if
//!   something was solved today.
//!
//! Both API responses arrive in the standard Codeforces envelope
//! `{status, result, comment}`; a `FAILED` status or a missing user record
//! is an error.
use std::collections::HashSet;

use chrono::{DateTime, Duration, Local, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const API_BASE: &str = "https://codeforces.com/api";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeforcesStats {
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    pub total_solved: u64,
    pub current_streak: u32,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: String,
    result: Option<T>,
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    rating: Option<i64>,
    max_rating: Option<i64>,
    rank: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Submission {
    creation_time_seconds: i64,
    verdict: Option<String>,
    problem: Problem,
}

impl Submission {
    fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some("OK")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Problem {
    contest_id: Option<i64>,
    index: String,
}

pub struct CodeforcesClient {
    http: Client,
    base_url: String,
    handle: String,
}

impl CodeforcesClient {
    pub fn new(http: Client, base_url: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            handle: handle.into(),
        }
    }

    pub async fn fetch_stats(&self) -> Result<CodeforcesStats, AppError> {
        let user = self.fetch_user().await?;
        let submissions = self.fetch_submissions().await?;

        Ok(CodeforcesStats {
            handle: self.handle.clone(),
            rating: user.rating,
            max_rating: user.max_rating,
            rank: user.rank,
            total_solved: distinct_solved(&submissions),
            current_streak: current_streak(&solved_days(&submissions), Local::now().date_naive()),
        })
    }

    async fn fetch_user(&self) -> Result<User, AppError> {
        let url = format!("{}/user.info?handles={}", self.base_url, self.handle);
        let envelope: Envelope<Vec<User>> = self.fetch_json(&url).await?;

        unwrap_envelope(envelope)?
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| AppError::UnknownHandle(self.handle.clone()))
    }

    async fn fetch_submissions(&self) -> Result<Vec<Submission>, AppError> {
        let url = format!("{}/user.status?handle={}", self.base_url, self.handle);
        let envelope: Envelope<Vec<Submission>> = self.fetch_json(&url).await?;

        // A missing result list on an OK status means no submissions yet.
        Ok(unwrap_envelope(envelope)?.unwrap_or_default())
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        Ok(self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<Option<T>, AppError> {
    if envelope.status != "OK" {
        return Err(AppError::UpstreamData(
            envelope
                .comment
                .unwrap_or_else(|| "upstream reported failure".to_string()),
        ));
    }

    Ok(envelope.result)
}

fn distinct_solved(submissions: &[Submission]) -> u64 {
    submissions
        .iter()
        .filter(|s| s.is_accepted())
        .map(|s| (s.problem.contest_id, s.problem.index.as_str()))
        .collect::<HashSet<_>>()
        .len() as u64
}

fn solved_days(submissions: &[Submission]) -> HashSet<NaiveDate> {
    submissions
        .iter()
        .filter(|s| s.is_accepted())
        .filter_map(|s| local_date(s.creation_time_seconds))
        .collect()
}

fn local_date(seconds: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(seconds, 0).map(|utc| utc.with_timezone(&Local).date_naive())
}

/// Walk backward from `today` while every day has an accepted submission.
/// The walk is bounded by the earliest solved day, so it always terminates
/// inside the data it was given.
fn current_streak(solved_days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(earliest) = solved_days.iter().min().copied() else {
        return 0;
    };

    let mut streak = 0;
    let mut day = today;
    while day >= earliest && solved_days.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(verdict: &str, contest_id: Option<i64>, index: &str, seconds: i64) -> Submission {
        Submission {
            creation_time_seconds: seconds,
            verdict: Some(verdict.to_string()),
            problem: Problem {
                contest_id,
                index: index.to_string(),
            },
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duplicate_accepted_submissions_count_once() {
        let submissions = vec![
            submission("OK", Some(1), "A", 1_000),
            submission("OK", Some(1), "A", 2_000),
            submission("OK", Some(2), "B", 3_000),
        ];

        assert_eq!(distinct_solved(&submissions), 2);
    }

    #[test]
    fn rejected_submissions_do_not_count() {
        let submissions = vec![
            submission("WRONG_ANSWER", Some(1), "A", 1_000),
            submission("OK", Some(1), "A", 2_000),
            submission("TIME_LIMIT_EXCEEDED", Some(2), "B", 3_000),
        ];

        assert_eq!(distinct_solved(&submissions), 1);
    }

    #[test]
    fn same_index_in_different_contests_counts_twice() {
        let submissions = vec![
            submission("OK", Some(1), "A", 1_000),
            submission("OK", Some(2), "A", 2_000),
        ];

        assert_eq!(distinct_solved(&submissions), 2);
    }

    #[test]
    fn streak_counts_consecutive_days_through_today() {
        let solved = HashSet::from([day(2026, 8, 6), day(2026, 8, 5), day(2026, 8, 4)]);

        assert_eq!(current_streak(&solved, day(2026, 8, 6)), 3);
    }

    #[test]
    fn streak_breaks_immediately_without_a_solve_today() {
        let solved = HashSet::from([day(2026, 8, 5), day(2026, 8, 4)]);

        assert_eq!(current_streak(&solved, day(2026, 8, 6)), 0);
    }

    #[test]
    fn streak_of_one_for_today_only() {
        let solved = HashSet::from([day(2026, 8, 6)]);

        assert_eq!(current_streak(&solved, day(2026, 8, 6)), 1);
    }

    #[test]
    fn gap_in_history_stops_the_walk() {
        let solved = HashSet::from([day(2026, 8, 6), day(2026, 8, 5), day(2026, 8, 3)]);

        assert_eq!(current_streak(&solved, day(2026, 8, 6)), 2);
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(current_streak(&HashSet::new(), day(2026, 8, 6)), 0);
    }

    #[test]
    fn failed_envelope_is_an_error() {
        let envelope: Envelope<Vec<User>> = serde_json::from_str(
            r#"{"status":"FAILED","comment":"handles: User with handle nobody not found"}"#,
        )
        .unwrap();

        assert!(unwrap_envelope(envelope).is_err());
    }
}
