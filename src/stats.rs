use serde::Serialize;

use crate::{
    codeforces::CodeforcesStats, error::AppError, leetcode::LeetCodeStats, state::AppState,
};

#[derive(Debug, Serialize)]
pub struct CombinedStats {
    pub leetcode: LeetCodeStats,
    pub codeforces: CodeforcesStats,
}

/// Fetch both profiles at once and merge. The two fetches run concurrently;
/// if either fails the whole request fails and any partial result is dropped.
pub async fn fetch_combined(state: &AppState) -> Result<CombinedStats, AppError> {
    let (leetcode, codeforces) = tokio::try_join!(
        state.leetcode.fetch_stats(),
        state.codeforces.fetch_stats()
    )?;

    Ok(CombinedStats {
        leetcode,
        codeforces,
    })
}
