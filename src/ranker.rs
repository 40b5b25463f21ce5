use std::collections::HashMap;

use crate::models::{ContestMetadata, ContestScore, RankedContest};

pub const DEFAULT_TOP: usize = 10;

/// Orders scores ascending by coefficient, so strongly negative correlations
/// come first. Ties keep catalog order.
pub fn rank_scores(
    scores: &[ContestScore],
    catalog: &[ContestMetadata],
    limit: usize,
) -> Vec<RankedContest> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| {
        a.coefficient
            .partial_cmp(&b.coefficient)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let names: HashMap<i64, &str> = catalog
        .iter()
        .map(|contest| (contest.id, contest.name.as_str()))
        .collect();

    sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, score)| RankedContest {
            rank: position + 1,
            contest_id: score.contest_id,
            name: names
                .get(&score.contest_id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Contest {}", score.contest_id)),
            coefficient: score.coefficient,
        })
        .collect()
}
