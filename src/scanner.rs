use crate::archive::ContestArchive;
use crate::correlation::score_histogram;
use crate::distribution::build_histogram;
use crate::error::ArchiveError;
use crate::filter::FilterSelection;
use crate::models::{ContestMetadata, ContestScore, Standings};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanProgress {
    pub matched: usize,
    pub scanned: usize,
    pub total: usize,
}

impl ScanProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.scanned as f64 * 100.0 / self.total as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Scored contests in catalog order.
    pub scores: Vec<ContestScore>,
    pub matched: usize,
}

pub fn score_standings(standings: &Standings) -> Option<f64> {
    let histogram = build_histogram(standings.problems.len(), &standings.rows);
    let coefficient = score_histogram(&histogram);
    tracing::debug!(
        problems = histogram.problem_count(),
        teams = histogram.counted_teams(),
        ?coefficient,
        "contest scored"
    );
    tracing::trace!(buckets = ?histogram.buckets(), "solve histogram");
    coefficient
}

/// Fetches and scores every matching contest, one request at a time.
///
/// `on_progress` runs after each matching contest and once more at the end if
/// the final catalog entry did not match, so the last report is always 100%.
pub async fn scan<A, F>(
    archive: &A,
    catalog: &[ContestMetadata],
    filter: &FilterSelection,
    mut on_progress: F,
) -> Result<ScanOutcome, ArchiveError>
where
    A: ContestArchive,
    F: FnMut(ScanProgress),
{
    let total = catalog.len();
    let mut outcome = ScanOutcome::default();
    let mut last_reported = None;

    for (position, contest) in catalog.iter().enumerate() {
        if !filter.matches(contest) {
            continue;
        }

        let standings = archive.standings(contest.id).await?;
        outcome.matched += 1;

        match score_standings(&standings) {
            Some(coefficient) => outcome.scores.push(ContestScore {
                contest_id: contest.id,
                coefficient,
            }),
            None => tracing::debug!(contest_id = contest.id, "not enough data to score"),
        }

        let scanned = position + 1;
        on_progress(ScanProgress {
            matched: outcome.matched,
            scanned,
            total,
        });
        last_reported = Some(scanned);
    }

    if last_reported != Some(total) {
        on_progress(ScanProgress {
            matched: outcome.matched,
            scanned: total,
            total,
        });
    }

    tracing::info!(
        matched = outcome.matched,
        scored = outcome.scores.len(),
        catalog = total,
        "scan finished"
    );
    Ok(outcome)
}
