use crate::models::TeamResult;

/// Count of teams solving at least `k` problems, indexed by `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveHistogram {
    buckets: Vec<u64>,
}

impl SolveHistogram {
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    pub fn problem_count(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Teams that contributed to the histogram.
    pub fn counted_teams(&self) -> u64 {
        self.buckets[0]
    }

    /// `(threshold, count)` pairs for non-empty buckets, in threshold order.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.buckets
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, count)| *count > 0)
    }
}

/// Builds the histogram from ghost rows only. Points stand in for solved
/// problems; they are truncated and clamped to the problem count.
pub fn build_histogram(problem_count: usize, rows: &[TeamResult]) -> SolveHistogram {
    let mut buckets = vec![0u64; problem_count + 1];

    for row in rows.iter().filter(|row| row.is_ghost()) {
        if row.points.is_nan() || row.points < 0.0 {
            continue;
        }
        let solved = (row.points.trunc() as usize).min(problem_count);
        for bucket in buckets.iter_mut().take(solved + 1) {
            *bucket += 1;
        }
    }

    SolveHistogram { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Party, ParticipantType};

    fn ghost(points: f64) -> TeamResult {
        TeamResult {
            party: Party {
                participant_type: ParticipantType::Virtual,
                ghost: true,
            },
            points,
        }
    }

    #[test]
    fn counts_teams_at_or_above_each_threshold() {
        let rows: Vec<TeamResult> = [0.0, 1.0, 2.0, 3.0, 3.0].into_iter().map(ghost).collect();
        let histogram = build_histogram(3, &rows);
        assert_eq!(histogram.buckets(), &[5, 4, 3, 2]);
        assert_eq!(histogram.counted_teams(), 5);
    }

    #[test]
    fn ignores_live_and_non_ghost_participants() {
        let mut rows = vec![ghost(2.0)];
        rows.push(TeamResult {
            party: Party {
                participant_type: ParticipantType::Contestant,
                ghost: false,
            },
            points: 2.0,
        });
        rows.push(TeamResult {
            party: Party {
                participant_type: ParticipantType::Virtual,
                ghost: false,
            },
            points: 1.0,
        });
        let histogram = build_histogram(2, &rows);
        assert_eq!(histogram.buckets(), &[1, 1, 1]);
    }

    #[test]
    fn zero_problem_contest_has_single_bucket() {
        let histogram = build_histogram(0, &[]);
        assert_eq!(histogram.buckets(), &[0]);
        assert_eq!(histogram.problem_count(), 0);
    }

    #[test]
    fn fractional_and_out_of_range_points() {
        let rows = vec![ghost(1.7), ghost(9.0), ghost(-1.0)];
        let histogram = build_histogram(2, &rows);
        assert_eq!(histogram.buckets(), &[2, 2, 1]);
    }

    #[test]
    fn histogram_never_increases_with_threshold() {
        let rows: Vec<TeamResult> = [4.0, 0.0, 2.0, 5.0, 1.0, 1.0, 3.0]
            .into_iter()
            .map(ghost)
            .collect();
        let histogram = build_histogram(5, &rows);
        assert!(histogram.buckets().windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(histogram.counted_teams(), rows.len() as u64);
    }

    #[test]
    fn nonzero_skips_empty_buckets() {
        let rows = vec![ghost(1.0), ghost(1.0)];
        let histogram = build_histogram(4, &rows);
        let pairs: Vec<(usize, u64)> = histogram.nonzero().collect();
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);
    }
}
