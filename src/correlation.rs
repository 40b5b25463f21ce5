use crate::distribution::SolveHistogram;

/// Pearson's r for two equal-length samples. `None` when either sample has
/// zero variance or fewer than two points.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    let r = sxy / (sxx * syy).sqrt();
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Correlation between thresholds and team counts over the non-empty buckets.
pub fn score_histogram(histogram: &SolveHistogram) -> Option<f64> {
    let (thresholds, counts): (Vec<f64>, Vec<f64>) = histogram
        .nonzero()
        .map(|(threshold, count)| (threshold as f64, count as f64))
        .unzip();

    if thresholds.len() < 2 {
        return None;
    }

    pearson(&thresholds, &counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::build_histogram;
    use crate::models::{Party, ParticipantType, TeamResult};

    fn ghosts(points: &[f64]) -> Vec<TeamResult> {
        points
            .iter()
            .map(|&points| TeamResult {
                party: Party {
                    participant_type: ParticipantType::Virtual,
                    ghost: true,
                },
                points,
            })
            .collect()
    }

    #[test]
    fn perfectly_even_contest_scores_minus_one() {
        let histogram = build_histogram(3, &ghosts(&[0.0, 1.0, 2.0, 3.0, 3.0]));
        assert_eq!(score_histogram(&histogram), Some(-1.0));
    }

    #[test]
    fn empty_histogram_has_no_score() {
        let histogram = build_histogram(5, &[]);
        assert_eq!(score_histogram(&histogram), None);
    }

    #[test]
    fn single_nonzero_bucket_has_no_score() {
        let histogram = build_histogram(4, &ghosts(&[0.0, 0.0, 0.0]));
        assert_eq!(score_histogram(&histogram), None);
    }

    #[test]
    fn flat_counts_have_no_score() {
        // Every team solved everything: counts are constant across thresholds.
        let histogram = build_histogram(2, &ghosts(&[2.0, 2.0]));
        assert_eq!(histogram.buckets(), &[2, 2, 2]);
        assert_eq!(score_histogram(&histogram), None);
    }

    #[test]
    fn pearson_matches_known_value() {
        let r = pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]).unwrap();
        assert!((r - 0.7745966692414834).abs() < 1e-12);
    }

    #[test]
    fn pearson_rejects_mismatched_lengths() {
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
    }
}
