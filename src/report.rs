use std::fmt::Write;
use std::path::Path;

use serde::Serialize;

use crate::models::RankedContest;
use crate::scanner::ScanOutcome;

pub fn build_report(ranked: &[RankedContest]) -> String {
    let mut output = String::new();

    if ranked.is_empty() {
        let _ = writeln!(output, "No contest had enough data to be scored.");
        return output;
    }

    let _ = writeln!(output, "The best contests are:");
    let _ = writeln!(output);
    for contest in ranked {
        let _ = writeln!(
            output,
            "#{}. {} (r = {:?})",
            contest.rank, contest.name, contest.coefficient
        );
    }

    output
}

pub fn summary_line(outcome: &ScanOutcome) -> String {
    format!(
        "{} contests matched the filter, {} could be scored.",
        outcome.matched,
        outcome.scores.len()
    )
}

#[derive(Serialize)]
struct CsvRow<'a> {
    rank: usize,
    contest_id: i64,
    name: &'a str,
    coefficient: f64,
}

pub fn write_csv(path: &Path, ranked: &[RankedContest]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, ranked)?;
    writer.flush()?;
    Ok(())
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    ranked: &[RankedContest],
) -> csv::Result<()> {
    for contest in ranked {
        writer.serialize(CsvRow {
            rank: contest.rank,
            contest_id: contest.contest_id,
            name: &contest.name,
            coefficient: contest.coefficient,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContestScore;

    fn ranked() -> Vec<RankedContest> {
        vec![
            RankedContest {
                rank: 1,
                contest_id: 101,
                name: "NERC, Northern Subregional".to_string(),
                coefficient: -1.0,
            },
            RankedContest {
                rank: 2,
                contest_id: 202,
                name: "SEERC 2019".to_string(),
                coefficient: -0.875,
            },
        ]
    }

    #[test]
    fn report_lists_rank_name_and_coefficient() {
        let report = build_report(&ranked());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "The best contests are:");
        assert_eq!(lines[2], "#1. NERC, Northern Subregional (r = -1.0)");
        assert_eq!(lines[3], "#2. SEERC 2019 (r = -0.875)");
    }

    #[test]
    fn empty_report_says_so() {
        assert_eq!(build_report(&[]), "No contest had enough data to be scored.\n");
    }

    #[test]
    fn summary_counts_matches_and_scores() {
        let outcome = ScanOutcome {
            scores: vec![ContestScore {
                contest_id: 1,
                coefficient: -0.5,
            }],
            matched: 3,
        };
        assert_eq!(
            summary_line(&outcome),
            "3 contests matched the filter, 1 could be scored."
        );
    }

    #[test]
    fn csv_quotes_names_with_commas() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_rows(&mut writer, &ranked()).unwrap();
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines[0], "rank,contest_id,name,coefficient");
        assert_eq!(lines[1], "1,101,\"NERC, Northern Subregional\",-1.0");
        assert_eq!(lines[2], "2,202,SEERC 2019,-0.875");
    }
}
