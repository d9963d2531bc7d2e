//! Statistics aggregation command for run history analysis.
//!
//! Reads run history files (JSONL or .jsonl.zst) and computes summary
//! metrics: run and hand counts, best and mean final scores, the star
//! distribution, and how often each hand category was scored. Corrupted
//! lines are counted and skipped with a warning, never a crash.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use sharpshot_engine::hand::Category;
use sharpshot_engine::logger::RunRecord;
use std::io::Write;

/// Aggregates statistics from JSONL run history files.
///
/// # Arguments
///
/// * `input` - Path to a JSONL (optionally .zst compressed) run history
/// * `out` - Output stream for the statistics report
/// * `err` - Output stream for warnings about skipped records
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` when the report was produced, otherwise
/// an `Err` that maps to exit code 2.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input).map_err(CliError::InvalidInput)?;

    let mut runs = 0u64;
    let mut hands = 0u64;
    let mut corrupted = 0u64;
    let mut best: Option<i64> = None;
    let mut total_score: i64 = 0;
    let mut star_hist = [0u64; 4];
    let mut category_counts: Vec<(Category, u64)> =
        Category::ALL.iter().map(|&c| (c, 0)).collect();

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let rec: RunRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(_) => {
                corrupted += 1;
                continue;
            }
        };
        runs += 1;
        hands += rec.hands.len() as u64;
        total_score += rec.final_score;
        best = Some(best.map_or(rec.final_score, |b: i64| b.max(rec.final_score)));
        for &stars in &rec.stars {
            if let Some(slot) = star_hist.get_mut(stars as usize) {
                *slot += 1;
            }
        }
        for hand in &rec.hands {
            if let Some(entry) = category_counts.iter_mut().find(|(c, _)| *c == hand.category) {
                entry.1 += 1;
            }
        }
    }

    if corrupted > 0 {
        ui::display_warning(err, &format!("{} corrupted line(s) skipped", corrupted))?;
    }
    if runs == 0 {
        ui::write_error(err, "no valid run records found")?;
        return Err(CliError::InvalidInput(
            "no valid run records found".to_string(),
        ));
    }

    writeln!(out, "Runs: {}", runs)?;
    writeln!(out, "Hands: {}", hands)?;
    writeln!(out, "Best score: {}", best.unwrap_or(0))?;
    writeln!(out, "Mean score: {}", total_score / runs as i64)?;
    writeln!(
        out,
        "Stars: 0★ {}  1★ {}  2★ {}  3★ {}",
        star_hist[0], star_hist[1], star_hist[2], star_hist[3]
    )?;
    writeln!(out, "Categories:")?;
    for (category, count) in category_counts.iter().filter(|(_, n)| *n > 0) {
        writeln!(out, "  {:<16} {}", category.name(), count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_file_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_stats_command("nonexistent.jsonl".to_string(), &mut out, &mut err);
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_counts_runs_and_skips_corruption() {
        use std::io::Write as _;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.jsonl");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"{{"run_id":"19700101-000001","seed":1,"mode":"Blitz","hands":[{{"category":"OnePair","points":122,"final_stretch":false,"multiplier":1.0}}],"final_score":122,"stars":[]}}"#
        )
        .unwrap();
        writeln!(f, "not json").unwrap();
        writeln!(
            f,
            r#"{{"run_id":"19700101-000002","seed":2,"mode":"SharpShooter","hands":[],"final_score":700,"stars":[1,3]}}"#
        )
        .unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_stats_command(path.to_str().unwrap().to_string(), &mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Runs: 2"));
        assert!(output.contains("Hands: 1"));
        assert!(output.contains("Best score: 700"));
        assert!(output.contains("Mean score: 411"));
        assert!(output.contains("One Pair"));

        let warnings = String::from_utf8(err).unwrap();
        assert!(warnings.contains("1 corrupted line(s) skipped"));
    }

    #[test]
    fn test_stats_empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jsonl");
        std::fs::File::create(&path).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command(path.to_str().unwrap().to_string(), &mut out, &mut err);
        assert!(result.is_err());
    }
}
