//! Output helpers and progress spinners for CLI

use std::{fmt::Display, fs, io::Write, path::Path};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::hexapawn::{Catalog, TreeStats};

/// Create a spinner for tree construction and rendering
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("invalid spinner template")?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Write `contents` to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}

fn heading(report: &mut String, title: &str, rule: char) {
    report.push_str(&format!("\n{title}\n{}\n", rule.to_string().repeat(title.len())));
}

fn row(report: &mut String, key: &str, value: impl Display) {
    report.push_str(&format!("  {:20} {value}\n", format!("{key}:")));
}

/// Summary of the full game tree: outcome counts and nodes per ply
pub fn tree_report(stats: &TreeStats) -> String {
    let mut report = String::new();
    heading(&mut report, "Hexapawn game tree", '=');
    row(&mut report, "Nodes", stats.nodes);
    row(&mut report, "Terminal", stats.terminal);
    row(&mut report, "White wins", stats.white_wins);
    row(&mut report, "Black wins", stats.black_wins);
    // ply numbers start at 1, so the last ply is one past the number of moves
    row(
        &mut report,
        "Longest game",
        format!("{} moves", stats.max_ply.saturating_sub(1)),
    );

    heading(&mut report, "Nodes by ply", '-');
    for (ply, count) in &stats.nodes_per_ply {
        row(&mut report, &format!("Ply {ply}"), count);
    }
    report
}

/// Per-ply sizes of one player's catalog
pub fn catalog_report(catalog: &Catalog) -> String {
    let mut report = String::new();
    heading(
        &mut report,
        &format!("Distinct positions, {} to move", catalog.player()),
        '-',
    );
    for (ply, boards) in catalog.plies() {
        row(&mut report, &format!("Ply {ply}"), boards.len());
    }
    row(&mut report, "Total", catalog.len());
    row(&mut report, "Most moves", catalog.max_legal_moves());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexapawn::{Games, Player};

    #[test]
    fn write_output_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tex");
        write_output(Some(&path), "hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn tree_report_lists_outcomes_and_plies() {
        let report = tree_report(&Games::new().stats());
        assert!(report.contains("Hexapawn game tree\n=================="));
        assert!(report.contains("  Nodes:               125\n"));
        assert!(report.contains("  White wins:          30\n"));
        assert!(report.contains("  Longest game:        7 moves\n"));
        assert!(report.contains("  Ply 8:               8\n"));
    }

    #[test]
    fn catalog_report_skips_empty_plies() {
        let catalog = Catalog::build(&Games::new(), Player::Black);
        let report = catalog_report(&catalog);
        assert!(report.starts_with("\nDistinct positions, Black to move\n---"));
        assert!(report.contains("  Ply 6:               7\n"));
        assert!(!report.contains("Ply 8"));
        assert!(report.contains("  Total:               19\n"));
    }

    #[test]
    fn spinner_template_is_valid() {
        assert!(create_spinner("building").is_ok());
    }
}
