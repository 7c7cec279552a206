//! Output Rendering
//!
//! Provides a unified interface for rendering scan, status and import
//! results as text or JSON. Renderers return strings; the caller prints.

use serde::Serialize;

use crate::application::{ImportStatus, ImportSummary, ScanOutcome};
use crate::domain::entities::{
    AssetFailure, DiscoveredAsset, ScanConflict, ScanReport, StatusEntry, StatusView,
    UnsyncedAsset,
};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            skip: "[ ]",
        }
    }
}

/// Renders command results
pub trait OutcomeRenderer {
    /// Scan report; the conflict list only when `conflicts` is set
    fn scan(&self, outcome: &ScanOutcome, conflicts: bool) -> String;
    fn status(&self, outcome: &ScanOutcome) -> String;
    fn import(&self, summary: &ImportSummary) -> String;
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn report(&self, out: &mut String, report: &ScanReport) {
        let icons = self.icons();
        out.push_str(&format!("Home: {}\n", report.home.display()));
        out.push_str(&format!("Sources ({}):\n", report.sources.len()));
        for source in &report.sources {
            let mode = if source.explicit { " (explicit)" } else { "" };
            out.push_str(&format!("  {}  {}{}\n", source.label, source.path.display(), mode));
        }
        out.push_str(&format!(
            "Discovered: {} prompt(s), {} skill(s)\n",
            report.discovered_prompts.len(),
            report.discovered_skills.len()
        ));
        if self.verbose > 0 {
            for asset in report.discovered() {
                out.push_str(&format!("  {}\n", discovered_line(asset)));
            }
        }

        for (title, bucket) in [
            ("Unsynced prompts", &report.unsynced_prompts),
            ("Unsynced skills", &report.unsynced_skills),
        ] {
            out.push_str(&format!("{} ({}):\n", title, bucket.len()));
            for unsynced in bucket {
                out.push_str(&format!("  {} {}\n", icons.write, unsynced_line(unsynced)));
            }
        }
    }

    fn conflicts(&self, out: &mut String, conflicts: &[ScanConflict]) {
        let icons = self.icons();
        out.push_str(&format!("Conflicts ({}):\n", conflicts.len()));
        for conflict in conflicts {
            out.push_str(&format!(
                "  {} {}  {}  [{}]\n",
                icons.cross,
                conflict.identity,
                conflict.state,
                conflict.sources.join(", ")
            ));
            // Several copies behind one label: name each of them
            if conflict.copies.len() > conflict.sources.len() {
                for copy in &conflict.copies {
                    out.push_str(&format!("    {}\n", copy.label()));
                }
            }
            out.push_str(&format!("    {}\n", conflict.reason));
            out.push_str(&format!("    {} {}\n", icons.write, conflict.recommendation));
            if let Some(diff) = &conflict.diff {
                for line in diff.summary().lines() {
                    out.push_str(&format!("      {}\n", line));
                }
            }
        }
    }

    fn failures(&self, out: &mut String, failures: &[AssetFailure]) {
        if failures.is_empty() {
            return;
        }
        let icons = self.icons();
        out.push_str(&format!("Failures ({}):\n", failures.len()));
        for failure in failures {
            out.push_str(&format!(
                "  {} {}  {}\n",
                icons.cross, failure.identity, failure.message
            ));
        }
    }
}

impl OutcomeRenderer for TextRenderer {
    fn scan(&self, outcome: &ScanOutcome, conflicts: bool) -> String {
        let mut out = String::new();
        self.report(&mut out, &outcome.report);
        if conflicts {
            self.conflicts(&mut out, &outcome.conflicts);
        } else if outcome.has_conflicts() {
            out.push_str(&format!(
                "{} conflict(s); run `hearth scan --conflicts` for details\n",
                outcome.conflicts.len()
            ));
        }
        self.failures(&mut out, &outcome.failures);
        out
    }

    fn status(&self, outcome: &ScanOutcome) -> String {
        let icons = self.icons();
        let StatusView {
            synced_tracked,
            synced_untracked,
            unsynced,
        } = &outcome.status;

        let mut out = String::new();
        for (title, icon, bucket) in [
            ("Synced, tracked", icons.check, synced_tracked),
            ("Synced, untracked", icons.skip, synced_untracked),
            ("Unsynced", icons.write, unsynced),
        ] {
            out.push_str(&format!("{} ({}):\n", title, bucket.len()));
            for entry in bucket {
                out.push_str(&format!("  {} {}\n", icon, status_line(entry)));
            }
        }
        self.failures(&mut out, &outcome.failures);
        out
    }

    fn import(&self, summary: &ImportSummary) -> String {
        let icons = self.icons();
        let mut out = String::new();
        for item in &summary.items {
            let line = match &item.status {
                ImportStatus::Imported { target } => format!(
                    "  {} {}  from {} {} {}",
                    icons.check,
                    item.identity,
                    item.source.as_deref().unwrap_or("?"),
                    icons.write,
                    target.display()
                ),
                ImportStatus::Skipped { reason } => {
                    format!("  {} {}  skipped: {}", icons.skip, item.identity, reason)
                }
                ImportStatus::Failed { error } => {
                    format!("  {} {}  failed: {}", icons.cross, item.identity, error)
                }
            };
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&format!(
            "Imported {}, skipped {}, failed {}\n",
            summary.imported(),
            summary.skipped(),
            summary.failed()
        ));
        out
    }
}

fn discovered_line(asset: &DiscoveredAsset) -> String {
    format!(
        "{}  [{}]  {}",
        asset.identity,
        asset.source,
        asset.path.display()
    )
}

fn unsynced_line(unsynced: &UnsyncedAsset) -> String {
    format!("{}  [{}]", unsynced.identity, unsynced.sources.join(", "))
}

fn status_line(entry: &StatusEntry) -> String {
    format!("{}  [{}]", entry.identity, entry.sources.join(", "))
}

/// JSON renderer
pub struct JsonRenderer;

impl JsonRenderer {
    fn render<T: Serialize>(value: &T) -> String {
        let mut json = serde_json::to_string_pretty(value).unwrap_or_default();
        json.push('\n');
        json
    }
}

impl OutcomeRenderer for JsonRenderer {
    fn scan(&self, outcome: &ScanOutcome, _conflicts: bool) -> String {
        Self::render(outcome)
    }

    fn status(&self, outcome: &ScanOutcome) -> String {
        Self::render(&outcome.status)
    }

    fn import(&self, summary: &ImportSummary) -> String {
        Self::render(summary)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool, verbose: u8) -> Box<dyn OutcomeRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
