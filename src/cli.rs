//! Command line interface
//!
//! Handlers return their output instead of printing it so they can be
//! exercised from tests; `main` does the printing.

use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::version::latest::{
    calculate_latest_major, calculate_latest_minor, calculate_latest_patch,
};
use crate::version::{
    CompareResult, SortOrder, compare_str, compare_to_latest, parse_version, sort_versions,
};

#[derive(Debug, Parser)]
#[command(name = "vercmp")]
#[command(version, about = "Compare and sort loosely structured version strings")]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two versions and print <, = or >
    #[command(visible_alias = "cmp")]
    Compare { a: String, b: String },

    /// Sort versions and print them one per line (descending by default)
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,

        /// Output in ascending order
        #[arg(long, overrides_with = "descending")]
        ascending: bool,

        /// Output in descending order
        #[arg(long, overrides_with = "ascending")]
        descending: bool,

        /// Skip invalid versions
        #[arg(long)]
        skip_invalid: bool,

        /// Print only one of each group of equal versions
        #[arg(long)]
        dedup: bool,
    },

    /// Check whether CURRENT is the latest of the AVAILABLE versions
    Latest {
        current: String,

        #[arg(required = true)]
        available: Vec<String>,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
}

/// Result of the `latest` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestReport {
    pub current: String,
    pub latest: String,
    pub status: CompareResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

impl LatestReport {
    pub fn new(current: &str, available: &[String]) -> anyhow::Result<Self> {
        let latest = available
            .iter()
            .filter_map(|v| parse_version(v).ok())
            .max()
            .context("no valid version among the available versions")?;
        let latest = latest.to_string();

        Ok(Self {
            current: current.to_string(),
            status: compare_to_latest(current, &latest),
            patch: calculate_latest_patch(current, available),
            minor: calculate_latest_minor(current, available),
            major: calculate_latest_major(current, available),
            latest,
        })
    }

    fn render(&self) -> String {
        let mut out = format!("status: {}\nlatest: {}", self.status, self.latest);
        for (name, value) in [
            ("patch", &self.patch),
            ("minor", &self.minor),
            ("major", &self.major),
        ] {
            if let Some(v) = value {
                out.push_str(&format!("\n{}: {}", name, v));
            }
        }
        out
    }
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// Run a command and return what should be printed on stdout
pub fn run(command: &Command, config: &Config) -> anyhow::Result<String> {
    match command {
        Command::Compare { a, b } => {
            let ordering = compare_str(a, b)?;
            debug!("{} {} {}", a, ordering_symbol(ordering), b);
            Ok(ordering_symbol(ordering).to_string())
        }
        Command::Sort {
            versions,
            ascending,
            descending,
            skip_invalid,
            dedup,
        } => {
            let mut options = config.sort.to_options();
            if *ascending {
                options.order = SortOrder::Ascending;
            } else if *descending {
                options.order = SortOrder::Descending;
            }
            options.skip_invalid |= *skip_invalid;
            options.dedup |= *dedup;

            let sorted = sort_versions(versions, options)?;
            info!("Sorted {} of {} versions", sorted.len(), versions.len());

            Ok(sorted
                .iter()
                .map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Latest {
            current,
            available,
            json,
        } => {
            let report = LatestReport::new(current, available)?;
            if *json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(report.render())
            }
        }
    }
}
