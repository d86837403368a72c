use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use ginterval_core::DEFAULT_ADJACENT;
use ginterval_core::models::{GenomicInterval, Relation};

/// Everything `compare` knows about a receiver/subject pair.
#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub receiver: GenomicInterval,
    pub subject: GenomicInterval,
    pub adjacent: u32,
    pub relation: Relation,
    pub overlap: i64,
    pub nearly_overlapped: bool,
    pub overlapped: bool,
}

impl CompareReport {
    pub fn new(receiver: GenomicInterval, subject: GenomicInterval) -> Self {
        let relation = receiver.compare(&subject);
        CompareReport {
            adjacent: receiver.adjacent(),
            relation,
            overlap: receiver.overlap(&subject),
            nearly_overlapped: relation.is_nearly_overlapped(),
            overlapped: relation.is_overlapped(),
            receiver,
            subject,
        }
    }

    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.receiver,
            self.subject,
            self.relation,
            self.overlap,
            self.nearly_overlapped,
            self.overlapped
        )
    }
}

fn parse_interval(text: &str, role: &str) -> Result<GenomicInterval> {
    GenomicInterval::parse(text).with_context(|| format!("Invalid {} interval: {}", role, text))
}

pub fn compare_intervals(receiver: &str, subject: &str, adjacent: u32) -> Result<CompareReport> {
    let receiver = parse_interval(receiver, "receiver")?.with_adjacent(adjacent);
    let subject = parse_interval(subject, "subject")?;
    Ok(CompareReport::new(receiver, subject))
}

pub fn expand_intervals(a: &str, b: &str) -> Result<GenomicInterval> {
    let a = parse_interval(a, "first")?;
    let b = parse_interval(b, "second")?;
    Ok(a.expand(&b)?)
}

pub fn run_compare(matches: &ArgMatches) -> Result<()> {
    let receiver = matches
        .get_one::<String>("receiver")
        .ok_or_else(|| anyhow!("A receiver interval is required."))?;
    let subject = matches
        .get_one::<String>("subject")
        .ok_or_else(|| anyhow!("A subject interval is required."))?;
    let adjacent = matches
        .get_one::<u32>("adjacent")
        .copied()
        .unwrap_or(DEFAULT_ADJACENT);
    let as_json = matches.get_flag("json");

    let report = compare_intervals(receiver, subject, adjacent)?;
    info!(
        "{} vs {} (adjacent={}): {}",
        report.receiver, report.subject, adjacent, report.relation
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_report(&mut writer, &report, as_json)?;
    writer.flush()?;

    Ok(())
}

/// Write one report as a JSON line or as tab-separated fields.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &CompareReport,
    as_json: bool,
) -> Result<()> {
    if as_json {
        serde_json::to_writer(&mut *writer, report)?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "{}", report.to_tsv())?;
    }
    Ok(())
}

pub fn run_expand(matches: &ArgMatches) -> Result<()> {
    let a = matches
        .get_one::<String>("a")
        .ok_or_else(|| anyhow!("A first interval is required."))?;
    let b = matches
        .get_one::<String>("b")
        .ok_or_else(|| anyhow!("A second interval is required."))?;

    let expanded = expand_intervals(a, b)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writeln!(writer, "{}", expanded)?;
    writer.flush()?;

    Ok(())
}
