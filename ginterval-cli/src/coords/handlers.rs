use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use log::debug;
use serde::Serialize;

use ginterval_core::models::GenomicInterval;
use ginterval_core::{DEFAULT_ZERO_END, DEFAULT_ZERO_START};

#[derive(Debug, Serialize)]
pub struct IntervalSummary {
    pub interval: GenomicInterval,
    pub zero_based_start: i64,
    pub zero_based_end: i64,
    pub size: i64,
    pub center: GenomicInterval,
}

impl From<GenomicInterval> for IntervalSummary {
    fn from(interval: GenomicInterval) -> Self {
        IntervalSummary {
            zero_based_start: interval.zero_based_start(),
            zero_based_end: interval.zero_based_end(),
            size: interval.size(),
            center: interval.center(),
            interval,
        }
    }
}

impl IntervalSummary {
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.interval, self.zero_based_start, self.zero_based_end, self.size, self.center
        )
    }
}

pub fn summarize_interval(text: &str) -> Result<IntervalSummary> {
    let interval =
        GenomicInterval::parse(text).with_context(|| format!("Invalid interval: {}", text))?;
    Ok(IntervalSummary::from(interval))
}

pub fn run_info(matches: &ArgMatches) -> Result<()> {
    let text = matches
        .get_one::<String>("interval")
        .ok_or_else(|| anyhow!("An interval is required."))?;

    let summary = summarize_interval(text)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_summary(&mut writer, &summary, matches.get_flag("json"))?;
    writer.flush()?;

    Ok(())
}

/// Write one summary as a JSON line or as tab-separated fields.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &IntervalSummary,
    as_json: bool,
) -> Result<()> {
    if as_json {
        serde_json::to_writer(&mut *writer, summary)?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "{}", summary.to_tsv())?;
    }
    Ok(())
}

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let chrom = matches
        .get_one::<String>("chrom")
        .ok_or_else(|| anyhow!("A chromosome name is required."))?;
    let zero_start = matches
        .get_one::<i64>("zero_start")
        .copied()
        .unwrap_or(DEFAULT_ZERO_START);
    let zero_end = matches
        .get_one::<i64>("zero_end")
        .copied()
        .unwrap_or(DEFAULT_ZERO_END);

    debug!("Converting 0-based half-open ({}, {}, {})", chrom, zero_start, zero_end);
    let interval = GenomicInterval::from_zero_based(chrom.as_str(), zero_start, zero_end)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writeln!(writer, "{}", interval)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::coords::cli::{create_convert_cli, create_info_cli};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_summarize_interval() {
        let summary = summarize_interval("chr1:11-15").unwrap();
        assert_eq!(summary.zero_based_start, 10);
        assert_eq!(summary.zero_based_end, 15);
        assert_eq!(summary.size, 5);
        assert_eq!(summary.to_tsv(), "chr1:11-15\t10\t15\t5\tchr1:13-13");
    }

    #[rstest]
    fn test_summarize_single_position() {
        let summary = summarize_interval("chr1:123").unwrap();
        assert_eq!(summary.interval.to_string(), "chr1:123-123");
        assert_eq!(summary.size, 1);
    }

    #[rstest]
    fn test_summary_json() {
        let summary = summarize_interval("chr1:10-15").unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["center"], "chr1:12-12");
        assert_eq!(value["size"], 6);
    }

    #[rstest]
    #[case(false, "chr1:11-15\t10\t15\t5\tchr1:13-13\n")]
    #[case(
        true,
        "{\"interval\":\"chr1:11-15\",\"zero_based_start\":10,\"zero_based_end\":15,\
         \"size\":5,\"center\":\"chr1:13-13\"}\n"
    )]
    fn test_write_summary(#[case] as_json: bool, #[case] expected: &str) {
        let summary = summarize_interval("chr1:11-15").unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_summary(&mut out, &summary, as_json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[rstest]
    fn test_summarize_invalid() {
        assert!(summarize_interval("chr1:0-10").is_err());
        assert!(summarize_interval("chr1").is_err());
    }

    #[rstest]
    fn test_info_cli_args() {
        let matches = create_info_cli()
            .try_get_matches_from(["info", "chr1:1-10", "--json"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("interval").unwrap(), "chr1:1-10");
        assert!(matches.get_flag("json"));
    }

    #[rstest]
    fn test_convert_cli_args() {
        let matches = create_convert_cli()
            .try_get_matches_from(["convert", "chr1", "0", "1"])
            .unwrap();
        assert_eq!(matches.get_one::<i64>("zero_start"), Some(&0));
        assert_eq!(matches.get_one::<i64>("zero_end"), Some(&1));
    }

    #[rstest]
    fn test_convert_cli_defaults() {
        let matches = create_convert_cli()
            .try_get_matches_from(["convert", "chr1"])
            .unwrap();
        assert_eq!(matches.get_one::<i64>("zero_start"), None);
        assert_eq!(matches.get_one::<i64>("zero_end"), None);
    }

    #[rstest]
    fn test_convert_cli_negative_start() {
        let matches = create_convert_cli()
            .try_get_matches_from(["convert", "chr1", "-1", "5"])
            .unwrap();
        assert_eq!(matches.get_one::<i64>("zero_start"), Some(&-1));
    }
}
