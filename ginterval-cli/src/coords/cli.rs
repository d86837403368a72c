use clap::{Command, arg, value_parser};

pub const INFO_CMD: &str = "info";
pub const CONVERT_CMD: &str = "convert";

pub fn create_info_cli() -> Command {
    Command::new(INFO_CMD)
        .about("Show size, center and 0-based coordinates of an interval")
        .arg_required_else_help(true)
        .arg(arg!(<interval> "Interval in chrom:start-end or chrom:pos notation"))
        .arg(arg!(--json "Write the summary as JSON instead of tab-separated fields"))
}

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .about("Convert 0-based half-open coordinates (as in BED files) to chrom:start-end")
        .arg_required_else_help(true)
        .allow_negative_numbers(true)
        .arg(arg!(<chrom> "Chromosome name"))
        .arg(
            arg!([zero_start] "0-based inclusive start (default: 0)")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            arg!([zero_end] "0-based exclusive end (default: 1)")
                .value_parser(value_parser!(i64)),
        )
}
