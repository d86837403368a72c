use clap::{Command, arg, value_parser};

pub const COMPARE_CMD: &str = "compare";
pub const EXPAND_CMD: &str = "expand";

pub fn create_compare_cli() -> Command {
    Command::new(COMPARE_CMD)
        .about("Classify a subject interval relative to a receiver and report their overlap")
        .arg_required_else_help(true)
        .arg(arg!(<receiver> "The interval held fixed, e.g. chr1:400-600"))
        .arg(arg!(<subject> "The interval being classified, e.g. chr1:300-500"))
        .arg(
            arg!(-a --adjacent <ADJACENT> "Adjacency tolerance of the receiver in bp (default: 20)")
                .required(false)
                .value_parser(value_parser!(u32)),
        )
        .arg(arg!(--json "Write the report as JSON instead of tab-separated fields"))
}

pub fn create_expand_cli() -> Command {
    Command::new(EXPAND_CMD)
        .about("Bounding interval spanning two intervals on the same chromosome")
        .arg_required_else_help(true)
        .arg(arg!(<a> "First interval, e.g. chr1:400-600"))
        .arg(arg!(<b> "Second interval, e.g. chr1:603-800"))
}
