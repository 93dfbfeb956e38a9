// src/cli/args.rs
use clap::Parser;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "comm",
    version = crate::VERSION,
    about = "Compare two sorted files line by line",
    long_about = "Compare sorted files FILE1 and FILE2 line by line.\n\n\
        With no options, produce three-column output. Column one contains lines \
        unique to FILE1, column two contains lines unique to FILE2, and column \
        three contains lines common to both files.\n\n\
        When FILE1 or FILE2 (not both) is -, read standard input."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Suppress column 1 (lines unique to FILE1)
    #[arg(short = '1', help_heading = "Columns")]
    pub suppress_first: bool,

    /// Suppress column 2 (lines unique to FILE2)
    #[arg(short = '2', help_heading = "Columns")]
    pub suppress_second: bool,

    /// Suppress column 3 (lines that appear in both files)
    #[arg(short = '3', help_heading = "Columns")]
    pub suppress_common: bool,

    /// Check that the input is correctly sorted and fail otherwise
    #[arg(long, overrides_with = "nocheck_order", help_heading = "Ordering")]
    pub check_order: bool,

    /// Do not check that the input is correctly sorted (default)
    #[arg(long = "nocheck-order", overrides_with = "check_order", help_heading = "Ordering")]
    pub nocheck_order: bool,

    /// Output a summary line with the count of each column
    #[arg(long)]
    pub total: bool,

    /// Abort the comparison after this many seconds
    #[arg(long, value_name = "SECONDS", env = "COMM_LINES_TIMEOUT")]
    pub timeout: Option<u64>,

    /// FILE1 and FILE2; `-` reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
