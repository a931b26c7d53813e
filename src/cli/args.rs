use crate::core::error::{EcdfError, Result};
use crate::core::model::SCHOOL_FLAG;
use clap::Parser;

pub const USAGE: &str = "This program must be run with the following format: \n\
    ecdf --school \"Port Chester University\" file1.csv file2.csv";

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    name = "ecdf",
    about = "Percentiles of per-student mean test scores for one school",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(long, allow_hyphen_values = true)]
    pub school: String,

    #[arg(required = true, num_args = 1..)]
    pub files: Vec<String>,
}

/// Splits `argv` into the school name and the candidate input files.
///
/// The shape is fixed: program name, `--school`, the school, then at least
/// one file. Values are returned verbatim; file names are checked later.
pub fn parse(argv: &[String]) -> Result<Cli> {
    if argv.len() < 4 || argv[1] != SCHOOL_FLAG {
        return Err(EcdfError::invalid(USAGE));
    }

    // `--school=<v> -- <files>` keeps hyphenated values and file names intact.
    let normalized = [
        argv[0].clone(),
        format!("{}={}", SCHOOL_FLAG, argv[2]),
        "--".to_string(),
    ]
    .into_iter()
    .chain(argv[3..].iter().cloned());

    // Cannot fail once the shape check above has passed.
    Cli::try_parse_from(normalized).map_err(|e| EcdfError::invalid(e.to_string()))
}
