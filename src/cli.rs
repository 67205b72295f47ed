//! CLI argument parsing for PhoneBill

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebill")]
#[command(version)]
#[command(about = "Bill a batch of phone calls, exempting the favorite number", long_about = None)]
pub struct Cli {
    /// CSV file with phone_number,start,end rows (first row is a header)
    #[arg(short = 'i', long = "ifile", value_name = "FILE")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_short_flag() {
        let cli = Cli::try_parse_from(["phonebill", "-i", "calls.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("calls.csv"));
    }

    #[test]
    fn test_long_flag() {
        let cli = Cli::try_parse_from(["phonebill", "--ifile", "calls.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("calls.csv"));

        let cli = Cli::try_parse_from(["phonebill", "--ifile=other.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("other.csv"));
    }

    #[test]
    fn test_input_is_required() {
        let err = Cli::try_parse_from(["phonebill"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_option() {
        let err = Cli::try_parse_from(["phonebill", "-i", "calls.csv", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
