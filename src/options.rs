//! Parsing Options.
//! `--algorithm {prim,boruvka,kruskal,all}` or `-a`, plus the input graph `-i`.

use clap::{Arg, ArgAction, Command};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::graph::io::Format;
use crate::mst::{Algorithm, UnknownAlgorithm};

/// Which engines a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selection {
    Single(Algorithm),
    All,
}

impl FromStr for Selection {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Single)
        }
    }
}

impl TryFrom<String> for Selection {
    type Error = UnknownAlgorithm;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.to_string()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single(algorithm) => write!(f, "{algorithm}"),
            Selection::All => f.write_str("all"),
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("cannot split flags: {0}")]
    Split(#[from] shellwords::MismatchedQuotes),
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error("missing input graph, pass it with -i/--input")]
    MissingInput,
}

fn make_options_parser() -> clap::Command {
    Command::new("mst")
        .no_binary_name(true)
        .args_override_self(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minimum spanning trees with step-by-step traces")
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("The engine to run")
                .value_parser(["prim", "boruvka", "kruskal", "all"]),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Edge list of (source, target, weight) records"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Input format, guessed from the file extension when absent")
                .value_parser(["json", "ron"]),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the run report will be stored"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file, mst.toml by default"),
        )
        .arg(
            Arg::new("no-steps")
                .long("no-steps")
                .action(ArgAction::SetTrue)
                .help("Leave the step traces out of the report"),
        )
}

/// Flags given on the command line. Anything left unset falls back to
/// [`MstConfig`](crate::config::MstConfig).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Options {
    pub selection: Option<Selection>,
    pub input: Option<PathBuf>,
    pub format: Option<Format>,
    pub output: Option<String>,
    pub config: Option<PathBuf>,
    pub no_steps: bool,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, OptionsError> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, OptionsError> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        // Values are restricted by the parser, so these cannot fail.
        let selection = matches
            .get_one::<String>("algorithm")
            .and_then(|s| s.parse().ok());
        let format = matches
            .get_one::<String>("format")
            .and_then(|s| s.parse().ok());

        Ok(Options {
            selection,
            input: matches.get_one::<String>("input").map(PathBuf::from),
            format,
            output: matches.get_one::<String>("output").cloned(),
            config: matches.get_one::<String>("config").map(PathBuf::from),
            no_steps: matches.get_flag("no-steps"),
        })
    }

    /// Input path, required before a run can start.
    pub fn input(&self) -> Result<&PathBuf, OptionsError> {
        self.input.as_ref().ok_or(OptionsError::MissingInput)
    }

    /// Input format: the explicit flag, else the file extension. `None`
    /// when neither names JSON or RON.
    pub fn input_format(&self) -> Option<Format> {
        self.format
            .or_else(|| self.input.as_deref().and_then(Format::from_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_str() {
        let options =
            Options::parse_from_str("-a all -i 'my graph.ron' --no-steps -o out.json").unwrap();
        assert_eq!(options.selection, Some(Selection::All));
        assert_eq!(options.input, Some(PathBuf::from("my graph.ron")));
        assert_eq!(options.input_format(), Some(Format::Ron));
        assert_eq!(options.output.as_deref(), Some("out.json"));
        assert!(options.no_steps);
    }

    #[test]
    fn test_explicit_format_wins() {
        let options = Options::parse_from_str("-i graph.ron -f json -a prim").unwrap();
        assert_eq!(options.input_format(), Some(Format::Json));
        assert_eq!(options.selection, Some(Selection::Single(Algorithm::Prim)));
    }

    #[test]
    fn test_unknown_extension_has_no_format() {
        let options = Options::parse_from_str("-i grafo.csv").unwrap();
        assert_eq!(options.input_format(), None);
        let options = Options::parse_from_str("-i grafo.csv -f json").unwrap();
        assert_eq!(options.input_format(), Some(Format::Json));
    }

    #[test]
    fn test_empty_flags() {
        let options = Options::parse_from_str("").unwrap();
        assert_eq!(options, Options::default());
        assert!(matches!(options.input(), Err(OptionsError::MissingInput)));
    }

    #[test]
    fn test_parse_from_str_err() {
        assert!(Options::parse_from_str("-a dijkstra -i g.json").is_err());
        assert!(matches!(
            Options::parse_from_str("-i 'unterminated"),
            Err(OptionsError::Split(_))
        ));
    }

    #[test]
    fn test_parse_from_args_err() {
        let options = Options::parse_from_args(&[
            "-a".to_owned(),
            "kruskal".to_owned(),
            "--unknown".to_owned(),
        ]);
        assert!(matches!(options, Err(OptionsError::Clap(_))));
    }

    #[test]
    fn test_later_flags_override_earlier() {
        let options = Options::parse_from_str("-a prim -i a.json -a boruvka").unwrap();
        assert_eq!(options.selection, Some(Selection::Single(Algorithm::Boruvka)));
    }

    #[test]
    fn test_selection_strings() {
        assert_eq!("ALL".parse::<Selection>(), Ok(Selection::All));
        assert_eq!(
            "boruvka".parse::<Selection>(),
            Ok(Selection::Single(Algorithm::Boruvka))
        );
        assert_eq!(Selection::All.to_string(), "all");
    }
}
