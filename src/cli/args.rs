//! Command-line argument parsing.
//!
//! Deliberately hand-rolled rather than built on an argument-parsing crate:
//! the surface is tiny (one flag, a list of paths) and matches the
//! single-pass `for (i = 1; i < argc; i++)` scan of the reference CLI.

use anyhow::{anyhow, Result};

/// Parsed command line: whether `-t` (self-test mode) was passed, and the
/// positional file arguments in the order given.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub selftest: bool,
    pub paths: Vec<String>,
}

impl Args {
    /// Parses `argv` (excluding the program name).
    pub fn parse<I: IntoIterator<Item = String>>(argv: I) -> Result<Self> {
        let mut args = Args::default();

        for arg in argv {
            if arg == "-t" {
                args.selftest = true;
                continue;
            }
            if arg.starts_with('-') && arg != "-" {
                return Err(anyhow!("unrecognized option '{}'", arg));
            }
            args.paths.push(arg);
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_plain_paths() {
        let args = Args::parse(argv(&["a.txt", "b.txt"])).unwrap();
        assert!(!args.selftest);
        assert_eq!(args.paths, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn recognizes_selftest_flag_anywhere() {
        let args = Args::parse(argv(&["a.txt", "-t", "b.txt"])).unwrap();
        assert!(args.selftest);
        assert_eq!(args.paths, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn rejects_unknown_option() {
        assert!(Args::parse(argv(&["--bogus"])).is_err());
    }

    #[test]
    fn accepts_bare_dash_as_a_path() {
        let args = Args::parse(argv(&["-"])).unwrap();
        assert_eq!(args.paths, vec!["-"]);
    }
}
