//! `c5` command-line driver.
//!
//! A thin wrapper around [`c5::encode`]/[`c5::decode`]: for each positional
//! argument, dispatch by suffix (or run a round-trip self-test under `-t`),
//! reading and writing whole files. All of the interesting engineering
//! lives in the library; this binary just does file I/O and exit codes.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use c5::cli::args::Args;
use c5::cli::constants::EXTENSION;
use c5::file::{is_regular_file, read_whole, write_whole};
use c5::{decode, encode};

fn main() -> ExitCode {
    let argv = std::env::args().skip(1);
    let args = match Args::parse(argv) {
        Ok(args) => args,
        Err(e) => {
            c5::display!("{}\n", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn run(args: &Args) -> Result<(), ()> {
    let mut failed = false;

    for path_str in &args.paths {
        let path = Path::new(path_str);

        if !is_regular_file(path) {
            c5::displayout!("Skipping {}\n", path_str);
            continue;
        }

        if let Err(e) = process_one(path_str, path, args.selftest) {
            c5::display!("{}: {}\n", path_str, e);
            failed = true;
        }
    }

    if failed {
        Err(())
    } else {
        Ok(())
    }
}

fn process_one(path_str: &str, path: &Path, selftest: bool) -> Result<()> {
    let input = read_whole(path)?;

    if selftest {
        let compressed = encode(&input)?;
        let decompressed = decode(&compressed)?;
        let ok = decompressed == input;
        c5::displayout!(
            "Testing {} [{} ==> {}] {}\n",
            path_str,
            input.len(),
            compressed.len(),
            if ok { "OKAY" } else { "FAIL" }
        );
        if !ok {
            anyhow::bail!("round-trip mismatch");
        }
        return Ok(());
    }

    if path_str.ends_with(EXTENSION) {
        let output = decode(&input)?;
        let out_path_str = &path_str[..path_str.len() - EXTENSION.len()];
        write_whole(Path::new(out_path_str), &output)?;
        c5::displayout!(
            "Uncompressed {} [{}] => {} [{}]\n",
            path_str,
            input.len(),
            out_path_str,
            output.len()
        );
    } else {
        let output = encode(&input)?;
        let out_path_str = format!("{}{}", path_str, EXTENSION);
        write_whole(Path::new(&out_path_str), &output)?;
        c5::displayout!(
            "Compressed {} [{}] => {} [{}]\n",
            path_str,
            input.len(),
            out_path_str,
            output.len()
        );
    }

    Ok(())
}
