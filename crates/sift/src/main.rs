//! `sift` command-line interface.

use std::process::ExitCode;

use sift::{execute, init_tracing, Config};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(
        args.first().map(String::as_str),
        None | Some("help" | "-h" | "--help")
    ) {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let report = match Config::from_args(args.as_slice()).and_then(|config| execute(&config)) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run `sift help` for usage.");
            return ExitCode::FAILURE;
        }
    };

    for line in &report.lines {
        println!("{line}");
    }
    report.exit_code()
}

fn print_usage() {
    println!("Usage: sift <command> [options] [file]");
    println!();
    println!("Reads from standard input when no file (or `-`) is given.");
    println!();
    println!("Commands:");
    println!("  word <word>                   Leftmost occurrence of <word>");
    println!("  between <openers> <closers>   Text between an opener and the next closer");
    println!("  balanced <openers> <closers>  Text between an opener and its balancing closer");
    println!("  block                         Wrap the input in an indented {{ ... }} block");
    println!("  dedent                        Remove indentation shared by every line");
    println!();
    println!("Each character of <openers>/<closers> is one interchangeable delimiter.");
    println!();
    println!("Options:");
    println!("  --after=<offset>      Search strictly after this byte offset");
    println!("  --all                 Report every successive match");
    println!("  --indent=<n>          Indentation levels for `block` (default: 1)");
    println!("  --indent-unit=<text>  Text per indentation level (default: 4 spaces)");
    println!();
    println!("Matches print as `<start>..<end><TAB><text>` with byte offsets.");
    println!("Exit status: 0 on a match, 2 when nothing matched, 1 on error.");
    println!();
    println!("Logging: set SIFT_LOG (e.g. SIFT_LOG=sift_scan=trace).");
}
