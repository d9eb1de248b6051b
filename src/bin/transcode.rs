use std::io::{self, BufWriter};
use std::process;

use clap::Parser;

use transcode_rs::common::TOOL_NAME;
use transcode_rs::transcode::{STREAM_CHUNK, run};

#[derive(Parser)]
#[command(
    name = "transcode",
    about = "Decode standard input from one encoding and re-encode it to standard output.",
    after_help = "Source encodings:\n\
        \x20 hex, b16        hexadecimal (optional leading 0x, whitespace ignored)\n\
        \x20 b64, base64     unpadded standard base64\n\
        \x20 b32, base32     unpadded standard base32\n\
        \x20 b58, base58     Bitcoin-alphabet base58\n\
        \x20 raw, bin        bytes as-is\n\
        \x20 mbase           multibase (prefix character selects the base)\n\n\
        Target encodings are the same, except mbase.\n\n\
        Set RUST_LOG=debug for diagnostic tracing on standard error.",
    version
)]
struct Cli {
    /// Encoding of standard input
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Encoding to write to standard output
    #[arg(value_name = "TARGET")]
    target: Option<String>,
}

fn init_logging() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too; they are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let out = BufWriter::with_capacity(STREAM_CHUNK, stdout.lock());

    match run(
        cli.source.as_deref(),
        cli.target.as_deref(),
        stdin.lock(),
        out,
    ) {
        Ok(n) => log::debug!("done, {} bytes decoded", n),
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            process::exit(e.exit_code());
        }
    }
}
