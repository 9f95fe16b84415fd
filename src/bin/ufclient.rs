/// ufclient - dynamic connectivity client for the disjoint-set structure
///
/// Reads an integer N followed by pairs of integers in `0..N`. Each pair whose
/// elements are not yet connected is merged and echoed; the number of
/// remaining components is printed at the end.
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, BufReader, Write};

use percolation::DisjointSet;

#[derive(Parser)]
#[clap(
    name = "ufclient",
    about = "Union pairs of elements and report the connected components"
)]
struct Args {
    /// Input file (stdin if not specified)
    #[clap(short = 'i', long = "input")]
    input: Option<String>,
}

fn parse_token(token: &str) -> Result<usize> {
    token
        .parse()
        .with_context(|| format!("Invalid integer '{token}'"))
}

/// Run the client over whitespace-separated input, writing merged pairs to `out`
fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<usize> {
    let mut tokens = Vec::new();
    for line in input.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }

    let mut iter = tokens.iter();
    let n = match iter.next() {
        Some(token) => parse_token(token)?,
        None => anyhow::bail!("Empty input: expected the number of elements"),
    };
    let mut uf = DisjointSet::new(n)?;
    log::debug!("created {n} singleton components");

    while let Some(p) = iter.next() {
        let p = parse_token(p)?;
        let q = match iter.next() {
            Some(token) => parse_token(token)?,
            None => anyhow::bail!("Unpaired element {p} at end of input"),
        };
        if uf.connected(p, q)? {
            continue;
        }
        uf.union(p, q)?;
        writeln!(out, "{p} {q}")?;
    }

    writeln!(out, "{} components", uf.count())?;
    Ok(uf.count())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let input: Box<dyn BufRead> = if let Some(ref path) = args.input {
        Box::new(BufReader::new(
            std::fs::File::open(path).context(format!("Failed to open {path}"))?,
        ))
    } else {
        Box::new(BufReader::new(std::io::stdin()))
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(input, &mut out)?;

    Ok(())
}
