//! Command-line driver for the tadkham word segmenter.
//!
//! Reads lines from standard input, segments them against a word list, and
//! writes one output line per input line with the tokens joined by a
//! delimiter. Lines are independent, so batches are segmented in parallel;
//! the output preserves input order.

use std::error::Error;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use tadkham::{Dictionary, Segmenter};

use clap::Parser;
use rayon::prelude::*;

/// How many lines to hand to the thread pool at once. Interactive input is
/// processed line by line so output appears as lines are typed.
const BATCH_LEN: usize = 1024;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[clap(name = "segment", about = "Segments unsegmented text into words")]
struct Args {
    /// Word list, one word per line.
    #[clap(short = 'd', long)]
    dict: PathBuf,

    /// String placed between tokens on each output line.
    #[clap(short = 'D', long, default_value = "|")]
    delimiter: String,

    /// Number of worker threads (0 = one per CPU).
    #[clap(short = 'j', long, default_value_t = 0)]
    threads: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the dictionary...");
    let dict = Dictionary::from_path(&args.dict)?;
    eprintln!("Ready to segment ({} words)", dict.num_words());

    if args.threads != 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
    }
    let segmenter = Segmenter::new(dict);

    let is_tty = atty::is(atty::Stream::Stdout);
    let batch_len = if atty::is(atty::Stream::Stdin) {
        1
    } else {
        BATCH_LEN
    };

    let out = io::stdout();
    let mut out = BufWriter::new(out.lock());
    let mut batch = Vec::with_capacity(batch_len);
    for line in io::stdin().lock().lines() {
        batch.push(line?);
        if batch.len() == batch_len {
            write_batch(&segmenter, &batch, &args.delimiter, &mut out)?;
            batch.clear();
            if is_tty {
                out.flush()?;
            }
        }
    }
    if !batch.is_empty() {
        write_batch(&segmenter, &batch, &args.delimiter, &mut out)?;
    }
    out.flush()?;

    Ok(())
}

/// Segments a batch of lines in parallel and writes them in input order.
///
/// Each pool thread keeps one worker, so scratch buffers are reused across
/// the lines that thread processes.
fn write_batch<W>(
    segmenter: &Segmenter,
    lines: &[String],
    delimiter: &str,
    out: &mut W,
) -> io::Result<()>
where
    W: Write,
{
    let rows: Vec<String> = lines
        .par_iter()
        .map_init(
            || segmenter.new_worker(),
            |worker, line| {
                worker.reset_line(line);
                worker.segment();
                let mut row = String::with_capacity(line.len());
                for (i, token) in worker.token_iter().enumerate() {
                    if i != 0 {
                        row.push_str(delimiter);
                    }
                    row.push_str(token.surface());
                }
                row
            },
        )
        .collect();

    for row in &rows {
        out.write_all(row.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
