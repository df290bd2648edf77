use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use ngramplexity::input::{normalize_typed_text, read_text_file, resolve_path};
use ngramplexity::{Estimator, PerplexityModel};

/// Scores each sentence of a text with an n-gram model trained on that same text.
#[derive(Parser, Debug)]
#[command(name = "ngramplexity", version)]
struct Cli {
    /// n-gram order (2 for bigrams, 3 for trigrams); asked for when omitted
    #[arg(short = 'n', long, env = "NGRAM_ORDER")]
    order: Option<usize>,

    /// Score this file once and exit instead of prompting for input
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Probability estimate: "raw" or "smoothed"
    #[arg(short, long, default_value_t = Estimator::Smoothed)]
    estimator: Estimator,
}

/// Prints `message` and reads one trimmed line. `None` on end of input.
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn confirm(message: &str) -> Result<bool> {
    Ok(prompt(message)?.is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
}

async fn read_input() -> Result<Option<String>> {
    loop {
        let Some(choice) =
            prompt("Do you want to enter text manually or use a text file? (enter 'text' or 'file'): ")?
        else {
            return Ok(None);
        };

        match choice.to_lowercase().as_str() {
            "text" => return Ok(prompt("Enter your text: ")?.map(|text| normalize_typed_text(&text))),
            "file" => {
                let Some(path) = prompt("Enter the file path: ")? else {
                    return Ok(None);
                };
                if !resolve_path(&path)?.is_file() {
                    println!("The file does not exist. Please check the file path and try again.");
                    continue;
                }
                match read_text_file(&path).await {
                    Ok(text) => return Ok(Some(text)),
                    Err(e) => {
                        println!("{e:#}");
                        if !confirm("Do you want to try again? (yes/no): ")? {
                            return Ok(None);
                        }
                    }
                }
            }
            _ => println!("Invalid choice. Please enter 'text' or 'file'."),
        }
    }
}

fn read_order(preset: Option<usize>) -> Result<Option<usize>> {
    if let Some(n) = preset {
        return Ok(Some(n));
    }
    loop {
        let Some(answer) =
            prompt("Enter the value of n for n-grams (e.g., 2 for bigrams, 3 for trigrams): ")?
        else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(Some(n)),
            _ => println!("n must be a positive integer."),
        }
    }
}

fn score_text(text: &str, n: usize, estimator: Estimator) -> Result<()> {
    let start_time = std::time::Instant::now();
    let model = PerplexityModel::from_text(text, n, estimator)?;
    info!(
        "Built {}-gram model ({} estimator) in {} ms",
        n,
        estimator,
        start_time.elapsed().as_millis()
    );

    println!("\nProcessing {} sentences...\n", model.stats().sentences().len());

    for result in model.score_corpus() {
        match result {
            Ok(score) => {
                println!("Sentence: '{}'", score.sentence);
                println!("Probability: {}", score.probability);
                println!("Perplexity: {}\n", score.perplexity);
            }
            Err(e) => {
                warn!("Skipping sentence: {}", e);
                println!("Error: {}", e);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Some(path) = &cli.file {
        let text = read_text_file(path).await?;
        let Some(n) = read_order(cli.order)? else {
            return Ok(());
        };
        return score_text(&text, n, cli.estimator);
    }

    loop {
        match read_input().await? {
            Some(text) if !text.is_empty() => {
                let Some(n) = read_order(cli.order)? else {
                    break;
                };
                score_text(&text, n, cli.estimator)?;
            }
            _ => println!("No valid text data provided."),
        }

        if !confirm("Do you want to enter another text or file? (yes/no): ")? {
            break;
        }
    }

    Ok(())
}
