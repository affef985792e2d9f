/// Tweet Generator: emits tweet-like word sequences from a corpus.
///
/// Usage: tweet_generator --seed <u64> --count <n> --corpus <file.txt> [--words <n>]
use std::env;
use std::path::Path;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use chainwalk::corpus::{self, WordChain};

const USAGE: &str =
    "Usage: tweet_generator --seed <u64> --count <n> --corpus <file.txt> [--words <n>]";

/// Words emitted per tweet, at most.
const MAX_WORDS_IN_TWEET: usize = 20;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut seed = None;
    let mut count = None;
    let mut corpus_path = None;
    let mut word_limit: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = Some(parse_number(&args, i, "--seed"));
            }
            "--count" => {
                i += 1;
                count = Some(parse_number(&args, i, "--count") as usize);
            }
            "--corpus" => {
                i += 1;
                corpus_path = args.get(i).cloned();
            }
            "--words" => {
                i += 1;
                word_limit = Some(parse_number(&args, i, "--words") as usize);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
        i += 1;
    }

    let seed = seed.unwrap_or_else(|| missing("--seed"));
    let count = count.unwrap_or_else(|| missing("--count"));
    let corpus_path = corpus_path.unwrap_or_else(|| missing("--corpus"));

    let mut chain = WordChain::new();
    let consumed = corpus::feed_file(&mut chain, Path::new(&corpus_path), word_limit)
        .unwrap_or_else(|e| {
            eprintln!("Error reading corpus '{}': {}", corpus_path, e);
            process::exit(1);
        });

    if consumed == 0 {
        eprintln!("Error: corpus '{}' contains no words", corpus_path);
        process::exit(1);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for k in 1..=count {
        let tweet = corpus::generate_tweet(&chain, &mut rng, MAX_WORDS_IN_TWEET)
            .unwrap_or_else(|e| {
                eprintln!("Error generating tweet: {}", e);
                process::exit(1);
            });
        println!("Tweet {}: {}", k, tweet);
    }
}

fn parse_number(args: &[String], i: usize, flag: &str) -> u64 {
    args.get(i)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("Error: {} expects a non-negative integer", flag);
            process::exit(1);
        })
}

fn missing<T>(flag: &str) -> T {
    eprintln!("Error: {} is required", flag);
    eprintln!("{}", USAGE);
    process::exit(1);
}
