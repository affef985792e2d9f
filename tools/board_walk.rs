/// Board Walk: plays random snakes-and-ladders games over the chain.
///
/// Usage: board_walk --seed <u64> --walks <n>
use std::env;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use chainwalk::board;

const USAGE: &str = "Usage: board_walk --seed <u64> --walks <n>";

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut seed = None;
    let mut walks = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|s| s.parse::<u64>().ok());
                if seed.is_none() {
                    eprintln!("Error: --seed expects a non-negative integer");
                    process::exit(1);
                }
            }
            "--walks" => {
                i += 1;
                walks = args.get(i).and_then(|s| s.parse::<usize>().ok());
                if walks.is_none() {
                    eprintln!("Error: --walks expects a non-negative integer");
                    process::exit(1);
                }
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

    let seed = seed.unwrap_or_else(|| {
        eprintln!("Error: --seed is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });
    let walks = walks.unwrap_or_else(|| {
        eprintln!("Error: --walks is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let chain = board::build_chain().unwrap_or_else(|e| {
        eprintln!("Error building board chain: {}", e);
        process::exit(1);
    });

    let mut rng = StdRng::seed_from_u64(seed);
    for k in 1..=walks {
        let walk = board::random_walk(&chain, &mut rng, board::MAX_WALK_STEPS)
            .unwrap_or_else(|e| {
                eprintln!("Error generating walk: {}", e);
                process::exit(1);
            });
        println!("Random Walk {}: {}", k, walk);
    }
}
