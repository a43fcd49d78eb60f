//! Play Session
//!
//! This example replays a short game against the predictor, feeding each
//! opponent move through the command effects the way a transport adapter
//! would, and prints the prediction before every move.
//!
//! Key concepts:
//! - Engine construction with a JSON file store
//! - Commands dispatched as effects against a shared engine
//! - Cold start versus warm predictions
//!
//! Run with: RUST_LOG=debug cargo run --example play_session

use rps_predictor::effects::{dispatch, Command, Response};
use rps_predictor::engine::EngineBuilder;
use rps_predictor::persistence::JsonFileStore;
use std::sync::Arc;
use stillwater::effect::Effect;
use tracing_subscriber::EnvFilter;

const OPPONENT_MOVES: [&str; 16] = [
    "stone", "paper", "scissor", "stone", "paper", "scissor", "stone", "paper", "paper",
    "scissor", "stone", "paper", "scissor", "rock", "stone", "paper",
];

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::temp_dir().join("rps-predictor-demo.json");
    let engine = Arc::new(EngineBuilder::new().store(JsonFileStore::new(&path)).build());

    println!("=== Play Session ===");
    println!("History file: {}\n", path.display());

    dispatch::<JsonFileStore>(Command::Clear).run(&engine).await.ok();

    let mut hits = 0;
    let mut rounds = 0;
    for opened in OPPONENT_MOVES {
        let guess = match dispatch::<JsonFileStore>(Command::Predict).run(&engine).await {
            Ok(Response::Predicted(prediction)) => prediction,
            _ => continue,
        };

        match dispatch::<JsonFileStore>(Command::Record {
            opened: opened.to_string(),
        })
        .run(&engine)
        .await
        {
            Ok(Response::Recorded(receipt)) => {
                rounds += 1;
                let hit = guess.symbol().name() == opened;
                if hit {
                    hits += 1;
                }
                println!(
                    "  #{:<2} predicted {:<7} ({:.3}, {:<13}) opened {:<7} {}",
                    receipt.total,
                    guess.symbol(),
                    guess.confidence(),
                    guess.method().map(|m| m.label()).unwrap_or("cold start"),
                    opened,
                    if hit { "hit" } else { "miss" }
                );
            }
            Ok(_) => {}
            Err(e) => println!("  rejected: {}", e),
        }
    }

    println!("\n{} of {} predictions matched", hits, rounds);

    let next = dispatch::<JsonFileStore>(Command::Predict).run(&engine).await;
    if let Ok(Response::Predicted(next)) = next {
        match serde_json::to_string_pretty(&next) {
            Ok(json) => println!("\nNext prediction:\n{}", json),
            Err(e) => println!("\nCould not render prediction: {}", e),
        }
    }
}
