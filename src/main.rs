//! Scorecard CLI (default binary).
//!
//! Replays a sequence of deliveries through the checked engine and prints
//! the frame-by-frame scorecard. Rolls come from the command line, or from
//! stdin (whitespace-separated) when no arguments are given.
//!
//! ```text
//! $ tenpin 10 4 4
//! frame  1  [10 4 4  ]  strike   18 |  18
//! frame  2  [4 4     ]  open      8 |  26
//! total  26 (running)
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;

use tenpin::core::scorecard::Scorecard;
use tenpin::engine::replay_checked;
use tenpin::types::{Pins, Score};

#[derive(Serialize)]
struct FrameView {
    frame: usize,
    kind: &'static str,
    rolls: Vec<Pins>,
    score: Score,
    running_total: Score,
    complete: bool,
}

#[derive(Serialize)]
struct ScorecardView {
    frames: Vec<FrameView>,
    total: Score,
    over: bool,
}

impl ScorecardView {
    fn new(card: &Scorecard, over: bool) -> Self {
        let frames = card
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| FrameView {
                frame: i + 1,
                kind: row.kind.as_str(),
                rolls: row.rolls.to_vec(),
                score: row.score,
                running_total: row.running_total,
                complete: row.complete,
            })
            .collect();
        Self {
            frames,
            total: card.total,
            over,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let tokens: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    let rolls = if tokens.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading rolls from stdin")?;
        parse_rolls(buf.split_whitespace())?
    } else {
        parse_rolls(tokens.into_iter())?
    };

    log::debug!("replaying {} deliveries", rolls.len());

    let game = replay_checked(rolls.iter().copied()).context("illegal roll sequence")?;
    let card = game.scorecard();

    if json {
        let view = ScorecardView::new(&card, game.is_over());
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_card(&card, game.is_over());
    }

    Ok(())
}

fn parse_rolls<'a, I>(tokens: I) -> Result<Vec<Pins>>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .map(|t| {
            t.parse::<Pins>()
                .with_context(|| format!("invalid roll value {:?}", t))
        })
        .collect()
}

fn print_card(card: &Scorecard, over: bool) {
    for (i, row) in card.rows.iter().enumerate() {
        let rolls = row
            .rolls
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "frame {:>2}  [{:<8}]  {:<6}  {:>3} | {:>3}",
            i + 1,
            rolls,
            row.kind.as_str(),
            row.score,
            row.running_total
        );
    }
    let status = if over { "final" } else { "running" };
    println!("total {:>3} ({})", card.total, status);
}
