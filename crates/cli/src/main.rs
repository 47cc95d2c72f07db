// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Floptex board texture CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::debug;

use floptex_range::{
    BoardTexture, Card, DrawType, HandRank, PairType, RangeStore, resolve_tags, validate,
};

mod store;

#[derive(Debug, Parser)]
struct Cli {
    /// The hand range, e.g. "TT+, AQs+, 60%(KQo)" or "#button#".
    range: Option<String>,
    /// The board cards, e.g. "2h 7d 9c" or "2h7d9c".
    #[clap(long, short)]
    board: Option<String>,
    /// Prints the texture as JSON.
    #[clap(long)]
    json: bool,
    /// Saves the range under the given name for later "#name#" use.
    #[clap(long, value_name = "NAME")]
    save: Option<String>,
    /// Lists the saved ranges.
    #[clap(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let store = store::JsonFileStore::new()?;

    if cli.list {
        for (name, range) in store.load()? {
            println!("{name}: {range}");
        }
        return Ok(());
    }

    let Some(range) = cli.range else {
        bail!("a range is required, e.g. floptex \"TT+, AQs+\" -b \"2h 7d 9c\"");
    };

    if let Some(name) = cli.save {
        if !validate(&range) {
            bail!("invalid range string '{range}'");
        }
        let mut ranges = store.load()?;
        ranges.insert(name.clone(), range);
        store.save(&ranges)?;
        println!("saved range '{name}'");
        return Ok(());
    }

    let Some(board) = cli.board.as_deref() else {
        bail!("a board is required, e.g. -b \"2h 7d 9c\"");
    };
    let board = parse_board(board)?;

    let resolved = resolve_tags(&range, &store.load()?);
    debug!("resolved range: {resolved}");

    let mut texture = BoardTexture::new();
    texture.calculate(&resolved, &board)?;

    if cli.json {
        print_json(&texture)?;
    } else {
        print_report(&texture);
    }

    Ok(())
}

/// Parses board cards, with or without spaces between cards.
fn parse_board(text: &str) -> Result<Vec<Card>> {
    let chars = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<Vec<_>>();
    if chars.len() % 2 != 0 {
        bail!("incomplete board card in '{text}'");
    }
    chars
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .collect::<String>()
                .parse()
                .with_context(|| format!("invalid board '{text}'"))
        })
        .collect()
}

fn print_report(texture: &BoardTexture) {
    println!("Hand Type Breakdown");
    for rank in HandRank::ranks() {
        print_row(&rank.to_string(), texture.hand_type(rank));
    }

    println!("\nPair Breakdown");
    for pair in PairType::types() {
        print_row(&pair.to_string(), texture.pair_type(pair));
    }

    println!("\nDraw Breakdown");
    for draw in DrawType::types() {
        print_row(&draw.to_string(), texture.draw_type(draw));
    }
}

fn print_row(name: &str, value: f64) {
    let bar = "#".repeat((value * 40.0).round() as usize);
    println!("  {name:<14} {:>6.2}% {bar}", value * 100.0);
}

fn print_json(texture: &BoardTexture) -> Result<()> {
    let mut hand_types = serde_json::Map::new();
    for rank in HandRank::ranks() {
        hand_types.insert(rank.to_string(), texture.hand_type(rank).into());
    }

    let mut pair_types = serde_json::Map::new();
    for pair in PairType::types() {
        pair_types.insert(pair.to_string(), texture.pair_type(pair).into());
    }

    let mut draw_types = serde_json::Map::new();
    for draw in DrawType::types() {
        draw_types.insert(draw.to_string(), texture.draw_type(draw).into());
    }

    let value = serde_json::json!({
        "hand_types": hand_types,
        "pair_types": pair_types,
        "draw_types": draw_types,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}
