// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example texture
// ```

use floptex_range::{BoardTexture, DrawType, HandRank, PairType};

fn main() {
    let range = "TT+, AQs+, KQo, 76s, 50%(A2s-A9s)";
    let board = ["Qh", "7d", "2c"].map(|c| c.parse().unwrap());

    let mut texture = BoardTexture::new();
    texture.calculate(range, &board).unwrap();

    println!("Range: {range}");
    println!("Board: Qh 7d 2c\n");

    for rank in HandRank::ranks() {
        let value = texture.hand_type(rank) * 100.0;
        println!("{:<14} {value:>6.2}%", rank.to_string());
    }

    println!();
    for pair in PairType::types() {
        let value = texture.pair_type(pair) * 100.0;
        println!("{:<14} {value:>6.2}%", pair.to_string());
    }

    println!();
    for draw in DrawType::types() {
        let value = texture.draw_type(draw) * 100.0;
        println!("{:<14} {value:>6.2}%", draw.to_string());
    }
}
