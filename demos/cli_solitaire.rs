//! CLI solitaire example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use solrs::{Card, Game, GameState, PileId, Suit, rank_from_token, rank_token};

fn main() {
    println!("Solitaire CLI example (type 'help' for commands)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(seed);

    loop {
        print_board(&game);

        if game.state() == GameState::Won {
            println!("You won! Starting a new game.");
            game.new_game();
            continue;
        }

        let input = prompt_line("> ");
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            ["d" | "draw"] => game.draw_card(),
            ["r" | "recycle"] => game.recycle_waste(),
            ["n" | "new"] => game.new_game(),
            ["q" | "quit"] => return,
            ["v" | "reveal", pile] => match parse_pile(pile) {
                Some(id) => game.reveal_top(id),
                None => println!("Unknown pile: {pile}"),
            },
            ["m" | "move", card, from, to] => {
                let (Some((rank, suit)), Some(from), Some(to)) =
                    (parse_card(card), parse_pile(from), parse_pile(to))
                else {
                    println!("Usage: m <card> <from> <to>, e.g. m KH w t3");
                    continue;
                };
                if !game.attempt_move(from, rank, suit, to) {
                    println!("Illegal move.");
                }
            }
            ["s" | "save", path] => match game.save(path) {
                Ok(()) => println!("Saved to {path}."),
                Err(err) => println!("Save error: {err}"),
            },
            ["l" | "load", path] => match game.load(path) {
                Ok(()) => println!("Loaded {path}."),
                Err(err) => println!("Load error: {err}"),
            },
            ["help"] => print_help(),
            [] => {}
            _ => println!("Unknown command (try 'help')."),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  d                 draw a card");
    println!("  r                 recycle the waste pile");
    println!("  m <card> <from> <to>   move the run starting at <card>");
    println!("                    (card: e.g. KH, 10D; piles: t1-t7, f1-f4, d, w)");
    println!("  v <pile>          reveal a face-down top card");
    println!("  s <path> / l <path>    save / load");
    println!("  n                 new game");
    println!("  q                 quit");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn parse_pile(token: &str) -> Option<PileId> {
    match token {
        "d" => return Some(PileId::Draw),
        "w" => return Some(PileId::Waste),
        _ => {}
    }

    let mut chars = token.chars();
    let kind = chars.next()?;
    let index = chars.as_str().parse::<usize>().ok()?.checked_sub(1)?;
    match kind {
        't' => Some(PileId::Tableau(index)),
        'f' => Some(PileId::Foundation(index)),
        _ => None,
    }
}

fn parse_card(token: &str) -> Option<(u8, Suit)> {
    if !token.is_ascii() {
        return None;
    }
    let token = token.to_uppercase();
    let (rank_part, suit_part) = token.split_at(token.len().checked_sub(1)?);

    let rank = rank_from_token(rank_part)?;
    let suit = match suit_part {
        "S" => Suit::Spades,
        "H" => Suit::Hearts,
        "D" => Suit::Diamonds,
        "C" => Suit::Clubs,
        _ => return None,
    };

    Some((rank, suit))
}

fn print_board(game: &Game) {
    let draw = game.pile(PileId::Draw);
    let waste = game.pile(PileId::Waste);

    let waste_view = waste
        .last()
        .map_or_else(|| "--".to_string(), |card| format_card(*card));
    println!("\n[d]raw: {} cards   [w]aste: {waste_view}", draw.len());

    let foundations: Vec<String> = (0..4)
        .map(|i| {
            let pile = game.pile(PileId::Foundation(i));
            let top = pile
                .last()
                .map_or_else(|| "--".to_string(), |card| format_card(*card));
            format!("f{}: {top}", i + 1)
        })
        .collect();
    println!("{}", foundations.join("   "));

    for i in 0..7 {
        let column: Vec<String> = game
            .pile(PileId::Tableau(i))
            .iter()
            .map(|card| format_card(*card))
            .collect();
        println!("t{}: {}", i + 1, column.join(" "));
    }
}

fn format_card(card: Card) -> String {
    if !card.face_up {
        return "??".to_string();
    }

    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = rank_token(card.rank).unwrap_or("?");
    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
