//! Save format tests: round-trips, corruption handling, and file I/O.

use solrs::{Board, Card, CorruptSave, Game, GameState, LoadError, PileId, SavedGame, Suit};

fn face_up(suit: Suit, rank: u8) -> Card {
    let mut card = Card::new(suit, rank);
    card.flip(true);
    card
}

fn pile_contents(game: &Game) -> Vec<Vec<Card>> {
    let board = game.snapshot();
    board.piles().map(|pile| pile.cards().to_vec()).collect()
}

fn parse(data: &str) -> SavedGame {
    serde_json::from_str(data).unwrap()
}

/// A full 52-card board with the Ace and 2 of Hearts on a foundation and
/// the 3s of Spades and Hearts on the waste pile.
fn rigged_board() -> Board {
    let mut board = Board::empty();

    for suit in Suit::ALL {
        for rank in 1..=13 {
            match (suit, rank) {
                (Suit::Hearts, 1 | 2) => board.foundations[1].push(face_up(suit, rank)),
                (Suit::Spades | Suit::Hearts, 3) => board.waste.push(face_up(suit, rank)),
                _ => board.draw.push(Card::new(suit, rank)),
            }
        }
    }

    board
}

#[test]
fn round_trip_reproduces_pile_contents_and_face_flags() {
    let game = Game::new(13);
    game.draw_card();
    game.draw_card();
    game.draw_card();

    let before = pile_contents(&game);
    let data = game.serialize().unwrap();

    let other = Game::new(999);
    other.deserialize(&data).unwrap();

    assert_eq!(pile_contents(&other), before);
    assert_eq!(other.serialize().unwrap(), data);
    assert_eq!(other.state(), GameState::Playing);
}

#[test]
fn save_document_has_thirteen_pile_records_in_board_order() {
    let game = Game::new(4);
    let saved = parse(&game.serialize().unwrap());

    assert_eq!(saved.piles.len(), 13);
    for (i, record) in saved.piles.iter().take(7).enumerate() {
        assert_eq!(record.len(), i + 1, "tableau records come first");
    }
    for record in saved.piles.iter().skip(7).take(4) {
        assert!(record.is_empty(), "foundations are empty after the deal");
    }
    assert_eq!(saved.piles[11].len(), 24, "draw pile record");
    assert!(saved.piles[12].is_empty(), "waste pile record");
}

#[test]
fn rank_and_suit_are_stored_as_tokens() {
    let game = Game::new(0);
    let mut board = Board::empty();
    board.waste.push(face_up(Suit::Diamonds, 13));
    *game.board.lock() = board;

    let data = game.serialize().unwrap();
    let saved = parse(&data);
    let record = &saved.piles[12][0];

    assert_eq!(record.rank, "K");
    assert_eq!(record.suit, "Diamonds");
    assert!(record.face_up);
}

#[test]
fn deserialize_rejects_wrong_pile_count() {
    let game = Game::new(1);
    let mut saved = parse(&game.serialize().unwrap());
    saved.piles.pop();

    let err = game
        .deserialize(&serde_json::to_string(&saved).unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Corrupt(CorruptSave::PileCount {
            expected: 13,
            found: 12
        })
    ));
}

#[test]
fn deserialize_rejects_unknown_rank_token() {
    let game = Game::new(1);
    let mut saved = parse(&game.serialize().unwrap());
    saved.piles[0][0].rank = "15".to_owned();

    let err = game
        .deserialize(&serde_json::to_string(&saved).unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Corrupt(CorruptSave::UnknownRank(token)) if token == "15"
    ));
}

#[test]
fn deserialize_rejects_unknown_suit_token() {
    let game = Game::new(1);
    let mut saved = parse(&game.serialize().unwrap());
    saved.piles[0][0].suit = "Cups".to_owned();

    let err = game
        .deserialize(&serde_json::to_string(&saved).unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Corrupt(CorruptSave::UnknownSuit(token)) if token == "Cups"
    ));
}

#[test]
fn deserialize_rejects_duplicated_card() {
    let game = Game::new(1);
    let mut saved = parse(&game.serialize().unwrap());
    saved.piles[11][0] = saved.piles[0][0].clone();

    let err = game
        .deserialize(&serde_json::to_string(&saved).unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Corrupt(CorruptSave::DuplicateCard(_))
    ));
}

#[test]
fn deserialize_rejects_missing_cards() {
    let game = Game::new(1);
    let mut saved = parse(&game.serialize().unwrap());
    saved.piles[11].pop();

    let err = game
        .deserialize(&serde_json::to_string(&saved).unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Corrupt(CorruptSave::MissingCards { missing: 1 })
    ));
}

#[test]
fn deserialize_rejects_malformed_document() {
    let game = Game::new(1);
    let err = game.deserialize("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn failed_load_leaves_prior_state_untouched() {
    let game = Game::new(6);
    game.draw_card();
    let before = game.serialize().unwrap();

    let mut saved = parse(&before);
    saved.piles.clear();
    assert!(
        game.deserialize(&serde_json::to_string(&saved).unwrap())
            .is_err()
    );

    assert_eq!(game.serialize().unwrap(), before);
}

#[test]
fn foundation_suit_filter_is_rederived_on_load() {
    let game = Game::new(0);
    *game.board.lock() = rigged_board();

    let data = game.serialize().unwrap();
    let other = Game::new(1);
    other.deserialize(&data).unwrap();

    // The filter is not stored, so only a re-derived commitment to Hearts
    // lets the 3 of Hearts land and keeps the 3 of Spades out.
    assert!(other.attempt_move(PileId::Waste, 3, Suit::Hearts, PileId::Foundation(1)));
    assert!(!other.attempt_move(PileId::Waste, 3, Suit::Spades, PileId::Foundation(1)));
}

#[test]
fn loading_a_won_board_restores_the_won_state() {
    let game = Game::new(0);
    let mut board = Board::empty();
    for (i, &suit) in Suit::ALL.iter().enumerate() {
        for rank in 1..=13 {
            board.foundations[i].push(face_up(suit, rank));
        }
    }
    *game.board.lock() = board;

    let data = game.serialize().unwrap();
    let other = Game::new(1);
    other.deserialize(&data).unwrap();

    assert_eq!(other.state(), GameState::Won);
    assert!(other.is_won());
}

#[test]
fn save_and_load_round_trip_through_a_file() {
    let path = std::env::temp_dir().join(format!("solrs_save_{}.json", std::process::id()));

    let game = Game::new(8);
    game.draw_card();
    game.save(&path).unwrap();

    let other = Game::new(2);
    other.load(&path).unwrap();
    assert_eq!(pile_contents(&other), pile_contents(&game));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn loading_a_missing_file_reports_an_io_error() {
    let game = Game::new(1);
    let err = game
        .load("/nonexistent/solrs/save.json")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
