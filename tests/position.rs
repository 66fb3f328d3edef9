//! Position, make/unmake, and Zobrist invariants (spec §8 properties 1-3, 6,
//! 9-11 and scenarios B-D).

use chess_core::position::fen::{from_fen, to_fen};
use chess_core::position::movegen::{is_square_attacked, legal_moves};
use chess_core::{Color, Position, Square};

fn play_uci(pos: &mut Position, uci: &str) {
    let mv = legal_moves(pos)
        .into_iter()
        .find(|m| m.to_uci() == uci)
        .unwrap_or_else(|| panic!("{uci} is not legal in this position"));
    pos.make(mv);
}

#[test]
fn make_unmake_round_trips_zobrist_and_state_from_initial_position() {
    let mut pos = Position::new();
    let before_zobrist = pos.zobrist();
    let before_fen = to_fen(&pos);

    for &uci in &["e2e4", "e7e5", "g1f3", "b8c6"] {
        let mv = legal_moves(&pos).into_iter().find(|m| m.to_uci() == uci).unwrap();
        pos.make(mv);
        pos.unmake();
        assert_eq!(pos.zobrist(), before_zobrist);
        assert_eq!(to_fen(&pos), before_fen);
    }
}

#[test]
fn fen_round_trips_after_legal_play() {
    let mut pos = Position::new();
    play_uci(&mut pos, "e2e4");
    play_uci(&mut pos, "c7c5");
    play_uci(&mut pos, "g1f3");
    let fen = to_fen(&pos);
    let reparsed = from_fen(&fen).unwrap();
    assert_eq!(to_fen(&reparsed), fen);
    assert_eq!(reparsed.zobrist(), pos.zobrist());
}

#[test]
fn initial_position_has_twenty_legal_moves() {
    let pos = Position::new();
    assert_eq!(legal_moves(&pos).len(), 20);
}

#[test]
fn scenario_b_threefold_repetition_restores_initial_zobrist() {
    let mut pos = Position::new();
    let initial_zobrist = pos.zobrist();
    for _ in 0..2 {
        for &uci in &["g1f3", "b8c6", "f3g1", "c6b8"] {
            play_uci(&mut pos, uci);
        }
    }
    assert_eq!(pos.zobrist(), initial_zobrist);
    assert_eq!(pos.side_to_move, Color::White);
}

#[test]
fn scenario_c_en_passant_round_trips() {
    let mut pos = Position::new();
    play_uci(&mut pos, "e2e4");
    play_uci(&mut pos, "g8f6");
    play_uci(&mut pos, "e4e5");
    play_uci(&mut pos, "d7d5");

    let before = pos.zobrist();
    let ep = legal_moves(&pos).into_iter().find(|m| m.to_uci() == "e5d6").expect("en passant is legal");
    assert!(ep.is_capture());
    pos.make(ep);
    pos.unmake();
    assert_eq!(pos.zobrist(), before);
}

#[test]
fn en_passant_window_closes_after_one_intervening_half_move() {
    let mut pos = Position::new();
    play_uci(&mut pos, "e2e4");
    play_uci(&mut pos, "a7a6");
    play_uci(&mut pos, "e4e5");
    play_uci(&mut pos, "d7d5");
    assert!(legal_moves(&pos).iter().any(|m| m.to_uci() == "e5d6"));

    // White declines the capture; the right is lost as soon as any other
    // move is made, not merely after a further pawn push.
    play_uci(&mut pos, "b1c3");
    play_uci(&mut pos, "a6a5");
    assert!(!legal_moves(&pos).iter().any(|m| m.to_uci() == "e5d6"));
}

#[test]
fn fools_mate_has_no_legal_moves_and_is_check() {
    let pos = from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(pos.is_in_check());
}

#[test]
fn scenario_stalemate_has_no_legal_moves_and_is_not_check() {
    let pos = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(!pos.is_in_check());
}

#[test]
fn castling_through_check_is_disallowed() {
    // Black rook on f8 attacks f1, the square the king must pass through.
    let pos = from_fen("5r2/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(!legal_moves(&pos).iter().any(|m| m.is_castling()));
    assert!(is_square_attacked(&pos, Square::from_rank_file(0, 5), Color::Black));
}

#[test]
fn scenario_d_castling_rights_loss_is_scoped_to_the_moved_rook() {
    let mut pos = from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play_uci(&mut pos, "a1a2");
    let fen = to_fen(&pos);
    let castling_field = fen.split_whitespace().nth(2).unwrap();
    assert_eq!(castling_field, "Kkq");
}

#[test]
fn promotion_generates_all_four_kinds() {
    let pos = from_fen("8/P6k/8/8/8/8/7K/8 w - - 0 1").unwrap();
    let promos: Vec<_> = legal_moves(&pos).into_iter().filter(|m| m.from.to_algebraic() == "a7").collect();
    assert_eq!(promos.len(), 4);
    let kinds: std::collections::HashSet<_> = promos.iter().map(|m| m.effective_promotion()).collect();
    assert_eq!(kinds.len(), 4);
}
