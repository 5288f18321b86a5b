use shogi_match::check;
use shogi_match::movegen::{self, Origin};
use shogi_match::opponent::{MoveSelector, RandomSelector};
use shogi_match::{
    Board, Color, Hand, Match, MatchError, MatchState, Piece, PieceKind, PlayConfig, Player,
    Position, RuleSet, SfenError, Square,
};

const STARTPOS: &str = "lnsgkgsnl/1b5r1/ppppppppp/9/9/9/PPPPPPPPP/1R5B1/LNSGKGSNL b ";

fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank).unwrap()
}

#[test]
fn turn_alternation() {
    for first in Color::iter() {
        let mut game = Match::new(Player::human(first), Player::human(first.flip()));
        assert_eq!(first, game.player_to_move().color);

        let m = game.legal_moves()[0].to_string();
        game.do_turn(&m).unwrap();
        assert_eq!(first.flip(), game.player_to_move().color);

        let m = game.legal_moves()[0].to_string();
        game.do_turn(&m).unwrap();
        assert_eq!(first, game.player_to_move().color);
    }
}

#[test]
fn opening_position_text() {
    let game = Match::new(Player::human(Color::Black), Player::computer(Color::White));
    assert_eq!(STARTPOS, game.serialize_board_state());
    assert_eq!(Ok(*game.position()), Position::from_sfen(STARTPOS));
}

#[test]
fn capture_fills_the_hand() {
    let mut game = Match::new(Player::human(Color::Black), Player::human(Color::White));

    for m in [
        "26P 25P", "62p 63p", "25P 24P", "63p 64p", "24P 23P", "64p 65p", "23P 22+P",
    ] {
        game.do_turn(m).unwrap();
    }

    assert_eq!(
        "lnsgkgsnl/1b5r1/pp+Pppp1pp/9/9/6p2/PP1PPPPPP/1R5B1/LNSGKGSNL w P",
        game.serialize_board_state()
    );
    assert_eq!(1, game.position().hand().get(PieceKind::Pawn, Color::Black));
    assert!(PieceKind::HAND_KINDS
        .iter()
        .filter(|&&kind| kind != PieceKind::Pawn)
        .all(|&kind| game.position().hand().get(kind, Color::Black) == 0));
}

#[test]
fn mandatory_pawn_promotion() {
    let mut board = Board::empty();
    board.place(0, 7, Piece::new(PieceKind::Pawn, Color::White));

    let moves = movegen::generate(
        &board,
        &Hand::default(),
        Color::White,
        Origin::Board(sq(0, 7)),
        &RuleSet::default(),
    );

    assert_eq!(1, moves.len());
    assert_eq!(sq(0, 8), moves[0].to());
    assert!(moves[0].placed().promoted);
}

#[test]
fn king_adjacency() {
    let mut board = Board::empty();
    board.place(4, 4, Piece::new(PieceKind::King, Color::White));

    let moves = movegen::generate(
        &board,
        &Hand::default(),
        Color::White,
        Origin::Board(sq(4, 4)),
        &RuleSet::default(),
    );

    assert_eq!(8, moves.len());
    assert!(moves.iter().all(|m| !m.is_promotion()));
}

#[test]
fn ladder_checkmate() {
    for color in Color::iter() {
        let mut board = Board::empty();
        board.place(8, 0, Piece::new(PieceKind::King, color));
        board.place(0, 1, Piece::new(PieceKind::Rook, color.flip()));
        board.place(1, 0, Piece::new(PieceKind::Rook, color.flip()).promote());

        let pos = Position::new(board, Hand::default(), color);
        assert!(pos.in_check());
        assert_eq!(0, pos.legal_moves(&RuleSet::default()).len(), "failed for {color}");

        let game = Match::with_position(
            Player::human(color),
            Player::computer(color.flip()),
            pos,
            RuleSet::default(),
        );
        assert_eq!(MatchState::Checkmate { winner: color.flip() }, game.state());
    }
}

#[test]
fn two_pawns_on_a_file() {
    let mut board = Board::empty();
    board.place(4, 6, Piece::new(PieceKind::Pawn, Color::Black));

    let mut hand = Hand::default();
    hand.set(PieceKind::Pawn, Color::Black, 1);

    let moves = movegen::generate(
        &board,
        &hand,
        Color::Black,
        Origin::Hand(PieceKind::Pawn),
        &RuleSet::reference(),
    );

    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.to().file() != 4));
}

#[test]
fn move_not_found() {
    let mut game = Match::new(Player::human(Color::Black), Player::human(Color::White));

    assert_eq!(
        Err(MatchError::MoveNotFound("66P 64P".to_string())),
        game.do_turn("66P 64P")
    );
    assert_eq!(STARTPOS, game.serialize_board_state());

    // Exact text only.
    assert!(game.do_turn(" 66P 65P").is_err());
    assert!(game.do_turn("66P 65P").is_ok());
}

/// Legal moves must be exactly the pseudo-legal moves after which the mover's
/// King is not attacked.
fn assert_legal_moves_complete(pos: &Position) {
    let rules = RuleSet::reference();
    let side = pos.side_to_move();

    let mut expected = pos
        .pseudo_legal_moves(&rules)
        .iter()
        .filter(|m| {
            let mut child = *pos;
            child.apply(m);
            !check::king_is_in_check(child.board(), side)
        })
        .map(|m| m.to_string())
        .collect::<Vec<_>>();
    expected.sort();

    let mut actual = pos
        .legal_moves(&rules)
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>();
    actual.sort();

    assert_eq!(expected, actual, "{}", pos.to_sfen());
}

fn legal_texts(pos: &Position) -> Vec<String> {
    let mut texts = Match::serialize_moves(&pos.legal_moves(&RuleSet::reference()));
    texts.sort();
    texts
}

#[test]
fn legal_moves_are_exactly_the_safe_moves() {
    let cases = [
        STARTPOS,
        // Pinned silver, gold in hand.
        "k3r4/9/9/9/9/9/4S4/9/4K4 b G",
        // Rook check that drops can block.
        "k3r4/9/9/9/9/9/9/9/4K4 b GP",
        // Knight check that no drop can block.
        "k8/9/9/9/9/9/3n5/9/4K4 b R",
        // Both sides holding pieces after a bishop exchange.
        "lnsgkgsnl/1+B5r1/pp1pppppp/2p6/9/6P2/PPPPPP1PP/1R7/LNSGKGSNL w B",
        "lnsgk2nl/1r4g2/p1ppppspp/1p4p2/7P1/2P6/PP1PPPP1P/2G4R1/LNS1KGSNL b Bb",
    ];

    for (i, case) in cases.iter().enumerate() {
        let pos: Position = case.parse().unwrap_or_else(|e| panic!("failed at #{i}: {e}"));
        assert_legal_moves_complete(&pos);
    }
}

#[test]
fn check_evasions() {
    let pinned: Position = "k3r4/9/9/9/9/9/4S4/9/4K4 b G".parse().unwrap();
    let texts = legal_texts(&pinned);
    assert!(texts.contains(&"46S 45S".to_string()));
    assert!(!texts.iter().any(|m| m.starts_with("46S") && m != "46S 45S"));

    // Blocking drops on the file between rook and king, plus four king steps.
    let blockable: Position = "k3r4/9/9/9/9/9/9/9/4K4 b GP".parse().unwrap();
    assert!(blockable.in_check());
    let moves = blockable.legal_moves(&RuleSet::reference());
    let drops = moves.iter().filter(|m| m.is_drop()).collect::<Vec<_>>();
    assert_eq!(14, drops.len());
    assert!(drops.iter().all(|m| m.to().file() == 4 && (1..8).contains(&m.to().rank())));
    assert_eq!(18, moves.len());

    // A knight check cannot be blocked.
    let knight: Position = "k8/9/9/9/9/9/3n5/9/4K4 b R".parse().unwrap();
    assert!(knight.in_check());
    let moves = knight.legal_moves(&RuleSet::reference());
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| !m.is_drop()));
}

#[test]
fn legal_moves_complete_along_a_random_game() {
    let mut game = Match::with_rules(
        Player::computer(Color::Black),
        Player::computer(Color::White),
        RuleSet::reference(),
    );
    let mut selector = RandomSelector::from_seed(2024);

    for _ in 0..80 {
        assert_legal_moves_complete(game.position());

        let Some(m) = selector.select(game.legal_moves()) else {
            break;
        };
        game.do_move(&m).unwrap();
    }
}

#[test]
fn drop_after_capture() {
    let mut game = Match::new(Player::human(Color::Black), Player::human(Color::White));

    for m in ["66P 65P", "22p 23p", "77B 11+B", "30g 31g"] {
        game.do_turn(m).unwrap();
    }

    let drops: Vec<_> = game
        .legal_moves()
        .iter()
        .filter(|m| m.is_drop())
        .collect();
    assert!(!drops.is_empty());
    assert!(drops.iter().all(|m| m.placed().kind == PieceKind::Bishop));

    game.do_turn("44B").unwrap();
    assert_eq!(0, game.position().hand().get(PieceKind::Bishop, Color::Black));
    assert_eq!(
        Some(Piece::new(PieceKind::Bishop, Color::Black)),
        game.position().piece_at(sq(4, 4))
    );
}

#[test]
fn unplayable_start_positions_are_rejected() {
    let cases = [
        // The side to move could take the King.
        ("4k4/9/9/9/4R4/9/9/9/4K4 b ", SfenError::IllegalBoardState),
        // More pawns in hand than a set has.
        ("4k4/9/9/9/4p4/4R4/9/9/4K4 b 255P", SfenError::IllegalHand),
        ("4k4/9/9/9/4p4/4R4/9/9/4K4 b 19P", SfenError::IllegalHand),
    ];

    for (i, case) in cases.iter().enumerate() {
        assert_eq!(Err(case.1.clone()), case.0.parse::<Position>(), "failed at #{i}");

        let config = PlayConfig::from_lookup(|key| {
            (key == "SHOGI_START_SFEN").then(|| case.0.to_string())
        });
        assert_eq!(Position::startpos(), config.start_position(), "failed at #{i}");
    }
}

#[test]
fn capture_with_a_full_hand() {
    let pos: Position = "4k4/9/9/9/4p4/4R4/9/9/4K4 b 17P".parse().unwrap();
    let mut game = Match::with_position(
        Player::human(Color::Black),
        Player::human(Color::White),
        pos,
        RuleSet::default(),
    );

    game.do_turn("45R 44R").unwrap();
    assert_eq!(18, game.position().hand().get(PieceKind::Pawn, Color::Black));
    assert_eq!("4k4/9/9/9/4R4/9/9/9/4K4 w 18P", game.serialize_board_state());
}
