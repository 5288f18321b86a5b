//! Perft: counts the leaves of the legal-move tree and compares them with
//! known values. A wrong count points at move generation, move application or
//! the legality filter.

use shogi_match::{Position, RuleSet};

#[test]
fn perft_start_depth_1() {
    let pos = Position::startpos();
    assert_eq!(pos.perft(1, &RuleSet::standard()), 30);
}

#[test]
fn perft_start_depth_2() {
    let pos = Position::startpos();
    assert_eq!(pos.perft(2, &RuleSet::standard()), 900);
}

#[test]
fn perft_start_depth_3() {
    let pos = Position::startpos();
    assert_eq!(pos.perft(3, &RuleSet::standard()), 25_470);
}

#[test]
fn perft_start_rule_sets_agree() {
    // No drop is possible this early, so both rule sets see the same tree.
    let pos = Position::startpos();
    assert_eq!(
        pos.perft(2, &RuleSet::standard()),
        pos.perft(2, &RuleSet::reference())
    );
}

#[test]
fn perft_kings_only() {
    // Corner king: 3 moves, the other king in the middle: 8.
    let pos: Position = "k8/9/9/9/4K4/9/9/9/9 b ".parse().unwrap();
    assert_eq!(pos.perft(1, &RuleSet::standard()), 8);

    let pos: Position = "k8/9/9/9/4K4/9/9/9/9 w ".parse().unwrap();
    assert_eq!(pos.perft(1, &RuleSet::standard()), 3);
}

#[test]
fn perft_drops() {
    // A gold in hand can go to every empty square.
    let pos: Position = "k8/9/9/9/9/9/9/9/8K b G".parse().unwrap();
    assert_eq!(pos.perft(1, &RuleSet::standard()), 3 + 79);
}
