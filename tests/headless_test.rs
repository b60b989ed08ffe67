//! Tests for headless play.

use noughts::{GameConfig, IllegalMovePolicy, MoveRejection, Outcome, Status, headless};

#[test]
fn test_json_report_for_tie() {
    let mut session = GameConfig::default().build_session();
    let moves = headless::parse_moves(&["0 1 2 4 3 5 7 6 8".to_string()]).unwrap();
    let report = headless::run(&mut session, &moves);

    assert_eq!(report.status, Status::Tied);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "Tied");
    assert_eq!(json["moves"].as_array().unwrap().len(), 9);
    assert_eq!(json["moves"][8]["outcome"], "Tie");
}

#[test]
fn test_rejections_are_reported_per_move() {
    let mut session = GameConfig::default().build_session();
    let report = headless::run(&mut session, &[4, 4, 11]);

    assert_eq!(report.moves[0].outcome, Outcome::Continue);
    assert_eq!(report.moves[1].outcome, Outcome::Rejected(MoveRejection::Occupied(4)));
    assert_eq!(report.moves[2].outcome, Outcome::Rejected(MoveRejection::OutOfBounds(11)));
    assert!(report.to_text().contains("Player Two (O) to move"));
}

#[test]
fn test_ignore_policy_report() {
    let config = GameConfig::from_toml("illegal_moves = \"ignore\"").unwrap();
    assert_eq!(*config.illegal_moves(), IllegalMovePolicy::Ignore);

    let mut session = config.build_session();
    let report = headless::run(&mut session, &[4, 4]);
    assert_eq!(report.moves[1].outcome, Outcome::Ignored);
}
