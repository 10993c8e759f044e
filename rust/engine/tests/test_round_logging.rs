use std::fs;
use std::path::PathBuf;

use blackjack_engine::cards::{Card, Rank as R, Suit as S};
use blackjack_engine::hand::{HandAction, HandStatus};
use blackjack_engine::logger::{ActionRecord, Actor, RoundLogger, RoundRecord};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample_record() -> RoundRecord {
    RoundRecord {
        round_id: "20250102-000001".to_string(),
        seed: Some(1),
        actions: vec![
            ActionRecord {
                actor: Actor::Player,
                action: HandAction::PlaceBet,
            },
            ActionRecord {
                actor: Actor::Player,
                action: HandAction::Stick,
            },
        ],
        player_cards: vec![
            Card {
                suit: S::Clubs,
                rank: R::King,
            },
            Card {
                suit: S::Hearts,
                rank: R::Nine,
            },
        ],
        dealer_cards: vec![
            Card {
                suit: S::Spades,
                rank: R::Ten,
            },
            Card {
                suit: S::Diamonds,
                rank: R::Seven,
            },
        ],
        player_status: HandStatus::Finished,
        player_value: 19,
        dealer_value: 17,
        bet: 10,
        winnings: 20,
        ts: None,
        meta: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("roundlog");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample_record()).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn records_round_trip_through_serde() {
    let rec = sample_record();
    let line = serde_json::to_string(&rec).expect("serialize");
    let back: RoundRecord = serde_json::from_str(&line).expect("deserialize");
    assert_eq!(back.round_id, rec.round_id);
    assert_eq!(back.actions, rec.actions);
    assert_eq!(back.winnings, 20);
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("roundlog_ts");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample_record()).expect("write");
    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = RoundRecord {
        ts: Some(preset.clone()),
        ..sample_record()
    };
    logger.write(&rec2).expect("write2");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}
