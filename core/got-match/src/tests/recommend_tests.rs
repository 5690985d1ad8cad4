use std::sync::Arc;

use common::adapter::NoopLog;
use common::error::Error;

use crate::domain::{
    CharacterId, CharacterProfile, CharacterRecord, Coordinates, RecordSet, Selection,
};
use crate::tests::RecordingLog;
use crate::usecase::RecommendUseCase;

fn record(id: i64, name: &str, x: f64, y: f64) -> CharacterRecord {
    CharacterRecord::new(
        CharacterProfile {
            id: CharacterId::new(id),
            name: name.to_string(),
            title: String::new(),
            family: String::new(),
            image_url: String::new(),
        },
        Coordinates::new(x, y),
    )
}

fn sample() -> RecordSet {
    RecordSet::new(vec![
        record(10, "Jon Snow", 0.0, 0.0),
        record(11, "Daenerys Targaryen", 1.0, 1.0),
        record(12, "Varys", 0.1, 0.1),
        record(13, "The Hound", 0.5, 0.5),
    ])
    .unwrap()
}

fn recommender() -> RecommendUseCase {
    RecommendUseCase::new(Arc::new(NoopLog))
}

#[test]
fn test_nearest_by_name() {
    let result = recommender()
        .recommend(&sample(), &Selection::Name("Jon Snow".to_string()), 1)
        .unwrap();
    assert_eq!(result.selected.name(), "Jon Snow");
    assert_eq!(result.nearest.record.name(), "Varys");
    assert!((result.nearest.distance - 0.1414213562373095).abs() < 1e-12);
    assert!(result.runners_up.is_empty());
}

#[test]
fn test_by_id_and_position() {
    let r = recommender();
    let by_id = r
        .recommend(&sample(), &Selection::Id(CharacterId::new(11)), 1)
        .unwrap();
    assert_eq!(by_id.nearest.record.name(), "The Hound");
    let by_pos = r.recommend(&sample(), &Selection::Position(1), 1).unwrap();
    assert_eq!(by_pos.selected.name(), "Jon Snow");
}

#[test]
fn test_top_k_runners_up() {
    let result = recommender()
        .recommend(&sample(), &Selection::Name("jon snow".to_string()), 3)
        .unwrap();
    assert_eq!(result.nearest.record.name(), "Varys");
    let names: Vec<&str> = result.runners_up.iter().map(|r| r.record.name()).collect();
    assert_eq!(names, vec!["The Hound", "Daenerys Targaryen"]);
}

#[test]
fn test_unknown_character() {
    let err = recommender()
        .recommend(&sample(), &Selection::Name("Hodor".to_string()), 1)
        .unwrap_err();
    assert_eq!(err, Error::UnknownCharacter("'Hodor'".to_string()));
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn test_single_record_is_empty_set() {
    let set = RecordSet::new(vec![record(1, "Jon Snow", 0.5, 0.5)]).unwrap();
    let err = recommender()
        .recommend(&set, &Selection::Name("Jon Snow".to_string()), 1)
        .unwrap_err();
    assert_eq!(err, Error::EmptySet { count: 1 });
}

#[test]
fn test_logs_match() {
    let log = Arc::new(RecordingLog::default());
    RecommendUseCase::new(log.clone())
        .recommend(&sample(), &Selection::Position(1), 1)
        .unwrap();
    let records = log.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "match computed");
    let fields = records[0].fields.as_ref().unwrap();
    assert_eq!(fields["selected"], "Jon Snow");
    assert_eq!(fields["nearest"], "Varys");
}
