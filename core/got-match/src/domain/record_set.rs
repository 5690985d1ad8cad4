//! セッション中に保持するレコードセット
//!
//! 生成時に id の一意性を検証する。並び順は取得元の順序のまま。

use std::collections::HashSet;

use common::error::Error;

use crate::domain::{CharacterId, CharacterRecord};

/// ユーザーの選択
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 表示名（完全一致 → 大文字小文字無視の順に探す）
    Name(String),
    /// レコード ID
    Id(CharacterId),
    /// 一覧の番号（1 始まり）
    Position(usize),
}

impl Selection {
    /// 対話入力 1 行を解釈する。空行は None（入力終了）。
    pub fn parse_input(line: &str) -> Option<Self> {
        let s = line.trim();
        if s.is_empty() {
            return None;
        }
        match s.parse::<usize>() {
            Ok(n) => Some(Selection::Position(n)),
            Err(_) => Some(Selection::Name(s.to_string())),
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Name(name) => write!(f, "'{}'", name),
            Selection::Id(id) => write!(f, "id {}", id),
            Selection::Position(n) => write!(f, "#{}", n),
        }
    }
}

/// 上限件数以内に切り詰めたレコードの列（id は一意）
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    records: Vec<CharacterRecord>,
}

impl RecordSet {
    /// id が重複していれば DataUnavailable
    pub fn new(records: Vec<CharacterRecord>) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        for r in &records {
            if !seen.insert(r.id()) {
                return Err(Error::data_unavailable(format!(
                    "duplicate character id {} ('{}')",
                    r.id(),
                    r.name()
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CharacterRecord> {
        self.records.get(index)
    }

    pub fn index_of(&self, id: CharacterId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// 選択をレコードの添字に解決する。見つからなければ UnknownCharacter。
    pub fn resolve(&self, selection: &Selection) -> Result<usize, Error> {
        let found = match selection {
            Selection::Id(id) => self.index_of(*id),
            Selection::Position(n) => n.checked_sub(1).filter(|i| *i < self.records.len()),
            Selection::Name(name) => self
                .records
                .iter()
                .position(|r| r.name() == name.as_str())
                .or_else(|| {
                    let lower = name.to_lowercase();
                    self.records
                        .iter()
                        .position(|r| r.name().to_lowercase() == lower)
                }),
        };
        found.ok_or_else(|| Error::UnknownCharacter(selection.to_string()))
    }
}

/// 取得元の順序を保ったまま先頭 `cap` 件に切り詰める
pub fn truncate_records(mut records: Vec<CharacterRecord>, cap: usize) -> Vec<CharacterRecord> {
    records.truncate(cap);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CharacterProfile, Coordinates};

    fn record(id: i64, name: &str) -> CharacterRecord {
        CharacterRecord::new(
            CharacterProfile {
                id: CharacterId::new(id),
                name: name.to_string(),
                title: String::new(),
                family: String::new(),
                image_url: String::new(),
            },
            Coordinates::new(0.0, 0.0),
        )
    }

    fn set() -> RecordSet {
        RecordSet::new(vec![
            record(10, "Jon Snow"),
            record(11, "Arya Stark"),
            record(12, "arya stark"),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = RecordSet::new(vec![record(1, "a"), record(1, "b")]).unwrap_err();
        assert!(matches!(err, Error::DataUnavailable(_)));
    }

    #[test]
    fn test_truncate_keeps_source_order() {
        let recs: Vec<CharacterRecord> = (0..30).map(|i| record(i, &format!("c{}", i))).collect();
        let out = truncate_records(recs, 25);
        assert_eq!(out.len(), 25);
        let ids: Vec<i64> = out.iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, (0..25).collect::<Vec<i64>>());
    }

    #[test]
    fn test_truncate_shorter_than_cap() {
        let recs = vec![record(0, "a"), record(1, "b")];
        assert_eq!(truncate_records(recs, 25).len(), 2);
    }

    #[test]
    fn test_resolve_by_name_exact_first() {
        let s = set();
        assert_eq!(s.resolve(&Selection::Name("arya stark".to_string())).unwrap(), 2);
        assert_eq!(s.resolve(&Selection::Name("Arya Stark".to_string())).unwrap(), 1);
    }

    #[test]
    fn test_resolve_by_name_case_insensitive_fallback() {
        let s = set();
        assert_eq!(s.resolve(&Selection::Name("JON SNOW".to_string())).unwrap(), 0);
        assert_eq!(s.resolve(&Selection::Name("ARYA STARK".to_string())).unwrap(), 1);
    }

    #[test]
    fn test_resolve_by_id_and_position() {
        let s = set();
        assert_eq!(s.resolve(&Selection::Id(CharacterId::new(12))).unwrap(), 2);
        assert_eq!(s.resolve(&Selection::Position(1)).unwrap(), 0);
        assert!(s.resolve(&Selection::Position(0)).is_err());
        assert!(s.resolve(&Selection::Position(4)).is_err());
    }

    #[test]
    fn test_resolve_unknown() {
        let err = set().resolve(&Selection::Name("Hodor".to_string())).unwrap_err();
        assert_eq!(err, Error::UnknownCharacter("'Hodor'".to_string()));
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Selection::parse_input("  \n"), None);
        assert_eq!(Selection::parse_input("3\n"), Some(Selection::Position(3)));
        assert_eq!(
            Selection::parse_input(" Jon Snow \n"),
            Some(Selection::Name("Jon Snow".to_string()))
        );
    }
}
