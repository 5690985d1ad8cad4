//! 最近傍探索（合成特徴量空間のユークリッド距離）
//!
//! 選択レコード自身は候補から明示的に除外する。距離が等しい候補は元の添字順
//! （安定ソート）で並ぶため、選択と同一座標のレコードがあれば添字の小さい方が勝つ。

use serde::Serialize;

use common::error::Error;

use crate::domain::{CharacterId, CharacterRecord, Coordinates, RecordSet};

/// 候補 1 件（レコードセット上の添字と距離）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub index: usize,
    pub id: CharacterId,
    pub distance: f64,
}

/// 選択レコードの添字と座標を引く（2 件未満なら EmptySet）
fn locate(set: &RecordSet, selected: CharacterId) -> Result<(usize, Coordinates), Error> {
    if set.len() < 2 {
        return Err(Error::EmptySet { count: set.len() });
    }
    let index = set
        .index_of(selected)
        .ok_or_else(|| Error::UnknownCharacter(format!("id {}", selected)))?;
    Ok((index, set.records()[index].coords()))
}

/// 選択レコード以外の全レコードを距離の昇順に並べる
pub fn rank(set: &RecordSet, selected: CharacterId) -> Result<Vec<Neighbor>, Error> {
    let (selected_index, origin) = locate(set, selected)?;
    let mut neighbors: Vec<Neighbor> = set
        .records()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != selected_index)
        .map(|(index, r)| Neighbor {
            index,
            id: r.id(),
            distance: origin.distance_to(&r.coords()),
        })
        .collect();
    // sort_by は安定ソート
    neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(neighbors)
}

/// 最も近い他のレコード（線形走査。同距離なら添字の小さい方）
pub fn nearest(set: &RecordSet, selected: CharacterId) -> Result<Neighbor, Error> {
    let (selected_index, origin) = locate(set, selected)?;
    let mut best: Option<Neighbor> = None;
    for (index, r) in set.records().iter().enumerate() {
        if index == selected_index {
            continue;
        }
        let distance = origin.distance_to(&r.coords());
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(Neighbor {
                index,
                id: r.id(),
                distance,
            });
        }
    }
    best.ok_or(Error::EmptySet { count: set.len() })
}

/// 距離付きのレコード（表示用）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCharacter {
    #[serde(flatten)]
    pub record: CharacterRecord,
    pub distance: f64,
}

/// 推薦結果: 選択レコード・最近傍・（要求があれば）次点以降
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub selected: CharacterRecord,
    pub nearest: RankedCharacter,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runners_up: Vec<RankedCharacter>,
}

impl MatchResult {
    /// 上位 `top` 件（最低 1 件）から結果を組み立てる
    pub fn from_ranking(
        set: &RecordSet,
        selected_index: usize,
        ranking: &[Neighbor],
        top: usize,
    ) -> Result<Self, Error> {
        let to_ranked = |n: &Neighbor| -> Result<RankedCharacter, Error> {
            let record = set
                .get(n.index)
                .cloned()
                .ok_or_else(|| Error::system(format!("ranking index {} out of range", n.index)))?;
            Ok(RankedCharacter {
                record,
                distance: n.distance,
            })
        };
        let selected = set
            .get(selected_index)
            .cloned()
            .ok_or_else(|| Error::system(format!("selected index {} out of range", selected_index)))?;
        let (first, rest) = ranking
            .split_first()
            .ok_or(Error::EmptySet { count: set.len() })?;
        let runners_up = rest
            .iter()
            .take(top.saturating_sub(1))
            .map(to_ranked)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            selected,
            nearest: to_ranked(first)?,
            runners_up,
        })
    }
}
