//! キャラクターのドメイン型
//!
//! 取得元の生レコード（RawCharacter）→ 正規化済みプロフィール（CharacterProfile）
//! → 座標付きレコード（CharacterRecord）の順に変換する。

use common::error::Error;
use serde::{Deserialize, Serialize};

/// キャラクター ID（取得元の id をそのまま使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(i64);

impl CharacterId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 取得元（Thrones API）の 1 レコード。使わないキー（firstName, image 等）は無視する。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCharacter {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    pub image_url: String,
}

/// レスポンス本文（JSON 配列）を RawCharacter の列に変換する。
///
/// 配列でない・必須キー（id, fullName, imageUrl）が欠けている場合は DataUnavailable。
pub fn parse_characters(body: &str) -> Result<Vec<RawCharacter>, Error> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::data_unavailable(format!("response is not valid JSON: {}", e)))?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(Error::data_unavailable(format!(
                "expected a JSON array of characters, got {}",
                json_kind(&other)
            )))
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<RawCharacter>(item)
                .map_err(|e| Error::data_unavailable(format!("malformed record at index {}: {}", i, e)))
        })
        .collect()
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// 正規化済みのプロフィール（座標はまだ無い）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    pub id: CharacterId,
    pub name: String,
    pub title: String,
    pub family: String,
    pub image_url: String,
}

impl From<RawCharacter> for CharacterProfile {
    fn from(raw: RawCharacter) -> Self {
        Self {
            id: CharacterId::new(raw.id),
            name: raw.full_name,
            title: raw.title.unwrap_or_default(),
            family: raw.family.unwrap_or_default(),
            image_url: raw.image_url,
        }
    }
}

/// 合成特徴量空間の 2 次元座標
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// ユークリッド距離
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 座標付きのキャラクターレコード。生成後は変更できない。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterRecord {
    #[serde(flatten)]
    profile: CharacterProfile,
    #[serde(flatten)]
    coords: Coordinates,
}

impl CharacterRecord {
    pub fn new(profile: CharacterProfile, coords: Coordinates) -> Self {
        Self { profile, coords }
    }

    pub fn id(&self) -> CharacterId {
        self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn title(&self) -> &str {
        &self.profile.title
    }

    pub fn family(&self) -> &str {
        &self.profile.family
    }

    pub fn image_url(&self) -> &str {
        &self.profile.image_url
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }
}
