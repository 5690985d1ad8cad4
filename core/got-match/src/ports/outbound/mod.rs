//! Outbound ポート: アプリが外界（キャラクター取得元・表示）を使うための trait

pub mod character_source;
pub mod match_display;

pub use character_source::CharacterSource;
pub use match_display::MatchDisplay;
