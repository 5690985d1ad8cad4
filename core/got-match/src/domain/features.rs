//! 合成特徴量（x, y）の付与
//!
//! 乱数源から x をレコード数ぶん先にまとめて引き、続けて y を同数引く。
//! この順序を変えると同じシードでも座標が変わる。

use common::rng::UniformSource;

use crate::domain::{CharacterProfile, CharacterRecord, Coordinates};

/// プロフィール列に座標を付与してレコード列にする
pub fn assign_features(
    profiles: Vec<CharacterProfile>,
    rng: &mut dyn UniformSource,
) -> Vec<CharacterRecord> {
    let n = profiles.len();
    let xs: Vec<f64> = (0..n).map(|_| rng.next_f64()).collect();
    let ys: Vec<f64> = (0..n).map(|_| rng.next_f64()).collect();
    profiles
        .into_iter()
        .zip(xs.into_iter().zip(ys))
        .map(|(p, (x, y))| CharacterRecord::new(p, Coordinates::new(x, y)))
        .collect()
}
