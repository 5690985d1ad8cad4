//! セッション読み込みのユースケース
//!
//! 取得 → 射影 → 表示名補正 → 特徴量付与（取得した全件）→ 上限件数に切り詰め → id 検証。
//! 特徴量は切り詰め前の全件に対して引くため、取得件数が同じなら座標も同じになる。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use common::rng::{Mt19937, UniformSource};

use crate::domain::{
    assign_features, truncate_records, CharacterProfile, MatchConfig, NameCorrections, RecordSet,
};
use crate::ports::outbound::CharacterSource;

pub struct LoadSessionUseCase {
    source: Arc<dyn CharacterSource>,
    corrections: NameCorrections,
    config: MatchConfig,
    logger: Arc<dyn Log>,
}

impl LoadSessionUseCase {
    pub fn new(
        source: Arc<dyn CharacterSource>,
        corrections: NameCorrections,
        config: MatchConfig,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            source,
            corrections,
            config,
            logger,
        }
    }

    /// 設定のシードで MT19937 を作って読み込む
    pub fn load(&self) -> Result<RecordSet, Error> {
        let mut rng = Mt19937::new(self.config.seed);
        self.load_with(&mut rng)
    }

    /// 乱数源を指定して読み込む
    pub fn load_with(&self, rng: &mut dyn UniformSource) -> Result<RecordSet, Error> {
        let raws = match self.source.fetch() {
            Ok(raws) => raws,
            Err(e) => {
                let e = match e {
                    Error::DataUnavailable(_) => e,
                    other => Error::data_unavailable(other.to_string()),
                };
                let _ = self.logger.log(
                    &LogRecord::new(LogLevel::Error, e.to_string())
                        .layer("usecase")
                        .kind("error")
                        .field("source", self.source.describe()),
                );
                return Err(e);
            }
        };
        let fetched = raws.len();

        let profiles: Vec<CharacterProfile> = raws.into_iter().map(CharacterProfile::from).collect();
        let profiles = self.corrections.apply(profiles);
        let records = assign_features(profiles, rng);
        let records = truncate_records(records, self.config.record_cap);
        let set = RecordSet::new(records)?;

        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "records loaded")
                .layer("usecase")
                .kind("usecase")
                .field("source", self.source.describe())
                .field("fetched", fetched)
                .field("loaded", set.len())
                .field("seed", self.config.seed),
        );
        Ok(set)
    }
}
