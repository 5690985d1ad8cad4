//! 最近傍推薦のユースケース

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{nearest, rank, MatchResult, RecordSet, Selection};

pub struct RecommendUseCase {
    logger: Arc<dyn Log>,
}

impl RecommendUseCase {
    pub fn new(logger: Arc<dyn Log>) -> Self {
        Self { logger }
    }

    /// 選択を解決し、最近傍（top > 1 なら上位 top 件）を返す
    pub fn recommend(
        &self,
        set: &RecordSet,
        selection: &Selection,
        top: usize,
    ) -> Result<MatchResult, Error> {
        if set.len() < 2 {
            return Err(Error::EmptySet { count: set.len() });
        }
        let selected_index = set.resolve(selection)?;
        let selected_id = set.records()[selected_index].id();

        let ranking = if top <= 1 {
            vec![nearest(set, selected_id)?]
        } else {
            rank(set, selected_id)?
        };
        let result = MatchResult::from_ranking(set, selected_index, &ranking, top)?;

        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "match computed")
                .layer("usecase")
                .kind("usecase")
                .field("selected", result.selected.name())
                .field("nearest", result.nearest.record.name())
                .field("distance", result.nearest.distance),
        );
        Ok(result)
    }
}
