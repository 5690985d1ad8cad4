//! 1 セッション分のユースケース（一覧・単発マッチ・対話）
//!
//! レコードセットはセッション開始時に 1 回だけ読み込み、選択が変わるたびに
//! 最近傍をその場で計算し直す。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::Selection;
use crate::ports::outbound::MatchDisplay;
use crate::usecase::{LoadSessionUseCase, RecommendUseCase};

pub struct MatchSessionUseCase {
    loader: LoadSessionUseCase,
    recommender: RecommendUseCase,
    display: Arc<dyn MatchDisplay>,
    logger: Arc<dyn Log>,
}

impl MatchSessionUseCase {
    pub fn new(
        loader: LoadSessionUseCase,
        recommender: RecommendUseCase,
        display: Arc<dyn MatchDisplay>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            loader,
            recommender,
            display,
            logger,
        }
    }

    /// 読み込んだレコードセットの一覧を表示する
    pub fn list(&self) -> Result<i32, Error> {
        let set = self.loader.load()?;
        self.display.render_list(&set)?;
        Ok(0)
    }

    /// 指定キャラクターの最近傍を 1 回表示する
    pub fn match_once(&self, selection: &Selection, top: usize) -> Result<i32, Error> {
        let set = self.loader.load()?;
        let result = self.recommender.recommend(&set, selection, top)?;
        self.display.render_match(&result)?;
        Ok(0)
    }

    /// 選択肢を提示し、入力終了まで選択ごとに最近傍を表示する。
    ///
    /// 存在しない名前・番号は表示して続行する。EmptySet 等それ以外のエラーは返す。
    pub fn interactive(&self, top: usize) -> Result<i32, Error> {
        let set = self.loader.load()?;
        if set.len() < 2 {
            return Err(Error::EmptySet { count: set.len() });
        }
        self.display.present_options(&set)?;

        let mut matches = 0usize;
        while let Some(selection) = self.display.choose()? {
            match self.recommender.recommend(&set, &selection, top) {
                Ok(result) => {
                    self.display.render_match(&result)?;
                    matches += 1;
                }
                Err(e @ Error::UnknownCharacter(_)) => {
                    let _ = self.logger.log(
                        &LogRecord::new(LogLevel::Warn, e.to_string())
                            .layer("usecase")
                            .kind("usecase"),
                    );
                    self.display.render_error(&e)?;
                }
                Err(e) => return Err(e),
            }
        }

        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "interactive session ended")
                .layer("usecase")
                .kind("lifecycle")
                .field("matches", matches),
        );
        Ok(0)
    }
}
