pub(crate) mod load_session;
pub(crate) mod recommend;
pub(crate) mod session;

pub(crate) use load_session::LoadSessionUseCase;
pub(crate) use recommend::RecommendUseCase;
pub(crate) use session::MatchSessionUseCase;
