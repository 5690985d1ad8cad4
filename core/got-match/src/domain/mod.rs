//! got-match 固有のドメイン型（型と不変条件）

pub mod character;
pub mod command;
pub mod corrections;
pub mod features;
pub mod match_config;
pub mod record_set;
pub mod similarity;

pub use character::{
    parse_characters, CharacterId, CharacterProfile, CharacterRecord, Coordinates, RawCharacter,
};
pub use command::MatchCommand;
pub use corrections::NameCorrections;
pub use features::assign_features;
pub use match_config::MatchConfig;
pub use record_set::{truncate_records, RecordSet, Selection};
pub use similarity::{nearest, rank, MatchResult, Neighbor, RankedCharacter};
