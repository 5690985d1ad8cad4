//! 表示名の補正表
//!
//! 完全一致（大文字小文字を区別）でのみ置換し、表に無い名前はそのまま通す。
//! 1 回の参照で終わり、置換後の名前を再度引くことはない。

use crate::domain::CharacterProfile;

/// 取得元の表記 → 表示名
const GOT_NAME_CORRECTIONS: &[(&str, &str)] = &[
    ("Jaime Lannister", "Jamie Lannister"),
    ("Lord Varys", "Varys"),
    ("Bronn", "Lord Bronn"),
    ("Sandor Clegane", "The Hound"),
    ("Robb Stark", "Rob Stark"),
];

/// 表示名の補正表
#[derive(Debug, Clone)]
pub struct NameCorrections {
    table: Vec<(String, String)>,
}

impl NameCorrections {
    pub fn new<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            table: pairs
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// 既定の補正表
    pub fn got_defaults() -> Self {
        Self::new(GOT_NAME_CORRECTIONS.iter().copied())
    }

    /// 補正後の名前を返す
    pub fn correct<'a>(&'a self, name: &'a str) -> &'a str {
        self.table
            .iter()
            .find(|(from, _)| from == name)
            .map(|(_, to)| to.as_str())
            .unwrap_or(name)
    }

    /// プロフィールの列に補正を適用する（順序は保つ）
    pub fn apply(&self, profiles: Vec<CharacterProfile>) -> Vec<CharacterProfile> {
        profiles
            .into_iter()
            .map(|mut p| {
                p.name = self.correct(&p.name).to_string();
                p
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for NameCorrections {
    fn default() -> Self {
        Self::got_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CharacterId;

    fn profile(id: i64, name: &str) -> CharacterProfile {
        CharacterProfile {
            id: CharacterId::new(id),
            name: name.to_string(),
            title: String::new(),
            family: String::new(),
            image_url: format!("{}.jpg", id),
        }
    }

    #[test]
    fn test_correct_known_names() {
        let c = NameCorrections::got_defaults();
        assert_eq!(c.correct("Jaime Lannister"), "Jamie Lannister");
        assert_eq!(c.correct("Lord Varys"), "Varys");
        assert_eq!(c.correct("Bronn"), "Lord Bronn");
        assert_eq!(c.correct("Sandor Clegane"), "The Hound");
        assert_eq!(c.correct("Robb Stark"), "Rob Stark");
    }

    #[test]
    fn test_unmapped_and_case_sensitive() {
        let c = NameCorrections::got_defaults();
        assert_eq!(c.correct("Arya Stark"), "Arya Stark");
        assert_eq!(c.correct("bronn"), "bronn");
        assert_eq!(c.correct("Bronn "), "Bronn ");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let c = NameCorrections::got_defaults();
        let input = vec![
            profile(0, "Bronn"),
            profile(1, "Lord Bronn"),
            profile(2, "Robb Stark"),
            profile(3, "Jon Snow"),
        ];
        let once = c.apply(input);
        let twice = c.apply(once.clone());
        assert_eq!(once, twice);
        let names: Vec<&str> = once.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Lord Bronn", "Lord Bronn", "Rob Stark", "Jon Snow"]);
    }

    #[test]
    fn test_apply_preserves_order_and_other_fields() {
        let c = NameCorrections::new([("A", "B")]);
        let out = c.apply(vec![profile(5, "A"), profile(6, "C")]);
        assert_eq!(out[0].id, CharacterId::new(5));
        assert_eq!(out[0].name, "B");
        assert_eq!(out[0].image_url, "5.jpg");
        assert_eq!(out[1].name, "C");
    }
}
