//! Static strategy content: per-language guides and the per-floor table.

mod guide;
mod table;

use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use snafu::{OptionExt, Snafu};

pub use guide::Guide;

/// Lowest and highest floor covered by the table.
pub const FIRST_FLOOR: u32 = 55;
pub const LAST_FLOOR: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Cn,
    Jp,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Cn, Lang::Jp];

    pub const fn color(self) -> u32 {
        match self {
            Lang::En => 0x3498DB,
            Lang::Cn => 0xE74C3C,
            Lang::Jp => 0x9B59B6,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Cn => "cn",
            Lang::Jp => "jp",
        }
    }

    /// Floor embed body, goal line then link line.
    pub fn floor_description(self, goal: u32, link: &str) -> String {
        match self {
            Lang::En => format!("Goal: clear floor {goal}\nStrategy: {link}"),
            Lang::Cn => format!("目標：通關第{goal}層\n攻略：{link}"),
            Lang::Jp => format!("目標：{goal}階クリア\n攻略：{link}"),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
#[snafu(display("unknown language code `{code}`"))]
pub struct UnknownLangError {
    code: String,
}

impl FromStr for Lang {
    type Err = UnknownLangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .context(UnknownLangSnafu { code: s })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyEntry {
    pub title_suffix: &'static str,
    pub goal: u32,
    pub link: &'static str,
}

static STRATEGIES: LazyLock<HashMap<(u32, Lang), StrategyEntry>> = LazyLock::new(|| {
    table::ENTRIES
        .iter()
        .map(|&(floor, lang, title_suffix, goal, link)| {
            (
                (floor, lang),
                StrategyEntry {
                    title_suffix,
                    goal,
                    link,
                },
            )
        })
        .collect()
});

pub fn lookup(floor: u32, lang: Lang) -> Option<&'static StrategyEntry> {
    STRATEGIES.get(&(floor, lang))
}

/// Floors with at least one entry, ascending.
pub fn floors() -> Vec<u32> {
    let mut floors = table::ENTRIES
        .iter()
        .map(|(floor, ..)| *floor)
        .collect::<Vec<_>>();
    floors.sort_unstable();
    floors.dedup();
    floors
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lang_from_str() {
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("CN".parse::<Lang>(), Ok(Lang::Cn));
        assert_eq!("Jp".parse::<Lang>(), Ok(Lang::Jp));
        let err = "kr".parse::<Lang>().unwrap_err();
        assert_eq!(err.to_string(), "unknown language code `kr`");
    }

    #[test]
    fn test_colors_are_distinct() {
        assert_ne!(Lang::En.color(), Lang::Cn.color());
        assert_ne!(Lang::Cn.color(), Lang::Jp.color());
        assert_ne!(Lang::En.color(), Lang::Jp.color());
    }

    #[test]
    fn test_every_floor_has_every_lang() {
        let floors = floors();
        assert!(!floors.is_empty());
        for floor in floors {
            for lang in Lang::ALL {
                let entry = lookup(floor, lang);
                assert!(entry.is_some(), "missing entry for {floor}{lang}");
                assert!(
                    entry
                        .unwrap()
                        .link
                        .starts_with("https://discord.com/channels/")
                );
            }
        }
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        assert_eq!(STRATEGIES.len(), table::ENTRIES.len());
    }

    #[test]
    fn test_floor_range_matches_table() {
        assert_eq!(floors(), (FIRST_FLOOR..=LAST_FLOOR).collect::<Vec<_>>());
    }

    #[test]
    fn test_unknown_floor() {
        assert!(lookup(99, Lang::En).is_none());
    }
}
