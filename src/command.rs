use std::sync::LazyLock;

use regex::Regex;

use crate::strategy::Lang;

static FLOOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^!(\d+)(en|cn|jp)?$").expect("floor command pattern is valid")
});

/// A recognised strategy command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `!strategy`, `!攻略` or `!戦略`
    Guide(Lang),
    /// `!<floor>` with an optional language suffix, English by default
    Floor { floor: u32, lang: Lang },
}

impl Command {
    /// Parses trimmed message text. Anything unrecognised yields `None`.
    pub fn parse(content: &str) -> Option<Self> {
        let content = content.trim();
        match content {
            "!strategy" => return Some(Command::Guide(Lang::En)),
            "!攻略" => return Some(Command::Guide(Lang::Cn)),
            "!戦略" => return Some(Command::Guide(Lang::Jp)),
            _ => {}
        }
        let caps = FLOOR_PATTERN.captures(content)?;
        let floor = caps[1].parse().ok()?;
        let lang = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => Lang::En,
        };
        Some(Command::Floor { floor, lang })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_literal_commands() {
        assert_eq!(Command::parse("!strategy"), Some(Command::Guide(Lang::En)));
        assert_eq!(Command::parse("!攻略"), Some(Command::Guide(Lang::Cn)));
        assert_eq!(Command::parse("!戦略"), Some(Command::Guide(Lang::Jp)));
    }

    #[test]
    fn test_literal_commands_are_case_sensitive() {
        assert_eq!(Command::parse("!Strategy"), None);
        assert_eq!(Command::parse("!STRATEGY"), None);
    }

    #[test]
    fn test_trim() {
        assert_eq!(
            Command::parse("   !strategy \n"),
            Some(Command::Guide(Lang::En))
        );
        assert_eq!(
            Command::parse("\t!57cn  "),
            Some(Command::Floor {
                floor: 57,
                lang: Lang::Cn
            })
        );
    }

    #[test]
    fn test_floor_commands() {
        let en = Some(Command::Floor {
            floor: 57,
            lang: Lang::En,
        });
        assert_eq!(Command::parse("!57"), en);
        assert_eq!(Command::parse("!57en"), en);
        assert_eq!(Command::parse("!57EN"), en);
        assert_eq!(Command::parse("!57En"), en);
        assert_eq!(
            Command::parse("!58JP"),
            Some(Command::Floor {
                floor: 58,
                lang: Lang::Jp
            })
        );
        // unknown floors still parse, the table decides
        assert_eq!(
            Command::parse("!99"),
            Some(Command::Floor {
                floor: 99,
                lang: Lang::En
            })
        );
    }

    #[test]
    fn test_non_commands() {
        for content in [
            "",
            "!",
            "57en",
            "!57kr",
            "!57 en",
            "! 57",
            "!en57",
            "hello !57en",
            "!57en please",
            "!99999999999999999999",
        ] {
            assert_eq!(Command::parse(content), None, "{content:?}");
        }
    }
}
