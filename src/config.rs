use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use figment::{
    Figment,
    providers::{Env, Format, Json},
};
use serde::{Deserialize, Serialize};
use serenity::all::GuildId;
use snafu::{ResultExt, ensure};

use crate::error::{BotError, ConfigSnafu, MissingTokenSnafu};

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct BotCfg {
    pub token: String,
    /// Only messages from this guild are answered when set
    pub guild_id: Option<GuildId>,
    /// IANA zone used for the Friday date and log timestamps, host local time otherwise
    pub time_zone: Option<Tz>,
    #[serde(skip)]
    pub path: PathBuf,
}

impl BotCfg {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, BotError> {
        let figment = Figment::new()
            .merge(Json::file(path.as_ref()))
            .merge(Env::prefixed("ABYSS_BOT_"))
            .merge(Env::raw().only(&["DISCORD_TOKEN"]).map(|_| "token".into()));
        Ok(Self {
            path: path.as_ref().to_owned(),
            ..Self::from_figment(figment)?
        })
    }

    pub fn from_figment(figment: Figment) -> Result<Self, BotError> {
        let cfg: Self = figment.extract_lossy().context(ConfigSnafu)?;
        ensure!(!cfg.token.trim().is_empty(), MissingTokenSnafu);
        Ok(cfg)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use figment::providers::Serialized;

    use super::*;

    #[test]
    fn test_read_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"token": "abc.def", "guild_id": 1122334455, "time_zone": "Asia/Tokyo"}}"#
        )
        .unwrap();
        let cfg = BotCfg::from_figment(Figment::new().merge(Json::file(file.path()))).unwrap();
        assert_eq!(cfg.token, "abc.def");
        assert_eq!(cfg.guild_id, Some(GuildId::new(1122334455)));
        assert_eq!(cfg.time_zone, Some(chrono_tz::Asia::Tokyo));
    }

    #[test]
    fn test_missing_token() {
        let err = BotCfg::from_figment(Figment::new()).unwrap_err();
        assert!(matches!(err, BotError::MissingToken));
    }

    #[test]
    fn test_blank_token() {
        let cfg = BotCfg {
            token: "   ".to_string(),
            ..Default::default()
        };
        let err = BotCfg::from_figment(Figment::from(Serialized::defaults(cfg))).unwrap_err();
        assert!(matches!(err, BotError::MissingToken));
    }

    #[test]
    fn test_optional_fields_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"token": "abc.def"}}"#).unwrap();
        let cfg = BotCfg::from_figment(Figment::new().merge(Json::file(file.path()))).unwrap();
        assert!(cfg.guild_id.is_none());
        assert!(cfg.time_zone.is_none());
    }
}
