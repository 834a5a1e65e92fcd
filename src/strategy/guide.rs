use const_format::formatcp;

use super::{FIRST_FLOOR, LAST_FLOOR, Lang};

/// Overview embed answered to `!strategy`, `!攻略` and `!戦略`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

const EN: Guide = Guide {
    title: "📘 Abyss Strategy Guide",
    lines: &[
        "Weekly abyss strategies are posted every Friday.",
        "",
        "**How to use**",
        "`!<floor>` or `!<floor>en` for the English strategy, e.g. `!57`",
        "`!<floor>cn` for the Chinese strategy, e.g. `!57cn`",
        "`!<floor>jp` for the Japanese strategy, e.g. `!57jp`",
        "",
        formatcp!("Available floors: {FIRST_FLOOR} to {LAST_FLOOR}"),
        "Found a better clear? Share it in the strategy channel!",
    ],
};

const CN: Guide = Guide {
    title: "📘 深淵攻略指南",
    lines: &[
        "每週五更新本週深淵攻略。",
        "",
        "**使用方法**",
        "`!<層數>cn` 查看中文攻略，例如 `!57cn`",
        "`!<層數>en` 查看英文攻略，例如 `!57en`",
        "`!<層數>jp` 查看日文攻略，例如 `!57jp`",
        "",
        formatcp!("可查詢層數：{FIRST_FLOOR} 至 {LAST_FLOOR}"),
        "有更好的打法？歡迎在攻略頻道分享！",
    ],
};

const JP: Guide = Guide {
    title: "📘 深淵攻略ガイド",
    lines: &[
        "毎週金曜日に今週の深淵攻略を更新します。",
        "",
        "**使い方**",
        "`!<階層>jp` で日本語の攻略、例: `!57jp`",
        "`!<階層>en` で英語の攻略、例: `!57en`",
        "`!<階層>cn` で中国語の攻略、例: `!57cn`",
        "",
        formatcp!("対応階層：{FIRST_FLOOR}〜{LAST_FLOOR}"),
        "もっと良い攻略があれば攻略チャンネルで共有してください！",
    ],
};

impl Guide {
    pub const fn for_lang(lang: Lang) -> &'static Guide {
        match lang {
            Lang::En => &EN,
            Lang::Cn => &CN,
            Lang::Jp => &JP,
        }
    }

    pub fn description(&self) -> String {
        self.lines.join("\n")
    }
}
