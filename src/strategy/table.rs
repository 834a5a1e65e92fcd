use super::Lang;

/// `(floor, lang, title suffix, goal floor, permalink)`
pub(super) const ENTRIES: &[(u32, Lang, &str, u32, &str)] = &[
    (
        55,
        Lang::En,
        "Abyss Strategy for 55",
        55,
        "https://discord.com/channels/1187452913640296448/1201337845129183262/1243871559032471602",
    ),
    (
        55,
        Lang::Cn,
        "深淵攻略 55層",
        55,
        "https://discord.com/channels/1187452913640296448/1201338102449736770/1243872034771402842",
    ),
    (
        55,
        Lang::Jp,
        "深淵攻略 55階",
        55,
        "https://discord.com/channels/1187452913640296448/1201338260776316938/1243872507469336617",
    ),
    (
        56,
        Lang::En,
        "Abyss Strategy for 56",
        56,
        "https://discord.com/channels/1187452913640296448/1201337845129183262/1251212076919483833",
    ),
    (
        56,
        Lang::Cn,
        "深淵攻略 56層",
        56,
        "https://discord.com/channels/1187452913640296448/1201338102449736770/1251212552658415073",
    ),
    (
        56,
        Lang::Jp,
        "深淵攻略 56階",
        56,
        "https://discord.com/channels/1187452913640296448/1201338260776316938/1251213025356348848",
    ),
    (
        57,
        Lang::En,
        "Abyss Strategy for 57",
        57,
        "https://discord.com/channels/1187452913640296448/1201337845129183262/1258552594806496064",
    ),
    (
        57,
        Lang::Cn,
        "深淵攻略 57層",
        57,
        "https://discord.com/channels/1187452913640296448/1201338102449736770/1258553070545427304",
    ),
    (
        57,
        Lang::Jp,
        "深淵攻略 57階",
        57,
        "https://discord.com/channels/1187452913640296448/1201338260776316938/1258553543243361079",
    ),
    (
        58,
        Lang::En,
        "Abyss Strategy for 58",
        58,
        "https://discord.com/channels/1187452913640296448/1201337845129183262/1265893112693508295",
    ),
    (
        58,
        Lang::Cn,
        "深淵攻略 58層",
        58,
        "https://discord.com/channels/1187452913640296448/1201338102449736770/1265893588432439535",
    ),
    (
        58,
        Lang::Jp,
        "深淵攻略 58階",
        58,
        "https://discord.com/channels/1187452913640296448/1201338260776316938/1265894061130373310",
    ),
    (
        59,
        Lang::En,
        "Abyss Strategy for 59",
        59,
        "https://discord.com/channels/1187452913640296448/1201337845129183262/1273233630580520526",
    ),
    (
        59,
        Lang::Cn,
        "深淵攻略 59層",
        59,
        "https://discord.com/channels/1187452913640296448/1201338102449736770/1273234106319451766",
    ),
    (
        59,
        Lang::Jp,
        "深淵攻略 59階",
        59,
        "https://discord.com/channels/1187452913640296448/1201338260776316938/1273234579017385541",
    ),
    (
        60,
        Lang::En,
        "Abyss Strategy for 60",
        60,
        "https://discord.com/channels/1187452913640296448/1201337845129183262/1280574148467532757",
    ),
    (
        60,
        Lang::Cn,
        "深淵攻略 60層",
        60,
        "https://discord.com/channels/1187452913640296448/1201338102449736770/1280574624206463997",
    ),
    (
        60,
        Lang::Jp,
        "深淵攻略 60階",
        60,
        "https://discord.com/channels/1187452913640296448/1201338260776316938/1280575096904397772",
    ),
];
