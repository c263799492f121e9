//! Static game tables.

use std::fmt;

/// Franchise a species comes from. Each franchise stores a different subset
/// of catalogue columns, described by its [`TableSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterTable {
    Pokemon,
    Digimon,
    Yokai,
    Nexomon,
    Pals,
    Fakemon,
    FinalFantasy,
    MonsterHunter,
}

/// Which optional catalogue columns a franchise carries.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub has_types: bool,
    pub has_attribute: bool,
    pub has_legendary: bool,
    pub has_mythical: bool,
    pub has_rank: bool,
    pub has_stage: bool,
    pub has_evolution: bool,
}

impl MonsterTable {
    pub const ALL: [MonsterTable; 8] = [
        MonsterTable::Pokemon,
        MonsterTable::Digimon,
        MonsterTable::Yokai,
        MonsterTable::Nexomon,
        MonsterTable::Pals,
        MonsterTable::Fakemon,
        MonsterTable::FinalFantasy,
        MonsterTable::MonsterHunter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Digimon => "digimon",
            Self::Yokai => "yokai",
            Self::Nexomon => "nexomon",
            Self::Pals => "pals",
            Self::Fakemon => "fakemon",
            Self::FinalFantasy => "finalfantasy",
            Self::MonsterHunter => "monsterhunter",
        }
    }

    /// Parses a franchise name, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Relative weight when picking which franchise to roll from.
    pub fn roll_weight(&self) -> f64 {
        match self {
            Self::Fakemon => 0.25,
            _ => 1.0,
        }
    }

    pub fn schema(&self) -> TableSchema {
        let schema = TableSchema {
            has_types: false,
            has_attribute: false,
            has_legendary: false,
            has_mythical: false,
            has_rank: false,
            has_stage: false,
            has_evolution: false,
        };

        match self {
            Self::Pokemon => TableSchema {
                has_types: true,
                has_legendary: true,
                has_mythical: true,
                has_stage: true,
                has_evolution: true,
                ..schema
            },
            Self::Digimon => TableSchema {
                has_types: true,
                has_attribute: true,
                has_rank: true,
                has_evolution: true,
                ..schema
            },
            Self::Yokai => TableSchema {
                has_types: true,
                has_rank: true,
                has_evolution: true,
                ..schema
            },
            Self::Nexomon => TableSchema {
                has_types: true,
                has_legendary: true,
                has_stage: true,
                has_evolution: true,
                ..schema
            },
            Self::Pals => schema,
            Self::Fakemon => TableSchema {
                has_types: true,
                has_attribute: true,
                has_legendary: true,
                has_mythical: true,
                has_stage: true,
                has_evolution: true,
                ..schema
            },
            Self::FinalFantasy => TableSchema {
                has_stage: true,
                has_evolution: true,
                ..schema
            },
            Self::MonsterHunter => TableSchema {
                has_attribute: true,
                has_rank: true,
                ..schema
            },
        }
    }
}

impl fmt::Display for MonsterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MONSTER_TYPES: [&str; 18] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

pub const DIGIMON_ATTRIBUTES: [&str; 5] = ["Data", "Virus", "Vaccine", "Variable", "Free"];

pub const BASE_STAGES: [&str; 2] = ["Base Stage", "Doesn't Evolve"];

pub const BABY_DIGIMON_RANKS: [&str; 3] = ["Baby I", "Baby II", "Child"];

pub const MAX_LEVEL: i32 = 100;
pub const MAX_IV: i32 = 31;
pub const MAX_EV_PER_STAT: i32 = 252;
pub const MAX_TOTAL_EV: i32 = 510;
pub const MAX_FRIENDSHIP: i32 = 255;

pub const FALLBACK_MOVE: &str = "Tackle";
pub const FALLBACK_ABILITIES: (&str, &str) = ("Adaptability", "Run Away");
pub const DEFAULT_WHERE_MET: &str = "Adoption Center";

/// Nature name with the stat it raises and the stat it lowers, by index into
/// `[atk, def, spa, spd, spe]`. Neutral natures change nothing.
pub const NATURES: [(&str, Option<usize>, Option<usize>); 25] = [
    ("Hardy", None, None),
    ("Lonely", Some(0), Some(1)),
    ("Brave", Some(0), Some(4)),
    ("Adamant", Some(0), Some(2)),
    ("Naughty", Some(0), Some(3)),
    ("Bold", Some(1), Some(0)),
    ("Docile", None, None),
    ("Relaxed", Some(1), Some(4)),
    ("Impish", Some(1), Some(2)),
    ("Lax", Some(1), Some(3)),
    ("Timid", Some(4), Some(0)),
    ("Hasty", Some(4), Some(1)),
    ("Serious", None, None),
    ("Jolly", Some(4), Some(2)),
    ("Naive", Some(4), Some(3)),
    ("Modest", Some(2), Some(0)),
    ("Mild", Some(2), Some(1)),
    ("Quiet", Some(2), Some(4)),
    ("Bashful", None, None),
    ("Rash", Some(2), Some(3)),
    ("Calm", Some(3), Some(0)),
    ("Gentle", Some(3), Some(1)),
    ("Sassy", Some(3), Some(4)),
    ("Careful", Some(3), Some(2)),
    ("Quirky", None, None),
];

pub const CHARACTERISTICS: [&str; 31] = [
    "Loves to eat",
    "Takes plenty of siestas",
    "Nods off a lot",
    "Scatters things often",
    "Likes to relax",
    "Proud of its power",
    "Likes to thrash about",
    "A little quick tempered",
    "Likes to fight",
    "Quick tempered",
    "Sturdy body",
    "Capable of taking hits",
    "Highly persistent",
    "Good endurance",
    "Good perseverance",
    "Highly curious",
    "Mischievous",
    "Thoroughly cunning",
    "Often lost in thought",
    "Very finicky",
    "Strong willed",
    "Somewhat vain",
    "Strongly defiant",
    "Hates to lose",
    "Somewhat stubborn",
    "Likes to run",
    "Alert to sounds",
    "Impetuous and silly",
    "Somewhat of a clown",
    "Quick to flee",
    "Often dozes off",
];

pub const GENDERS: [(&str, f64); 4] = [
    ("Male", 45.0),
    ("Female", 45.0),
    ("Non-binary", 5.0),
    ("Genderless", 5.0),
];

pub const POKEBALLS: [(&str, f64); 10] = [
    ("Poke Ball", 0.5),
    ("Great Ball", 0.65),
    ("Ultra Ball", 0.8),
    ("Master Ball", 1.0),
    ("Premier Ball", 0.5),
    ("Luxury Ball", 0.5),
    ("Timer Ball", 0.6),
    ("Repeat Ball", 0.7),
    ("Net Ball", 0.6),
    ("Dive Ball", 0.6),
];

/// Healing item: flat amount, or percentage of max HP, and whether it cures status.
pub struct HealingItem {
    pub name: &'static str,
    pub amount: Option<i32>,
    pub percentage: Option<i32>,
    pub cures_status: bool,
}

pub const HEALING_ITEMS: [HealingItem; 5] = [
    HealingItem {
        name: "Potion",
        amount: Some(20),
        percentage: None,
        cures_status: false,
    },
    HealingItem {
        name: "Super Potion",
        amount: Some(50),
        percentage: None,
        cures_status: false,
    },
    HealingItem {
        name: "Hyper Potion",
        amount: Some(200),
        percentage: None,
        cures_status: false,
    },
    HealingItem {
        name: "Max Potion",
        amount: None,
        percentage: Some(100),
        cures_status: false,
    },
    HealingItem {
        name: "Full Restore",
        amount: None,
        percentage: Some(100),
        cures_status: true,
    },
];

pub fn healing_item(name: &str) -> Option<&'static HealingItem> {
    HEALING_ITEMS
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
}

pub fn is_ball(item_name: &str) -> bool {
    item_name.to_lowercase().contains("ball")
}

pub const INVENTORY_CATEGORIES: [&str; 8] = [
    "items",
    "balls",
    "berries",
    "pastries",
    "eggs",
    "evolution",
    "antiques",
    "helditems",
];

pub const LEGACY_LEEWAY: &str = "Legacy Leeway";
pub const FORGET_ME_NOT: &str = "Forget-Me-Not";
pub const EDENWIESS: &str = "Edenwiess";
pub const STANDARD_EGG: &str = "Standard Egg";
pub const INCUBATOR: &str = "Incubator";
pub const POKEPUFF: &str = "Pokepuff";
pub const MONSTERS_PER_EGG: usize = 10;
pub const MAX_EGGS_PER_HATCH: u32 = 10;

pub const ART_QUALITY_LEVELS: [(&str, i32); 6] = [
    ("sketch", 2),
    ("sketchSet", 3),
    ("lineArt", 4),
    ("flatColor", 5),
    ("rendered", 7),
    ("polished", 9),
];

pub const BACKGROUND_BONUS_LEVELS: [(&str, i32); 3] = [("none", 0), ("simple", 3), ("complex", 6)];

pub const APPEARANCE_BONUS_LEVELS: [(&str, i32); 3] =
    [("bust", 1), ("halfBody", 2), ("fullBody", 3)];

pub const EXTERNAL_CHARACTER_COMPLEXITY: [(&str, i32); 4] = [
    ("simple", 1),
    ("average", 3),
    ("complex", 5),
    ("extravagant", 7),
];

/// Looks up a value in one of the `(key, value)` tables above.
pub fn lookup(table: &[(&str, i32)], key: &str) -> Option<i32> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| *value)
}

pub const WORDS_PER_LEVEL: i32 = 50;
pub const WORDS_PER_COIN: i32 = 1;
pub const COINS_PER_LEVEL: i32 = 50;
pub const EXTERNAL_WORDS_PER_LEVEL: i32 = 100;
pub const EXTERNAL_ART_LEVEL_DIVISOR: i32 = 2;
pub const EXTERNAL_BONUS_DIVISOR: i32 = 2;
pub const STATIC_REWARD_LEVELS: i32 = 6;
pub const STATIC_REWARD_COINS: i32 = 200;
pub const GIFT_LEVELS_PER_ITEM: i32 = 5;

/// Items handed out as gifts, by inventory category.
pub const GIFT_ITEM_POOL: [(&str, &[&str]); 5] = [
    ("berries", &["Oran Berry", "Sitrus Berry", "Pecha Berry", "Forget-Me-Not"]),
    ("pastries", &["Vanilla Poffin", "Miraca Pastry", "Patama Pastry"]),
    ("balls", &["Poke Ball", "Great Ball", "Ultra Ball", "Premier Ball"]),
    ("antiques", &["Old Coin", "Cracked Pot", "Dusty Lantern"]),
    ("helditems", &["Leftovers", "Lucky Egg", "Everstone"]),
];

/// Items that can show up as item encounters.
pub const ENCOUNTER_ITEM_POOL: [(&str, &str); 8] = [
    ("items", "Potion"),
    ("items", "Super Potion"),
    ("items", "Pokepuff"),
    ("balls", "Poke Ball"),
    ("balls", "Great Ball"),
    ("berries", "Oran Berry"),
    ("berries", "Forget-Me-Not"),
    ("eggs", "Standard Egg"),
];

pub const NPC_TRAINER_NAMES: [&str; 8] = [
    "Rival Trainer",
    "Wild Researcher",
    "Rogue Explorer",
    "Mysterious Wanderer",
    "Seasoned Adventurer",
    "Lost Traveler",
    "Treasure Hunter",
    "Monster Tamer",
];

pub const DEFAULT_KNOCKOUT_LIMIT: i32 = 6;
