//! Builtin card table.
//!
//! `(key, display name, elixir cost)`. Mirror is the one variable-cost card.

pub(super) const VARIABLE_COST: &[&str] = &["mirror"];

pub(super) const CARDS: &[(&str, &str, u32)] = &[
    // Troops
    ("knight", "Knight", 3),
    ("archers", "Archers", 3),
    ("goblins", "Goblins", 2),
    ("giant", "Giant", 5),
    ("minions", "Minions", 3),
    ("balloon", "Balloon", 5),
    ("witch", "Witch", 5),
    ("barbarians", "Barbarians", 5),
    ("golem", "Golem", 8),
    ("skeletons", "Skeletons", 1),
    ("valkyrie", "Valkyrie", 4),
    ("skeleton_army", "Skeleton Army", 3),
    ("bomber", "Bomber", 2),
    ("musketeer", "Musketeer", 4),
    ("baby_dragon", "Baby Dragon", 4),
    ("prince", "Prince", 5),
    ("wizard", "Wizard", 5),
    ("mini_pekka", "Mini P.E.K.K.A", 4),
    ("spear_goblins", "Spear Goblins", 2),
    ("giant_skeleton", "Giant Skeleton", 6),
    ("hog_rider", "Hog Rider", 4),
    ("minion_horde", "Minion Horde", 5),
    ("ice_wizard", "Ice Wizard", 3),
    ("royal_giant", "Royal Giant", 6),
    ("guards", "Guards", 3),
    ("princess", "Princess", 3),
    ("dark_prince", "Dark Prince", 4),
    ("three_musketeers", "Three Musketeers", 9),
    ("lava_hound", "Lava Hound", 7),
    ("ice_spirit", "Ice Spirit", 1),
    ("fire_spirit", "Fire Spirit", 1),
    ("miner", "Miner", 3),
    ("sparky", "Sparky", 6),
    ("bowler", "Bowler", 5),
    ("lumberjack", "Lumberjack", 4),
    ("inferno_dragon", "Inferno Dragon", 4),
    ("electro_wizard", "Electro Wizard", 4),
    ("battle_ram", "Battle Ram", 4),
    ("goblin_gang", "Goblin Gang", 3),
    ("dart_goblin", "Dart Goblin", 3),
    ("bats", "Bats", 2),
    ("bandit", "Bandit", 3),
    ("night_witch", "Night Witch", 4),
    ("mega_knight", "Mega Knight", 7),
    ("skeleton_barrel", "Skeleton Barrel", 3),
    ("flying_machine", "Flying Machine", 4),
    ("cannon_cart", "Cannon Cart", 5),
    ("royal_ghost", "Royal Ghost", 3),
    ("magic_archer", "Magic Archer", 4),
    ("royal_hogs", "Royal Hogs", 5),
    ("zappies", "Zappies", 4),
    ("rascals", "Rascals", 5),
    ("royal_recruits", "Royal Recruits", 7),
    ("hunter", "Hunter", 4),
    ("goblin_giant", "Goblin Giant", 6),
    ("electro_dragon", "Electro Dragon", 5),
    ("ram_rider", "Ram Rider", 5),
    ("wall_breakers", "Wall Breakers", 2),
    ("fisherman", "Fisherman", 3),
    ("elixir_golem", "Elixir Golem", 3),
    ("battle_healer", "Battle Healer", 4),
    ("skeleton_dragons", "Skeleton Dragons", 4),
    ("mother_witch", "Mother Witch", 4),
    ("electro_spirit", "Electro Spirit", 1),
    ("electro_giant", "Electro Giant", 7),
    ("phoenix", "Phoenix", 4),
    ("monk", "Monk", 5),
    ("mighty_miner", "Mighty Miner", 4),
    ("golden_knight", "Golden Knight", 4),
    ("skeleton_king", "Skeleton King", 4),
    ("archer_queen", "Archer Queen", 5),
    ("little_prince", "Little Prince", 3),
    ("pekka", "P.E.K.K.A", 7),
    ("ice_golem", "Ice Golem", 2),
    ("mega_minion", "Mega Minion", 3),
    ("executioner", "Executioner", 5),
    // Buildings
    ("cannon", "Cannon", 3),
    ("goblin_hut", "Goblin Hut", 5),
    ("mortar", "Mortar", 4),
    ("inferno_tower", "Inferno Tower", 5),
    ("bomb_tower", "Bomb Tower", 4),
    ("barbarian_hut", "Barbarian Hut", 7),
    ("tesla", "Tesla", 4),
    ("elixir_collector", "Elixir Collector", 6),
    ("x_bow", "X-Bow", 6),
    ("tombstone", "Tombstone", 3),
    ("furnace", "Furnace", 4),
    ("goblin_cage", "Goblin Cage", 4),
    ("goblin_drill", "Goblin Drill", 4),
    // Spells
    ("fireball", "Fireball", 4),
    ("arrows", "Arrows", 3),
    ("rage", "Rage", 2),
    ("rocket", "Rocket", 6),
    ("goblin_barrel", "Goblin Barrel", 3),
    ("freeze", "Freeze", 4),
    ("mirror", "Mirror", 1),
    ("lightning", "Lightning", 6),
    ("zap", "Zap", 2),
    ("poison", "Poison", 4),
    ("graveyard", "Graveyard", 5),
    ("the_log", "The Log", 2),
    ("tornado", "Tornado", 3),
    ("clone", "Clone", 3),
    ("earthquake", "Earthquake", 3),
    ("barbarian_barrel", "Barbarian Barrel", 2),
    ("heal_spirit", "Heal Spirit", 1),
    ("giant_snowball", "Giant Snowball", 2),
    ("royal_delivery", "Royal Delivery", 3),
];
