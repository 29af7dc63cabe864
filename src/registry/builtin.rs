//! Compiled-in table definitions for the 5e SRD data set.

use crate::registry::TableSpec;

struct BuiltinTable {
    name: &'static str,
    source_file: &'static str,
    fields: &'static [&'static str],
}

// Population order. Field lists follow the keys used by the SRD fixture files.
static TABLES: &[BuiltinTable] = &[
    BuiltinTable {
        name: "ability_scores",
        source_file: "5e-SRD-Ability-Scores.json",
        fields: &["index", "name", "full_name", "desc", "skills", "url"],
    },
    BuiltinTable {
        name: "alignments",
        source_file: "5e-SRD-Alignments.json",
        fields: &["index", "name", "abbreviation", "desc", "url"],
    },
    BuiltinTable {
        name: "backgrounds",
        source_file: "5e-SRD-Backgrounds.json",
        fields: &[
            "index",
            "name",
            "starting_proficiencies",
            "language_options",
            "starting_equipment",
            "starting_equipment_options",
            "feature",
            "personality_traits",
            "ideals",
            "bonds",
            "flaws",
            "url",
        ],
    },
    BuiltinTable {
        name: "classes",
        source_file: "5e-SRD-Classes.json",
        fields: &[
            "index",
            "name",
            "hit_die",
            "proficiency_choices",
            "proficiencies",
            "saving_throws",
            "starting_equipment",
            "starting_equipment_options",
            "class_levels",
            "multi_classing",
            "subclasses",
            "spellcasting",
            "spells",
            "url",
        ],
    },
    BuiltinTable {
        name: "conditions",
        source_file: "5e-SRD-Conditions.json",
        fields: &["index", "name", "desc", "url"],
    },
    BuiltinTable {
        name: "damage_types",
        source_file: "5e-SRD-Damage-Types.json",
        fields: &["index", "name", "desc", "url"],
    },
    BuiltinTable {
        name: "equipment_categories",
        source_file: "5e-SRD-Equipment-Categories.json",
        fields: &["index", "name", "equipment", "url"],
    },
    BuiltinTable {
        name: "equipment",
        source_file: "5e-SRD-Equipment.json",
        fields: &[
            "index",
            "name",
            "desc",
            "equipment_category",
            "gear_category",
            "weapon_category",
            "weapon_range",
            "category_range",
            "cost",
            "damage",
            "two_handed_damage",
            "range",
            "throw_range",
            "weight",
            "properties",
            "armor_category",
            "armor_class",
            "str_minimum",
            "stealth_disadvantage",
            "tool_category",
            "vehicle_category",
            "speed",
            "capacity",
            "contents",
            "quantity",
            "special",
            "image",
            "url",
        ],
    },
    BuiltinTable {
        name: "feats",
        source_file: "5e-SRD-Feats.json",
        fields: &["index", "name", "prerequisites", "desc", "url"],
    },
    BuiltinTable {
        name: "features",
        source_file: "5e-SRD-Features.json",
        fields: &[
            "index",
            "name",
            "class",
            "subclass",
            "level",
            "prerequisites",
            "desc",
            "parent",
            "feature_specific",
            "reference",
            "url",
        ],
    },
    BuiltinTable {
        name: "languages",
        source_file: "5e-SRD-Languages.json",
        fields: &["index", "name", "type", "typical_speakers", "script", "desc", "url"],
    },
    BuiltinTable {
        name: "levels",
        source_file: "5e-SRD-Levels.json",
        fields: &[
            "index",
            "level",
            "ability_score_bonuses",
            "prof_bonus",
            "feature_choices",
            "features",
            "spellcasting",
            "class_specific",
            "subclass_specific",
            "class",
            "subclass",
            "url",
        ],
    },
    BuiltinTable {
        name: "magic_items",
        source_file: "5e-SRD-Magic-Items.json",
        fields: &[
            "index",
            "name",
            "equipment_category",
            "rarity",
            "variants",
            "variant",
            "desc",
            "image",
            "url",
        ],
    },
    BuiltinTable {
        name: "magic_schools",
        source_file: "5e-SRD-Magic-Schools.json",
        fields: &["index", "name", "desc", "url"],
    },
    BuiltinTable {
        name: "monsters",
        source_file: "5e-SRD-Monsters.json",
        fields: &[
            "index",
            "name",
            "desc",
            "size",
            "type",
            "subtype",
            "alignment",
            "armor_class",
            "hit_points",
            "hit_dice",
            "hit_points_roll",
            "speed",
            "strength",
            "dexterity",
            "constitution",
            "intelligence",
            "wisdom",
            "charisma",
            "proficiencies",
            "damage_vulnerabilities",
            "damage_resistances",
            "damage_immunities",
            "condition_immunities",
            "senses",
            "languages",
            "challenge_rating",
            "proficiency_bonus",
            "xp",
            "special_abilities",
            "actions",
            "legendary_actions",
            "reactions",
            "forms",
            "image",
            "url",
        ],
    },
    BuiltinTable {
        name: "proficiencies",
        source_file: "5e-SRD-Proficiencies.json",
        fields: &["index", "name", "type", "classes", "races", "reference", "url"],
    },
    BuiltinTable {
        name: "races",
        source_file: "5e-SRD-Races.json",
        fields: &[
            "index",
            "name",
            "speed",
            "ability_bonuses",
            "ability_bonus_options",
            "alignment",
            "age",
            "size",
            "size_description",
            "starting_proficiencies",
            "starting_proficiency_options",
            "languages",
            "language_options",
            "language_desc",
            "traits",
            "subraces",
            "url",
        ],
    },
    BuiltinTable {
        name: "rule_sections",
        source_file: "5e-SRD-Rule-Sections.json",
        fields: &["index", "name", "desc", "url"],
    },
    BuiltinTable {
        name: "rules",
        source_file: "5e-SRD-Rules.json",
        fields: &["index", "name", "desc", "subsections", "url"],
    },
    BuiltinTable {
        name: "skills",
        source_file: "5e-SRD-Skills.json",
        fields: &["index", "name", "desc", "ability_score", "url"],
    },
    BuiltinTable {
        name: "spells",
        source_file: "5e-SRD-Spells.json",
        fields: &[
            "index",
            "name",
            "desc",
            "higher_level",
            "range",
            "components",
            "material",
            "area_of_effect",
            "ritual",
            "duration",
            "concentration",
            "casting_time",
            "level",
            "attack_type",
            "damage",
            "heal_at_slot_level",
            "dc",
            "school",
            "classes",
            "subclasses",
            "url",
        ],
    },
    BuiltinTable {
        name: "subclasses",
        source_file: "5e-SRD-Subclasses.json",
        fields: &[
            "index",
            "name",
            "class",
            "subclass_flavor",
            "desc",
            "subclass_levels",
            "spells",
            "url",
        ],
    },
    BuiltinTable {
        name: "subraces",
        source_file: "5e-SRD-Subraces.json",
        fields: &[
            "index",
            "name",
            "race",
            "desc",
            "ability_bonuses",
            "starting_proficiencies",
            "languages",
            "language_options",
            "racial_traits",
            "url",
        ],
    },
    BuiltinTable {
        name: "traits",
        source_file: "5e-SRD-Traits.json",
        fields: &[
            "index",
            "name",
            "races",
            "subraces",
            "desc",
            "proficiencies",
            "proficiency_choices",
            "language_options",
            "trait_specific",
            "parent",
            "url",
        ],
    },
    BuiltinTable {
        name: "weapon_properties",
        source_file: "5e-SRD-Weapon-Properties.json",
        fields: &["index", "name", "desc", "url"],
    },
];

/// Owned copies of the compiled-in definitions, in population order.
pub fn builtin_tables() -> Vec<TableSpec> {
    TABLES
        .iter()
        .map(|t| TableSpec::new(t.name, t.source_file, t.fields))
        .collect()
}
