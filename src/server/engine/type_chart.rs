//! Standard 18-type effectiveness chart.

/// `(attacking, super effective against, resisted by, no effect on)`
const CHART: [(&str, &[&str], &[&str], &[&str]); 18] = [
    ("Normal", &[], &["Rock", "Steel"], &["Ghost"]),
    (
        "Fire",
        &["Grass", "Ice", "Bug", "Steel"],
        &["Fire", "Water", "Rock", "Dragon"],
        &[],
    ),
    (
        "Water",
        &["Fire", "Ground", "Rock"],
        &["Water", "Grass", "Dragon"],
        &[],
    ),
    (
        "Electric",
        &["Water", "Flying"],
        &["Electric", "Grass", "Dragon"],
        &["Ground"],
    ),
    (
        "Grass",
        &["Water", "Ground", "Rock"],
        &["Fire", "Grass", "Poison", "Flying", "Bug", "Dragon", "Steel"],
        &[],
    ),
    (
        "Ice",
        &["Grass", "Ground", "Flying", "Dragon"],
        &["Fire", "Water", "Ice", "Steel"],
        &[],
    ),
    (
        "Fighting",
        &["Normal", "Ice", "Rock", "Dark", "Steel"],
        &["Poison", "Flying", "Psychic", "Bug", "Fairy"],
        &["Ghost"],
    ),
    (
        "Poison",
        &["Grass", "Fairy"],
        &["Poison", "Ground", "Rock", "Ghost"],
        &["Steel"],
    ),
    (
        "Ground",
        &["Fire", "Electric", "Poison", "Rock", "Steel"],
        &["Grass", "Bug"],
        &["Flying"],
    ),
    (
        "Flying",
        &["Grass", "Fighting", "Bug"],
        &["Electric", "Rock", "Steel"],
        &[],
    ),
    (
        "Psychic",
        &["Fighting", "Poison"],
        &["Psychic", "Steel"],
        &["Dark"],
    ),
    (
        "Bug",
        &["Grass", "Psychic", "Dark"],
        &["Fire", "Fighting", "Poison", "Flying", "Ghost", "Steel", "Fairy"],
        &[],
    ),
    (
        "Rock",
        &["Fire", "Ice", "Flying", "Bug"],
        &["Fighting", "Ground", "Steel"],
        &[],
    ),
    ("Ghost", &["Psychic", "Ghost"], &["Dark"], &["Normal"]),
    ("Dragon", &["Dragon"], &["Steel"], &["Fairy"]),
    (
        "Dark",
        &["Psychic", "Ghost"],
        &["Fighting", "Dark", "Fairy"],
        &[],
    ),
    (
        "Steel",
        &["Ice", "Rock", "Fairy"],
        &["Fire", "Water", "Electric", "Steel"],
        &[],
    ),
    (
        "Fairy",
        &["Fighting", "Dragon", "Dark"],
        &["Fire", "Poison", "Steel"],
        &[],
    ),
];

fn single(attacking: &str, defending: &str) -> f64 {
    let Some((_, strong, weak, immune)) = CHART
        .iter()
        .find(|(name, ..)| name.eq_ignore_ascii_case(attacking))
    else {
        return 1.0;
    };

    let hits = |list: &[&str]| list.iter().any(|t| t.eq_ignore_ascii_case(defending));

    if hits(immune) {
        0.0
    } else if hits(strong) {
        2.0
    } else if hits(weak) {
        0.5
    } else {
        1.0
    }
}

/// Multiplier of an attack of type `attacking` against a monster with the
/// given types. Unknown types on either side are neutral.
pub fn effectiveness<S: AsRef<str>>(attacking: &str, defending: &[S]) -> f64 {
    defending
        .iter()
        .map(|t| single(attacking, t.as_ref()))
        .product()
}
