// Noun lemmatization: plural to singular.
//
// Ordered suffix rules in the WordNet style, minus the dictionary lookup a
// real WordNet carries. Rules that need the lookup to avoid damage (the
// ves->f family) are left out; the stemmer downstream absorbs most of what
// this misses.

/// Irregular plurals worth carrying explicitly.
const IRREGULAR: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("indices", "index"),
    ("analyses", "analysis"),
    ("criteria", "criterion"),
];

/// Words ending in -ies or -s that are already singular (or identical in
/// both numbers) and must not be clipped.
const UNCHANGED: &[&str] = &["series", "species", "news", "proceeds", "headquarters"];

/// Lemmatize a lowercase token as a noun.
pub fn lemmatize_noun(token: &str) -> String {
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == token) {
        return (*singular).to_string();
    }
    if UNCHANGED.contains(&token) || token.len() < 4 {
        return token.to_string();
    }

    if token.ends_with("ies") && token.len() > 4 {
        return format!("{}y", &token[..token.len() - 3]);
    }
    if token.ends_with("sses")
        || token.ends_with("xes")
        || token.ends_with("zes")
        || token.ends_with("ches")
        || token.ends_with("shes")
    {
        return token[..token.len() - 2].to_string();
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }
    if token.ends_with('s') {
        return token[..token.len() - 1].to_string();
    }

    token.to_string()
}
