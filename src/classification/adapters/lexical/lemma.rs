//! Dictionary-and-suffix lemmatisation for English.

/// Irregular forms and clitics mapped to their lemma.
const IRREGULAR: &[(&str, &str)] = &[
    ("n't", "not"),
    ("'s", "be"),
    ("'re", "be"),
    ("'m", "be"),
    ("'ll", "will"),
    ("'ve", "have"),
    ("'d", "would"),
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("ca", "can"),
    ("wo", "will"),
    ("sha", "shall"),
    ("needs", "need"),
    ("needed", "need"),
    ("needing", "need"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("made", "make"),
    ("sent", "send"),
    ("got", "get"),
    ("gotten", "get"),
    ("paid", "pay"),
    ("bought", "buy"),
    ("wrote", "write"),
    ("written", "write"),
    ("children", "child"),
    ("people", "person"),
];

/// Words ending in `s` that are already in base form.
const INVARIANT: &[&str] = &[
    "always", "perhaps", "sometimes", "unless", "less", "yes", "this", "thus", "its", "his",
    "hers", "ours", "yours", "theirs", "us", "as", "plus", "news", "series", "status", "bus",
    "focus", "bonus", "campus", "virus", "alias", "canvas", "gas", "whereas", "afterwards",
    "towards", "besides", "nevertheless", "regardless", "business",
];

/// Returns the lemma of a lowercased token.
pub(super) fn lemmatize(token: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == token) {
        return (*lemma).to_owned();
    }
    if INVARIANT.contains(&token) || token.chars().count() <= 3 {
        return token.to_owned();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_owned();
    }
    token
        .strip_suffix('s')
        .filter(|stem| stem.chars().all(char::is_alphabetic))
        .map_or_else(|| token.to_owned(), str::to_owned)
}
