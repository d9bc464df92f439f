//! Word and punctuation tokenisation.

/// Clitics split from the end of a word, checked in order.
const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'m", "'ll", "'ve", "'d"];

/// Splits text into word and punctuation tokens.
///
/// Words keep inner apostrophes, hyphens, slashes and colons so that
/// `10:30`, `5/12` and `follow-up` stay whole; clitics such as `n't` become
/// tokens of their own.
pub(super) fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for raw in text.chars() {
        let ch = if raw == '\u{2019}' { '\'' } else { raw };
        if is_word_char(ch) {
            word.push(ch);
            continue;
        }
        flush_word(&mut word, &mut tokens);
        if !ch.is_whitespace() {
            tokens.push(ch.to_string());
        }
    }
    flush_word(&mut word, &mut tokens);
    tokens
}

/// Returns `true` for tokens made only of punctuation.
pub(super) fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '\'' | '-' | '/' | ':')
}

fn flush_word(word: &mut String, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }
    let raw = std::mem::take(word);
    let core = raw.trim_matches(|ch: char| !ch.is_alphanumeric());
    if core.is_empty() {
        tokens.extend(raw.chars().map(String::from));
        return;
    }

    let leading = raw
        .chars()
        .take_while(|ch| !ch.is_alphanumeric())
        .map(String::from);
    tokens.extend(leading);

    tokens.extend(split_clitic(core));

    let mut trailing: Vec<String> = raw
        .chars()
        .rev()
        .take_while(|ch| !ch.is_alphanumeric())
        .map(String::from)
        .collect();
    trailing.reverse();
    tokens.extend(trailing);
}

fn split_clitic(word: &str) -> Vec<String> {
    CLITICS
        .iter()
        .find_map(|clitic| {
            word.strip_suffix(*clitic)
                .filter(|stem| stem.chars().any(char::is_alphanumeric))
                .map(|stem| vec![stem.to_owned(), (*clitic).to_owned()])
        })
        .unwrap_or_else(|| vec![word.to_owned()])
}
