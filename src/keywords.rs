/// Tokens must be longer than this to count towards an overlap.
const MIN_KEYWORD_LENGTH: usize = 3;

/// This many overlapping keywords make a perfect match.
const FULL_MATCH_COUNT: f64 = 10.0;

/// Lowercases `text` and splits it on every run of characters outside
/// `[A-Za-z0-9_]`, dropping empty tokens.
///
/// ```
/// use actory::keywords::tokenize;
/// assert_eq!(tokenize("Lead, Drama-Actor"), vec!["lead", "drama", "actor"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scores how well an audition description covers a role description,
/// from 0 to 1.
///
/// Every role token longer than three characters that also appears in the
/// audition counts once per occurrence in the role description; ten such
/// tokens make a perfect score.
///
/// ```
/// use actory::keywords::keyword_overlap;
/// assert_eq!(keyword_overlap("seeking confident dramatic actor", "confident dramatic monologue"), 0.2);
/// ```
pub fn keyword_overlap(role_description: &str, audition_description: &str) -> f64 {
    let role_tokens = tokenize(role_description);
    let audition_tokens = tokenize(audition_description);

    let overlap = role_tokens
        .iter()
        .filter(|token| token.len() > MIN_KEYWORD_LENGTH && audition_tokens.contains(token))
        .count();

    (overlap as f64 / FULL_MATCH_COUNT).min(1.0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{keyword_overlap, tokenize};

    #[test]
    fn empty_descriptions_score_zero() {
        assert_eq!(keyword_overlap("", ""), 0.0);
        assert_eq!(keyword_overlap("confident dramatic", ""), 0.0);
        assert_eq!(keyword_overlap("", "confident dramatic"), 0.0);
    }

    #[test]
    fn short_tokens_are_ignored() {
        assert_eq!(keyword_overlap("the cat sat", "the cat sat"), 0.0);
        assert_eq!(keyword_overlap("four", "four"), 0.1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(keyword_overlap("DRAMATIC Lead", "dramatic"), 0.1);
    }

    #[test]
    fn repeated_role_tokens_each_count() {
        assert_eq!(keyword_overlap("drama drama drama", "drama"), 0.3);
    }

    #[test]
    fn punctuation_and_non_ascii_split_tokens() {
        assert_eq!(tokenize("rock'n'roll, café!"), vec!["rock", "n", "roll", "caf"]);
        assert_eq!(tokenize("snake_case stays"), vec!["snake_case", "stays"]);
    }

    #[test]
    fn twenty_matches_cap_at_one() {
        let role = vec!["singer"; 20].join(" ");

        assert_eq!(keyword_overlap(&role, "singer"), 1.0);
    }

    proptest! {
        #[test]
        fn overlap_stays_within_bounds(role in ".*", audition in ".*") {
            let score = keyword_overlap(&role, &audition);

            prop_assert!((0.0..=1.0).contains(&score), "{} lies within [0, 1]", score);
        }

        #[test]
        fn tokens_are_non_empty_lowercase_words(text in ".*") {
            for token in tokenize(&text) {
                prop_assert!(!token.is_empty());
                prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'), "{:?} is a lowercase word", token);
            }
        }
    }
}
