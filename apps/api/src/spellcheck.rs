//! Spell correction behind an injected capability trait.
//!
//! The HTTP layer only sees `SpellCorrector`; the default implementation
//! is a dictionary lookup with optimal-string-alignment distance, so the
//! engine can be swapped (or stubbed in tests) without touching handlers.

/// Synchronous spelling corrector. Carried in `AppState` as
/// `Arc<dyn SpellCorrector>`.
pub trait SpellCorrector: Send + Sync {
    fn correct(&self, text: &str) -> String;
}

/// Common-word dictionary used by the default corrector. Kept small and
/// resume-flavored; unknown words pass through untouched.
const DICTIONARY: &[&str] = &[
    "a", "an", "and", "the", "i", "is", "are", "was", "of", "to", "in", "on", "at", "for", "with",
    "if", "you", "your", "me", "let", "look", "this", "that", "it", "as", "else", "need", "know",
    "please", "forward", "receiving", "response", "anything", "example", "spell", "spelling",
    "checking", "check", "open", "source", "project", "software", "engineer", "aspiring",
    "experience", "education", "skill", "skills", "resume", "developer", "development",
    "description", "company", "university", "team", "work", "working", "writing", "code",
    "building", "design", "data", "professional",
];

/// How far a typo may sit from its dictionary word.
const MAX_DISTANCE: usize = 2;

/// Default corrector: per-word dictionary match within OSA distance
/// `MAX_DISTANCE`. Non-alphabetic runs and dictionary words pass through
/// verbatim; a corrected word keeps the original's leading capital.
pub struct EditDistanceCorrector;

impl SpellCorrector for EditDistanceCorrector {
    fn correct(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word = String::new();

        for c in text.chars() {
            if c.is_alphabetic() {
                word.push(c);
            } else {
                flush_word(&mut out, &mut word);
                out.push(c);
            }
        }
        flush_word(&mut out, &mut word);

        out
    }
}

fn flush_word(out: &mut String, word: &mut String) {
    if !word.is_empty() {
        out.push_str(&correct_word(word));
        word.clear();
    }
}

fn correct_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if DICTIONARY.contains(&lower.as_str()) {
        return word.to_string();
    }

    let mut best: Option<(usize, &str)> = None;
    for candidate in DICTIONARY {
        let distance = osa_distance(&lower, candidate);
        if distance <= MAX_DISTANCE && best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, candidate));
        }
    }

    match best {
        Some((_, candidate)) => match_case(word, candidate),
        None => word.to_string(),
    }
}

/// Re-applies a leading capital from the original word onto the correction.
fn match_case(original: &str, corrected: &str) -> String {
    if original.chars().next().is_some_and(|c| c.is_uppercase()) {
        let mut chars = corrected.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        corrected.to_string()
    }
}

/// Optimal string alignment distance: Levenshtein plus adjacent
/// transpositions counted as a single edit.
fn osa_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }

    d[n][m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct(text: &str) -> String {
        EditDistanceCorrector.correct(text)
    }

    #[test]
    fn corrects_common_typos() {
        assert_eq!(
            correct("thiss is an exmple of spell chcking."),
            "this is an example of spell checking."
        );
        assert_eq!(
            correct("I look forwrd to receving your response."),
            "I look forward to receiving your response."
        );
        assert_eq!(
            correct("plese let me knw if you need anythng else."),
            "please let me know if you need anything else."
        );
    }

    #[test]
    fn handles_transposed_letters() {
        assert_eq!(
            correct("an apsirng softwar engneer,"),
            "an aspiring software engineer,"
        );
        assert_eq!(correct("this is oppen-suorce project."), "this is open-source project.");
    }

    #[test]
    fn leaves_unknown_and_non_alphabetic_input_alone() {
        assert_eq!(correct("jldjldkwedwedweadncew"), "jldjldkwedwedweadncew");
        assert_eq!(correct("123"), "123");
        assert_eq!(correct(""), "");
    }

    #[test]
    fn osa_counts_a_transposition_as_one_edit() {
        assert_eq!(osa_distance("suorce", "source"), 1);
        assert_eq!(osa_distance("open", "open"), 0);
        assert_eq!(osa_distance("knw", "know"), 1);
    }
}
