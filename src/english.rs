//! English suffix-stripping pipeline.
//!
//! Lowercases the token, short-circuits stop words, very short words and a
//! closed exception list, then runs a fixed sequence of suffix steps gated
//! by the R1/R2 regions: possessive apostrophes, the plural and `ed`/`ing`
//! families, terminal `y -> i`, two waves of derivational suffixes, the
//! R2-only suffix wave, and a final `e`/`ll` cleanup.

use crate::rule::{apply_step, SuffixRule};
use crate::word::{Word, R1, R2};
use ahash::{AHashMap as HashMap, AHashSet as HashSet};

/// Vowels of the pipeline. A marked `Y` counts as a consonant.
const VOWELS: &str = "aeiou";

/// Letters whose doubling at the end of a word is undone after an
/// `ed`/`ing`-family removal.
const DOUBLED: &str = "bdfgmnprt";

/// Letters that may precede a bare `li` for it to be stripped.
const LI_ENDINGS: &str = "cdeghkmnrt";

pub(crate) const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she",
    "should", "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Literal word -> stem overrides, looked up before any step runs. Includes
/// irregular short forms and words whose stem is themselves.
pub(crate) const EXCEPTIONS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
    ("sky", "sky"),
    ("news", "news"),
    ("howe", "howe"),
    ("atlas", "atlas"),
    ("cosmos", "cosmos"),
    ("bias", "bias"),
    ("andes", "andes"),
    ("inning", "inning"),
    ("innings", "inning"),
    ("outing", "outing"),
    ("outings", "outing"),
    ("canning", "canning"),
    ("cannings", "canning"),
    ("herring", "herring"),
    ("herrings", "herring"),
    ("earring", "earring"),
    ("earrings", "earring"),
    ("proceed", "proceed"),
    ("proceeds", "proceed"),
    ("proceeded", "proceed"),
    ("proceeding", "proceed"),
    ("exceed", "exceed"),
    ("exceeds", "exceed"),
    ("exceeded", "exceed"),
    ("exceeding", "exceed"),
    ("succeed", "succeed"),
    ("succeeds", "succeed"),
    ("succeeded", "succeed"),
    ("succeeding", "succeed"),
];

/// Possessive apostrophe family, longest first.
const STEP_0: &[SuffixRule] = &[
    SuffixRule::delete("'s'"),
    SuffixRule::delete("'s"),
    SuffixRule::delete("'"),
];

const STEP_1A_SUFFIXES: &[&str] = &["sses", "ied", "ies", "us", "ss", "s"];

const STEP_1B_SUFFIXES: &[&str] = &["eedly", "ingly", "edly", "eed", "ing", "ed"];

const STEP_2: &[SuffixRule] = &[
    SuffixRule::replace_in("ization", "ize", R1),
    SuffixRule::replace_in("ational", "ate", R1).r2_placeholder(),
    SuffixRule::shorten_in("fulness", 4, R1),
    SuffixRule::replace_in("ousness", "ous", R1),
    SuffixRule::replace_in("iveness", "ive", R1).r2_placeholder(),
    SuffixRule::shorten_in("tional", 2, R1),
    SuffixRule::replace_in("biliti", "ble", R1),
    SuffixRule::shorten_in("lessli", 2, R1),
    SuffixRule::shorten_in("entli", 2, R1),
    SuffixRule::replace_in("ation", "ate", R1).r2_placeholder(),
    SuffixRule::replace_in("alism", "al", R1),
    SuffixRule::replace_in("aliti", "al", R1),
    SuffixRule::replace_in("ousli", "ous", R1),
    SuffixRule::replace_in("iviti", "ive", R1).r2_placeholder(),
    SuffixRule::shorten_in("fulli", 2, R1),
    SuffixRule::rewrite_in("enci", 1, "e", R1),
    SuffixRule::rewrite_in("anci", 1, "e", R1),
    SuffixRule::rewrite_in("abli", 1, "e", R1),
    SuffixRule::replace_in("izer", "ize", R1),
    SuffixRule::replace_in("ator", "ate", R1).r2_placeholder(),
    SuffixRule::replace_in("alli", "al", R1),
    SuffixRule::replace_in("bli", "ble", R1),
    SuffixRule::shorten_in("ogi", 1, R1).preceded_by("l"),
    SuffixRule::shorten_in("li", 2, R1).preceded_by(LI_ENDINGS),
];

const STEP_3: &[SuffixRule] = &[
    SuffixRule::replace_in("ational", "ate", R1),
    SuffixRule::shorten_in("tional", 2, R1),
    SuffixRule::shorten_in("alize", 3, R1),
    SuffixRule::replace_in("icate", "ic", R1),
    SuffixRule::replace_in("iciti", "ic", R1),
    SuffixRule::delete_in("ative", R2),
    SuffixRule::replace_in("ical", "ic", R1),
    SuffixRule::delete_in("ness", R1),
    SuffixRule::delete_in("ful", R1),
];

const STEP_4: &[SuffixRule] = &[
    SuffixRule::delete_in("ement", R2),
    SuffixRule::delete_in("ance", R2),
    SuffixRule::delete_in("ence", R2),
    SuffixRule::delete_in("able", R2),
    SuffixRule::delete_in("ible", R2),
    SuffixRule::delete_in("ment", R2),
    SuffixRule::delete_in("ant", R2),
    SuffixRule::delete_in("ent", R2),
    SuffixRule::delete_in("ism", R2),
    SuffixRule::delete_in("ate", R2),
    SuffixRule::delete_in("iti", R2),
    SuffixRule::delete_in("ous", R2),
    SuffixRule::delete_in("ive", R2),
    SuffixRule::delete_in("ize", R2),
    SuffixRule::delete_in("ion", R2).preceded_by("st"),
    SuffixRule::delete_in("al", R2),
    SuffixRule::delete_in("er", R2),
    SuffixRule::delete_in("ic", R2),
];

/// English stemming engine.
///
/// Construction builds the lookup tables once; `stem` never mutates shared
/// state, so one instance can serve any number of threads.
pub struct EnglishStemmer {
    stop_words: HashSet<&'static str>,
    exceptions: HashMap<&'static str, &'static str>,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            exceptions: EXCEPTIONS.iter().copied().collect(),
        }
    }

    /// True for the closed class of words excluded from stemming.
    /// Case-insensitive.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    /// Reduces one token to its stem. Total over any text input; characters
    /// outside the expected alphabet never match a suffix and pass through.
    pub fn stem(&self, input: &str) -> String {
        let word = input.to_lowercase();
        if self.stop_words.contains(word.as_str()) || word.chars().count() < 3 {
            return word;
        }
        if let Some(&stem) = self.exceptions.get(word.as_str()) {
            return stem.to_string();
        }

        let mut word = Word::new(&normalize_apostrophes(&word));
        mark_consonant_y(&mut word);
        mark_regions(&mut word);

        apply_step(&mut word, STEP_0);
        step_1a(&mut word);
        step_1b(&mut word);
        step_1c(&mut word);
        apply_step(&mut word, STEP_2);
        apply_step(&mut word, STEP_3);
        apply_step(&mut word, STEP_4);
        step_5(&mut word);

        word.into_string().replace('Y', "y")
    }
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Folds the curly apostrophe variants to ASCII and strips one leading
/// apostrophe.
fn normalize_apostrophes(word: &str) -> String {
    let normalized: String = word
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{201B}' => '\'',
            other => other,
        })
        .collect();
    match normalized.strip_prefix('\'') {
        Some(rest) => rest.to_string(),
        None => normalized,
    }
}

/// Uppercases a leading `y` and any `y` following a vowel, so the region
/// and vowel tests treat those positions as consonants. The marks are
/// folded back after the pipeline.
fn mark_consonant_y(word: &mut Word) {
    for i in 0..word.len() {
        if word.chars()[i] == 'y' && (i == 0 || is_vowel(word.chars()[i - 1])) {
            word.set_char(i, 'Y');
        }
    }
}

/// Computes R1 and R2 by the consonant-after-vowel scan. Words opening
/// with `gener`, `commun` or `arsen` get R1 pinned right after the prefix,
/// with R2 scanned from there.
pub(crate) fn mark_regions(word: &mut Word) {
    let r1 = if word.starts_with("gener") || word.starts_with("arsen") {
        5
    } else if word.starts_with("commun") {
        6
    } else {
        region_after(word.chars(), 1)
    };
    let r2 = region_after(word.chars(), r1);
    word.set_region_start(R1, r1);
    word.set_region_start(R2, r2);
}

/// Offset just past the first position at or after `from` holding a
/// consonant preceded by a vowel, or the word length when there is none.
fn region_after(chars: &[char], from: usize) -> usize {
    let mut i = from.max(1);
    while i < chars.len() {
        if !is_vowel(chars[i]) && is_vowel(chars[i - 1]) {
            return i + 1;
        }
        i += 1;
    }
    chars.len()
}

/// Plural and third-person family: `sses -> ss`, `ied`/`ies` -> `i` or
/// `ie` by stem length, bare `s` only after an earlier vowel; `us`/`ss`
/// block the bare-`s` rule.
fn step_1a(word: &mut Word) {
    for &suffix in STEP_1A_SUFFIXES {
        if !word.ends_with(suffix) {
            continue;
        }
        match suffix {
            "sses" => word.rewrite_tail(2, ""),
            "ied" | "ies" => {
                if word.len() - 3 > 1 {
                    word.rewrite_tail(2, "");
                } else {
                    word.rewrite_tail(1, "");
                }
            }
            "s" => {
                // The vowel scan skips the letter right before the `s`.
                let has_vowel = word.len() > 1
                    && word.chars()[..word.len() - 2].iter().any(|&c| is_vowel(c));
                if has_vowel {
                    word.rewrite_tail(1, "");
                }
            }
            _ => {}
        }
        return;
    }
}

/// The `ed`/`ing` family. `eed`/`eedly` become `ee` inside R1; the rest
/// need an earlier vowel and trigger the post-removal corrections:
/// restoring an `e` after `at`/`bl`/`iz`, undoing a doubled consonant, or
/// restoring an `e` after a short root.
fn step_1b(word: &mut Word) {
    for &suffix in STEP_1B_SUFFIXES {
        if !word.ends_with(suffix) {
            continue;
        }
        let n = suffix.len();
        if suffix == "eed" || suffix == "eedly" {
            if word.region_ends_with(R1, suffix) {
                word.rewrite_tail(n, "ee");
            }
        } else if word.chars()[..word.len() - n].iter().any(|&c| is_vowel(c)) {
            word.rewrite_tail(n, "");
            if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
                let r2_len = word.region_len(R2);
                word.append('e');
                if !(word.len() > 5 || word.region_len(R1) >= 3) {
                    // R2 stays at its old length for short words.
                    word.set_region_len(R2, r2_len);
                }
            } else if ends_in_double(word) {
                word.rewrite_tail(1, "");
            } else if needs_final_e(word) {
                word.append('e');
                word.clear_region(R1);
                word.clear_region(R2);
            }
        }
        return;
    }
}

/// Terminal `y` (marked or not) after a consonant becomes `i`.
fn step_1c(word: &mut Word) {
    let chars = word.chars();
    let n = chars.len();
    if n > 2 && (chars[n - 1] == 'y' || chars[n - 1] == 'Y') && !is_vowel(chars[n - 2]) {
        word.rewrite_tail(1, "i");
    }
}

/// Final cleanup: a doubled `l` in R2 loses one letter, a trailing `e` in
/// R2 goes, and a trailing `e` in R1 goes unless the root before it is a
/// short syllable.
fn step_5(word: &mut Word) {
    if word.region_ends_with(R2, "l") && word.from_end(1) == Some('l') {
        word.rewrite_tail(1, "");
    } else if word.region_ends_with(R2, "e") {
        word.rewrite_tail(1, "");
    } else if word.region_ends_with(R1, "e") && final_e_removable(word) {
        word.rewrite_tail(1, "");
    }
}

fn ends_in_double(word: &Word) -> bool {
    let chars = word.chars();
    chars.len() >= 2
        && chars[chars.len() - 1] == chars[chars.len() - 2]
        && DOUBLED.contains(chars[chars.len() - 1])
}

/// The short-root test: with R1 empty, the word ends consonant (not
/// `w`/`x`/`Y`) after vowel after consonant, or is exactly vowel+consonant.
fn needs_final_e(word: &Word) -> bool {
    if word.region_len(R1) != 0 {
        return false;
    }
    let chars = word.chars();
    match chars.len() {
        2 => is_vowel(chars[0]) && !is_vowel(chars[1]),
        n if n >= 3 => {
            let last = chars[n - 1];
            !is_vowel(last)
                && !"wxY".contains(last)
                && is_vowel(chars[n - 2])
                && !is_vowel(chars[n - 3])
        }
        _ => false,
    }
}

/// The trailing `e` in R1 is removable unless preceded by a short
/// syllable: vowel or `w`/`x`/`Y` at -2, consonant at -3, or vowel at -4.
fn final_e_removable(word: &Word) -> bool {
    let chars = word.chars();
    let n = chars.len();
    n >= 4
        && (is_vowel(chars[n - 2])
            || "wxY".contains(chars[n - 2])
            || !is_vowel(chars[n - 3])
            || is_vowel(chars[n - 4]))
}
