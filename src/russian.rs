//! Russian suffix-stripping pipeline.
//!
//! Lowercases the token, short-circuits stop words, then transliterates
//! into the working alphabet so every letter is one ASCII symbol. Four
//! passes run over the RV/R2 regions: one inflectional suffix (perfective
//! gerund, reflexive, adjectival, verb or noun class — whichever matches
//! first), a trailing `и`, a derivational `ост`/`ость` in R2, and the
//! residue cleanup (doubled `н`, superlatives, soft sign). The result is
//! transliterated back.

use crate::rule::strip_region_suffix;
use crate::translit::{cyrillic_to_roman, roman_to_cyrillic};
use crate::word::{Word, R2, RV};
use ahash::AHashSet as HashSet;

/// Vowels of the working alphabet (а, е/ё, и, о, у, ы, э, ю, я).
const VOWELS: &str = "aeiouyAUE";

/// Letters that license a guarded suffix when found right before it
/// (working-alphabet а and я).
const VOWEL_MARKERS: &str = "aA";

pub(crate) const STOP_WORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет",
    "ж", "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним",
    "здесь", "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были",
    "куда", "зачем", "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой",
    "хоть", "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них",
    "какая", "много", "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой",
    "перед", "иногда", "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда",
    "конечно", "всю", "между",
];

/// Perfective gerund endings. The bare `в` family only fires after а/я.
const PERFECTIVE_GERUND: &[&str] = &[
    "ivwis'", "yvwis'", "vwis'", "ivwi", "yvwi", "vwi", "iv", "yv", "v",
];

const PERFECTIVE_GERUND_GUARDED: &[&str] = &["v", "vwi", "vwis'"];

const REFLEXIVE: &[&str] = &["sA", "s'"];

const ADJECTIVAL: &[&str] = &[
    "uUWUU", "uUWAA", "uUWimi", "uUWymi", "uUWego", "uUWogo", "uUWemu", "uUWomu", "uUWih",
    "uUWyh", "uUWuU", "uUWaia", "uUWoU", "uUWeU", "UWUU", "UWAA", "uUWee", "uUWie", "uUWye",
    "uUWoe", "uUWej", "uUWij", "uUWyj", "uUWoj", "uUWem", "uUWim", "uUWym", "uUWom", "UWimi",
    "UWymi", "UWego", "UWogo", "UWemu", "UWomu", "UWih", "UWyh", "UWuU", "UWaA", "UWoU",
    "UWeU", "UWee", "UWie", "UWye", "UWoe", "UWej", "UWij", "UWyj", "UWoj", "UWem", "UWim",
    "UWym", "UWom", "WUU", "WAA", "ivwUU", "ivwAA", "yvwUU", "yvwAA", "Wimi", "Wymi", "Wego",
    "Wogo", "Wemu", "Womu", "Wih", "Wyh", "WuU", "WaA", "WoU", "WeU", "ivwimi", "ivwymi",
    "ivwego", "ivwogo", "ivwemu", "ivwomu", "ivwih", "ivwyh", "ivwuU", "ivwaA", "ivwoU",
    "ivweU", "yvwimi", "yvwymi", "yvwego", "yvwogo", "yvwemu", "yvwomu", "yvwih", "yvwyh",
    "yvwuU", "yvwaA", "yvwoU", "yvweU", "vwUU", "vwAA", "Wee", "Wie", "Wye", "Woe", "Wej",
    "Wij", "Wyj", "Woj", "Wem", "Wim", "Wym", "Wom", "ivwee", "ivwie", "ivwye", "ivwoe",
    "ivwej", "ivwij", "ivwyj", "ivwoj", "ivwem", "ivwim", "ivwym", "ivwom", "yvwee", "yvwie",
    "yvwye", "yvwoe", "yvwej", "yvwij", "yvwyj", "yvwoj", "yvwem", "yvwim", "yvwym", "yvwom",
    "vwimi", "vwymi", "vwego", "vwogo", "vwemu", "vwomu", "vwih", "vwyh", "vwuU", "vwaA",
    "vwoU", "vweU", "emUU", "emAA", "nnUU", "nnAA", "vwee", "vwie", "vwye", "vwoe", "vwej",
    "vwij", "vwyj", "vwoj", "vwem", "vwim", "vwym", "vwom", "emimi", "emymi", "emego",
    "emogo", "ememu", "emomu", "emih", "emyh", "emuU", "emaA", "emoU", "emeU", "nnimi",
    "nnymi", "nnego", "nnogo", "nnemu", "nnomu", "nnih", "nnyh", "nnuU", "nnaA", "nnoU",
    "nneU", "emee", "emie", "emye", "emoe", "emej", "emij", "emyj", "emoj", "emem", "emim",
    "emym", "emom", "nnee", "nnie", "nnye", "nnoe", "nnej", "nnij", "nnyj", "nnoj", "nnem",
    "nnim", "nnym", "nnom", "UU", "AA", "imi", "ymi", "ego", "ogo", "emu", "omu", "ih", "yh",
    "uU", "aA", "oU", "eU", "ee", "ie", "ye", "oe", "ej", "ij", "yj", "oj", "em", "im", "ym",
    "om",
];

/// The participle forms inside the adjectival table; they only fire after
/// а/я. The forms already carrying their own vowel marker (`ивш`, `ывш`,
/// `ующ`) are absent.
const ADJECTIVAL_GUARDED: &[&str] = &[
    "UWUU", "UWAA", "UWuU", "UWaA", "UWoU", "UWeU", "UWimi", "UWymi", "UWego", "UWogo",
    "UWemu", "UWomu", "UWih", "UWyh", "WUU", "WAA", "UWee", "UWie", "UWye", "UWoe", "UWej",
    "UWij", "UWyj", "UWoj", "UWem", "UWim", "UWym", "UWom", "vwUU", "vwAA", "WuU", "WaA",
    "WoU", "WeU", "emUU", "emAA", "nnUU", "nnAA", "Wimi", "Wymi", "Wego", "Wogo", "Wemu",
    "Womu", "Wih", "Wyh", "vwuU", "vwaA", "vwoU", "vweU", "Wee", "Wie", "Wye", "Woe", "Wej",
    "Wij", "Wyj", "Woj", "Wem", "Wim", "Wym", "Wom", "vwimi", "vwymi", "vwego", "vwogo",
    "vwemu", "vwomu", "vwih", "vwyh", "emuU", "emaA", "emoU", "emeU", "nnuU", "nnaA", "nnoU",
    "nneU", "vwee", "vwie", "vwye", "vwoe", "vwej", "vwij", "vwyj", "vwoj", "vwem", "vwim",
    "vwym", "vwom", "emimi", "emymi", "emego", "emogo", "ememu", "emomu", "emih", "emyh",
    "nnimi", "nnymi", "nnego", "nnogo", "nnemu", "nnomu", "nnih", "nnyh", "emee", "emie",
    "emye", "emoe", "emej", "emij", "emyj", "emoj", "emem", "emim", "emym", "emom", "nnee",
    "nnie", "nnye", "nnoe", "nnej", "nnij", "nnyj", "nnoj", "nnem", "nnim", "nnym", "nnom",
];

const VERB: &[&str] = &[
    "ew'", "ejte", "ujte", "uUt", "iw'", "ete", "jte", "Ut", "nno", "ila", "yla", "ena",
    "ite", "ili", "yli", "ilo", "ylo", "eno", "At", "uet", "eny", "it'", "yt'", "uU", "la",
    "na", "li", "em", "lo", "no", "et", "ny", "t'", "ej", "uj", "il", "yl", "im", "ym", "en",
    "it", "yt", "U", "j", "l", "n",
];

const VERB_GUARDED: &[&str] = &[
    "la", "na", "ete", "jte", "li", "j", "l", "em", "n", "lo", "no", "et", "Ut", "ny", "t'",
    "ew'", "nno",
];

const NOUN: &[&str] = &[
    "iAmi", "iAh", "Ami", "iAm", "Ah", "ami", "iej", "Am", "iem", "ah", "iU", "'U", "iA",
    "'A", "ev", "ov", "ie", "'e", "ei", "ii", "ej", "oj", "ij", "em", "am", "om", "U", "A",
    "a", "e", "i", "j", "o", "u", "y", "'",
];

const SUPERLATIVE: &[&str] = &["ejwe", "ejw"];

const DERIVATIONAL: &[&str] = &["ost'", "ost"];

/// Russian stemming engine.
///
/// Construction builds the lookup tables once; `stem` never mutates shared
/// state, so one instance can serve any number of threads.
pub struct RussianStemmer {
    stop_words: HashSet<&'static str>,
    guarded_perfective: HashSet<&'static str>,
    guarded_adjectival: HashSet<&'static str>,
    guarded_verb: HashSet<&'static str>,
}

impl RussianStemmer {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            guarded_perfective: PERFECTIVE_GERUND_GUARDED.iter().copied().collect(),
            guarded_adjectival: ADJECTIVAL_GUARDED.iter().copied().collect(),
            guarded_verb: VERB_GUARDED.iter().copied().collect(),
        }
    }

    /// True for the closed class of words excluded from stemming.
    /// Case-insensitive.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    /// Reduces one token to its stem. Total over any text input; characters
    /// outside the alphabet never match a suffix and pass through.
    pub fn stem(&self, input: &str) -> String {
        let word = input.to_lowercase();
        if self.stop_words.contains(word.as_str()) {
            return word;
        }

        let mut word = Word::new(&cyrillic_to_roman(&word));
        mark_regions(&mut word);

        self.strip_inflection(&mut word);
        strip_trailing_i(&mut word);
        strip_derivational(&mut word);
        tidy_residue(&mut word);

        roman_to_cyrillic(&word.into_string())
    }

    /// Removes at most one inflectional suffix: the classes are tried in
    /// priority order against RV and the first class that strips ends the
    /// pass.
    fn strip_inflection(&self, word: &mut Word) {
        if strip_region_suffix(
            word,
            RV,
            PERFECTIVE_GERUND,
            Some(&self.guarded_perfective),
            VOWEL_MARKERS,
        ) {
            return;
        }
        if strip_region_suffix(word, RV, REFLEXIVE, None, VOWEL_MARKERS) {
            return;
        }
        if strip_region_suffix(
            word,
            RV,
            ADJECTIVAL,
            Some(&self.guarded_adjectival),
            VOWEL_MARKERS,
        ) {
            return;
        }
        if strip_region_suffix(word, RV, VERB, Some(&self.guarded_verb), VOWEL_MARKERS) {
            return;
        }
        strip_region_suffix(word, RV, NOUN, None, VOWEL_MARKERS);
    }
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Finds RV (everything after the first vowel) and R2. The transition scan
/// is anchored at RV — vowel/consonant pairs before the first vowel do not
/// count — and never treats the final character position as a transition.
pub(crate) fn mark_regions(word: &mut Word) {
    let chars = word.chars();
    let len = chars.len();
    let rv = chars
        .iter()
        .position(|&c| is_vowel(c))
        .map_or(len, |i| i + 1);

    let mut r1 = len;
    let mut r2 = len;
    let mut i = rv;
    while i + 1 < len {
        if !is_vowel(chars[i]) && is_vowel(chars[i - 1]) {
            if r1 == len {
                r1 = i + 1;
            } else if i > r1 {
                r2 = i + 1;
                break;
            }
        }
        i += 1;
    }

    word.set_region_start(RV, rv);
    word.set_region_start(R2, r2);
}

/// Drops a trailing `и` of RV.
fn strip_trailing_i(word: &mut Word) {
    if word.region_ends_with(RV, "i") {
        word.rewrite_tail(1, "");
    }
}

/// Drops a derivational `ость`/`ост` ending when R2 carries it.
fn strip_derivational(word: &mut Word) {
    for &suffix in DERIVATIONAL {
        if word.region_ends_with(R2, suffix) {
            word.rewrite_tail(suffix.len(), "");
            return;
        }
    }
}

/// Residue cleanup: a doubled `н` collapses; otherwise a superlative
/// ending is stripped (collapsing any doubled `н` it uncovers), and a
/// single trailing soft sign goes only when no superlative was stripped.
fn tidy_residue(word: &mut Word) {
    if word.ends_with("nn") {
        word.rewrite_tail(1, "");
        return;
    }

    let mut superlative_stripped = false;
    for &suffix in SUPERLATIVE {
        if word.ends_with(suffix) {
            word.rewrite_tail(suffix.len(), "");
            superlative_stripped = true;
            break;
        }
    }

    if word.ends_with("nn") {
        word.rewrite_tail(1, "");
    }
    if !superlative_stripped && word.ends_with("'") {
        word.rewrite_tail(1, "");
    }
}
