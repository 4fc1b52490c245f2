use crate::word::{Word, R2};
use ahash::AHashSet as HashSet;

/// One candidate suffix rewrite within a step.
///
/// The action is encoded as a drop count plus an appended literal: deleting
/// the suffix drops its full length and appends nothing, replacing it
/// appends a literal, and the shortened forms (such as `tional` -> `tion`)
/// drop less than the full pattern. Patterns and literals are ASCII, so
/// byte lengths double as character counts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SuffixRule {
    pub(crate) pattern: &'static str,
    region: Option<usize>,
    preceded_by: Option<&'static str>,
    drop: usize,
    append: &'static str,
    r2_placeholder: bool,
}

impl SuffixRule {
    /// Deletes the matched suffix unconditionally.
    pub(crate) const fn delete(pattern: &'static str) -> Self {
        Self {
            pattern,
            region: None,
            preceded_by: None,
            drop: pattern.len(),
            append: "",
            r2_placeholder: false,
        }
    }

    /// Deletes the matched suffix when the region also ends with it.
    pub(crate) const fn delete_in(pattern: &'static str, region: usize) -> Self {
        let mut rule = Self::delete(pattern);
        rule.region = Some(region);
        rule
    }

    /// Drops only the last `drop` characters of the matched suffix.
    pub(crate) const fn shorten_in(pattern: &'static str, drop: usize, region: usize) -> Self {
        let mut rule = Self::delete_in(pattern, region);
        rule.drop = drop;
        rule
    }

    /// Replaces the matched suffix with a literal.
    pub(crate) const fn replace_in(
        pattern: &'static str,
        with: &'static str,
        region: usize,
    ) -> Self {
        let mut rule = Self::delete_in(pattern, region);
        rule.append = with;
        rule
    }

    /// Drops the last `drop` characters and appends a literal.
    pub(crate) const fn rewrite_in(
        pattern: &'static str,
        drop: usize,
        with: &'static str,
        region: usize,
    ) -> Self {
        let mut rule = Self::shorten_in(pattern, drop, region);
        rule.append = with;
        rule
    }

    /// Requires the character just before the suffix to be one of `letters`.
    pub(crate) const fn preceded_by(mut self, letters: &'static str) -> Self {
        self.preceded_by = Some(letters);
        self
    }

    /// An R2 too short to cover the removed suffix keeps the final
    /// character of the replacement instead of being cleared. Words with
    /// very short roots rely on this for the final-`e` cleanup to see them.
    pub(crate) const fn r2_placeholder(mut self) -> Self {
        self.r2_placeholder = true;
        self
    }
}

/// Applies one step's ordered rule list to the word.
///
/// The first rule whose pattern matches the word's tail is selected; its
/// region requirement and guard then decide whether it fires. When they do
/// not, the whole step is a no-op — later rules are not tried. Returns
/// true when a rule fired.
pub(crate) fn apply_step(word: &mut Word, rules: &[SuffixRule]) -> bool {
    for rule in rules {
        if !word.ends_with(rule.pattern) {
            continue;
        }
        if let Some(region) = rule.region {
            if !word.region_ends_with(region, rule.pattern) {
                return false;
            }
        }
        if let Some(letters) = rule.preceded_by {
            let before = word.from_end(rule.pattern.len());
            if !before.map_or(false, |c| letters.contains(c)) {
                return false;
            }
        }
        let r2_short = word.region_len(R2) < rule.drop;
        word.rewrite_tail(rule.drop, rule.append);
        if rule.r2_placeholder && r2_short {
            word.set_region_len(R2, 1);
        }
        return true;
    }
    false
}

/// Strips the first suffix in `suffixes` that matches the tail of the given
/// region.
///
/// Suffixes listed in `guarded` only fire when the character immediately
/// before them — still inside the region — is one of `markers`; a failed
/// guard keeps scanning, so a longer guarded suffix can fall through to a
/// shorter unguarded one. Returns true when a suffix was stripped.
pub(crate) fn strip_region_suffix(
    word: &mut Word,
    region: usize,
    suffixes: &[&'static str],
    guarded: Option<&HashSet<&'static str>>,
    markers: &str,
) -> bool {
    for &suffix in suffixes {
        if !word.region_ends_with(region, suffix) {
            continue;
        }
        if let Some(guarded) = guarded {
            if guarded.contains(suffix) && !marker_precedes(word, region, suffix, markers) {
                continue;
            }
        }
        word.rewrite_tail(suffix.len(), "");
        return true;
    }
    false
}

/// True when the character just before the suffix lies inside the region
/// and is one of `markers`.
fn marker_precedes(word: &Word, region: usize, suffix: &str, markers: &str) -> bool {
    let n = suffix.len();
    word.region_len(region) > n && word.from_end(n).map_or(false, |c| markers.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{R1, RV};

    fn word_with_regions(text: &str, r1: usize, r2: usize) -> Word {
        let mut w = Word::new(text);
        w.set_region_start(R1, r1);
        w.set_region_start(R2, r2);
        w
    }

    #[test]
    fn test_first_tail_match_wins() {
        let rules = [SuffixRule::delete("sses"), SuffixRule::delete("s")];
        let mut w = word_with_regions("caresses", 3, 5);
        assert!(apply_step(&mut w, &rules));
        // "sses" was selected, not the later bare "s".
        assert_eq!(w.into_string(), "care");
    }

    #[test]
    fn test_failed_region_check_stops_the_step() {
        let rules = [
            SuffixRule::delete_in("ational", R1),
            SuffixRule::delete_in("al", R1),
        ];
        // R1 holds only "ional": "ational" matches the word but not R1,
        // and the later "al" rule must not be reached.
        let mut w = word_with_regions("rational", 3, 6);
        assert!(!apply_step(&mut w, &rules));
        assert_eq!(w.into_string(), "rational");
    }

    #[test]
    fn test_preceded_by_guard() {
        let rules = [SuffixRule::delete_in("ion", R2).preceded_by("st")];
        let mut w = word_with_regions("condition", 3, 6);
        assert!(apply_step(&mut w, &rules));
        assert_eq!(w.into_string(), "condit");

        let mut w = word_with_regions("companion", 3, 6);
        assert!(!apply_step(&mut w, &rules));
        assert_eq!(w.into_string(), "companion");
    }

    #[test]
    fn test_r2_placeholder_keeps_final_character() {
        let rules = [SuffixRule::replace_in("ational", "ate", R1).r2_placeholder()];
        let mut w = word_with_regions("sensational", 3, 6);
        assert!(apply_step(&mut w, &rules));
        assert_eq!(w.region_str(R2), "e");
        assert_eq!(w.into_string(), "sensate");
    }

    #[test]
    fn test_guarded_suffix_falls_through_to_unguarded() {
        let guarded: HashSet<&'static str> = ["nnyj"].into_iter().collect();
        let suffixes = ["nnyj", "yj"];
        let mut w = Word::new("strannyj");
        w.set_region_start(RV, 4);
        w.set_region_start(R2, 8);
        assert!(strip_region_suffix(
            &mut w,
            RV,
            &suffixes,
            Some(&guarded),
            "aA"
        ));
        // The guarded "nnyj" has no marker before it, so "yj" fired.
        assert_eq!(w.into_string(), "strann");
    }

    #[test]
    fn test_marker_must_lie_inside_region() {
        let guarded: HashSet<&'static str> = ["v"].into_iter().collect();
        // The marker "a" sits just outside RV, so "v" must not fire.
        let mut w = Word::new("av");
        w.set_region_start(RV, 1);
        w.set_region_start(R2, 2);
        assert!(!strip_region_suffix(&mut w, RV, &["v"], Some(&guarded), "aA"));
        assert_eq!(w.into_string(), "av");
    }
}
