//! Transliteration between Cyrillic and the working alphabet.
//!
//! The Russian pipeline compares suffixes against a one-character-per-letter
//! ASCII rendering of the word, so that palatalized and iotated letters stay
//! distinct single symbols (`ч -> H`, `ш -> w`, `щ -> W`, `э -> E`,
//! `ю -> U`, `я -> A`, `ъ -> "`, `ь -> '`). `ё` folds into `e` on the way
//! in and therefore comes back as `е`. Characters outside the alphabet pass
//! through both directions untouched.

/// Renders a Cyrillic word in the working alphabet.
pub(crate) fn cyrillic_to_roman(word: &str) -> String {
    word.chars().map(roman_letter).collect()
}

/// Renders a working-alphabet word back in Cyrillic (lowercase).
pub(crate) fn roman_to_cyrillic(word: &str) -> String {
    word.chars().map(cyrillic_letter).collect()
}

fn roman_letter(c: char) -> char {
    match c {
        'а' | 'А' => 'a',
        'б' | 'Б' => 'b',
        'в' | 'В' => 'v',
        'г' | 'Г' => 'g',
        'д' | 'Д' => 'd',
        'е' | 'Е' | 'ё' | 'Ё' => 'e',
        'ж' | 'Ж' => 'x',
        'з' | 'З' => 'z',
        'и' | 'И' => 'i',
        'й' | 'Й' => 'j',
        'к' | 'К' => 'k',
        'л' | 'Л' => 'l',
        'м' | 'М' => 'm',
        'н' | 'Н' => 'n',
        'о' | 'О' => 'o',
        'п' | 'П' => 'p',
        'р' | 'Р' => 'r',
        'с' | 'С' => 's',
        'т' | 'Т' => 't',
        'у' | 'У' => 'u',
        'ф' | 'Ф' => 'f',
        'х' | 'Х' => 'h',
        'ц' | 'Ц' => 'c',
        'ч' | 'Ч' => 'H',
        'ш' | 'Ш' => 'w',
        'щ' | 'Щ' => 'W',
        'ъ' | 'Ъ' => '"',
        'ы' | 'Ы' => 'y',
        'ь' | 'Ь' => '\'',
        'э' | 'Э' => 'E',
        'ю' | 'Ю' => 'U',
        'я' | 'Я' => 'A',
        other => other,
    }
}

fn cyrillic_letter(c: char) -> char {
    match c {
        'a' => 'а',
        'b' => 'б',
        'v' => 'в',
        'g' => 'г',
        'd' => 'д',
        'e' => 'е',
        'x' => 'ж',
        'z' => 'з',
        'i' => 'и',
        'j' => 'й',
        'k' => 'к',
        'l' => 'л',
        'm' => 'м',
        'n' => 'н',
        'o' => 'о',
        'p' => 'п',
        'r' => 'р',
        's' => 'с',
        't' => 'т',
        'u' => 'у',
        'f' => 'ф',
        'h' => 'х',
        'c' => 'ц',
        'H' => 'ч',
        'w' => 'ш',
        'W' => 'щ',
        '"' => 'ъ',
        'y' => 'ы',
        '\'' => 'ь',
        'E' => 'э',
        'U' => 'ю',
        'A' => 'я',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_letters() {
        assert_eq!(cyrillic_to_roman("весна"), "vesna");
        assert_eq!(roman_to_cyrillic("vesna"), "весна");
    }

    #[test]
    fn test_distinct_symbols_for_sibilants() {
        assert_eq!(cyrillic_to_roman("щи"), "Wi");
        assert_eq!(cyrillic_to_roman("ши"), "wi");
        assert_eq!(cyrillic_to_roman("чаща"), "HaWa");
        assert_eq!(roman_to_cyrillic("HaWa"), "чаща");
    }

    #[test]
    fn test_signs_and_iotated_vowels() {
        assert_eq!(cyrillic_to_roman("объявление"), "ob\"Avlenie");
        assert_eq!(cyrillic_to_roman("лошадь"), "lowad'");
        assert_eq!(roman_to_cyrillic("lowad'"), "лошадь");
        assert_eq!(cyrillic_to_roman("юля"), "UlA");
    }

    #[test]
    fn test_uppercase_folds_to_lowercase_working_letters() {
        assert_eq!(cyrillic_to_roman("ВЕСНА"), "vesna");
        assert_eq!(cyrillic_to_roman("Щука"), "Wuka");
    }

    #[test]
    fn test_yo_folds_into_e() {
        assert_eq!(cyrillic_to_roman("ёлка"), "elka");
        assert_eq!(roman_to_cyrillic("elka"), "елка");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(cyrillic_to_roman("год-2024"), "god-2024");
        assert_eq!(roman_to_cyrillic("god-2024"), "год-2024");
        assert_eq!(cyrillic_to_roman("кафе?"), "kafe?");
    }

    #[test]
    fn test_round_trip() {
        for word in ["весна", "программистом", "объявление", "лошадь"] {
            assert_eq!(roman_to_cyrillic(&cyrillic_to_roman(word)), word);
        }
    }
}
