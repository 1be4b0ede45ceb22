//! Starting-letter catalog, `a` through `z`.

use super::CatalogEntry;

macro_rules! letter_entries {
    ($($slug:literal => $upper:literal),+ $(,)?) => {
        [$(
            CatalogEntry {
                slug: $slug,
                label: $upper,
                description: concat!(
                    "Baby names that start with the letter ",
                    $upper,
                    ", sorted by popularity."
                ),
                keywords: &[
                    concat!("names starting with ", $upper),
                    concat!("baby names that start with ", $upper),
                    concat!($upper, " names"),
                ],
            }
        ),+]
    };
}

/// Number of letter pages.
pub const LETTER_COUNT: usize = 26;

pub static LETTERS: [CatalogEntry; LETTER_COUNT] = letter_entries![
    "a" => "A", "b" => "B", "c" => "C", "d" => "D", "e" => "E", "f" => "F",
    "g" => "G", "h" => "H", "i" => "I", "j" => "J", "k" => "K", "l" => "L",
    "m" => "M", "n" => "N", "o" => "O", "p" => "P", "q" => "Q", "r" => "R",
    "s" => "S", "t" => "T", "u" => "U", "v" => "V", "w" => "W", "x" => "X",
    "y" => "Y", "z" => "Z",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_alphabetical() {
        let slugs: String = LETTERS.iter().map(|e| e.slug).collect();
        assert_eq!(slugs, "abcdefghijklmnopqrstuvwxyz");
        for entry in &LETTERS {
            assert_eq!(entry.label, entry.slug.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_letter_copy() {
        assert_eq!(
            LETTERS[0].description,
            "Baby names that start with the letter A, sorted by popularity."
        );
        assert_eq!(LETTERS[25].keywords[2], "Z names");
    }
}
