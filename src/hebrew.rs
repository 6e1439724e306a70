//! Hebrew numeral (gematria) conversion and bilingual scripture
//! reference formatting.
//!
//! Pure functions over literal lookup tables. Numerals cover 1-999 with
//! the traditional 15/16 exceptions (avoiding divine-name letter pairs)
//! and geresh/gershayim punctuation. The book tables are exhaustive for
//! the 39 books of the Hebrew Bible in both directions.

use crate::content::DisplayMode;

/// U+05F3 HEBREW PUNCTUATION GERESH, appended to single-letter numerals.
pub const GERESH: char = '\u{05F3}';
/// U+05F4 HEBREW PUNCTUATION GERSHAYIM, inserted before the last letter
/// of multi-letter numerals.
pub const GERSHAYIM: char = '\u{05F4}';

const ONES: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const HUNDREDS: [char; 4] = ['ק', 'ר', 'ש', 'ת'];

/// Gematria value of a single Hebrew letter. Final forms carry their
/// regular values so pasted text with sofit letters still sums.
fn letter_value(c: char) -> Option<u32> {
    let v = match c {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => return None,
    };
    Some(v)
}

/// Convert `n` in `1..=999` to Hebrew numeral notation, with gershayim
/// before the last letter of multi-letter numerals and a geresh after a
/// single letter. Returns `None` outside the supported range.
pub fn number_to_hebrew(n: u32) -> Option<String> {
    if n == 0 || n > 999 {
        return None;
    }
    let mut letters: Vec<char> = Vec::new();
    let mut rest = n;

    while rest >= 400 {
        letters.push('ת');
        rest -= 400;
    }
    if rest >= 100 {
        letters.push(HUNDREDS[(rest / 100 - 1) as usize]);
        rest %= 100;
    }
    // 15 and 16 spell out divine-name letter pairs (יה, יו); tradition
    // substitutes 9+6 and 9+7
    match rest {
        15 => {
            letters.push('ט');
            letters.push('ו');
        }
        16 => {
            letters.push('ט');
            letters.push('ז');
        }
        _ => {
            if rest >= 10 {
                letters.push(TENS[(rest / 10 - 1) as usize]);
                rest %= 10;
            }
            if rest > 0 {
                letters.push(ONES[(rest - 1) as usize]);
            }
        }
    }

    let mut out = String::new();
    if letters.len() == 1 {
        out.push(letters[0]);
        out.push(GERESH);
    } else {
        for (i, c) in letters.iter().enumerate() {
            if i == letters.len() - 1 {
                out.push(GERSHAYIM);
            }
            out.push(*c);
        }
    }
    Some(out)
}

/// Inverse of [`number_to_hebrew`]: sum letter values after stripping
/// punctuation. Returns `None` if no letter matches.
pub fn hebrew_to_number(s: &str) -> Option<u32> {
    let mut sum = 0u32;
    let mut matched = 0u32;
    for c in s.chars() {
        if let Some(v) = letter_value(c) {
            sum += v;
            matched += 1;
        }
    }
    (matched > 0).then_some(sum)
}

/// The 39 books of the Hebrew Bible: (English, Hebrew display name).
#[rustfmt::skip]
const BOOKS: [(&str, &str); 39] = [
    ("Genesis", "בראשית"),
    ("Exodus", "שמות"),
    ("Leviticus", "ויקרא"),
    ("Numbers", "במדבר"),
    ("Deuteronomy", "דברים"),
    ("Joshua", "יהושע"),
    ("Judges", "שופטים"),
    ("1 Samuel", "שמואל א׳"),
    ("2 Samuel", "שמואל ב׳"),
    ("1 Kings", "מלכים א׳"),
    ("2 Kings", "מלכים ב׳"),
    ("Isaiah", "ישעיהו"),
    ("Jeremiah", "ירמיהו"),
    ("Ezekiel", "יחזקאל"),
    ("Hosea", "הושע"),
    ("Joel", "יואל"),
    ("Amos", "עמוס"),
    ("Obadiah", "עובדיה"),
    ("Jonah", "יונה"),
    ("Micah", "מיכה"),
    ("Nahum", "נחום"),
    ("Habakkuk", "חבקוק"),
    ("Zephaniah", "צפניה"),
    ("Haggai", "חגי"),
    ("Zechariah", "זכריה"),
    ("Malachi", "מלאכי"),
    ("Psalms", "תהילים"),
    ("Proverbs", "משלי"),
    ("Job", "איוב"),
    ("Song of Songs", "שיר השירים"),
    ("Ruth", "רות"),
    ("Lamentations", "איכה"),
    ("Ecclesiastes", "קהלת"),
    ("Esther", "אסתר"),
    ("Daniel", "דניאל"),
    ("Ezra", "עזרא"),
    ("Nehemiah", "נחמיה"),
    ("1 Chronicles", "דברי הימים א׳"),
    ("2 Chronicles", "דברי הימים ב׳"),
];

/// Common alternate English titles accepted on input.
const BOOK_ALIASES: [(&str, &str); 2] = [
    ("Psalm", "Psalms"),
    ("Song of Solomon", "Song of Songs"),
];

fn normalize_hebrew(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(*c, GERESH | GERSHAYIM | '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Look up a book by English or Hebrew name. Returns the canonical
/// (English, Hebrew) pair.
fn lookup_book(name: &str) -> Option<(&'static str, &'static str)> {
    let name = name.trim();
    let canonical = BOOK_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, canon)| *canon)
        .unwrap_or(name);

    if let Some(entry) = BOOKS
        .iter()
        .find(|(en, _)| en.eq_ignore_ascii_case(canonical))
    {
        return Some(*entry);
    }
    // tolerate already-Hebrew input, with or without geresh marks
    let norm = normalize_hebrew(name);
    BOOKS
        .iter()
        .find(|(_, he)| normalize_hebrew(he) == norm)
        .copied()
}

/// Parsed `<chapter>[:<verse>[-<verse>]]` tail of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VerseSpan {
    chapter: u32,
    verse: Option<u32>,
    verse_end: Option<u32>,
}

fn parse_verse_span(s: &str) -> Option<VerseSpan> {
    let (chapter_s, verse_s) = match s.split_once(':') {
        Some((c, v)) => (c, Some(v)),
        None => (s, None),
    };
    let chapter: u32 = chapter_s.parse().ok()?;
    let (verse, verse_end) = match verse_s {
        None => (None, None),
        Some(v) => match v.split_once('-') {
            Some((a, b)) => (Some(a.parse().ok()?), Some(b.parse().ok()?)),
            None => (Some(v.parse().ok()?), None),
        },
    };
    Some(VerseSpan {
        chapter,
        verse,
        verse_end,
    })
}

impl VerseSpan {
    fn to_hebrew(self) -> Option<String> {
        let mut out = number_to_hebrew(self.chapter)?;
        if let Some(v) = self.verse {
            out.push(':');
            out.push_str(&number_to_hebrew(v)?);
            if let Some(end) = self.verse_end {
                out.push('-');
                out.push_str(&number_to_hebrew(end)?);
            }
        }
        Some(out)
    }

    fn to_english(self) -> String {
        let mut out = self.chapter.to_string();
        if let Some(v) = self.verse {
            out.push(':');
            out.push_str(&v.to_string());
            if let Some(end) = self.verse_end {
                out.push('-');
                out.push_str(&end.to_string());
            }
        }
        out
    }
}

/// Format a scripture reference like `"Genesis 1:1"` or `"תהילים 23"`
/// per the display mode: Hebrew-only in original mode, English-only in
/// translation mode, `"<Hebrew> | <English>"` in bilingual mode.
///
/// Anything that does not parse (unknown book, malformed numbers,
/// chapters beyond the numeral tables) is returned unmodified.
pub fn format_bible_reference(raw: &str, mode: DisplayMode) -> String {
    let trimmed = raw.trim();
    let Some((book_part, span_part)) = trimmed.rsplit_once(char::is_whitespace) else {
        return raw.to_string();
    };
    let Some((english_book, hebrew_book)) = lookup_book(book_part) else {
        return raw.to_string();
    };
    let Some(span) = parse_verse_span(span_part) else {
        return raw.to_string();
    };
    let Some(hebrew_span) = span.to_hebrew() else {
        return raw.to_string();
    };

    let hebrew = format!("{hebrew_book} {hebrew_span}");
    let english = format!("{english_book} {}", span.to_english());
    match mode {
        DisplayMode::Original => hebrew,
        DisplayMode::Translation => english,
        DisplayMode::Bilingual => format!("{hebrew} | {english}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ones_get_geresh() {
        assert_eq!(number_to_hebrew(1).unwrap(), "א׳");
        assert_eq!(number_to_hebrew(9).unwrap(), "ט׳");
    }

    #[test]
    fn multi_letter_gets_gershayim_before_last() {
        assert_eq!(number_to_hebrew(11).unwrap(), "י״א");
        assert_eq!(number_to_hebrew(23).unwrap(), "כ״ג");
        assert_eq!(number_to_hebrew(150).unwrap(), "ק״נ");
    }

    #[test]
    fn fifteen_sixteen_exceptions() {
        assert_eq!(number_to_hebrew(15).unwrap(), "ט״ו");
        assert_eq!(number_to_hebrew(16).unwrap(), "ט״ז");
        // the exceptions apply in every hundred
        assert_eq!(number_to_hebrew(115).unwrap(), "קט״ו");
        assert_eq!(number_to_hebrew(516).unwrap(), "תקט״ז");
    }

    #[test]
    fn high_hundreds_stack_tav() {
        assert_eq!(number_to_hebrew(500).unwrap(), "ת״ק");
        assert_eq!(number_to_hebrew(800).unwrap(), "ת״ת"); // 400+400
        assert_eq!(number_to_hebrew(999).unwrap(), "תתקצ״ט");
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(number_to_hebrew(0), None);
        assert_eq!(number_to_hebrew(1000), None);
    }

    #[test]
    fn hebrew_to_number_strips_punctuation() {
        assert_eq!(hebrew_to_number("ט״ו"), Some(15));
        assert_eq!(hebrew_to_number("קכ\"ג"), Some(123));
        assert_eq!(hebrew_to_number("א׳"), Some(1));
    }

    #[test]
    fn hebrew_to_number_accepts_final_forms() {
        assert_eq!(hebrew_to_number("ך"), Some(20));
        assert_eq!(hebrew_to_number("ץ"), Some(90));
    }

    #[test]
    fn hebrew_to_number_no_letters_is_none() {
        assert_eq!(hebrew_to_number("123"), None);
        assert_eq!(hebrew_to_number(""), None);
    }

    #[test]
    fn numeral_round_trip_full_range() {
        for n in 1..=999 {
            let heb = number_to_hebrew(n).unwrap();
            assert_eq!(hebrew_to_number(&heb), Some(n), "round trip failed for {n} ({heb})");
        }
    }

    #[test]
    fn book_table_is_exhaustive() {
        assert_eq!(BOOKS.len(), 39);
        // both directions resolve for every entry
        for (en, he) in BOOKS {
            assert_eq!(lookup_book(en), Some((en, he)));
            assert_eq!(lookup_book(he), Some((en, he)));
        }
    }

    #[test]
    fn reference_bilingual() {
        assert_eq!(
            format_bible_reference("Genesis 1:1", DisplayMode::Bilingual),
            "בראשית א׳:א׳ | Genesis 1:1"
        );
    }

    #[test]
    fn reference_original_mode_is_hebrew_only() {
        assert_eq!(
            format_bible_reference("Psalms 23:1", DisplayMode::Original),
            "תהילים כ״ג:א׳"
        );
    }

    #[test]
    fn reference_translation_mode_is_english_only() {
        assert_eq!(
            format_bible_reference("Psalms 23", DisplayMode::Translation),
            "Psalms 23"
        );
    }

    #[test]
    fn reference_verse_range() {
        assert_eq!(
            format_bible_reference("Exodus 20:2-3", DisplayMode::Original),
            "שמות כ׳:ב׳-ג׳"
        );
    }

    #[test]
    fn reference_numbered_book() {
        assert_eq!(
            format_bible_reference("1 Samuel 3:4", DisplayMode::Original),
            "שמואל א׳ ג׳:ד׳"
        );
    }

    #[test]
    fn reference_hebrew_book_input() {
        assert_eq!(
            format_bible_reference("תהילים 23:1", DisplayMode::Bilingual),
            "תהילים כ״ג:א׳ | Psalms 23:1"
        );
    }

    #[test]
    fn reference_alias_psalm_singular() {
        assert_eq!(
            format_bible_reference("Psalm 100:1", DisplayMode::Translation),
            "Psalms 100:1"
        );
    }

    #[test]
    fn reference_parse_failure_returns_input() {
        assert_eq!(
            format_bible_reference("not a reference", DisplayMode::Bilingual),
            "not a reference"
        );
        assert_eq!(
            format_bible_reference("Genesis one:one", DisplayMode::Bilingual),
            "Genesis one:one"
        );
        assert_eq!(format_bible_reference("", DisplayMode::Bilingual), "");
    }
}
