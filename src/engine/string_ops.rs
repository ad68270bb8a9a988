//! String Manipulation Demos

/// The operations the string screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringOp {
    Reverse,
    Uppercase,
    Lowercase,
    Palindrome,
    VowelCount,
    WordCount,
    CharCount,
    TitleCase,
}

pub const STRING_OPS: &[StringOp] = &[
    StringOp::Reverse,
    StringOp::Uppercase,
    StringOp::Lowercase,
    StringOp::Palindrome,
    StringOp::VowelCount,
    StringOp::WordCount,
    StringOp::CharCount,
    StringOp::TitleCase,
];

impl StringOp {
    pub fn label(self) -> &'static str {
        match self {
            StringOp::Reverse => "Reverse",
            StringOp::Uppercase => "Uppercase",
            StringOp::Lowercase => "Lowercase",
            StringOp::Palindrome => "Palindrome?",
            StringOp::VowelCount => "Count Vowels",
            StringOp::WordCount => "Count Words",
            StringOp::CharCount => "Count Characters",
            StringOp::TitleCase => "Title Case",
        }
    }

    pub fn apply(self, input: &str) -> String {
        match self {
            StringOp::Reverse => input.chars().rev().collect(),
            StringOp::Uppercase => input.to_uppercase(),
            StringOp::Lowercase => input.to_lowercase(),
            StringOp::Palindrome => {
                if is_palindrome(input) {
                    "Yes, it is a palindrome!".to_string()
                } else {
                    "No, not a palindrome".to_string()
                }
            }
            StringOp::VowelCount => format!("Vowel count: {}", vowel_count(input)),
            StringOp::WordCount => {
                format!("Word count: {}", input.split_whitespace().count())
            }
            StringOp::CharCount => {
                format!("Character count: {}", input.chars().count())
            }
            StringOp::TitleCase => title_case(input),
        }
    }
}

/// Palindrome check over the lowercased alphanumeric characters only.
fn is_palindrome(input: &str) -> bool {
    let cleaned: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

fn vowel_count(input: &str) -> usize {
    input
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Uppercase the first alphabetic character of each word, lowercase the
/// rest.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_and_cases() {
        assert_eq!(StringOp::Reverse.apply("abc"), "cba");
        assert_eq!(StringOp::Uppercase.apply("aBc"), "ABC");
        assert_eq!(StringOp::Lowercase.apply("AbC"), "abc");
    }

    #[test]
    fn palindrome_ignores_punctuation_and_case() {
        assert_eq!(
            StringOp::Palindrome.apply("A man, a plan, a canal: Panama"),
            "Yes, it is a palindrome!"
        );
        assert_eq!(StringOp::Palindrome.apply("hello"), "No, not a palindrome");
        assert_eq!(StringOp::Palindrome.apply("x"), "Yes, it is a palindrome!");
    }

    #[test]
    fn counts() {
        assert_eq!(StringOp::VowelCount.apply("Education"), "Vowel count: 5");
        assert_eq!(StringOp::WordCount.apply("  two  words "), "Word count: 2");
        assert_eq!(StringOp::CharCount.apply("abcd"), "Character count: 4");
        assert_eq!(StringOp::WordCount.apply(""), "Word count: 0");
    }

    #[test]
    fn title_case_per_word() {
        assert_eq!(StringOp::TitleCase.apply("hello WORLD foo"), "Hello World Foo");
        assert_eq!(StringOp::TitleCase.apply(""), "");
    }
}
