//! Light normalization of free-text answers before they enter the profile.

use super::domain::ProfileField;

/// Normalize a free-text answer for the given field. Choice keys never pass
/// through here; they are stored verbatim.
pub(crate) fn normalize_answer(field: ProfileField, raw: &str) -> String {
    let trimmed = raw.trim();
    match field {
        ProfileField::Age => extract_age(trimmed).unwrap_or_else(|| trimmed.to_owned()),
        ProfileField::State => title_case(trimmed),
        _ => trimmed.to_owned(),
    }
}

/// Pull the first run of digits out of answers like "34 years".
fn extract_age(raw: &str) -> Option<String> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    Some(digits)
}

/// Capitalize the first letter of each word: "madhya pradesh" becomes
/// "Madhya Pradesh".
fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_keeps_only_the_first_digit_run() {
        assert_eq!(normalize_answer(ProfileField::Age, "34 years"), "34");
        assert_eq!(normalize_answer(ProfileField::Age, "  34  "), "34");
        assert_eq!(normalize_answer(ProfileField::Age, "age 34, roughly"), "34");
    }

    #[test]
    fn age_without_digits_is_kept_literally() {
        assert_eq!(normalize_answer(ProfileField::Age, "thirty four"), "thirty four");
    }

    #[test]
    fn state_is_title_cased() {
        assert_eq!(
            normalize_answer(ProfileField::State, "maharashtra"),
            "Maharashtra"
        );
        assert_eq!(
            normalize_answer(ProfileField::State, "MADHYA  pradesh"),
            "Madhya Pradesh"
        );
    }

    #[test]
    fn other_fields_are_only_trimmed() {
        assert_eq!(
            normalize_answer(ProfileField::Occupation, "  farmer "),
            "farmer"
        );
    }
}
