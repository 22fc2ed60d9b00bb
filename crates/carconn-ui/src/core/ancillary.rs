//! Pure helpers for clickable rows, alert dismissal, and form autofocus.

/// Inline animation applied to a dismissed alert.
pub const FADE_OUT_ANIMATION: &str = "fadeOut 0.3s ease";
/// Delay before a dismissed alert is removed; matches the animation length.
pub const FADE_OUT_MS: u32 = 300;

/// Navigation target of a clickable row, if the attribute carries one.
#[must_use]
pub fn row_target(attribute: Option<&str>) -> Option<&str> {
    attribute.filter(|href| !href.is_empty())
}

/// Whether an input of `input_type` may receive autofocus.
///
/// Missing type attributes default to text inputs.
#[must_use]
pub fn is_autofocus_candidate(input_type: Option<&str>) -> bool {
    !input_type.is_some_and(|kind| {
        kind.eq_ignore_ascii_case("hidden") || kind.eq_ignore_ascii_case("submit")
    })
}

/// Index of the first input, in document order, that may receive autofocus.
pub fn first_autofocus_index<'a, I>(input_types: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    input_types
        .into_iter()
        .position(is_autofocus_candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_target_requires_value() {
        assert_eq!(row_target(Some("/garage/abc")), Some("/garage/abc"));
        assert_eq!(row_target(Some("")), None);
        assert_eq!(row_target(None), None);
    }

    #[test]
    fn hidden_and_submit_inputs_are_skipped() {
        assert!(!is_autofocus_candidate(Some("hidden")));
        assert!(!is_autofocus_candidate(Some("SUBMIT")));
        assert!(is_autofocus_candidate(Some("password")));
        assert!(is_autofocus_candidate(None));
    }

    #[test]
    fn first_candidate_wins() {
        let login = [Some("hidden"), Some("text"), Some("password"), Some("submit")];
        assert_eq!(first_autofocus_index(login), Some(1));
        let only_controls = [Some("hidden"), Some("submit")];
        assert_eq!(first_autofocus_index(only_controls), None);
        assert_eq!(first_autofocus_index(Vec::<Option<&str>>::new()), None);
    }
}
