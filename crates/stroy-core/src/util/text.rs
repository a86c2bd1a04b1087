//! Text helpers.
//!
//! Provides the case folding used by list filtering and the initials shown
//! in avatar badges. Both are Unicode-aware, so Cyrillic names fold and
//! capitalise the same way Latin ones do.

/// Fold a string for case-insensitive comparison.
///
/// # Examples
///
/// ```
/// use stroy_core::util::text::fold_case;
///
/// assert_eq!(fold_case("ООО \"Инвест\""), "ооо \"инвест\"");
/// assert_eq!(fold_case("Ivanov@Invest.RU"), "ivanov@invest.ru");
/// ```
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Compute upper-case initials from a space-separated name.
///
/// Takes the first character of every word; runs of spaces contribute
/// nothing.
///
/// # Examples
///
/// ```
/// use stroy_core::util::text::initials;
///
/// assert_eq!(initials("Александр Иванов"), "АИ");
/// assert_eq!(initials("admin"), "A");
/// assert_eq!(initials(""), "");
/// ```
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
