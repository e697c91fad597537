//! String presentation helpers.

/// Format a scenario file name for display.
///
/// Strips a trailing `.md` extension, turns underscores into spaces and
/// upper-cases the first letter of every whitespace-delimited word. ASCII
/// case only; accented first letters are left as-is.
///
/// # Examples
///
/// ```
/// use milieu_domain::common::format_scenario_name;
///
/// assert_eq!(
///     format_scenario_name("Les_Pierres_du_Passe.md"),
///     "Les Pierres Du Passe"
/// );
/// ```
pub fn format_scenario_name(name: &str) -> String {
    let base = name.strip_suffix(".md").unwrap_or(name).replace('_', " ");

    let mut formatted = String::with_capacity(base.len());
    let mut at_word_start = true;
    for c in base.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            formatted.push(c);
        } else if at_word_start {
            at_word_start = false;
            formatted.push(c.to_ascii_uppercase());
        } else {
            formatted.push(c);
        }
    }
    formatted
}
