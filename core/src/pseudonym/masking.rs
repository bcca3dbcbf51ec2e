/// How [`mask`] hides a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskStyle<'a> {
    /// Replace the whole value with a placeholder.
    Fixed(&'a str),
    /// Replace every character.
    PerCharacter(char),
    /// Keep the first N characters, replace the rest.
    PreservePrefix(usize, char),
    /// Keep the last N characters, replace the rest.
    PreserveSuffix(usize, char),
}

/// Masks `value` character by character. Apart from [`MaskStyle::Fixed`],
/// the result has as many characters as the input.
pub fn mask(value: &str, style: MaskStyle<'_>) -> String {
    match style {
        MaskStyle::Fixed(placeholder) => placeholder.to_string(),
        MaskStyle::PerCharacter(c) => value.chars().map(|_| c).collect(),
        MaskStyle::PreservePrefix(n, c) => value
            .chars()
            .enumerate()
            .map(|(i, x)| if i < n { x } else { c })
            .collect(),
        MaskStyle::PreserveSuffix(n, c) => {
            let hidden: usize = value.chars().count().saturating_sub(n);
            value
                .chars()
                .enumerate()
                .map(|(i, x)| if i < hidden { c } else { x })
                .collect()
        }
    }
}
