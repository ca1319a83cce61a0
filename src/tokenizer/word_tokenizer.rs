/// Splits text on word boundaries, creating tokens of alternating words and
/// whitespace runs. Whitespace is kept as its own token so that spacing
/// changes show up in the diff.
///
/// ## Example
///
/// ```not_rust
/// "Hi  there!" -> ["Hi", "  ", "there!"]
/// ```
pub fn word_tokenizer(text: &str) -> Vec<&str> {
    let mut result = Vec::new();

    let mut previous_boundary_index = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_some_and(char::is_whitespace);

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            if i > previous_boundary_index {
                result.push(&text[previous_boundary_index..i]);
            }
            previous_boundary_index = i;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if previous_boundary_index < text.len() {
        result.push(&text[previous_boundary_index..]);
    }

    result
}
