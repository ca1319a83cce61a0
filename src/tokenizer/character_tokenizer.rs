/// Splits text into Unicode scalar values.
///
/// Combining marks and multi-scalar emoji end up in separate tokens, so a
/// character diff can split a user-perceived character in two.
///
/// ```not_rust
/// "Hey!" -> ["H", "e", "y", "!"]
/// ```
pub fn character_tokenizer(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(i, c)| &text[i..i + c.len_utf8()])
        .collect()
}
