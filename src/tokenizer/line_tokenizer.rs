/// Splits text into lines, keeping the line ending as part of each line.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello\n", "World!"]
/// "Line 1\r\nLine 2\n" -> ["Line 1\r\n", "Line 2\n"]
/// ```
pub fn line_tokenizer(text: &str) -> Vec<&str> { text.split_inclusive('\n').collect() }
