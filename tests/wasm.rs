#![cfg(feature = "wasm")]

use sequence_diff::wasm::{diff_text, render_patch};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_diff_text() {
    let Ok(result) = diff_text("a b c", "a x c", "word") else {
        panic!("Failed to diff words");
    };
    assert_eq!(
        result,
        r#"{"segments":[{"value":"a ","kind":"unchanged"},{"value":"b","kind":"removed"},{"value":"x","kind":"added"},{"value":" c","kind":"unchanged"}],"stats":{"added":1,"removed":1,"unchanged":4}}"#
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn test_render_patch() {
    let Ok(result) = render_patch("foo\nbar", "foo\nbaz", "line") else {
        panic!("Failed to render patch");
    };
    assert_eq!(result, "  foo\n- bar\n+ baz\n");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_identical_texts() {
    let Ok(result) = diff_text("", "", "char") else {
        panic!("Failed to diff empty texts");
    };
    assert_eq!(
        result,
        r#"{"segments":[],"stats":{"added":0,"removed":0,"unchanged":0}}"#
    );
}
