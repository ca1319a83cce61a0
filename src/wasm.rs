//! Expose the diff engine to WebAssembly for the browser tools.
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{BuiltinTokenizer, DiffOptions, DiffStats, SegmentKind, TextDiff};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

#[derive(Serialize)]
struct JsSegment {
    value: String,
    kind: SegmentKind,
}

#[derive(Serialize)]
struct JsTextDiff {
    segments: Vec<JsSegment>,
    stats: DiffStats,
}

/// Diff two texts at the given granularity (`char`, `word` or `line`).
///
/// # Returns
///
/// A JSON string of the shape
/// `{ segments: [{ value, kind }], stats: { added, removed, unchanged } }`.
///
/// # Errors
///
/// If the granularity is unknown or either text has too many tokens.
#[wasm_bindgen(js_name = diffText)]
pub fn diff_text(before: &str, after: &str, granularity: &str) -> Result<String, JsError> {
    set_panic_hook();

    let diff = compute(before, after, granularity)?;
    let result = JsTextDiff {
        segments: diff
            .segments()
            .iter()
            .map(|segment| JsSegment {
                value: segment.text(),
                kind: segment.kind(),
            })
            .collect(),
        stats: diff.stats(),
    };

    Ok(serde_json::to_string(&result)?)
}

/// Diff two texts and render the result with `+ `/`- ` prefixes, the format
/// the diff viewer copies to the clipboard.
///
/// # Errors
///
/// If the granularity is unknown or either text has too many tokens.
#[wasm_bindgen(js_name = renderPatch)]
pub fn render_patch(before: &str, after: &str, granularity: &str) -> Result<String, JsError> {
    set_panic_hook();

    Ok(compute(before, after, granularity)?.to_patch())
}

fn compute<'a>(before: &'a str, after: &'a str, granularity: &str) -> Result<TextDiff<'a>, JsError> {
    let tokenizer: BuiltinTokenizer = granularity.parse()?;

    Ok(crate::diff_text(before, after, tokenizer, &DiffOptions::default())?)
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
