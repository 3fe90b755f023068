//! Caret offsets between the composer (chars) and the DOM (UTF-16 units).

#[cfg(test)]
#[path = "caret_test.rs"]
mod caret_test;

/// Convert a DOM selection offset into a char offset within `text`.
/// Offsets past the end, or inside a surrogate pair, round up to the next
/// char boundary.
pub fn utf16_to_char_offset(text: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.chars().enumerate() {
        if units >= utf16 {
            return idx;
        }
        units += ch.len_utf16();
    }
    text.chars().count()
}

/// Convert a char offset within `text` into a DOM selection offset.
pub fn char_to_utf16_offset(text: &str, chars: usize) -> u32 {
    let units: usize = text.chars().take(chars).map(char::len_utf16).sum();
    u32::try_from(units).unwrap_or(u32::MAX)
}

/// Caret (selection start) of the `<input>` or `<textarea>` behind `target`,
/// in chars.
#[cfg(feature = "hydrate")]
pub fn caret_of(target: &web_sys::EventTarget, text: &str) -> usize {
    use wasm_bindgen::JsCast;

    let start = if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        input.selection_start().ok().flatten()
    } else if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.selection_start().ok().flatten()
    } else {
        None
    };
    start.map_or_else(|| text.chars().count(), |units| utf16_to_char_offset(text, units as usize))
}

/// Focus `area` and put the caret at char offset `caret`.
#[cfg(feature = "hydrate")]
pub fn restore_caret(area: &web_sys::HtmlTextAreaElement, text: &str, caret: usize) {
    let pos = char_to_utf16_offset(text, caret);
    if area.set_selection_range(pos, pos).is_err() {
        leptos::logging::warn!("chat: could not restore caret");
    }
    let _ = area.focus();
}
