//! Interactive-element detection for the custom cursor
//!
//! The cursor grows while the pointer is over a carousel card or a details
//! button, or anything nested inside one. The check is an `Element::closest`
//! query from the `mouseover` target.

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

/// Elements that, with all their descendants, grow the cursor
pub const INTERACTIVE_SELECTOR: &str = ".card, .details-btn";

/// Whether the target of a `mouseover` event sits inside an interactive element
#[must_use]
pub fn is_interactive_target(target: Option<EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::Document;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Result<Document, JsValue> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    /// Builds `tags[0] > tags[1] > ...` and returns the innermost element
    fn nested(document: &Document, chain: &[(&str, &str)]) -> Result<Element, JsValue> {
        let mut parent: Option<Element> = None;
        let mut innermost = None;
        for (tag, class) in chain {
            let element = document.create_element(tag)?;
            if !class.is_empty() {
                element.set_class_name(class);
            }
            if let Some(parent) = &parent {
                parent.append_child(&element)?;
            }
            innermost = Some(element.clone());
            parent = Some(element);
        }
        innermost.ok_or_else(|| JsValue::from_str("empty chain"))
    }

    #[wasm_bindgen_test]
    fn test_image_inside_card_is_interactive() -> Result<(), JsValue> {
        let document = document()?;
        let img = nested(
            &document,
            &[("div", "card active"), ("div", "card-inner"), ("img", "")],
        )?;
        assert!(is_interactive_target(Some(img.into())));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_button_inside_magnetic_wrapper_is_interactive() -> Result<(), JsValue> {
        let document = document()?;
        let label = nested(
            &document,
            &[
                ("div", "hero-text"),
                ("div", "magnetic"),
                ("button", "details-btn close-btn"),
                ("span", ""),
            ],
        )?;
        assert!(is_interactive_target(Some(label.into())));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_hero_text_and_lookalike_classes_are_not_interactive() -> Result<(), JsValue> {
        let document = document()?;
        let word = nested(&document, &[("div", "hero-text"), ("span", "title-word")])?;
        assert!(!is_interactive_target(Some(word.into())));

        let inner = nested(&document, &[("div", "cardigan"), ("div", "card-inner")])?;
        assert!(!is_interactive_target(Some(inner.into())));

        let chip = nested(&document, &[("div", "magnetic"), ("span", "ingredient")])?;
        assert!(!is_interactive_target(Some(chip.into())));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_missing_or_non_element_target() -> Result<(), JsValue> {
        assert!(!is_interactive_target(None));
        let window: EventTarget = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .into();
        assert!(!is_interactive_target(Some(window)));
        Ok(())
    }
}
