use crate::constants::{ACCENT_VAR, SECTION_ATTR};
use morph_core::Section;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Publish the active section to the page shell: its colour as the `--accent`
/// custom property and its id as `data-section`, both on `<html>`.
pub fn apply_section(document: &web::Document, section: &Section) {
    let Some(root) = document.document_element() else {
        return;
    };
    _ = root.set_attribute(SECTION_ATTR, section.id);
    if let Ok(html) = root.dyn_into::<web::HtmlElement>() {
        _ = html
            .style()
            .set_property(ACCENT_VAR, &section.shape.theme_color.to_css_hex());
    }
}
