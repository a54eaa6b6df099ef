//! Terminal view behind the dispatcher's match-anything entry. Every
//! location the table does not recognize lands here, so an unknown address
//! is a page, not an error.

#[cfg(target_arch = "wasm32")]
pub fn render(
    document: &web_sys::Document,
    mount: &web_sys::Element,
    state: &spanview_app_state::AppState,
) -> Result<(), wasm_bindgen::JsValue> {
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Page not found"));
    mount.append_child(&heading)?;

    let summary = document.create_element("p")?;
    summary.set_text_content(Some(&format!(
        "Nothing lives at {}.",
        state.location
    )));
    mount.append_child(&summary)?;

    let home = document.create_element("a")?;
    home.set_attribute("href", crate::views::search::ROUTE_PATTERN)?;
    home.set_text_content(Some("Back to search"));
    mount.append_child(&home)?;
    Ok(())
}
