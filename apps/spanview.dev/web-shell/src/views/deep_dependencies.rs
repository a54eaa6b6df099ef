pub const ROUTE_PATTERN: &str = "/deep-dependencies";

#[cfg(target_arch = "wasm32")]
pub fn render(
    document: &web_sys::Document,
    mount: &web_sys::Element,
) -> Result<(), wasm_bindgen::JsValue> {
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Deep dependencies"));
    mount.append_child(&heading)?;

    let summary = document.create_element("p")?;
    summary.set_text_content(Some("Transitive dependency paths for a focal service."));
    mount.append_child(&summary)?;
    Ok(())
}
