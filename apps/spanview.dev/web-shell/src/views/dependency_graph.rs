pub const ROUTE_PATTERN: &str = "/dependencies";

#[cfg(target_arch = "wasm32")]
pub fn render(
    document: &web_sys::Document,
    mount: &web_sys::Element,
) -> Result<(), wasm_bindgen::JsValue> {
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Service dependencies"));
    mount.append_child(&heading)?;

    let summary = document.create_element("p")?;
    summary.set_text_content(Some("Call graph across all instrumented services."));
    mount.append_child(&summary)?;
    Ok(())
}
