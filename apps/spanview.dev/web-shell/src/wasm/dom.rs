use super::*;

/// Frame styling over the theme's custom properties. Views bring their own
/// styles; the shell only owns the chrome.
const SHELL_BASE_CSS: &str = "\
body { margin: 0; background: var(--sv-token-color-bg-layout); \
color: var(--sv-token-color-text-base); font-family: sans-serif; }\n\
#spanview-shell-header { display: flex; align-items: center; gap: 24px; \
height: var(--sv-components-layout-header-height); \
background: var(--sv-components-layout-header-bg); padding: 0 24px; }\n\
#spanview-shell-header span { font-weight: bold; \
color: var(--sv-token-color-primary); }\n\
#spanview-shell-nav { display: flex; gap: 16px; }\n\
#spanview-shell-nav a { color: var(--sv-token-color-link); \
text-decoration: none; }\n\
#spanview-shell-nav a:hover { color: var(--sv-token-color-link-hover); }\n\
#spanview-shell-nav a.active { color: var(--sv-token-color-primary); }\n\
#spanview-shell-main { padding: 24px; \
background: var(--sv-components-layout-body-bg); }\n\
#spanview-shell-footer { padding: 12px 24px; \
background: var(--sv-components-layout-footer-bg); }\n";

/// Installs the merged theme on the document root as CSS custom properties,
/// plus the frame styles that consume them. Runs once per document; the
/// theme never changes after shell construction.
pub(super) fn apply_theme_css(theme: &Theme) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document is unavailable".to_string())?;
    if document.get_element_by_id(SHELL_THEME_STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| "document head is unavailable".to_string())?;
    let style = document
        .create_element("style")
        .map_err(|_| "failed to create style element".to_string())?;
    style.set_id(SHELL_THEME_STYLE_ID);
    style.set_text_content(Some(&format!(
        ":root {{\n{}}}\n{SHELL_BASE_CSS}",
        theme.css_variables()
    )));
    head.append_child(&style)
        .map_err(|_| "failed to append style element".to_string())?;
    Ok(())
}

/// Dispatches the current location and renders the resulting view into the
/// frame's mount point. Called on boot, popstate, and every route
/// transition; exactly one view renders per call.
pub(super) fn render_active_view() -> Result<(), String> {
    let view = SHELL.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .map(|shell| shell.active_view())
    });
    let Some(view) = view else {
        return Err("shell is not mounted".to_string());
    };

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document is unavailable".to_string())?;
    let mount = document
        .get_element_by_id(SHELL_MAIN_ID)
        .ok_or_else(|| "shell frame is missing its mount point".to_string())?;
    mount.set_inner_html("");

    let state = APP_STATE.with(|store| store.borrow().clone());
    view.render(&document, &mount, &state)
        .map_err(|_| format!("rendering the {} view failed", view.title()))?;

    document.set_title(&format!("{} — SpanView", view.title()));
    set_active_nav_link(&document, &state.location);
    update_diagnostics_from_state(state.location, view);
    Ok(())
}

fn set_active_nav_link(document: &web_sys::Document, location: &str) {
    let Some(nav) = document.get_element_by_id(SHELL_NAV_ID) else {
        return;
    };
    let links = nav.children();
    for index in 0..links.length() {
        let Some(element) = links.item(index) else {
            continue;
        };
        let href = element.get_attribute("href").unwrap_or_default();
        let active = !href.is_empty()
            && (location == href
                || location.starts_with(&format!("{href}/"))
                || location.starts_with(&format!("{href}?")));
        if active {
            let _ = element.class_list().add_1("active");
        } else {
            let _ = element.class_list().remove_1("active");
        }
    }
}
