//! The shell's theme: near-black surfaces with a signal-red accent, merged
//! once onto the baseline token set and shared read-only with every view.

use spanview_ui_core::theme::{
    AlertOverrides, ButtonOverrides, CardOverrides, ComponentOverrides, GlobalOverrides,
    InputOverrides, LayoutOverrides, MenuOverrides, SelectOverrides, TableOverrides, Theme,
    ThemeOverrides,
};

const SURFACE: &str = "#000000";
const SURFACE_RAISED: &str = "#4a4a4d";
const SURFACE_INPUT: &str = "#2e2e31";
const EDGE: &str = "#9a989b";
const TEXT: &str = "#ffffff";
const ACCENT: &str = "#f0544f";
const ACCENT_BRIGHT: &str = "#ff7a75";
const ACCENT_DEEP: &str = "#c93732";
const WARNING: &str = "#b8860b";
const WARNING_TINT: &str = "rgba(184, 134, 11, 0.1)";

fn hex(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// The fixed override set. Keys left out here keep their baseline values, so
/// the paddings and collapse-trigger geometry come straight from the default
/// layout section.
pub fn shell_theme_overrides() -> ThemeOverrides {
    ThemeOverrides {
        token: GlobalOverrides {
            color_primary: hex(ACCENT),
            color_bg_base: hex(SURFACE),
            color_text_base: hex(TEXT),
            color_border: hex(SURFACE_RAISED),
            color_bg_container: hex(SURFACE),
            color_bg_elevated: hex(SURFACE_RAISED),
            color_bg_layout: hex(SURFACE),
            color_link: hex(ACCENT),
            color_link_hover: hex(ACCENT_BRIGHT),
            color_link_active: hex(ACCENT_DEEP),
        },
        components: ComponentOverrides {
            layout: Some(LayoutOverrides {
                body_bg: hex(SURFACE),
                header_bg: hex(SURFACE),
                footer_bg: hex(SURFACE),
                header_height: Some(48),
                sider_bg: hex(SURFACE),
                trigger_height: Some(48),
                trigger_bg: hex(SURFACE_RAISED),
                ..LayoutOverrides::default()
            }),
            menu: Some(MenuOverrides {
                dark_item_bg: hex(SURFACE),
                dark_item_selected_bg: hex(ACCENT),
                dark_item_hover_bg: hex(SURFACE_RAISED),
                item_bg: hex(SURFACE),
                item_selected_bg: hex(ACCENT),
                item_hover_bg: hex(SURFACE_RAISED),
                item_active_bg: hex(ACCENT),
            }),
            table: Some(TableOverrides {
                header_bg: hex(SURFACE_RAISED),
                row_hover_bg: hex(SURFACE_RAISED),
                body_sort_bg: hex(SURFACE),
                header_sort_active_bg: hex(SURFACE_RAISED),
            }),
            button: Some(ButtonOverrides {
                default_bg: hex(SURFACE_RAISED),
                default_border_color: hex(EDGE),
                default_color: hex(TEXT),
                default_hover_bg: hex(EDGE),
                default_hover_border_color: hex(EDGE),
                default_hover_color: hex(TEXT),
            }),
            input: Some(InputOverrides {
                color_bg_container: hex(SURFACE_INPUT),
                color_border: hex(EDGE),
                color_text: hex(TEXT),
                color_text_placeholder: hex(EDGE),
                hover_border_color: hex(ACCENT),
                active_border_color: hex(ACCENT),
            }),
            select: Some(SelectOverrides {
                option_active_bg: hex(SURFACE_RAISED),
                option_selected_bg: hex(ACCENT),
                selector_bg: hex(SURFACE_INPUT),
            }),
            card: Some(CardOverrides {
                color_bg_container: hex(SURFACE),
                color_border_secondary: hex(SURFACE_RAISED),
            }),
            alert: Some(AlertOverrides {
                color_warning: hex(WARNING),
                color_warning_bg: hex(WARNING_TINT),
                color_warning_border: hex(WARNING),
            }),
        },
    }
}

/// Builds the shell theme. Called once at shell construction; the result is
/// immutable for the shell's lifetime.
pub fn shell_theme() -> Theme {
    Theme::default().with_overrides(&shell_theme_overrides())
}
