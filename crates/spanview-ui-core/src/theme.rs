//! Theme system for SpanView surfaces.
//!
//! A [`Theme`] is a set of named visual tokens: one global section plus one
//! section per shared component surface. The shell builds its theme exactly
//! once by deep-merging a [`ThemeOverrides`] onto [`Theme::default`], then
//! treats the result as immutable. Consumers read tokens by field and must
//! fall back to the baseline value for anything the shell did not override;
//! serialized forms keep unknown keys harmless.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Global tokens shared by every surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GlobalTokens {
    pub color_primary: String,
    pub color_bg_base: String,
    pub color_text_base: String,
    pub color_border: String,
    pub color_bg_container: String,
    pub color_bg_elevated: String,
    pub color_bg_layout: String,
    pub color_link: String,
    pub color_link_hover: String,
    pub color_link_active: String,
}

impl Default for GlobalTokens {
    fn default() -> Self {
        Self {
            color_primary: "#1677ff".to_string(),
            color_bg_base: "#ffffff".to_string(),
            color_text_base: "#000000".to_string(),
            color_border: "#d9d9d9".to_string(),
            color_bg_container: "#ffffff".to_string(),
            color_bg_elevated: "#ffffff".to_string(),
            color_bg_layout: "#f5f5f5".to_string(),
            color_link: "#1677ff".to_string(),
            color_link_hover: "#69b1ff".to_string(),
            color_link_active: "#0958d9".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LayoutTokens {
    pub body_bg: String,
    pub header_bg: String,
    pub footer_bg: String,
    pub header_height: u32,
    pub header_padding: String,
    pub footer_padding: String,
    pub sider_bg: String,
    pub trigger_height: u32,
    pub trigger_bg: String,
    pub zero_trigger_width: u32,
    pub zero_trigger_height: u32,
}

impl Default for LayoutTokens {
    fn default() -> Self {
        Self {
            body_bg: "#f5f5f5".to_string(),
            header_bg: "#001529".to_string(),
            footer_bg: "#f5f5f5".to_string(),
            header_height: 64,
            header_padding: "0 50".to_string(),
            footer_padding: "24 50".to_string(),
            sider_bg: "#001529".to_string(),
            trigger_height: 48,
            trigger_bg: "#002140".to_string(),
            zero_trigger_width: 36,
            zero_trigger_height: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MenuTokens {
    pub dark_item_bg: String,
    pub dark_item_selected_bg: String,
    pub dark_item_hover_bg: String,
    pub item_bg: String,
    pub item_selected_bg: String,
    pub item_hover_bg: String,
    pub item_active_bg: String,
}

impl Default for MenuTokens {
    fn default() -> Self {
        Self {
            dark_item_bg: "#001529".to_string(),
            dark_item_selected_bg: "#1677ff".to_string(),
            dark_item_hover_bg: "#111b26".to_string(),
            item_bg: "#ffffff".to_string(),
            item_selected_bg: "#e6f4ff".to_string(),
            item_hover_bg: "#f5f5f5".to_string(),
            item_active_bg: "#e6f4ff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TableTokens {
    pub header_bg: String,
    pub row_hover_bg: String,
    pub body_sort_bg: String,
    pub header_sort_active_bg: String,
}

impl Default for TableTokens {
    fn default() -> Self {
        Self {
            header_bg: "#fafafa".to_string(),
            row_hover_bg: "#fafafa".to_string(),
            body_sort_bg: "#fafafa".to_string(),
            header_sort_active_bg: "#f0f0f0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ButtonTokens {
    pub default_bg: String,
    pub default_border_color: String,
    pub default_color: String,
    pub default_hover_bg: String,
    pub default_hover_border_color: String,
    pub default_hover_color: String,
}

impl Default for ButtonTokens {
    fn default() -> Self {
        Self {
            default_bg: "#ffffff".to_string(),
            default_border_color: "#d9d9d9".to_string(),
            default_color: "#000000".to_string(),
            default_hover_bg: "#ffffff".to_string(),
            default_hover_border_color: "#4096ff".to_string(),
            default_hover_color: "#4096ff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct InputTokens {
    pub color_bg_container: String,
    pub color_border: String,
    pub color_text: String,
    pub color_text_placeholder: String,
    pub hover_border_color: String,
    pub active_border_color: String,
}

impl Default for InputTokens {
    fn default() -> Self {
        Self {
            color_bg_container: "#ffffff".to_string(),
            color_border: "#d9d9d9".to_string(),
            color_text: "#000000".to_string(),
            color_text_placeholder: "#bfbfbf".to_string(),
            hover_border_color: "#4096ff".to_string(),
            active_border_color: "#1677ff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SelectTokens {
    pub option_active_bg: String,
    pub option_selected_bg: String,
    pub selector_bg: String,
}

impl Default for SelectTokens {
    fn default() -> Self {
        Self {
            option_active_bg: "#f5f5f5".to_string(),
            option_selected_bg: "#e6f4ff".to_string(),
            selector_bg: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CardTokens {
    pub color_bg_container: String,
    pub color_border_secondary: String,
}

impl Default for CardTokens {
    fn default() -> Self {
        Self {
            color_bg_container: "#ffffff".to_string(),
            color_border_secondary: "#f0f0f0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AlertTokens {
    pub color_warning: String,
    pub color_warning_bg: String,
    pub color_warning_border: String,
}

impl Default for AlertTokens {
    fn default() -> Self {
        Self {
            color_warning: "#faad14".to_string(),
            color_warning_bg: "#fffbe6".to_string(),
            color_warning_border: "#ffe58f".to_string(),
        }
    }
}

/// Per-component token sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ComponentTokens {
    pub layout: LayoutTokens,
    pub menu: MenuTokens,
    pub table: TableTokens,
    pub button: ButtonTokens,
    pub input: InputTokens,
    pub select: SelectTokens,
    pub card: CardTokens,
    pub alert: AlertTokens,
}

/// The merged theme configuration consumed by every surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Theme {
    pub token: GlobalTokens,
    pub components: ComponentTokens,
}

impl Theme {
    /// Deep-merges `overrides` onto this theme: an override wins on key
    /// collision, every unmentioned key or section passes through unchanged.
    /// Pure data transformation, idempotent for a fixed override set.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        overrides.token.apply(&mut self.token);
        overrides.components.apply(&mut self.components);
        self
    }

    /// Renders the theme as CSS custom property declarations, one per token,
    /// for application on the document root so every descendant inherits it.
    /// Numeric tokens are emitted as pixel values.
    pub fn css_variables(&self) -> String {
        let mut out = String::new();
        if let Ok(value) = serde_json::to_value(self) {
            collect_css_variables("--sv", &value, &mut out);
        }
        out
    }
}

fn collect_css_variables(prefix: &str, value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_css_variables(&format!("{prefix}-{key}"), child, out);
            }
        }
        Value::String(text) => {
            let _ = writeln!(out, "{prefix}: {text};");
        }
        Value::Number(number) => {
            let _ = writeln!(out, "{prefix}: {number}px;");
        }
        _ => {}
    }
}

fn apply_value<T: Clone>(slot: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

macro_rules! override_section {
    ($name:ident => $target:ty { $($field:ident: $ty:ty),+ $(,)? }) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case", default)]
        pub struct $name {
            $(pub $field: Option<$ty>,)+
        }

        impl $name {
            fn apply(&self, target: &mut $target) {
                $(apply_value(&mut target.$field, self.$field.as_ref());)+
            }
        }
    };
}

override_section!(GlobalOverrides => GlobalTokens {
    color_primary: String,
    color_bg_base: String,
    color_text_base: String,
    color_border: String,
    color_bg_container: String,
    color_bg_elevated: String,
    color_bg_layout: String,
    color_link: String,
    color_link_hover: String,
    color_link_active: String,
});

override_section!(LayoutOverrides => LayoutTokens {
    body_bg: String,
    header_bg: String,
    footer_bg: String,
    header_height: u32,
    header_padding: String,
    footer_padding: String,
    sider_bg: String,
    trigger_height: u32,
    trigger_bg: String,
    zero_trigger_width: u32,
    zero_trigger_height: u32,
});

override_section!(MenuOverrides => MenuTokens {
    dark_item_bg: String,
    dark_item_selected_bg: String,
    dark_item_hover_bg: String,
    item_bg: String,
    item_selected_bg: String,
    item_hover_bg: String,
    item_active_bg: String,
});

override_section!(TableOverrides => TableTokens {
    header_bg: String,
    row_hover_bg: String,
    body_sort_bg: String,
    header_sort_active_bg: String,
});

override_section!(ButtonOverrides => ButtonTokens {
    default_bg: String,
    default_border_color: String,
    default_color: String,
    default_hover_bg: String,
    default_hover_border_color: String,
    default_hover_color: String,
});

override_section!(InputOverrides => InputTokens {
    color_bg_container: String,
    color_border: String,
    color_text: String,
    color_text_placeholder: String,
    hover_border_color: String,
    active_border_color: String,
});

override_section!(SelectOverrides => SelectTokens {
    option_active_bg: String,
    option_selected_bg: String,
    selector_bg: String,
});

override_section!(CardOverrides => CardTokens {
    color_bg_container: String,
    color_border_secondary: String,
});

override_section!(AlertOverrides => AlertTokens {
    color_warning: String,
    color_warning_bg: String,
    color_warning_border: String,
});

/// Per-component override sections. A `None` section passes the whole
/// baseline section through; a present section still only replaces the keys
/// it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ComponentOverrides {
    pub layout: Option<LayoutOverrides>,
    pub menu: Option<MenuOverrides>,
    pub table: Option<TableOverrides>,
    pub button: Option<ButtonOverrides>,
    pub input: Option<InputOverrides>,
    pub select: Option<SelectOverrides>,
    pub card: Option<CardOverrides>,
    pub alert: Option<AlertOverrides>,
}

impl ComponentOverrides {
    fn apply(&self, target: &mut ComponentTokens) {
        if let Some(layout) = &self.layout {
            layout.apply(&mut target.layout);
        }
        if let Some(menu) = &self.menu {
            menu.apply(&mut target.menu);
        }
        if let Some(table) = &self.table {
            table.apply(&mut target.table);
        }
        if let Some(button) = &self.button {
            button.apply(&mut target.button);
        }
        if let Some(input) = &self.input {
            input.apply(&mut target.input);
        }
        if let Some(select) = &self.select {
            select.apply(&mut target.select);
        }
        if let Some(card) = &self.card {
            card.apply(&mut target.card);
        }
        if let Some(alert) = &self.alert {
            alert.apply(&mut target.alert);
        }
    }
}

/// A fixed override set merged onto the baseline by [`Theme::with_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ThemeOverrides {
    pub token: GlobalOverrides,
    pub components: ComponentOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary_override() -> ThemeOverrides {
        ThemeOverrides {
            token: GlobalOverrides {
                color_primary: Some("#fe161e".to_string()),
                ..GlobalOverrides::default()
            },
            ..ThemeOverrides::default()
        }
    }

    #[test]
    fn override_wins_and_siblings_keep_baseline_values() {
        let theme = Theme::default().with_overrides(&primary_override());
        assert_eq!(theme.token.color_primary, "#fe161e");
        assert_eq!(
            theme.token.color_link_hover,
            GlobalTokens::default().color_link_hover
        );
    }

    #[test]
    fn component_section_merge_is_deep_not_replace() {
        let overrides = ThemeOverrides {
            components: ComponentOverrides {
                table: Some(TableOverrides {
                    header_bg: Some("#4f4d4e".to_string()),
                    ..TableOverrides::default()
                }),
                ..ComponentOverrides::default()
            },
            ..ThemeOverrides::default()
        };
        let theme = Theme::default().with_overrides(&overrides);
        assert_eq!(theme.components.table.header_bg, "#4f4d4e");
        assert_eq!(
            theme.components.table.row_hover_bg,
            TableTokens::default().row_hover_bg
        );
    }

    #[test]
    fn unmentioned_sections_pass_through_unchanged() {
        let theme = Theme::default().with_overrides(&primary_override());
        assert_eq!(theme.components.alert, AlertTokens::default());
        assert_eq!(theme.components.layout, LayoutTokens::default());
    }

    #[test]
    fn merge_is_idempotent() {
        let overrides = primary_override();
        let once = Theme::default().with_overrides(&overrides);
        let twice = Theme::default()
            .with_overrides(&overrides)
            .with_overrides(&overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn css_variables_cover_global_and_component_tokens() {
        let theme = Theme::default().with_overrides(&primary_override());
        let css = theme.css_variables();
        assert!(css.contains("--sv-token-color-primary: #fe161e;"));
        assert!(css.contains("--sv-components-layout-header-height: 64px;"));
        assert!(css.contains("--sv-components-table-header-bg: #fafafa;"));
    }

    #[test]
    fn deserializing_ignores_unknown_keys() {
        let theme: Theme = serde_json::from_str(
            r##"{"token":{"color-primary":"#123456","color-sparkline":"#fff"}}"##,
        )
        .expect("theme with unknown key");
        assert_eq!(theme.token.color_primary, "#123456");
        assert_eq!(theme.token.color_link, GlobalTokens::default().color_link);
    }
}
