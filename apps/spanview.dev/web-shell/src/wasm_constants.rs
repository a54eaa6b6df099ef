pub(crate) const SHELL_ROOT_ID: &str = "spanview-shell-root";
pub(crate) const SHELL_STATUS_ID: &str = "spanview-shell-status";
pub(crate) const SHELL_HEADER_ID: &str = "spanview-shell-header";
pub(crate) const SHELL_NAV_ID: &str = "spanview-shell-nav";
pub(crate) const SHELL_MAIN_ID: &str = "spanview-shell-main";
pub(crate) const SHELL_FOOTER_ID: &str = "spanview-shell-footer";
pub(crate) const SHELL_THEME_STYLE_ID: &str = "spanview-shell-theme";
pub(crate) const CONFIG_SCRIPTS_GLOBAL: &str = "__SPANVIEW_CONFIG_SCRIPTS__";
pub(crate) const BOOT_FAIL_QUERY_FLAG: &str = "sv_boot_fail=1";
pub(crate) const DOM_READY_BUDGET_MS: u64 = 450;
pub(crate) const NAV_LINKS: [(&str, &str); 5] = [
    ("Search", "/search"),
    ("Dependencies", "/dependencies"),
    ("Deep Dependencies", "/deep-dependencies"),
    ("Quality Metrics", "/quality-metrics"),
    ("Monitor", "/monitor"),
];
