// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文,仅用于界面文案;图表标题不翻译
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 不修改全局 locale,调用方显式传入,避免并发会话互相干扰
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 已加载的语言列表
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// 是否为已加载的语言
pub fn is_supported(locale: &str) -> bool {
    available_locales().iter().any(|l| *l == locale)
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use spacex_launch_dashboard::i18n::t;
/// let msg = t("dashboard.heading", "en");
/// ```
pub fn t(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use spacex_launch_dashboard::i18n::t_with_args;
/// let msg = t_with_args("dashboard.slider_mark", "en", &[("value", "2000")]);
/// ```
pub fn t_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(key, locale);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("en"));
        assert!(is_supported("zh-CN"));
        assert!(!is_supported("xx"));
    }

    #[test]
    fn test_translate_simple() {
        assert_eq!(t("dashboard.heading", "en"), "SpaceX Launch Records Dashboard");
        assert_eq!(t("dashboard.heading", "zh-CN"), "SpaceX 发射记录驾驶舱");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_with_args("dashboard.slider_mark", "en", &[("value", "2000")]);
        assert_eq!(msg, "2000 Kg");

        let msg = t_with_args("dashboard.slider_mark", "zh-CN", &[("value", "4000")]);
        assert!(msg.contains("4000"));
    }
}
