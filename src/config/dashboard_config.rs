// ==========================================
// SpaceX 发射记录驾驶舱 - 运行配置
// ==========================================
// 来源: 内置默认值 → 环境变量覆写
// 默认值与参考部署一致（无环境变量时行为不变）
// ==========================================

use crate::i18n;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// 环境变量名
pub mod env_keys {
    /// 数据文件路径
    pub const DATA_PATH: &str = "SPACEX_DASH_DATA";
    /// 监听地址（host:port）
    pub const BIND_ADDR: &str = "SPACEX_DASH_ADDR";
    /// 界面语言（en / zh-CN）
    pub const LOCALE: &str = "SPACEX_DASH_LOCALE";
    /// JSON 日志开关
    pub const LOG_JSON: &str = "SPACEX_DASH_LOG_JSON";
}

pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// SliderConfig - 载荷滑块固定刻度
// ==========================================
// 滑块边界是固定配置,与数据集极值无关;默认选中区间取数据集极值,不做裁剪
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// 刻度标签间隔
    pub mark_step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            mark_step: 2_000.0,
        }
    }
}

// ==========================================
// DashboardConfig
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub locale: String,
    pub log_json: bool,
    pub slider: SliderConfig,
    /// 读取期间的告警（日志系统初始化后输出）
    pub warnings: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8050)),
            locale: i18n::DEFAULT_LOCALE.to_string(),
            log_json: false,
            slider: SliderConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// 从进程环境变量读取
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取（未设置的键使用默认值）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_empty(lookup(env_keys::DATA_PATH)) {
            config.data_path = PathBuf::from(path);
        }

        if let Some(addr) = non_empty(lookup(env_keys::BIND_ADDR)) {
            config.bind_addr = addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: env_keys::BIND_ADDR.to_string(),
                    value: addr.clone(),
                    message: e.to_string(),
                }
            })?;
        }

        if let Some(locale) = non_empty(lookup(env_keys::LOCALE)) {
            if i18n::is_supported(&locale) {
                config.locale = locale;
            } else {
                config.warnings.push(format!(
                    "不支持的界面语言 {}，回退为 {}",
                    locale,
                    i18n::DEFAULT_LOCALE
                ));
            }
        }

        if let Some(flag) = non_empty(lookup(env_keys::LOG_JSON)) {
            config.log_json = is_true(&flag);
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}
