//! 程序配置
//!
//! 所有配置都来自环境变量，本地开发时可以放到 `.env` 文件中。

use color_eyre::eyre::{eyre, Context};
use color_eyre::{Help, Result};
use std::str::FromStr;
use std::sync::Arc;

/// PostgreSQL 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 可通过环境变量 `DB_HOST` 来调整
    pub host: String,

    /// 可通过环境变量 `DB_PORT` 来调整
    pub port: u16,

    /// 可通过环境变量 `DB_USERNAME` 来调整
    pub username: String,

    /// 可通过环境变量 `DB_PASSWORD` 来调整
    pub password: String,

    /// 可通过环境变量 `DB_NAME` 来调整
    pub name: String,

    /// 连接池最大连接数
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,

    /// Web 服务监听端口，环境变量 `PORT`
    pub port: u16,

    /// 允许跨域访问的前端地址，环境变量 `CLIENT_URL`
    pub client_url: String,

    /// 分页查询时每页的最大条数，环境变量 `MAX_PAGE_LIMIT`
    ///
    /// 超过这个值的 `limit` 会被截断为这个值
    pub max_page_limit: u32,
}

impl AppConfig {
    /// 从环境变量中加载配置
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，没有.env文件也没关系
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("Can not load .env file");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 使用自定义的查找函数构建配置，`lookup` 返回 `None` 时使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(AppConfig {
            database: DatabaseConfig {
                host: text("DB_HOST", "localhost"),
                port: parse_or(&lookup, "DB_PORT", 5432)?,
                username: text("DB_USERNAME", "postgres"),
                password: text("DB_PASSWORD", ""),
                name: text("DB_NAME", "postgres"),
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            },
            port: parse_or(&lookup, "PORT", 3000)?,
            client_url: text("CLIENT_URL", "http://localhost:5173"),
            max_page_limit: positive(parse_or(&lookup, "MAX_PAGE_LIMIT", 100)?, "MAX_PAGE_LIMIT")?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value {raw:?} for {key}"))
            .suggestion(format!("检查环境变量 {key} 的取值")),
    }
}

fn positive(value: u32, key: &str) -> Result<u32> {
    if value == 0 {
        return Err(eyre!("{key} must be greater than 0")).suggestion(format!("设置 {key} 为正整数"));
    }
    Ok(value)
}
