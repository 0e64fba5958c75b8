//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。

use std::{env, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8000;

/// デフォルトのストア接続先
const DEFAULT_DATABASE_URL: &str = "postgres://postgres@127.0.0.1:5432/todos";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TODO_PORT は有効なポート番号である必要があります: {value:?}")]
    InvalidPort {
        value:  String,
        #[source]
        source: ParseIntError,
    },

    #[error("STORE_BACKEND は postgres または memory である必要があります: {0:?}")]
    UnknownStoreBackend(String),
}

/// 永続化バックエンド
///
/// `STORE_BACKEND` 環境変数で切り替える:
/// - `postgres`: PostgreSQL（デフォルト）
/// - `memory`: プロセス内メモリ（開発・デモ用。再起動でデータは消える）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownStoreBackend(other.to_string())),
        }
    }
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host:          String,
    /// ポート番号
    pub port:          u16,
    /// 永続化バックエンド
    pub store_backend: StoreBackend,
    /// ストア接続 URL（アドレス + データベース名）
    pub database_url:  String,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("TODO_PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let store_backend = match lookup("STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => StoreBackend::default(),
        };

        Ok(Self {
            host: lookup("TODO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            store_backend,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }
}
