//! 設定ファイルと更新プランの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    UpdaterSettings,
};
use crate::plan::UpdatePlan;

/// ディレクトリ内で自動的に探す設定ファイル名
pub const SETTINGS_FILE_NAME: &str = ".translation-updater.json";

/// ディレクトリから設定を読み込む
///
/// `.translation-updater.json` ファイルを探して読み込む
///
/// # Arguments
/// * `dir` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub fn load_from_dir(dir: &Path) -> Result<Option<UpdaterSettings>, ConfigError> {
    let config_path = dir.join(SETTINGS_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_settings_file(&config_path).map(Some)
}

/// 指定されたパスの設定ファイルを読み込む
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_settings_file(path: &Path) -> Result<UpdaterSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let settings: UpdaterSettings = serde_json::from_str(&content)?;

    Ok(settings)
}

/// 更新プランを読み込み、検証する
///
/// # Arguments
/// * `path` - プランファイルのパス
/// * `key_separator` - `set` 操作のパスを検証するための区切り文字
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_plan_file(path: &Path, key_separator: &str) -> Result<UpdatePlan, ConfigError> {
    tracing::debug!("Loading update plan from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let plan: UpdatePlan = serde_json::from_str(&content)?;
    plan.validate(key_separator).map_err(ConfigError::ValidationErrors)?;

    Ok(plan)
}
