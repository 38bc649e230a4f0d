use crate::domain::{LinkStyle, SheetLayout};
use crate::errors::{CollectorError, CollectorResult};

pub const DEFAULT_SHEET_NAME: &str = "압구정_뉴스";
pub const DEFAULT_SERVICE_ACCOUNT_PATH: &str = "service_account.json";
pub const DEFAULT_DEDUP_WINDOW: usize = 2000;

#[derive(Debug, Clone)]
pub struct Config {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub service_account_path: String,
    /// Number of most-recent sheet rows consulted for dedup.
    pub dedup_window: usize,
    pub layout: SheetLayout,
    pub link_style: LinkStyle,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> CollectorResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let spreadsheet_id = std::env::var("SPREADSHEET_ID")
            .map_err(|_| CollectorError::MissingEnvVar("SPREADSHEET_ID".to_string()))?;

        let sheet_name =
            std::env::var("SHEET_NAME").unwrap_or_else(|_| DEFAULT_SHEET_NAME.to_string());

        let service_account_path = std::env::var("SERVICE_ACCOUNT_PATH")
            .unwrap_or_else(|_| DEFAULT_SERVICE_ACCOUNT_PATH.to_string());

        let dedup_window = match std::env::var("DEDUP_WINDOW") {
            Ok(raw) => raw.parse().map_err(|_| {
                CollectorError::Config(format!("DEDUP_WINDOW is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_DEDUP_WINDOW,
        };

        let layout = match std::env::var("SHEET_LAYOUT") {
            Ok(raw) => raw.parse().map_err(CollectorError::Config)?,
            Err(_) => SheetLayout::Basic,
        };

        let link_style = match std::env::var("SHEET_LINK_STYLE") {
            Ok(raw) => raw.parse().map_err(CollectorError::Config)?,
            Err(_) => LinkStyle::Plain,
        };

        Ok(Self {
            spreadsheet_id,
            sheet_name,
            service_account_path,
            dedup_window,
            layout,
            link_style,
        })
    }
}
