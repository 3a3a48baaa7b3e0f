use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "petstore-e2e",
    version,
    about = "End-to-end UI test suite for the Petstore training application"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Target application base URL (overrides config file and PETSTORE_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to config file (default: petstore-e2e.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the suite: global setup once, then the test scenarios
    Run {
        /// Only run scenarios carrying this tag (e.g. smoke, crud, negative)
        #[arg(long)]
        tag: Option<String>,

        /// Number of parallel test workers
        #[arg(long)]
        workers: Option<usize>,

        /// Run the browser headed instead of headless
        #[arg(long, default_value_t = false)]
        headed: bool,

        /// Report format: console or junit
        #[arg(long, default_value = "console")]
        format: String,

        /// Report output path (default: stdout for console, report.xml for junit)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run global setup alone and print the outcome
    Setup,

    /// List registered scenarios and their tags
    List,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `petstore-e2e.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Target application root. Env PETSTORE_BASE_URL overrides this.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the login surface, relative to the base URL
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Expected primary heading text on the application root
    #[serde(default = "default_app_title")]
    pub app_title: String,

    /// Where global setup persists the session snapshot
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Playwright helper script spawned per browsing context
    #[serde(default = "default_driver_script")]
    pub driver_script: String,

    /// Browser engine: chromium, firefox, or webkit
    #[serde(default = "default_browser")]
    pub browser: String,

    #[serde(default)]
    pub headed: bool,

    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default)]
    pub capture: CaptureConfig,

    #[serde(default)]
    pub timeouts: TimeoutConfig,

    #[serde(default = "default_users_fixture")]
    pub users_fixture: String,

    #[serde(default = "default_invalid_pet_fixture")]
    pub invalid_pet_fixture: String,

    /// Run log path (JSONL)
    #[serde(default = "default_run_log")]
    pub run_log: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            app_title: default_app_title(),
            snapshot_path: default_snapshot_path(),
            driver_script: default_driver_script(),
            browser: default_browser(),
            headed: false,
            workers: default_workers(),
            capture: CaptureConfig::default(),
            timeouts: TimeoutConfig::default(),
            users_fixture: default_users_fixture(),
            invalid_pet_fixture: default_invalid_pet_fixture(),
            run_log: default_run_log(),
        }
    }
}

/// Trace/video/screenshot capture policy, forwarded to the Playwright
/// helper. Values follow the engine's own vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_retain_on_failure")]
    pub trace: String,

    #[serde(default = "default_off")]
    pub video: String,

    #[serde(default = "default_only_on_failure")]
    pub screenshot: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            trace: default_retain_on_failure(),
            video: default_off(),
            screenshot: default_only_on_failure(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Bound for element waits, e.g. submit-button enablement polling
    #[serde(default = "default_action_timeout")]
    pub action_ms: u64,

    /// Bound for navigation settles
    #[serde(default = "default_navigation_timeout")]
    pub navigation_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            action_ms: default_action_timeout(),
            navigation_ms: default_navigation_timeout(),
        }
    }
}

impl SuiteConfig {
    /// Join a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn login_url(&self) -> String {
        self.url(&self.login_path)
    }

    /// Whether a URL points at the login surface. The login path must sit
    /// on a `/` boundary so e.g. `/xauth/login` does not match `auth/login`.
    pub fn is_login_url(&self, url: &str) -> bool {
        url.trim_end_matches('/')
            .strip_suffix(self.login_path.trim_matches('/'))
            .is_some_and(|head| head.ends_with('/'))
    }
}

// Serde default helpers
fn default_base_url() -> String {
    "http://localhost:4200".to_string()
}
fn default_login_path() -> String {
    "/auth/login".to_string()
}
fn default_app_title() -> String {
    "Petstore".to_string()
}
fn default_snapshot_path() -> String {
    crate::session::snapshot::AUTH_STATE_PATH.to_string()
}
fn default_driver_script() -> String {
    "node/playwright_server.js".to_string()
}
fn default_browser() -> String {
    "chromium".to_string()
}
fn default_workers() -> usize {
    4
}
fn default_retain_on_failure() -> String {
    "retain-on-failure".to_string()
}
fn default_off() -> String {
    "off".to_string()
}
fn default_only_on_failure() -> String {
    "only-on-failure".to_string()
}
fn default_action_timeout() -> u64 {
    10_000
}
fn default_navigation_timeout() -> u64 {
    30_000
}
fn default_users_fixture() -> String {
    "fixtures/users.json".to_string()
}
fn default_invalid_pet_fixture() -> String {
    "fixtures/invalid-pet.json".to_string()
}
fn default_run_log() -> String {
    "petstore-run.jsonl".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or
/// malformed, then applies the PETSTORE_BASE_URL environment override.
pub fn load_config(path: Option<&str>) -> SuiteConfig {
    let config_path = path.unwrap_or("petstore-e2e.yaml");
    let mut config: SuiteConfig = match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => SuiteConfig::default(),
    };

    if let Ok(url) = std::env::var("PETSTORE_BASE_URL") {
        if !url.is_empty() {
            config.base_url = url;
        }
    }

    config
}

/// Build the driver launch options for one isolated context.
pub fn launch_options(config: &SuiteConfig, storage_state: Option<&str>) -> crate::browser::driver::LaunchOptions {
    let mut options =
        crate::browser::driver::LaunchOptions::new(&config.driver_script, &config.browser)
            .with_headed(config.headed);
    if let Some(path) = storage_state {
        options = options.with_storage_state(path);
    }
    options.trace = Some(config.capture.trace.clone());
    options.video = Some(config.capture.video.clone());
    options.screenshot = Some(config.capture.screenshot.clone());
    options
}
