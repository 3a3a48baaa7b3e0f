use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::browser::error::DriverError;
use crate::browser::selector::SelectorHint;

const POLL_INTERVAL_MS: u64 = 100;

/// Options for launching a browsing context via the Playwright helper.
///
/// Each launched driver owns one isolated context (its own cookies and
/// storage). `storage_state` seeds the context from a persisted session
/// snapshot so the page starts out already signed in.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub script: String,
    pub browser: String,
    pub headed: bool,
    pub storage_state: Option<String>,
    pub trace: Option<String>,
    pub video: Option<String>,
    pub screenshot: Option<String>,
}

impl LaunchOptions {
    pub fn new(script: &str, browser: &str) -> Self {
        LaunchOptions {
            script: script.to_string(),
            browser: browser.to_string(),
            headed: false,
            storage_state: None,
            trace: None,
            video: None,
            screenshot: None,
        }
    }

    pub fn with_storage_state(mut self, path: &str) -> Self {
        self.storage_state = Some(path.to_string());
        self
    }

    pub fn with_headed(mut self, headed: bool) -> Self {
        self.headed = headed;
        self
    }

    /// Argument vector passed to `node`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.script.clone(), "--browser".into(), self.browser.clone()];
        if self.headed {
            args.push("--headed".into());
        }
        if let Some(ref path) = self.storage_state {
            args.push("--storage-state".into());
            args.push(path.clone());
        }
        if let Some(ref policy) = self.trace {
            args.push("--trace".into());
            args.push(policy.clone());
        }
        if let Some(ref policy) = self.video {
            args.push("--video".into());
            args.push(policy.clone());
        }
        if let Some(ref policy) = self.screenshot {
            args.push("--screenshot".into());
            args.push(policy.clone());
        }
        args
    }
}

/// Request sent to the Playwright helper over stdin (one JSON line).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BrowserRequest {
    Navigate {
        cmd: &'static str,
        url: String,
    },
    Action {
        cmd: &'static str,
        action: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        selector: Option<SelectorHint>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_ms: Option<u64>,
    },
    Query {
        cmd: &'static str,
        selector: String,
    },
    StorageState {
        cmd: &'static str,
    },
    Screenshot {
        cmd: &'static str,
        path: String,
    },
    CurrentUrl {
        cmd: &'static str,
    },
    Quit {
        cmd: &'static str,
    },
}

impl BrowserRequest {
    pub fn navigate(url: &str) -> Self {
        BrowserRequest::Navigate {
            cmd: "navigate",
            url: url.to_string(),
        }
    }

    pub fn fill(selector: &SelectorHint, value: &str) -> Self {
        BrowserRequest::Action {
            cmd: "action",
            action: "fill".into(),
            selector: Some(selector.clone()),
            value: Some(value.to_string()),
            duration_ms: None,
        }
    }

    pub fn click(selector: &SelectorHint) -> Self {
        BrowserRequest::Action {
            cmd: "action",
            action: "click".into(),
            selector: Some(selector.clone()),
            value: None,
            duration_ms: None,
        }
    }

    pub fn select_option(selector: &SelectorHint, value: &str) -> Self {
        BrowserRequest::Action {
            cmd: "action",
            action: "select".into(),
            selector: Some(selector.clone()),
            value: Some(value.to_string()),
            duration_ms: None,
        }
    }

    pub fn check(selector: &SelectorHint) -> Self {
        BrowserRequest::Action {
            cmd: "action",
            action: "check".into(),
            selector: Some(selector.clone()),
            value: None,
            duration_ms: None,
        }
    }

    pub fn set_files(selector: &SelectorHint, path: &str) -> Self {
        BrowserRequest::Action {
            cmd: "action",
            action: "set_files".into(),
            selector: Some(selector.clone()),
            value: Some(path.to_string()),
            duration_ms: None,
        }
    }

    pub fn wait_idle(duration_ms: u64) -> Self {
        BrowserRequest::Action {
            cmd: "action",
            action: "wait_idle".into(),
            selector: None,
            value: None,
            duration_ms: Some(duration_ms),
        }
    }

    pub fn query_text(selector: &str) -> Self {
        BrowserRequest::Query {
            cmd: "query_text",
            selector: selector.to_string(),
        }
    }

    pub fn query_visible(selector: &str) -> Self {
        BrowserRequest::Query {
            cmd: "query_visible",
            selector: selector.to_string(),
        }
    }

    pub fn query_enabled(selector: &str) -> Self {
        BrowserRequest::Query {
            cmd: "query_enabled",
            selector: selector.to_string(),
        }
    }

    pub fn query_count(selector: &str) -> Self {
        BrowserRequest::Query {
            cmd: "query_count",
            selector: selector.to_string(),
        }
    }

    pub fn storage_state() -> Self {
        BrowserRequest::StorageState { cmd: "storage_state" }
    }

    pub fn screenshot(path: &str) -> Self {
        BrowserRequest::Screenshot {
            cmd: "screenshot",
            path: path.to_string(),
        }
    }

    pub fn current_url() -> Self {
        BrowserRequest::CurrentUrl { cmd: "current_url" }
    }

    pub fn quit() -> Self {
        BrowserRequest::Quit { cmd: "quit" }
    }
}

/// Response received from the Playwright helper over stdout (one JSON line).
#[derive(Debug, Deserialize)]
pub struct BrowserResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ready: Option<bool>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub state: Option<Value>,
}

/// One isolated browsing context backed by a Playwright helper process.
///
/// Launches a long-lived Node.js process that keeps a browser context open.
/// Commands are sent as NDJSON over stdin, responses read from stdout.
/// Dropping the driver closes the context, so every exit path of a test
/// releases its browser resources.
pub struct PageDriver {
    child: Child,
    stdin: std::process::ChildStdin,
    reader: BufReader<std::process::ChildStdout>,
    current_url: Option<String>,
}

impl PageDriver {
    /// Launch a new browsing context by spawning the helper script.
    pub fn launch(options: &LaunchOptions) -> Result<Self, DriverError> {
        let mut child = Command::new("node")
            .args(options.to_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DriverError::SubprocessSpawn {
                script: options.script.clone(),
                source: e,
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            DriverError::SessionIO("Failed to capture stdin of the Playwright helper".into())
        })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            DriverError::SessionIO("Failed to capture stdout of the Playwright helper".into())
        })?;

        let mut reader = BufReader::new(stdout);

        // Wait for the ready signal
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| DriverError::SessionIO(format!("Failed to read ready signal: {}", e)))?;

        let response: BrowserResponse =
            serde_json::from_str(line.trim()).map_err(|e| DriverError::JsonParse {
                context: "helper ready signal".into(),
                source: e,
            })?;

        if !response.ok || response.ready != Some(true) {
            return Err(DriverError::SessionProtocol {
                command: "launch".into(),
                error: "Did not receive ready signal from the Playwright helper".into(),
            });
        }

        Ok(PageDriver {
            child,
            stdin,
            reader,
            current_url: None,
        })
    }

    /// Send a request and read the response.
    fn send(&mut self, request: &BrowserRequest) -> Result<BrowserResponse, DriverError> {
        let json = serde_json::to_string(request).map_err(|e| DriverError::JsonSerialize {
            context: "BrowserRequest".into(),
            source: e,
        })?;

        writeln!(self.stdin, "{}", json)
            .map_err(|e| DriverError::SessionIO(format!("Failed to write to helper stdin: {}", e)))?;

        self.stdin
            .flush()
            .map_err(|e| DriverError::SessionIO(format!("Failed to flush helper stdin: {}", e)))?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(|e| DriverError::SessionIO(format!("Failed to read from helper stdout: {}", e)))?;

        if line.trim().is_empty() {
            return Err(DriverError::SessionIO(
                "Empty response from the Playwright helper (process may have died)".into(),
            ));
        }

        let response: BrowserResponse =
            serde_json::from_str(line.trim()).map_err(|e| DriverError::JsonParse {
                context: "helper response".into(),
                source: e,
            })?;

        Ok(response)
    }

    /// Send a request and verify it succeeded.
    fn send_ok(
        &mut self,
        request: &BrowserRequest,
        command_name: &str,
    ) -> Result<BrowserResponse, DriverError> {
        let response = self.send(request)?;
        if !response.ok {
            return Err(DriverError::SessionProtocol {
                command: command_name.into(),
                error: response.error.unwrap_or_else(|| "Unknown error".into()),
            });
        }
        Ok(response)
    }

    /// Navigate to a URL and wait for the load to settle.
    pub fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        let request = BrowserRequest::navigate(url);
        self.send_ok(&request, "navigate")?;
        self.current_url = Some(url.to_string());
        Ok(())
    }

    /// Fill an input element.
    pub fn fill(&mut self, selector: &SelectorHint, value: &str) -> Result<(), DriverError> {
        let request = BrowserRequest::fill(selector, value);
        self.send_ok(&request, "fill")?;
        Ok(())
    }

    /// Click an element.
    pub fn click(&mut self, selector: &SelectorHint) -> Result<(), DriverError> {
        let request = BrowserRequest::click(selector);
        self.send_ok(&request, "click")?;
        Ok(())
    }

    /// Select an option in a dropdown.
    pub fn select_option(&mut self, selector: &SelectorHint, value: &str) -> Result<(), DriverError> {
        let request = BrowserRequest::select_option(selector, value);
        self.send_ok(&request, "select")?;
        Ok(())
    }

    /// Check a checkbox.
    pub fn check(&mut self, selector: &SelectorHint) -> Result<(), DriverError> {
        let request = BrowserRequest::check(selector);
        self.send_ok(&request, "check")?;
        Ok(())
    }

    /// Attach a file to a file input.
    pub fn set_files(&mut self, selector: &SelectorHint, path: &str) -> Result<(), DriverError> {
        let request = BrowserRequest::set_files(selector, path);
        self.send_ok(&request, "set_files")?;
        Ok(())
    }

    /// Wait for the page network to go idle, bounded by `duration_ms`.
    pub fn wait_idle(&mut self, duration_ms: u64) -> Result<(), DriverError> {
        let request = BrowserRequest::wait_idle(duration_ms);
        self.send_ok(&request, "wait_idle")?;
        Ok(())
    }

    /// Get the current URL from the browser.
    pub fn current_url(&mut self) -> Result<String, DriverError> {
        let request = BrowserRequest::current_url();
        let response = self.send_ok(&request, "current_url")?;
        let url = response.url.ok_or_else(|| DriverError::SessionProtocol {
            command: "current_url".into(),
            error: "No URL in current_url response".into(),
        })?;
        self.current_url = Some(url.clone());
        Ok(url)
    }

    /// Query the text content of an element by CSS selector.
    /// Returns None if the element is not found.
    pub fn query_text(&mut self, selector: &str) -> Result<Option<String>, DriverError> {
        let request = BrowserRequest::query_text(selector);
        let response = self.send_ok(&request, "query_text")?;
        Ok(response.text)
    }

    /// Query whether an element is visible by CSS selector.
    pub fn query_visible(&mut self, selector: &str) -> Result<bool, DriverError> {
        let request = BrowserRequest::query_visible(selector);
        let response = self.send_ok(&request, "query_visible")?;
        Ok(response.visible.unwrap_or(false))
    }

    /// Query whether an element is enabled (no `disabled` attribute).
    pub fn query_enabled(&mut self, selector: &str) -> Result<bool, DriverError> {
        let request = BrowserRequest::query_enabled(selector);
        let response = self.send_ok(&request, "query_enabled")?;
        Ok(response.enabled.unwrap_or(false))
    }

    /// Query the count of elements matching a CSS selector.
    pub fn query_count(&mut self, selector: &str) -> Result<u32, DriverError> {
        let request = BrowserRequest::query_count(selector);
        let response = self.send_ok(&request, "query_count")?;
        Ok(response.count.unwrap_or(0))
    }

    /// Dump the context's cookies and origin storage in Playwright's
    /// `storageState` format.
    pub fn storage_state(&mut self) -> Result<Value, DriverError> {
        let request = BrowserRequest::storage_state();
        let response = self.send_ok(&request, "storage_state")?;
        response.state.ok_or_else(|| DriverError::SessionProtocol {
            command: "storage_state".into(),
            error: "No state in storage_state response".into(),
        })
    }

    /// Take a screenshot.
    pub fn screenshot(&mut self, path: &str) -> Result<(), DriverError> {
        let request = BrowserRequest::screenshot(path);
        self.send_ok(&request, "screenshot")?;
        Ok(())
    }

    /// Poll until an element is enabled, bounded by `timeout_ms`.
    pub fn wait_for_enabled(&mut self, selector: &str, timeout_ms: u64) -> Result<(), DriverError> {
        self.poll(timeout_ms, &format!("'{}' to become enabled", selector), |d| {
            d.query_enabled(selector)
        })
    }

    /// Poll until an element is visible, bounded by `timeout_ms`.
    pub fn wait_for_visible(&mut self, selector: &str, timeout_ms: u64) -> Result<(), DriverError> {
        self.poll(timeout_ms, &format!("'{}' to become visible", selector), |d| {
            d.query_visible(selector)
        })
    }

    /// Poll until an element is gone from the page, bounded by `timeout_ms`.
    pub fn wait_for_hidden(&mut self, selector: &str, timeout_ms: u64) -> Result<(), DriverError> {
        self.poll(timeout_ms, &format!("'{}' to disappear", selector), |d| {
            Ok(!d.query_visible(selector)?)
        })
    }

    fn poll(
        &mut self,
        timeout_ms: u64,
        what: &str,
        mut probe: impl FnMut(&mut Self) -> Result<bool, DriverError>,
    ) -> Result<(), DriverError> {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        loop {
            if probe(self)? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(DriverError::WaitTimeout {
                    what: what.to_string(),
                    timeout_ms,
                });
            }
            std::thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        }
    }

    /// Get the last known URL (cached, no browser call).
    pub fn last_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Quit the browsing context.
    pub fn quit(&mut self) -> Result<(), DriverError> {
        let request = BrowserRequest::quit();
        // Best-effort quit, the process may already be gone
        let _ = self.send(&request);
        let _ = self.child.wait();
        Ok(())
    }
}

impl Drop for PageDriver {
    fn drop(&mut self) {
        // Best-effort cleanup
        let _ = self.quit();
    }
}
