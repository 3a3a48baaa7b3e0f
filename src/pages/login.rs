use crate::browser::driver::PageDriver;
use crate::browser::error::DriverError;
use crate::browser::selector::SelectorHint;
use crate::cli::config::SuiteConfig;
use crate::data::provider::Credential;

const LOGIN_FORM: &str = "login-form";
const LOGIN_ERROR: &str = "[data-test=\"login-error\"]";

/// Page object for the login surface.
pub struct LoginPage<'a> {
    driver: &'a mut PageDriver,
    config: &'a SuiteConfig,
}

impl<'a> LoginPage<'a> {
    pub fn new(driver: &'a mut PageDriver, config: &'a SuiteConfig) -> Self {
        LoginPage { driver, config }
    }

    /// Navigate to the login surface and wait for it to settle.
    pub fn open(&mut self) -> Result<(), DriverError> {
        self.driver.navigate(&self.config.login_url())?;
        self.driver.wait_idle(self.config.timeouts.navigation_ms)
    }

    /// Submit the credential and wait for the resulting navigation to
    /// settle. Whether login actually succeeded is observed through
    /// `is_displayed` afterwards; a rejected login stays on this surface.
    pub fn login(&mut self, credential: &Credential) -> Result<(), DriverError> {
        self.driver.fill(
            &SelectorHint::input("Username", Some(LOGIN_FORM)),
            &credential.username,
        )?;
        self.driver.fill(
            &SelectorHint::input("Password", Some(LOGIN_FORM)),
            &credential.password,
        )?;
        self.driver.click(&SelectorHint::button("Log in"))?;
        self.driver.wait_idle(self.config.timeouts.navigation_ms)
    }

    /// Whether the browser is still on the login surface.
    pub fn is_displayed(&mut self) -> Result<bool, DriverError> {
        let url = self.driver.current_url()?;
        Ok(self.config.is_login_url(&url))
    }

    /// The trimmed visible login error, or None when no error shows within
    /// the action timeout. Absence is not an error.
    pub fn validation_error(&mut self) -> Result<Option<String>, DriverError> {
        visible_error(self.driver, LOGIN_ERROR, self.config.timeouts.action_ms)
    }

    pub fn current_url(&mut self) -> Result<String, DriverError> {
        self.driver.current_url()
    }
}

/// Shared error-lookup used by login and pet pages: bounded wait for an
/// error element, trimmed text when it shows, None when the wait expires.
pub(crate) fn visible_error(
    driver: &mut PageDriver,
    selector: &str,
    timeout_ms: u64,
) -> Result<Option<String>, DriverError> {
    match driver.wait_for_visible(selector, timeout_ms) {
        Ok(()) => {
            let text = driver.query_text(selector)?;
            Ok(text.map(|t| t.trim().to_string()))
        }
        Err(DriverError::WaitTimeout { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
