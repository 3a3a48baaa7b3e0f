use crate::browser::driver::PageDriver;
use crate::browser::error::DriverError;
use crate::browser::selector::SelectorHint;
use crate::cli::config::SuiteConfig;
use crate::pages::wait_for_url;

const HEADING: &str = "[data-test=\"app-title\"]";

/// Page object for the application home screen (post-login landing).
pub struct HomePage<'a> {
    driver: &'a mut PageDriver,
    config: &'a SuiteConfig,
}

impl<'a> HomePage<'a> {
    pub fn new(driver: &'a mut PageDriver, config: &'a SuiteConfig) -> Self {
        HomePage { driver, config }
    }

    /// Navigate to the application root and wait for it to settle.
    pub fn open(&mut self) -> Result<(), DriverError> {
        self.driver.navigate(&self.config.url("/"))?;
        self.driver.wait_idle(self.config.timeouts.navigation_ms)
    }

    /// Trimmed text of the primary heading.
    pub fn heading_text(&mut self) -> Result<Option<String>, DriverError> {
        let text = self.driver.query_text(HEADING)?;
        Ok(text.map(|t| t.trim().to_string()))
    }

    /// Open the pets listing through the navigation menu and block until
    /// the pets URL is reached.
    pub fn open_pets(&mut self) -> Result<(), DriverError> {
        self.driver.click(&SelectorHint::link("Pets"))?;
        wait_for_url(
            self.driver,
            self.config.timeouts.navigation_ms,
            "pets listing URL",
            |url| url.contains("/pets"),
        )?;
        self.driver.wait_idle(self.config.timeouts.navigation_ms)
    }

    /// Sign out through the user menu and block until the login surface
    /// is back.
    pub fn logout(&mut self) -> Result<(), DriverError> {
        self.driver.click(&SelectorHint::button("Sign out"))?;
        let login_path = self.config.login_path.clone();
        wait_for_url(
            self.driver,
            self.config.timeouts.navigation_ms,
            "return to the login surface",
            |url| url.contains(login_path.trim_matches('/')),
        )?;
        Ok(())
    }

    pub fn current_url(&mut self) -> Result<String, DriverError> {
        self.driver.current_url()
    }
}
