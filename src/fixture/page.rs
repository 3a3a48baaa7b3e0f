use std::path::Path;

use crate::browser::driver::PageDriver;
use crate::cli::config::{SuiteConfig, launch_options};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::pets::PetsPage;
use crate::session::snapshot::SessionSnapshot;
use crate::suite::error::SuiteError;

/// Acquire a browsing context seeded from the persisted session snapshot,
/// yield its page to `f`, and close the context on every exit path.
///
/// Each call launches a private context; contexts are never shared across
/// tests even though they load the same snapshot file (write-once,
/// many-reader). Fails fast when the snapshot is missing or malformed:
/// this layer does not retry or re-authenticate.
pub fn with_authenticated_page<T>(
    config: &SuiteConfig,
    f: impl FnOnce(&mut PageDriver) -> Result<T, SuiteError>,
) -> Result<T, SuiteError> {
    let snapshot_path = Path::new(&config.snapshot_path);
    // Load to validate; the driver re-reads the file itself.
    let _ = SessionSnapshot::load(snapshot_path)?;

    let options = launch_options(config, Some(&config.snapshot_path));
    let mut driver = PageDriver::launch(&options)?;
    driver.navigate(&config.url("/"))?;
    driver.wait_idle(config.timeouts.navigation_ms)?;

    let result = f(&mut driver);

    // Explicit release; Drop covers the panic path.
    let _ = driver.quit();
    result
}

/// Acquire a fresh unauthenticated context on the login surface and yield
/// a `LoginPage`.
pub fn with_login_page<T>(
    config: &SuiteConfig,
    f: impl FnOnce(&mut LoginPage) -> Result<T, SuiteError>,
) -> Result<T, SuiteError> {
    let mut driver = PageDriver::launch(&launch_options(config, None))?;

    let result = (|| {
        let mut page = LoginPage::new(&mut driver, config);
        page.open()?;
        f(&mut page)
    })();

    let _ = driver.quit();
    result
}

/// Authenticated context, positioned on the application root, yielded as
/// a `HomePage`. Torn down before the underlying context (nested scoping).
pub fn with_home_page<T>(
    config: &SuiteConfig,
    f: impl FnOnce(&mut HomePage) -> Result<T, SuiteError>,
) -> Result<T, SuiteError> {
    with_authenticated_page(config, |driver| {
        let mut page = HomePage::new(driver, config);
        f(&mut page)
    })
}

/// Authenticated context navigated to the pets listing, yielded as a
/// `PetsPage`.
pub fn with_pets_page<T>(
    config: &SuiteConfig,
    f: impl FnOnce(&mut PetsPage) -> Result<T, SuiteError>,
) -> Result<T, SuiteError> {
    with_authenticated_page(config, |driver| {
        {
            let mut home = HomePage::new(driver, config);
            home.open_pets()?;
        }
        let mut pets = PetsPage::new(driver, config);
        f(&mut pets)
    })
}
