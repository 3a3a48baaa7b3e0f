use crate::browser::driver::PageDriver;
use crate::browser::error::DriverError;
use crate::browser::selector::SelectorHint;
use crate::cli::config::SuiteConfig;
use crate::data::pet::{CreatedPet, NewPet, PetStatus};
use crate::pages::login::visible_error;

const CREATE_FORM: &str = "create-pet";
const CREATE_DIALOG: &str = "[data-test=\"create-pet-dialog\"]";
const SUBMIT_BUTTON: &str = "[data-test=\"create-pet-submit\"]";
const NAME_ERROR: &str = "[data-test=\"pet-name-error\"]";
const UPLOAD_DONE: &str = "[data-test=\"image-upload-done\"]";
const FIRST_ROW_NAME: &str = "[data-test=\"pets-table\"] tbody tr:first-child [data-test=\"pet-name\"]";
const FIRST_ROW_CATEGORY: &str =
    "[data-test=\"pets-table\"] tbody tr:first-child [data-test=\"pet-category\"]";
const FIRST_ROW_STATUS: &str =
    "[data-test=\"pets-table\"] tbody tr:first-child [data-test=\"pet-status\"]";
const TABLE_ROWS: &str = "[data-test=\"pets-table\"] tbody tr";

/// One rendered row of the pets listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PetRow {
    pub name: String,
    pub category: String,
    pub status: String,
}

/// Page object for the pets listing screen and its create-record dialog.
pub struct PetsPage<'a> {
    driver: &'a mut PageDriver,
    config: &'a SuiteConfig,
}

impl<'a> PetsPage<'a> {
    pub fn new(driver: &'a mut PageDriver, config: &'a SuiteConfig) -> Self {
        PetsPage { driver, config }
    }

    /// Open the create-record dialog and wait for it to show.
    pub fn open_create_dialog(&mut self) -> Result<(), DriverError> {
        self.driver.click(&SelectorHint::button("Add Pet"))?;
        self.driver
            .wait_for_visible(CREATE_DIALOG, self.config.timeouts.action_ms)
    }

    /// Fill only the name field of the open dialog. Used by negative-path
    /// scenarios that never submit.
    pub fn fill_name(&mut self, name: &str) -> Result<(), DriverError> {
        self.driver
            .fill(&SelectorHint::input("Name", Some(CREATE_FORM)), name)
    }

    /// Whether the dialog's submit control is currently enabled.
    pub fn submit_enabled(&mut self) -> Result<bool, DriverError> {
        self.driver.query_enabled(SUBMIT_BUTTON)
    }

    /// The trimmed visible name-validation error, or None when no error
    /// shows within the action timeout.
    pub fn validation_error(&mut self) -> Result<Option<String>, DriverError> {
        visible_error(self.driver, NAME_ERROR, self.config.timeouts.action_ms)
    }

    /// Create a pet record through the dialog.
    ///
    /// Fills the mandatory fields, opens the optional sub-sections only
    /// when the input supplies them, waits (bounded) for the submit control
    /// to become enabled, commits, and waits for the dialog to close.
    ///
    /// Returns a copy of the effective data. Attachment failures are
    /// swallowed: they only show up as `image_uploaded == false` on the
    /// returned record, never as an error.
    pub fn create_new_pet(&mut self, pet: &NewPet) -> Result<CreatedPet, DriverError> {
        self.open_create_dialog()?;

        self.fill_name(&pet.name)?;
        self.driver.select_option(
            &SelectorHint::dropdown("Status", Some(CREATE_FORM)),
            pet.status.as_str(),
        )?;

        if let Some(ref category) = pet.category {
            self.driver
                .fill(&SelectorHint::input("Category", Some(CREATE_FORM)), category)?;
        }

        if !pet.tags.is_empty() {
            self.driver.click(&SelectorHint::button("Tags"))?;
            for tag in &pet.tags {
                self.driver.check(&SelectorHint::checkbox(tag))?;
            }
        }

        let image_uploaded = match pet.image_path {
            Some(ref path) => self.attach_image(path),
            None => false,
        };

        self.driver
            .wait_for_enabled(SUBMIT_BUTTON, self.config.timeouts.action_ms)?;
        // Click the element the enablement wait just covered
        self.driver.click(&SelectorHint::css(SUBMIT_BUTTON))?;
        self.driver
            .wait_for_hidden(CREATE_DIALOG, self.config.timeouts.action_ms)?;

        Ok(CreatedPet::from_input(pet, image_uploaded))
    }

    /// Best-effort optional attachment step. Waits for the upload-done
    /// indicator instead of a fixed delay; the indicator is the only
    /// completion signal the app exposes, and it can lag the actual upload.
    fn attach_image(&mut self, path: &str) -> bool {
        let attached = self
            .driver
            .set_files(&SelectorHint::file_input("Image"), path)
            .and_then(|_| {
                self.driver
                    .wait_for_visible(UPLOAD_DONE, self.config.timeouts.action_ms)
            });
        attached.is_ok()
    }

    /// Filter the listing by status and wait for it to settle.
    pub fn search_by_status(&mut self, status: PetStatus) -> Result<(), DriverError> {
        self.driver.select_option(
            &SelectorHint::dropdown("Status filter", None),
            status.as_str(),
        )?;
        self.driver.wait_idle(self.config.timeouts.navigation_ms)
    }

    /// Sort the listing by identifier, newest record first.
    pub fn sort_by_id_descending(&mut self) -> Result<(), DriverError> {
        self.driver
            .select_option(&SelectorHint::dropdown("Sort", None), "id,desc")?;
        self.driver.wait_idle(self.config.timeouts.navigation_ms)
    }

    /// Number of rows currently rendered in the listing.
    pub fn row_count(&mut self) -> Result<u32, DriverError> {
        self.driver.query_count(TABLE_ROWS)
    }

    /// The first listed row, as rendered.
    pub fn first_row(&mut self) -> Result<PetRow, DriverError> {
        let name = self.cell_text(FIRST_ROW_NAME, "name")?;
        let category = self.cell_text(FIRST_ROW_CATEGORY, "category")?;
        let status = self.cell_text(FIRST_ROW_STATUS, "status")?;
        Ok(PetRow {
            name,
            category,
            status,
        })
    }

    fn cell_text(&mut self, selector: &str, what: &str) -> Result<String, DriverError> {
        let text = self
            .driver
            .query_text(selector)?
            .ok_or_else(|| DriverError::SessionProtocol {
                command: "query_text".into(),
                error: format!("first row has no {} cell", what),
            })?;
        Ok(text.trim().to_string())
    }
}
