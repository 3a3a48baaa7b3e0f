use crate::cli::config::SuiteConfig;
use crate::data::pet::{NewPet, PetStatus, random_pet};
use crate::data::provider::{Credential, invalid_pet};
use crate::fixture::page::{with_authenticated_page, with_home_page, with_login_page, with_pets_page};
use crate::pages::home::HomePage;
use crate::suite::error::{SuiteError, ensure};
use crate::tracker::CreatedRecords;

/// Exact validation text the application shows for a too-short pet name.
pub const NAME_TOO_SHORT_ERROR: &str = "Your pet's name has to be at least 3 characters long!";

/// Authenticated root must not bounce back to login and must show the
/// configured application title in the primary heading.
pub fn home_shows_title_when_authenticated(config: &SuiteConfig) -> Result<(), SuiteError> {
    with_home_page(config, |home| {
        home.open()?;

        let url = home.current_url()?;
        ensure(
            !config.is_login_url(&url),
            format!("authenticated visit to root redirected to login: {}", url),
        )?;

        let heading = home.heading_text()?.unwrap_or_default();
        ensure(
            heading.contains(&config.app_title),
            format!(
                "primary heading '{}' does not contain '{}'",
                heading, config.app_title
            ),
        )
    })
}

/// A rejected login keeps the login surface displayed and shows an error.
pub fn rejected_login_stays_on_login_surface(config: &SuiteConfig) -> Result<(), SuiteError> {
    let bogus = Credential {
        username: "nobody@example.com".into(),
        password: "not-the-password".into(),
    };

    with_login_page(config, |login| {
        login.login(&bogus)?;
        ensure(
            login.is_displayed()?,
            "rejected login navigated away from the login surface",
        )?;
        let error = login.validation_error()?;
        ensure(
            error.is_some(),
            "rejected login showed no visible error message",
        )
    })
}

/// Creating a valid record with no image closes the dialog and reports
/// `image_uploaded == false`.
pub fn create_pet_without_image_reports_no_upload(config: &SuiteConfig) -> Result<(), SuiteError> {
    let mut records = CreatedRecords::new();

    let pet = random_pet();
    debug_assert!(pet.name_is_valid());

    with_pets_page(config, |pets| {
        let created = pets.create_new_pet(&pet)?;
        ensure(
            !created.image_uploaded,
            "no image was supplied but the workflow reported an upload",
        )?;
        records.record(created);
        Ok(())
    })?;

    ensure(records.len() == 1, "expected exactly one tracked record")?;
    ensure(
        records.last().is_some_and(|c| c.name == pet.name),
        "returned record does not carry the supplied name",
    )
}

/// Create with status available, filter by that status, sort by id
/// descending: the first listed row must match the created record exactly.
pub fn created_pet_listed_first_by_newest_id(config: &SuiteConfig) -> Result<(), SuiteError> {
    let mut records = CreatedRecords::new();

    let pet = NewPet {
        status: PetStatus::Available,
        ..random_pet()
    };

    with_pets_page(config, |pets| {
        let created = pets.create_new_pet(&pet)?;
        records.record(created);

        pets.search_by_status(PetStatus::Available)?;
        pets.sort_by_id_descending()?;

        let row = pets.first_row()?;
        let created = records
            .last()
            .ok_or_else(|| SuiteError::Assertion("no record tracked".into()))?;

        ensure(
            row.name == created.name,
            format!("first row name '{}' != created '{}'", row.name, created.name),
        )?;
        ensure(
            created
                .category
                .as_deref()
                .is_none_or(|c| row.category == c),
            format!("first row category '{}' does not match creation", row.category),
        )?;
        ensure(
            row.status == created.status.as_str(),
            format!(
                "first row status '{}' != created '{}'",
                row.status, created.status
            ),
        )
    })
}

/// A 2-character name must keep the submit control disabled and show the
/// exact validation text.
pub fn short_name_blocks_submission(config: &SuiteConfig) -> Result<(), SuiteError> {
    let pet = invalid_pet(std::path::Path::new(&config.invalid_pet_fixture))?;
    ensure(
        !pet.name_is_valid(),
        "invalid-pet fixture unexpectedly holds a valid name",
    )?;

    with_pets_page(config, |pets| {
        pets.open_create_dialog()?;
        pets.fill_name(&pet.name)?;

        ensure(
            !pets.submit_enabled()?,
            "submit control is enabled for a too-short name",
        )?;

        let error = pets.validation_error()?;
        ensure(
            error.as_deref() == Some(NAME_TOO_SHORT_ERROR),
            format!("validation error was {:?}", error),
        )
    })
}

/// Two contexts seeded from the same snapshot stay isolated: logging out
/// in one must not deauthenticate the other.
pub fn logout_in_one_context_keeps_sibling_authenticated(
    config: &SuiteConfig,
) -> Result<(), SuiteError> {
    with_authenticated_page(config, |first| {
        // Sibling context acquired second, released first.
        with_authenticated_page(config, |second| {
            let mut home = HomePage::new(second, config);
            home.open()?;
            home.logout()
                .map_err(SuiteError::from)
        })?;

        let mut home = HomePage::new(first, config);
        home.open()?;
        let url = home.current_url()?;
        ensure(
            !config.is_login_url(&url),
            format!("sibling logout leaked into this context: {}", url),
        )
    })
}
