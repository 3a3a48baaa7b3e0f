use crate::suite::case::TestCase;
use crate::suite::scenarios;

/// Every scenario the suite knows about, in declaration order.
pub fn all_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "home shows title when authenticated",
            tags: &["smoke"],
            run: scenarios::home_shows_title_when_authenticated,
        },
        TestCase {
            name: "rejected login stays on login surface",
            tags: &["smoke", "negative"],
            run: scenarios::rejected_login_stays_on_login_surface,
        },
        TestCase {
            name: "create pet without image reports no upload",
            tags: &["crud"],
            run: scenarios::create_pet_without_image_reports_no_upload,
        },
        TestCase {
            name: "created pet listed first by newest id",
            tags: &["crud"],
            run: scenarios::created_pet_listed_first_by_newest_id,
        },
        TestCase {
            name: "short name blocks submission",
            tags: &["crud", "negative"],
            run: scenarios::short_name_blocks_submission,
        },
        TestCase {
            name: "logout in one context keeps sibling authenticated",
            tags: &["isolation"],
            run: scenarios::logout_in_one_context_keeps_sibling_authenticated,
        },
    ]
}

/// Cases carrying `tag`, or all cases when no tag is given.
pub fn cases_with_tag(tag: Option<&str>) -> Vec<TestCase> {
    match tag {
        Some(t) => all_cases().into_iter().filter(|c| c.has_tag(t)).collect(),
        None => all_cases(),
    }
}
