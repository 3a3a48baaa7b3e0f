use petstore_e2e::data::pet::{
    CreatedPet, MIN_NAME_LEN, NewPet, PetStatus, random_pet,
};

// =========================================================================
// PetStatus
// =========================================================================

#[test]
fn pet_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&PetStatus::Available).unwrap(), "\"available\"");
    assert_eq!(serde_json::to_string(&PetStatus::Pending).unwrap(), "\"pending\"");
    assert_eq!(serde_json::to_string(&PetStatus::Sold).unwrap(), "\"sold\"");
}

#[test]
fn pet_status_deserializes_from_app_values() {
    let status: PetStatus = serde_json::from_str("\"pending\"").expect("parse");
    assert_eq!(status, PetStatus::Pending);
    assert!(serde_json::from_str::<PetStatus>("\"adopted\"").is_err());
}

#[test]
fn pet_status_display_matches_as_str() {
    for status in PetStatus::ALL {
        assert_eq!(status.to_string(), status.as_str());
    }
}

// =========================================================================
// NewPet validation
// =========================================================================

#[test]
fn name_validation_boundary() {
    assert_eq!(MIN_NAME_LEN, 3);

    assert!(!NewPet::new("Bo", PetStatus::Available).name_is_valid());
    assert!(NewPet::new("Rex", PetStatus::Available).name_is_valid());
    assert!(NewPet::new("Biscuit", PetStatus::Sold).name_is_valid());
}

#[test]
fn name_validation_ignores_surrounding_whitespace() {
    assert!(!NewPet::new("  Bo  ", PetStatus::Available).name_is_valid());
    assert!(NewPet::new(" Rex ", PetStatus::Available).name_is_valid());
}

#[test]
fn name_validation_counts_characters_not_bytes() {
    // Three characters, more than three bytes
    assert!(NewPet::new("löwe", PetStatus::Available).name_is_valid());
    assert!(!NewPet::new("äh", PetStatus::Available).name_is_valid());
}

// =========================================================================
// NewPet builder and serde
// =========================================================================

#[test]
fn new_pet_builder_sets_optional_sections() {
    let pet = NewPet::new("Biscuit", PetStatus::Available)
        .with_category("Dog")
        .with_tags(&["friendly", "vaccinated"])
        .with_image("fixtures/dog.png");

    assert_eq!(pet.category.as_deref(), Some("Dog"));
    assert_eq!(pet.tags, vec!["friendly", "vaccinated"]);
    assert_eq!(pet.image_path.as_deref(), Some("fixtures/dog.png"));
}

#[test]
fn new_pet_serde_skips_absent_optionals() {
    let pet = NewPet::new("Rex", PetStatus::Sold);
    let json = serde_json::to_string(&pet).expect("serialize");

    assert!(!json.contains("category"));
    assert!(!json.contains("tags"));
    assert!(!json.contains("image_path"));
    assert!(json.contains("\"sold\""));
}

#[test]
fn new_pet_deserializes_minimal_fixture() {
    let pet: NewPet =
        serde_json::from_str(r#"{"name": "Bo", "status": "available"}"#).expect("parse");
    assert_eq!(pet.name, "Bo");
    assert_eq!(pet.status, PetStatus::Available);
    assert!(pet.category.is_none());
    assert!(pet.tags.is_empty());
}

// =========================================================================
// CreatedPet decoupling
// =========================================================================

#[test]
fn created_pet_is_a_copy_of_the_input() {
    let mut input = NewPet::new("Clover", PetStatus::Pending).with_category("Rabbit");
    let created = CreatedPet::from_input(&input, false);

    // Mutating the caller-owned input afterwards must not affect the copy
    input.name = "Renamed".into();
    input.category = None;

    assert_eq!(created.name, "Clover");
    assert_eq!(created.category.as_deref(), Some("Rabbit"));
    assert_eq!(created.status, PetStatus::Pending);
    assert!(!created.image_uploaded);
}

#[test]
fn created_pet_carries_upload_flag() {
    let input = NewPet::new("Socks", PetStatus::Available).with_image("fixtures/cat.png");
    assert!(CreatedPet::from_input(&input, true).image_uploaded);
    assert!(!CreatedPet::from_input(&input, false).image_uploaded);
}

// =========================================================================
// Randomized records
// =========================================================================

#[test]
fn random_pet_is_always_valid() {
    for _ in 0..50 {
        let pet = random_pet();
        assert!(pet.name_is_valid(), "random name '{}' too short", pet.name);
        assert!(pet.category.is_some(), "random pets carry a category");
        assert!(pet.image_path.is_none(), "random pets carry no image");
    }
}

#[test]
fn random_pet_names_rarely_collide() {
    let names: std::collections::HashSet<String> =
        (0..20).map(|_| random_pet().name).collect();
    // 8 prefixes x 9000 suffixes; 20 draws colliding entirely would mean
    // the generator is broken
    assert!(names.len() > 1);
}
