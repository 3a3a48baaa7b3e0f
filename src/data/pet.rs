use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The target application rejects pet names shorter than this.
pub const MIN_NAME_LEN: usize = 3;

/// Listing status of a pet record in the target application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }

    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for the create-pet workflow. Owned by the test; the page object
/// returns its own copy of the effective data, never this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub status: PetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl NewPet {
    pub fn new(name: &str, status: PetStatus) -> Self {
        NewPet {
            name: name.to_string(),
            status,
            category: None,
            tags: Vec::new(),
            image_path: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_image(mut self, path: &str) -> Self {
        self.image_path = Some(path.to_string());
        self
    }

    /// Whether the target application's name validation would accept this record.
    pub fn name_is_valid(&self) -> bool {
        self.name.trim().chars().count() >= MIN_NAME_LEN
    }
}

/// Effective data of a record created through the UI, as returned by the
/// create-pet workflow. `image_uploaded` reflects whether the optional
/// attachment step actually completed; attachment failures are never
/// surfaced any other way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPet {
    pub name: String,
    pub status: PetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub image_uploaded: bool,
}

impl CreatedPet {
    /// Copy the effective data out of the input, decoupled from the caller.
    pub fn from_input(pet: &NewPet, image_uploaded: bool) -> Self {
        CreatedPet {
            name: pet.name.clone(),
            status: pet.status,
            category: pet.category.clone(),
            tags: pet.tags.clone(),
            image_uploaded,
        }
    }
}

const NAME_PREFIXES: [&str; 8] = [
    "Biscuit", "Clover", "Maple", "Pepper", "Rusty", "Socks", "Waffles", "Ziggy",
];

const CATEGORIES: [&str; 4] = ["Dog", "Cat", "Bird", "Rabbit"];

/// Generate a randomized valid pet record so concurrently created records
/// never collide on name.
pub fn random_pet() -> NewPet {
    let mut rng = rand::thread_rng();
    let prefix = NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())];
    let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
    let status = PetStatus::ALL[rng.gen_range(0..PetStatus::ALL.len())];
    let suffix: u32 = rng.gen_range(1000..10_000);

    NewPet::new(&format!("{}-{}", prefix, suffix), status).with_category(category)
}
