//! Adoption request fields
//!
//! `AdoptionForm` is the raw form body; `NewAdoption` is what reaches the
//! database once every field has passed validation.

use serde::Deserialize;

use super::validation::{short_text, ValidationError};

/// Maximum length for pet type
const MAX_PET_TYPE_LEN: usize = 50;

/// Maximum length for color
const MAX_COLOR_LEN: usize = 30;

/// Accepted quantity range (inclusive)
const MIN_QUANTITY: u32 = 1;
const MAX_QUANTITY: u32 = 99;

/// Validated pet type (free-form, e.g. "dog", "guinea pig")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetType(String);

impl PetType {
    /// # Example
    /// ```
    /// use petadopt_server::models::PetType;
    ///
    /// assert_eq!(PetType::new("  dog ").unwrap().as_str(), "dog");
    /// assert!(PetType::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        short_text("pet type", s, MAX_PET_TYPE_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        short_text("color", s, MAX_COLOR_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated quantity (whole number, 1..=99)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    /// Parse a quantity from form text.
    ///
    /// # Example
    /// ```
    /// use petadopt_server::models::Quantity;
    ///
    /// assert_eq!(Quantity::parse("2").unwrap().get(), 2);
    /// assert!(Quantity::parse("two").is_err());
    /// assert!(Quantity::parse("0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "quantity" });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "quantity",
                reason: "must be a whole number",
            });
        }

        // All digits, so the only parse failure left is overflow.
        let n: u32 = s.parse().unwrap_or(u32::MAX);
        Self::new(n)
    }

    pub fn new(n: u32) -> Result<Self, ValidationError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&n) {
            return Err(ValidationError::OutOfRange {
                field: "quantity",
                min: MIN_QUANTITY,
                max: MAX_QUANTITY,
            });
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Value as stored in the `INTEGER` column
    pub fn as_i32(self) -> i32 {
        // Bounded by MAX_QUANTITY
        self.0 as i32
    }
}

/// Raw form body posted to /confirm.
///
/// Missing fields deserialize as empty strings so they surface as
/// `ValidationError::Empty` rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdoptionForm {
    #[serde(default)]
    pub pet_type: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub color: String,
}

impl AdoptionForm {
    /// Validate every field, reporting the first failure.
    pub fn validate(&self) -> Result<NewAdoption, ValidationError> {
        Ok(NewAdoption {
            pet_type: PetType::new(&self.pet_type)?,
            quantity: Quantity::parse(&self.quantity)?,
            color: Color::new(&self.color)?,
        })
    }
}

/// A validated adoption request ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdoption {
    pub pet_type: PetType,
    pub quantity: Quantity,
    pub color: Color,
}
