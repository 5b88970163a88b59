//! Typed records returned by the hero API.
//!
//! Every record is validated at the API boundary (see [`Validate`]); shape or
//! value mismatches surface as `ApiError::Parse` instead of leaking missing
//! fields into the view.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Post-deserialization checks applied to every API record.
pub trait Validate {
    /// Returns a human-readable reason when the record is unusable.
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        for (i, item) in self.iter().enumerate() {
            item.validate().map_err(|reason| format!("item {i}: {reason}"))?;
        }
        Ok(())
    }
}

/// Hero identifier. The upstream server emits integers; string ids are
/// accepted too. Always rendered as a string in query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawHeroId", into = "String")]
pub struct HeroId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeroId {
    Int(i64),
    Text(String),
}

impl HeroId {
    /// Builds an id from user input. Returns `None` for empty or blank input.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<RawHeroId> for HeroId {
    type Error = String;

    fn try_from(raw: RawHeroId) -> Result<Self, Self::Error> {
        match raw {
            RawHeroId::Int(n) => Ok(Self(n.to_string())),
            RawHeroId::Text(s) => Self::new(s).ok_or_else(|| "empty hero id".to_string()),
        }
    }
}

impl From<HeroId> for String {
    fn from(id: HeroId) -> Self {
        id.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of `/heros/all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSummary {
    pub id: HeroId,
    pub name: String,
}

impl Validate for HeroSummary {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("hero {} has an empty name", self.id));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroImage {
    pub url: String,
}

impl Validate for HeroImage {
    fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("empty image url".to_string());
        }
        Ok(())
    }
}

/// Occupation text. Upstream data has empty and `null` occupations; both
/// become an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroOccupation {
    #[serde(deserialize_with = "null_as_empty")]
    pub occupation: String,
}

impl Validate for HeroOccupation {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// The six power ratings. `None` means the upstream value was null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroPowerStats {
    #[serde(deserialize_with = "rating")]
    pub intelligence: Option<f64>,
    #[serde(deserialize_with = "rating")]
    pub strength: Option<f64>,
    #[serde(deserialize_with = "rating")]
    pub speed: Option<f64>,
    #[serde(deserialize_with = "rating")]
    pub durability: Option<f64>,
    #[serde(deserialize_with = "rating")]
    pub power: Option<f64>,
    #[serde(deserialize_with = "rating")]
    pub combat: Option<f64>,
}

impl HeroPowerStats {
    /// Ratings in chart order: intelligence, strength, speed, durability, power, combat.
    pub fn ratings(&self) -> [Option<f64>; 6] {
        [
            self.intelligence,
            self.strength,
            self.speed,
            self.durability,
            self.power,
            self.combat,
        ]
    }
}

impl Validate for HeroPowerStats {
    fn validate(&self) -> Result<(), String> {
        if self.ratings().iter().flatten().any(|v| !v.is_finite()) {
            return Err("non-finite power rating".to_string());
        }
        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON number, a numeric string, `null`, or the literal string "null".
fn rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("null") {
                Ok(None)
            } else {
                s.parse::<f64>()
                    .map(Some)
                    .map_err(|_| de::Error::custom(format!("invalid power rating {s:?}")))
            }
        }
    }
}
