//! Herd descriptions as supplied from outside (files, request bodies).
//!
//! Two encodings carry the same information, an ordered list of animals with
//! a name, an age in decimal years and a sex:
//!
//! ```text
//! <herd>
//!   <labyak name="Betty-1" age="4" sex="f" />
//! </herd>
//!
//! {"herd": [{"name": "Betty-1", "age": 4, "sex": "f"}]}
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use yakshop_core::{Days, DomainError, DomainResult};

use crate::animal::{Animal, Sex};
use crate::herd::Herd;

#[derive(Debug, Error)]
pub enum HerdImportError {
    #[error("malformed herd XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("malformed herd JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HerdFormat {
    Xml,
    Json,
}

impl HerdFormat {
    /// Pick the encoding of a request body.
    ///
    /// XML when the content type mentions `xml` or the body opens with `<`;
    /// JSON otherwise.
    pub fn detect(content_type: Option<&str>, body: &str) -> Self {
        let xml_type = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("xml"));
        if xml_type || body.trim_start().starts_with('<') {
            HerdFormat::Xml
        } else {
            HerdFormat::Json
        }
    }

    /// Encoding implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xml" => Some(HerdFormat::Xml),
            "json" => Some(HerdFormat::Json),
            _ => None,
        }
    }
}

/// One animal as described externally, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimalDescription {
    pub name: String,
    /// Age in decimal years.
    pub age: f64,
    pub sex: String,
}

impl AnimalDescription {
    /// Validate and convert into a domain animal.
    ///
    /// Any age is accepted; an animal already at or past the lifespan is
    /// attended on its first morning and culled that evening.
    pub fn into_animal(self) -> DomainResult<Animal> {
        let age = Days::from_years(self.age)
            .map_err(|e| DomainError::validation(format!("{}: {e}", self.name)))?;
        let sex: Sex = self.sex.parse()?;
        Animal::new(self.name, age, sex)
    }
}

#[derive(Debug, Deserialize)]
struct XmlHerd {
    #[serde(rename = "labyak", default)]
    animals: Vec<XmlAnimal>,
}

#[derive(Debug, Deserialize)]
struct XmlAnimal {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@age")]
    age: f64,
    #[serde(rename = "@sex")]
    sex: String,
}

impl From<XmlAnimal> for AnimalDescription {
    fn from(value: XmlAnimal) -> Self {
        Self {
            name: value.name,
            age: value.age,
            sex: value.sex,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonHerd {
    #[serde(default)]
    herd: Vec<AnimalDescription>,
}

/// Parse a herd description into the animal descriptions it lists, in order.
pub fn parse_descriptions(format: HerdFormat, body: &str) -> Result<Vec<AnimalDescription>, HerdImportError> {
    let descriptions = match format {
        HerdFormat::Xml => {
            let herd: XmlHerd = quick_xml::de::from_str(body)?;
            herd.animals.into_iter().map(AnimalDescription::from).collect()
        }
        HerdFormat::Json => {
            let herd: JsonHerd = serde_json::from_str(body)?;
            herd.herd
        }
    };
    Ok(descriptions)
}

/// Parse and validate a herd description. Fails as a whole on the first
/// invalid animal.
pub fn parse_herd(format: HerdFormat, body: &str) -> Result<Herd, HerdImportError> {
    let herd = parse_descriptions(format, body)?
        .into_iter()
        .map(AnimalDescription::into_animal)
        .collect::<DomainResult<Herd>>()?;

    tracing::debug!(animals = herd.len(), ?format, "herd description parsed");
    Ok(herd)
}
