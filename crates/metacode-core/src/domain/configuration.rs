//! Package configuration.
//!
//! The configuration is the single source of the render context. Every key a
//! bundled template reads exists here with a default, so rendering never
//! trips over a missing key.
//!
//! Reading a persisted file is an *overlay* onto the defaults: non-empty
//! strings replace the default, lists extend it, booleans replace it, and
//! anything absent keeps its default. Each section spells that out in its
//! [`Overlay`] impl instead of reflecting over fields.

use std::{fmt, str::FromStr};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DomainError;

/// Complete package configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub package: PackageSection,
    pub documentation: DocumentationSection,
    pub options: OptionsSection,
    pub gui: GuiSection,
}

/// Package identity and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageSection {
    pub name: String,
    pub author: String,
    pub author_email: String,
    pub year: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub install_requires: Vec<String>,
    pub license: License,
    // Tables go last so the TOML output stays valid.
    pub urls: Urls,
}

impl Default for PackageSection {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            author_email: String::new(),
            year: chrono::Local::now().year().to_string(),
            description: String::new(),
            keywords: Vec::new(),
            install_requires: Vec::new(),
            license: License::default(),
            urls: Urls::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Urls {
    pub main: String,
    pub documentation: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentationSection {
    pub logo: String,
    pub favicon: String,
    pub language: String,
}

impl Default for DocumentationSection {
    fn default() -> Self {
        Self {
            logo: String::new(),
            favicon: String::new(),
            language: "en".into(),
        }
    }
}

/// Feature toggles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsSection {
    pub logging: bool,
    pub git: bool,
    pub gui: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiSection {
    pub splash: bool,
    pub organisation: String,
    pub domain: String,
}

impl Default for GuiSection {
    fn default() -> Self {
        Self {
            splash: true,
            organisation: String::new(),
            domain: String::new(),
        }
    }
}

// ============================================================================
// License
// ============================================================================

/// Licenses a package can be generated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum License {
    #[default]
    Bsd,
    GplV3,
    LgplV3,
}

impl License {
    pub const ALL_NAMES: [&'static str; 3] = ["BSD", "GPLv3", "LGPLv3"];

    /// Identifier as written in the configuration file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bsd => "BSD",
            Self::GplV3 => "GPLv3",
            Self::LgplV3 => "LGPLv3",
        }
    }

    /// Trove classifier used in packaging metadata.
    pub fn classifier(self) -> &'static str {
        match self {
            Self::Bsd => "BSD License",
            Self::GplV3 => "GNU General Public License v3 (GPLv3)",
            Self::LgplV3 => "GNU Lesser General Public License v3 (LGPLv3)",
        }
    }

    /// Name of the license text template in the `licenses` directory.
    pub fn template_name(self) -> &'static str {
        match self {
            Self::Bsd => "bsd-2clause.txt",
            Self::GplV3 => "gpl-3.txt",
            Self::LgplV3 => "lgpl-3.txt",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bsd" | "bsd-2-clause" => Ok(Self::Bsd),
            "gplv3" | "gpl-3.0" => Ok(Self::GplV3),
            "lgplv3" | "lgpl-3.0" => Ok(Self::LgplV3),
            _ => Err(DomainError::UnknownLicense {
                license: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for License {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<License> for String {
    fn from(license: License) -> Self {
        license.as_str().to_string()
    }
}

// ============================================================================
// Overlay
// ============================================================================

/// Merge a value read from disk onto a value holding defaults.
pub trait Overlay {
    fn overlay(&mut self, other: Self);
}

fn overlay_string(target: &mut String, value: String) {
    if !value.is_empty() {
        *target = value;
    }
}

fn overlay_list(target: &mut Vec<String>, values: Vec<String>) {
    target.extend(values);
}

impl Overlay for Configuration {
    fn overlay(&mut self, other: Self) {
        self.package.overlay(other.package);
        self.documentation.overlay(other.documentation);
        self.options.overlay(other.options);
        self.gui.overlay(other.gui);
    }
}

impl Overlay for PackageSection {
    fn overlay(&mut self, other: Self) {
        overlay_string(&mut self.name, other.name);
        overlay_string(&mut self.author, other.author);
        overlay_string(&mut self.author_email, other.author_email);
        overlay_string(&mut self.year, other.year);
        overlay_string(&mut self.description, other.description);
        overlay_list(&mut self.keywords, other.keywords);
        overlay_list(&mut self.install_requires, other.install_requires);
        self.license = other.license;
        self.urls.overlay(other.urls);
    }
}

impl Overlay for Urls {
    fn overlay(&mut self, other: Self) {
        overlay_string(&mut self.main, other.main);
        overlay_string(&mut self.documentation, other.documentation);
        overlay_string(&mut self.source, other.source);
    }
}

impl Overlay for DocumentationSection {
    fn overlay(&mut self, other: Self) {
        overlay_string(&mut self.logo, other.logo);
        overlay_string(&mut self.favicon, other.favicon);
        overlay_string(&mut self.language, other.language);
    }
}

impl Overlay for OptionsSection {
    fn overlay(&mut self, other: Self) {
        self.logging = other.logging;
        self.git = other.git;
        self.gui = other.gui;
    }
}

impl Overlay for GuiSection {
    fn overlay(&mut self, other: Self) {
        self.splash = other.splash;
        overlay_string(&mut self.organisation, other.organisation);
        overlay_string(&mut self.domain, other.domain);
    }
}

impl Configuration {
    /// Defaults overlaid with whatever `persisted` sets.
    pub fn from_persisted(persisted: Configuration) -> Self {
        let mut configuration = Self::default();
        configuration.overlay(persisted);
        configuration
    }

    /// Ordered mapping handed to the render context.
    ///
    /// Besides the plain sections, `package.license_classifier` is added so
    /// packaging templates don't need their own license table.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("package".into(), self.package.to_value());
        map.insert("documentation".into(), section_value(&self.documentation));
        map.insert("options".into(), section_value(&self.options));
        map.insert("gui".into(), section_value(&self.gui));
        map
    }
}

impl PackageSection {
    fn to_value(&self) -> Value {
        let mut value = section_value(self);
        if let Value::Object(map) = &mut value {
            map.insert(
                "license_classifier".into(),
                Value::String(self.license.classifier().into()),
            );
        }
        value
    }
}

fn section_value<T: Serialize>(section: &T) -> Value {
    // Plain structs of strings, bools and string lists always serialize.
    serde_json::to_value(section).unwrap_or(Value::Null)
}
