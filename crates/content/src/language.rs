use std::str::FromStr;

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// The two languages the site ships bundles for. Every locale key exists
/// in both bundles, so picking a language never leaves a partially
/// translated page.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    IntoStaticStr,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
)]
pub enum Language {
    #[default]
    #[strum(serialize = "de")]
    De,
    #[strum(serialize = "en")]
    En,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown language tag: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Fail-closed parse: an unknown tag is an error, the caller keeps
    /// whatever language it already had.
    pub fn parse(tag: &str) -> Result<Self, UnknownLanguage> {
        Self::from_str(tag).map_err(|_| UnknownLanguage(tag.to_owned()))
    }

    /// Locale identifier as used by the bundle files.
    pub fn locale(&self) -> &'static str {
        (*self).into()
    }
}
