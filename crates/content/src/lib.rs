//! Static site content for the Bleiner company website.
//!
//! Everything here is data: the closed language set, the project gallery
//! with its category filter, hero slides, service sections, the vehicle
//! fleet and the trade licenses. Display strings live in the locale
//! bundles; this crate only carries their keys plus the
//! language-independent facts (categories, image paths, GISA numbers).

mod company;
mod fleet;
mod gallery;
mod hero;
mod language;
mod services;

pub use company::{License, LICENSES};
pub use fleet::{Vehicle, FLEET};
pub use gallery::{
    filter_projects, CategoryFilter, Project, ProjectCategory, UnknownCategory, PROJECTS,
};
pub use hero::{slide_index, Slide, SLIDES};
pub use language::{Language, UnknownLanguage};
pub use services::{Service, SERVICES};
