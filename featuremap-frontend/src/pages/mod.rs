mod home;
mod locations;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Locations,
}

impl Page {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Locations => "/locations",
        }
    }
}

pub use self::{home::*, locations::*};
