mod feature_form;
mod map;
mod navbar;

pub use self::{feature_form::*, map::*, navbar::*};
