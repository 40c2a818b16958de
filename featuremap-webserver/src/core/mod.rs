pub use featuremap_core::{usecases, RepoError};

#[cfg(test)]
pub mod prelude {
    pub use featuremap_core::{entities::*, repositories::*};
}
