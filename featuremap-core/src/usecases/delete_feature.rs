use super::prelude::*;

pub fn delete_feature<R: FeatureRepo>(repo: &R, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidId);
    }
    repo.delete_feature(id)?;
    log::debug!("Deleted feature {id}");
    Ok(())
}
