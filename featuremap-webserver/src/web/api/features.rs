use super::*;

#[get("/features")]
pub fn get_features(db: sqlite::Connections) -> Result<Vec<json::Feature>> {
    let features = {
        let db = db.shared()?;
        usecases::load_features(&db)?
    };
    Ok(Json(features.into_iter().map(Into::into).collect()))
}

#[get("/features/<id>")]
pub fn get_feature(db: sqlite::Connections, id: &str) -> Result<json::Feature> {
    let feature = {
        let db = db.shared()?;
        usecases::get_feature(&db, id)?
    };
    Ok(Json(feature.into()))
}

#[post("/features", data = "<data>")]
pub fn post_feature(
    db: sqlite::Connections,
    data: JsonResult<'_, json::NewFeature>,
) -> CreatedResult<json::Feature> {
    let new_feature = from_json::new_feature(data?.into_inner());
    let feature = {
        let db = db.exclusive()?;
        usecases::create_new_feature(&db, new_feature)?
    };
    info!("Created feature {} ({})", feature.id, feature.name);
    let location = format!("/api/features/{}", feature.id);
    Ok(Created::new(location).body(Json(feature.into())))
}

#[put("/features/<id>", data = "<data>")]
pub fn put_feature(
    db: sqlite::Connections,
    id: &str,
    data: JsonResult<'_, json::NewFeature>,
) -> Result<json::Feature> {
    let update = from_json::new_feature(data?.into_inner());
    let feature = {
        let db = db.exclusive()?;
        usecases::update_feature(&db, id, update)?
    };
    info!("Updated feature {}", feature.id);
    Ok(Json(feature.into()))
}

#[delete("/features/<id>")]
pub fn delete_feature(db: sqlite::Connections, id: &str) -> Result<()> {
    {
        let db = db.exclusive()?;
        usecases::delete_feature(&db, id)?;
    }
    info!("Deleted feature {id}");
    Ok(Json(()))
}
