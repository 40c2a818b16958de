use super::*;

impl FeatureRepo for DbReadWrite<'_> {
    fn create_feature(&self, feature: Feature) -> Result<()> {
        create_feature(&mut self.sqlite_conn(), &feature)
    }
    fn get_feature(&self, id: &str) -> Result<Feature> {
        get_feature(&mut self.sqlite_conn(), id)
    }
    fn all_features(&self) -> Result<Vec<Feature>> {
        all_features(&mut self.sqlite_conn())
    }
    fn update_feature(&self, feature: &Feature) -> Result<()> {
        update_feature(&mut self.sqlite_conn(), feature)
    }
    fn delete_feature(&self, id: &str) -> Result<()> {
        delete_feature(&mut self.sqlite_conn(), id)
    }
}

impl FeatureRepo for DbReadOnly<'_> {
    fn create_feature(&self, _feature: Feature) -> Result<()> {
        unreachable!();
    }
    fn get_feature(&self, id: &str) -> Result<Feature> {
        get_feature(&mut self.sqlite_conn(), id)
    }
    fn all_features(&self) -> Result<Vec<Feature>> {
        all_features(&mut self.sqlite_conn())
    }
    fn update_feature(&self, _feature: &Feature) -> Result<()> {
        unreachable!();
    }
    fn delete_feature(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

type FeatureColumns = (
    schema::features::id,
    schema::features::name,
    schema::features::lat,
    schema::features::lng,
    schema::features::category,
);

const FEATURE_COLUMNS: FeatureColumns = (
    schema::features::id,
    schema::features::name,
    schema::features::lat,
    schema::features::lng,
    schema::features::category,
);

fn load_feature(from: models::Feature) -> Result<Feature> {
    let models::Feature {
        id,
        name,
        lat,
        lng,
        category,
    } = from;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid position of feature {id}: ({lat}, {lng})"))?;
    Ok(Feature {
        id: id.into(),
        name,
        pos,
        category,
    })
}

fn create_feature(conn: &mut SqliteConnection, feature: &Feature) -> Result<()> {
    let new_feature = models::NewFeature {
        id: feature.id.as_str(),
        name: &feature.name,
        lat: feature.pos.lat(),
        lng: feature.pos.lng(),
        category: &feature.category,
    };
    diesel::insert_into(schema::features::table)
        .values(&new_feature)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_feature(conn: &mut SqliteConnection, id: &str) -> Result<Feature> {
    use schema::features::dsl;
    let feature = schema::features::table
        .select(FEATURE_COLUMNS)
        .filter(dsl::id.eq(id))
        .first::<models::Feature>(conn)
        .map_err(from_diesel_err)?;
    load_feature(feature)
}

fn all_features(conn: &mut SqliteConnection) -> Result<Vec<Feature>> {
    use schema::features::dsl;
    schema::features::table
        .select(FEATURE_COLUMNS)
        .order_by(dsl::rowid.asc())
        .load::<models::Feature>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_feature)
        .collect()
}

fn update_feature(conn: &mut SqliteConnection, feature: &Feature) -> Result<()> {
    use schema::features::dsl;
    let count = diesel::update(schema::features::table.filter(dsl::id.eq(feature.id.as_str())))
        .set((
            dsl::name.eq(&feature.name),
            dsl::lat.eq(feature.pos.lat()),
            dsl::lng.eq(feature.pos.lng()),
            dsl::category.eq(&feature.category),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(count, 1);
    Ok(())
}

fn delete_feature(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::features::dsl;
    let count = diesel::delete(schema::features::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
