use super::schema::features;

#[derive(Queryable)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
}

#[derive(Insertable)]
#[diesel(table_name = features)]
pub struct NewFeature<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub category: &'a str,
}
