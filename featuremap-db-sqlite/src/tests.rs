use featuremap_core::{entities::*, repositories::FeatureRepo, RepoError};

use super::*;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(&connections.exclusive().unwrap()).unwrap();
    connections
}

fn feature(id: &str, name: &str, lat: f64, lng: f64) -> Feature {
    Feature {
        id: id.into(),
        name: name.into(),
        pos: MapPoint::try_from_lat_lng_deg(lat, lng).unwrap(),
        category: "park".into(),
    }
}

#[test]
fn create_and_load_features() {
    let db = setup();
    let a = feature("a", "Taman Suropati", -6.199, 106.832);
    let b = feature("b", "Taman Menteng", -6.196, 106.829);
    {
        let conn = db.exclusive().unwrap();
        conn.create_feature(a.clone()).unwrap();
        conn.create_feature(b.clone()).unwrap();
    }
    let conn = db.shared().unwrap();
    assert_eq!(conn.all_features().unwrap(), vec![a.clone(), b]);
    assert_eq!(conn.get_feature("a").unwrap(), a);
}

#[test]
fn create_feature_twice() {
    let db = setup();
    let conn = db.exclusive().unwrap();
    let a = feature("a", "x", 0.0, 0.0);
    conn.create_feature(a.clone()).unwrap();
    assert!(matches!(
        conn.create_feature(a),
        Err(RepoError::AlreadyExists)
    ));
}

#[test]
fn get_missing_feature() {
    let db = setup();
    assert!(matches!(
        db.shared().unwrap().get_feature("missing"),
        Err(RepoError::NotFound)
    ));
}

#[test]
fn update_feature() {
    let db = setup();
    let conn = db.exclusive().unwrap();
    conn.create_feature(feature("a", "old", 1.0, 2.0)).unwrap();
    let updated = feature("a", "new", 3.0, 4.0);
    conn.update_feature(&updated).unwrap();
    assert_eq!(conn.get_feature("a").unwrap(), updated);
    assert!(matches!(
        conn.update_feature(&feature("b", "new", 3.0, 4.0)),
        Err(RepoError::NotFound)
    ));
}

#[test]
fn delete_feature() {
    let db = setup();
    let conn = db.exclusive().unwrap();
    conn.create_feature(feature("a", "x", 1.0, 2.0)).unwrap();
    conn.create_feature(feature("b", "y", 1.0, 2.0)).unwrap();
    conn.delete_feature("a").unwrap();
    let ids: Vec<_> = conn
        .all_features()
        .unwrap()
        .into_iter()
        .map(|f| f.id.to_string())
        .collect();
    assert_eq!(ids, vec!["b"]);
    assert!(matches!(conn.delete_feature("a"), Err(RepoError::NotFound)));
}

#[test]
fn init_prepares_pooled_connection() {
    use diesel::connection::SimpleConnection;

    let db = Connections::init(":memory:", 1).unwrap();
    let conn = db.exclusive().unwrap();
    conn.sqlite_conn()
        .batch_execute("CREATE TABLE scratch (x INTEGER); INSERT INTO scratch VALUES (1);")
        .unwrap();
}
