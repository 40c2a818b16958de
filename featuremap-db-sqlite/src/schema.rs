///////////////////////////////////////////////////////////////////////
// Features
///////////////////////////////////////////////////////////////////////

table! {
    features (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        lat -> Double,
        lng -> Double,
        category -> Text,
    }
}
