use std::{borrow::Cow, ffi::OsStr, path::PathBuf};

use rocket::{get, http::ContentType, response::content::RawHtml, routes, Route};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "../featuremap-frontend/dist/"]
#[allow_missing = true]
struct FrontendAsset;

#[get("/")]
pub fn get_index() -> Option<RawHtml<Cow<'static, [u8]>>> {
    FrontendAsset::get("index.html").map(|html| RawHtml(html.data))
}

// Rendered by the client side router
#[get("/locations")]
pub fn get_locations() -> Option<RawHtml<Cow<'static, [u8]>>> {
    get_index()
}

#[get("/<file..>", rank = 20)]
pub fn get_file(file: PathBuf) -> Option<(ContentType, Cow<'static, [u8]>)> {
    let filename = file.display().to_string();
    let asset = FrontendAsset::get(&filename)?;
    let content_type = file
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Bytes);
    Some((content_type, asset.data))
}

pub fn routes() -> Vec<Route> {
    routes![get_index, get_locations, get_file]
}
