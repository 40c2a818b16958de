use std::{fmt::Display, result};

use featuremap_boundary::Error as JsonErrorResponse;
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, status::Created, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, sqlite};
use crate::{
    adapters::json::{self, from_json},
    core::usecases,
};

mod error;
mod features;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<Created<Json<T>>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   features   --- //
        features::get_features,
        features::get_feature,
        features::post_feature,
        features::put_feature,
        features::delete_feature,
        // ---   util   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
