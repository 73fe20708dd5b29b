//! Geocoding
//!
//! Resolves a free-text location to coordinates with one request to a
//! Nominatim-compatible search endpoint.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::Coordinates;

/// One search hit; Nominatim sends coordinates as strings
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

fn search_url(endpoint: &str, query: &str) -> String {
    let encoded = utf8_percent_encode(query.trim(), NON_ALPHANUMERIC);
    format!("{}?format=json&limit=1&q={}", endpoint, encoded)
}

/// First hit of a search response, if any
fn first_coordinates(places: &[Place]) -> AppResult<Option<Coordinates>> {
    let Some(place) = places.first() else {
        return Ok(None);
    };
    let lat = place
        .lat
        .parse::<f64>()
        .map_err(|e| AppError::Corrupt(format!("lat {:?}: {}", place.lat, e)))?;
    let lon = place
        .lon
        .parse::<f64>()
        .map_err(|e| AppError::Corrupt(format!("lon {:?}: {}", place.lon, e)))?;
    Ok(Some(Coordinates { lat, lon }))
}

fn js_error(err: wasm_bindgen::JsValue) -> AppError {
    AppError::Network(format!("{:?}", err))
}

/// Look up `query`; `Ok(None)` when the service knows no such place
pub async fn geocode(config: &AppConfig, query: &str) -> AppResult<Option<Coordinates>> {
    if query.trim().is_empty() {
        return Ok(None);
    }
    let url = search_url(&config.geocode_url, query);
    log::debug!("[GEOCODE] GET {}", url);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| AppError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(AppError::Http(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let places: Vec<Place> =
        serde_wasm_bindgen::from_value(body).map_err(|e| AppError::Corrupt(e.to_string()))?;
    first_coordinates(&places)
}
