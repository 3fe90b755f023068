//! Location picker state: viewport, click-to-point, geocoder results.
//!
//! Tile rendering is left to the map vendor; this model only needs enough
//! Web Mercator math to turn a click on the map surface into a coordinate.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::GEOCODER_RESULT_LIMIT;
use crate::net::types::LngLat;

/// Edge length of one map tile in pixels at zoom 0.
const TILE_SIZE: f64 = 512.0;
const MAX_LATITUDE: f64 = 85.051_128_78;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            latitude: 37.7577,
            longitude: -122.4376,
            zoom: 8.0,
        }
    }
}

impl MapViewport {
    fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Project a coordinate to world pixels at the current zoom.
    pub fn project(&self, point: LngLat) -> (f64, f64) {
        let size = self.world_size();
        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (point.lng + 180.0) / 360.0 * size;
        let y = (1.0 - (PI / 4.0 + lat / 2.0).tan().ln() / PI) / 2.0 * size;
        (x, y)
    }

    /// Coordinate under pixel `(px, py)` of a `width` x `height` map surface
    /// centred on this viewport.
    pub fn unproject(&self, px: f64, py: f64, width: f64, height: f64) -> LngLat {
        let size = self.world_size();
        let (cx, cy) = self.project(LngLat {
            lng: self.longitude,
            lat: self.latitude,
        });
        let x = cx + (px - width / 2.0);
        let y = cy + (py - height / 2.0);

        let lng = x / size * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * y / size);
        let lat = n.sinh().atan().to_degrees();
        LngLat { lng, lat }
    }

    pub fn center_on(&mut self, point: LngLat) {
        self.longitude = point.lng;
        self.latitude = point.lat;
    }
}

/// One geocoder match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    pub center: LngLat,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapState {
    pub viewport: MapViewport,
    pub query: String,
    pub results: Vec<GeocodeResult>,
    /// Last point chosen by click or search.
    pub selected: Option<LngLat>,
}

impl MapState {
    /// Store geocoder matches, keeping at most `GEOCODER_RESULT_LIMIT`.
    pub fn set_results(&mut self, mut results: Vec<GeocodeResult>) {
        results.truncate(GEOCODER_RESULT_LIMIT);
        self.results = results;
    }

    /// Choose `point` as the new centre. Returns the point to publish.
    pub fn select_center(&mut self, point: LngLat) -> LngLat {
        self.viewport.center_on(point);
        self.selected = Some(point);
        self.results.clear();
        point
    }

    /// Trimmed geocoder query, or `None` when blank.
    pub fn search_query(&self) -> Option<&str> {
        let q = self.query.trim();
        (!q.is_empty()).then_some(q)
    }
}
