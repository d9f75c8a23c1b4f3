use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// half extent of the polar stereographic grids, in meters
const GRID_EXTENT: f64 = 4194304.0;

/// tile resolutions (meters per pixel) for zoom levels 0 through 6
const RESOLUTIONS: [f64; 7] = [16384.0, 8192.0, 4096.0, 2048.0, 1024.0, 512.0, 256.0];

/// polar hemisphere used to pick the display projection of the selection map.
/// has no effect on queries, which are always expressed in geographic coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Hemisphere {
    North,
    #[default]
    South,
}

/// custom CRS definition for a leaflet-style map widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapProjection {
    pub name: String,
    pub custom: bool,
    pub proj4def: String,
    pub origin: [f64; 2],
    pub bounds: [[f64; 2]; 2],
    pub resolutions: Vec<f64>,
}

/// everything a map widget needs to draw the selection map for a hemisphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub basemap: String,
    pub projection: MapProjection,
}

impl Hemisphere {
    pub fn epsg_code(&self) -> u32 {
        match self {
            Hemisphere::North => 3413,
            Hemisphere::South => 3031,
        }
    }

    pub fn proj4def(&self) -> &'static str {
        match self {
            Hemisphere::North => "+proj=stere +lat_0=90 +lat_ts=70 +lon_0=-45 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs",
            Hemisphere::South => "+proj=stere +lat_0=-90 +lat_ts=-71 +lon_0=0 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs",
        }
    }

    /// map center as (lat, lon)
    pub fn center(&self) -> (f64, f64) {
        match self {
            Hemisphere::North => (90.0, 0.0),
            Hemisphere::South => (-90.0, 0.0),
        }
    }

    /// NASA GIBS Blue Marble layer published in this hemisphere's projection
    pub fn basemap(&self) -> String {
        format!("NASAGIBS.BlueMarble{}", self.epsg_code())
    }

    pub fn projection(&self) -> MapProjection {
        MapProjection {
            name: format!("EPSG:{}", self.epsg_code()),
            custom: true,
            proj4def: self.proj4def().to_string(),
            origin: [-GRID_EXTENT, GRID_EXTENT],
            bounds: [[-GRID_EXTENT, -GRID_EXTENT], [GRID_EXTENT, GRID_EXTENT]],
            resolutions: RESOLUTIONS.to_vec(),
        }
    }

    pub fn map_view(&self) -> MapView {
        MapView {
            center: self.center(),
            zoom: 1,
            basemap: self.basemap(),
            projection: self.projection(),
        }
    }
}
