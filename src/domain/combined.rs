// src/domain/combined.rs

use serde::Serialize;

use crate::domain::{CoordinateTable, PriceRecord, RegionDistrictTable, Scalar};
use crate::errors::{PipelineError, PipelineResult};

/// A fully typed row, ready for rendering. Built fresh every run, never persisted.
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedRecord {
    pub buildingname: String,
    pub buildingaddress: String,
    pub region: String,
    pub district: Option<String>,
    pub medianpredprice: i64,
    pub lat: f64,
    pub lng: f64,
    pub transactionscount: i64,
    pub built: i64,
    pub numberofunits: i64,
    pub numberoffloors: i64,
    pub colour: String,
    pub medianpredprice_formatted: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Inner-joins prices to coordinates on address, left-joins districts on region,
/// then coerces and derives the display fields.
///
/// Rows without a coordinate are dropped; rows with an unmapped region keep
/// `district: None`. Any price, count or colour that won't coerce fails the
/// whole call.
pub fn combine(
    prices: &[PriceRecord],
    coordinates: &CoordinateTable,
    districts: &RegionDistrictTable,
) -> PipelineResult<Vec<CombinedRecord>> {
    let mut rows = Vec::new();

    for price in prices {
        let Some(coordinate) = coordinates.get(&price.buildingaddress) else {
            continue;
        };

        let medianpredprice = coerce(price, "medianpredprice", &price.medianpredprice)?;
        let colour = price.colour.clone().unwrap_or_default();
        let (r, g, b) = split_colour(&colour).ok_or_else(|| PipelineError::MalformedColour {
            building: price.buildingaddress.clone(),
            value: colour.clone(),
        })?;

        rows.push(CombinedRecord {
            buildingname: price.buildingname.clone(),
            buildingaddress: price.buildingaddress.clone(),
            region: price.region.clone(),
            district: districts.get(&price.region).cloned(),
            medianpredprice,
            lat: coordinate.lat,
            lng: coordinate.lng,
            transactionscount: coerce(price, "transactionscount", &price.transactionscount)?,
            built: coerce(price, "built", &price.built)?,
            numberofunits: coerce(price, "numberofunits", &price.numberofunits)?,
            numberoffloors: coerce(price, "numberoffloors", &price.numberoffloors)?,
            medianpredprice_formatted: format_thousands(medianpredprice),
            colour,
            r,
            g,
            b,
        });
    }

    Ok(rows)
}

fn coerce(price: &PriceRecord, field: &'static str, value: &Scalar) -> PipelineResult<i64> {
    value.to_i64().ok_or_else(|| PipelineError::Coercion {
        field,
        building: price.buildingaddress.clone(),
        value: value.to_string(),
    })
}

/// `6543210` -> `"6,543,210"`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Splits a packed `"r,g,b"` colour. Exactly three channels, each 0-255.
pub fn split_colour(colour: &str) -> Option<(u8, u8, u8)> {
    let mut channels = colour.split(',').map(|c| c.trim().parse::<u8>());

    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    if channels.next().is_some() {
        return None;
    }
    Some((r, g, b))
}
