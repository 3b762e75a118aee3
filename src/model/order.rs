// src/model/order.rs

use crate::model::reference::ReferenceData;
use crate::model::variety::Variety;
use chrono::NaiveDate;
use serde::Serialize;

/// A slice of one harvest lot ordered to cover one target month's demand.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrder {
    pub po_id: String,
    /// The simulated "current" month, always the 1st.
    pub order_date: NaiveDate,
    pub supplier_id: String,
    pub country: String,
    pub variety: Variety,
    pub quantity_ordered: f64,
    pub harvest_month: u32,
    pub harvest_year: i32,
    pub expected_arrival_date: NaiveDate,
    /// First day of the month this order plans for.
    pub demand_month_target: NaiveDate,
    pub source_lot_id: String,
}

pub fn po_id(sequence: u32) -> String {
    format!("PO_{:05}", sequence)
}

/// Demand for a target month and variety that eligible supply could not cover.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortfallWarning {
    pub order_date: NaiveDate,
    pub demand_month_target: NaiveDate,
    pub variety: Variety,
    pub required: f64,
    pub unmet_quantity: f64,
}

// Column names are the export contract with downstream consumers.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseOrderRow {
    #[serde(rename = "PO_ID")]
    pub po_id: String,
    #[serde(rename = "OrderDate")]
    pub order_date: String,
    #[serde(rename = "SupplierID")]
    pub supplier_id: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "AppleVariety")]
    pub apple_variety: String,
    #[serde(rename = "QuantityOrdered")]
    pub quantity_ordered: f64,
    #[serde(rename = "HarvestMonth")]
    pub harvest_month: String,
    #[serde(rename = "HarvestYear")]
    pub harvest_year: i32,
    #[serde(rename = "ExpectedArrivalDate")]
    pub expected_arrival_date: String,
    #[serde(rename = "DemandMonthTarget")]
    pub demand_month_target: String,
    #[serde(rename = "SourceHarvestID")]
    pub source_harvest_id: String,
}

impl PurchaseOrderRow {
    pub fn from_order(po: &PurchaseOrder, reference: &ReferenceData) -> Self {
        let harvest_month = reference
            .month_name(po.harvest_month)
            .map(str::to_string)
            .unwrap_or_else(|| po.harvest_month.to_string());

        Self {
            po_id: po.po_id.clone(),
            order_date: po.order_date.format("%Y-%m-%d").to_string(),
            supplier_id: po.supplier_id.clone(),
            country: po.country.clone(),
            apple_variety: po.variety.name().to_string(),
            quantity_ordered: po.quantity_ordered,
            harvest_month,
            harvest_year: po.harvest_year,
            expected_arrival_date: po.expected_arrival_date.format("%Y-%m-%d").to_string(),
            demand_month_target: po.demand_month_target.format("%Y-%m").to_string(),
            source_harvest_id: po.source_lot_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortfallRow {
    #[serde(rename = "DemandMonthTarget")]
    pub demand_month_target: String,
    #[serde(rename = "AppleVariety")]
    pub apple_variety: String,
    #[serde(rename = "Required")]
    pub required: f64,
    #[serde(rename = "Fulfilled")]
    pub fulfilled: f64,
    #[serde(rename = "Shortfall")]
    pub shortfall: f64,
}

impl From<&ShortfallWarning> for ShortfallRow {
    fn from(warning: &ShortfallWarning) -> Self {
        Self {
            demand_month_target: warning.demand_month_target.format("%Y-%m").to_string(),
            apple_variety: warning.variety.name().to_string(),
            required: warning.required,
            fulfilled: warning.required - warning.unmet_quantity,
            shortfall: warning.unmet_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_formats_dates_and_month_name() {
        let po = PurchaseOrder {
            po_id: po_id(7),
            order_date: NaiveDate::from_ymd_opt(2021, 8, 1).unwrap(),
            supplier_id: "S1".to_string(),
            country: "India".to_string(),
            variety: Variety::RoyalGala,
            quantity_ordered: 500.0,
            harvest_month: 8,
            harvest_year: 2021,
            expected_arrival_date: NaiveDate::from_ymd_opt(2021, 8, 31).unwrap(),
            demand_month_target: NaiveDate::from_ymd_opt(2021, 11, 1).unwrap(),
            source_lot_id: "S1_Royal Gala_8_2021".to_string(),
        };

        let row = PurchaseOrderRow::from_order(&po, &ReferenceData::default());
        assert_eq!(row.po_id, "PO_00007");
        assert_eq!(row.order_date, "2021-08-01");
        assert_eq!(row.apple_variety, "Royal Gala");
        assert_eq!(row.harvest_month, "August");
        assert_eq!(row.expected_arrival_date, "2021-08-31");
        assert_eq!(row.demand_month_target, "2021-11");
    }
}
