// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the backend's JSON contracts and are used on both
// sides of the server function boundary. Optional fields default when the
// backend omits them so a partial payload still decodes.

use serde::{Deserialize, Serialize};

use crate::web_app::listing::Range;

/// Completion date as sent by the backend: a bare year in listings,
/// a date string in chat replies and unit details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletionDate {
    Year(i64),
    Text(String),
}

impl std::fmt::Display for CompletionDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionDate::Year(year) => write!(f, "{}", year),
            CompletionDate::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Unit as returned by the unified search endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub unit_code: String,
    pub project_name: String,
    #[serde(default)]
    pub full_payment: f64,
    #[serde(default)]
    pub unit_type: String,
    #[serde(default)]
    pub floor: i32,
    #[serde(default)]
    pub view: String,
    #[serde(default)]
    pub total_area: f64,
    #[serde(default)]
    pub completion_date: Option<CompletionDate>,
    #[serde(default)]
    pub main_photo_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPagination {
    pub current_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub page_size: u32,
    pub skip: u32,
    pub take: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

/// Paginated search response, replaced wholesale on every applied search
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnifiedUnits {
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub pagination: UnitPagination,
}

/// Filter payload for `search/unified`.
///
/// Every field is serialized, absent bounds as `null`, which the backend
/// reads as "no bound on this side".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    pub min_floor: Option<f64>,
    pub max_floor: Option<f64>,
    pub min_parking: Option<f64>,
    pub max_parking: Option<f64>,
    pub unit_type: Option<String>,
    pub view: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PriceRangeResponse {
    pub min_price: f64,
    pub max_price: f64,
}

impl From<PriceRangeResponse> for Range {
    fn from(r: PriceRangeResponse) -> Self {
        Range::new(r.min_price, r.max_price)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AreaRange {
    pub min_area: f64,
    pub max_area: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AreaStatisticsResponse {
    pub area_statistics: AreaRange,
}

impl From<AreaStatisticsResponse> for Range {
    fn from(r: AreaStatisticsResponse) -> Self {
        Range::new(r.area_statistics.min_area, r.area_statistics.max_area)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FloorRangeResponse {
    pub min_floor: f64,
    pub max_floor: f64,
}

impl From<FloorRangeResponse> for Range {
    fn from(r: FloorRangeResponse) -> Self {
        Range::new(r.min_floor, r.max_floor)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UnitTypesResponse {
    #[serde(default)]
    pub available_unit_types: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPhoto {
    pub main_photo_url: Option<String>,
    pub has_photos: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLocationDetail {
    pub address: Option<String>,
    pub builder: Option<String>,
    pub completion_date: Option<String>,
    pub website: Option<String>,
    pub contact_info: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearbyFacilities {
    pub healthcare: Vec<Facility>,
    pub education: Vec<Facility>,
    pub transport: Vec<Facility>,
    pub restaurants: Vec<Facility>,
    pub shopping: Vec<Facility>,
}

impl NearbyFacilities {
    /// (category, count) pairs in display order
    pub fn counts(&self) -> [(&'static str, usize); 5] {
        [
            ("Healthcare", self.healthcare.len()),
            ("Education", self.education.len()),
            ("Transport", self.transport.len()),
            ("Shopping", self.shopping.len()),
            ("Restaurants", self.restaurants.len()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationInfo {
    pub coordinates: Option<Coordinates>,
    pub photos: Option<UnitPhoto>,
    pub total_facilities: u32,
    pub search_radius_meters: f64,
    pub project_details: Option<ProjectLocationDetail>,
    pub facilities_data: Option<NearbyFacilities>,
}

/// Full unit record for the detail page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitDetail {
    pub unit_code: String,
    #[serde(default)]
    pub unit_type: String,
    #[serde(default)]
    pub floor: i32,
    #[serde(default)]
    pub view: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub completion_date: Option<CompletionDate>,
    #[serde(default)]
    pub asking_price: Option<f64>,
    #[serde(default)]
    pub payment_20_percent: Option<f64>,
    #[serde(default)]
    pub payment_50_percent: Option<f64>,
    #[serde(default)]
    pub payment_70_percent: Option<f64>,
    #[serde(default)]
    pub full_payment: Option<f64>,
    #[serde(default)]
    pub total_area: Option<f64>,
    #[serde(default)]
    pub net_area: Option<f64>,
    #[serde(default)]
    pub terrace_area: Option<f64>,
    #[serde(default)]
    pub balcony_area: Option<f64>,
    #[serde(default)]
    pub unit_area: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub area_unit: Option<String>,
    #[serde(default)]
    pub location_info: Option<LocationInfo>,
}

impl UnitDetail {
    /// Labelled payment plans that the backend actually priced
    pub fn payment_plans(&self) -> Vec<(&'static str, f64)> {
        [
            ("Asking price", self.asking_price),
            ("20% down payment", self.payment_20_percent),
            ("50% down payment", self.payment_50_percent),
            ("70% down payment", self.payment_70_percent),
            ("Full payment", self.full_payment),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// Labelled area breakdown, skipping unknown values
    pub fn areas(&self) -> Vec<(&'static str, f64)> {
        [
            ("Total area", self.total_area),
            ("Net area", self.net_area),
            ("Unit area", self.unit_area),
            ("Terrace", self.terrace_area),
            ("Balcony", self.balcony_area),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

/// Value distribution used by the statistics dashboard
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub values: Vec<f64>,
    pub total: u64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
}

/// One histogram bar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub from: f64,
    pub to: f64,
    pub count: usize,
}

impl Distribution {
    /// Split `[min, max]` into `buckets` equal-width bars.
    ///
    /// The last bar is closed on the right so `max` is counted.
    pub fn histogram(&self, buckets: usize) -> Vec<HistogramBucket> {
        if buckets == 0 || self.values.is_empty() {
            return Vec::new();
        }
        let (lo, hi) = (self.min.min(self.max), self.max.max(self.min));
        let width = (hi - lo) / buckets as f64;
        let mut bars: Vec<HistogramBucket> = (0..buckets)
            .map(|i| HistogramBucket {
                from: lo + width * i as f64,
                to: if i + 1 == buckets { hi } else { lo + width * (i + 1) as f64 },
                count: 0,
            })
            .collect();

        for value in self.values.iter().filter(|v| v.is_finite()) {
            if *value < lo || *value > hi {
                continue;
            }
            let index = if width > 0.0 {
                (((value - lo) / width) as usize).min(buckets - 1)
            } else {
                0
            };
            bars[index].count += 1;
        }
        bars
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceDistribution {
    pub all_prices: Vec<f64>,
    pub total_units_with_prices: u64,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub median_price: f64,
}

impl From<PriceDistribution> for Distribution {
    fn from(p: PriceDistribution) -> Self {
        Distribution {
            values: p.all_prices,
            total: p.total_units_with_prices,
            min: p.min_price,
            max: p.max_price,
            avg: p.avg_price,
            median: p.median_price,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaDistribution {
    pub all_areas: Vec<f64>,
    pub total_units_with_areas: u64,
    pub min_area: f64,
    pub max_area: f64,
    pub avg_area: f64,
    pub median_area: f64,
}

impl From<AreaDistribution> for Distribution {
    fn from(a: AreaDistribution) -> Self {
        Distribution {
            values: a.all_areas,
            total: a.total_units_with_areas,
            min: a.min_area,
            max: a.max_area,
            avg: a.avg_area,
            median: a.median_area,
        }
    }
}

/// `statistics/dashboard` response
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub price_distribution: PriceDistribution,
    pub area_distribution: AreaDistribution,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_projects: u64,
    pub total_units: u64,
    pub avg_price: f64,
}

/// `admin/dashboard` response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminDashboardData {
    pub dashboard_stats: DashboardStats,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilitySummary {
    pub healthcare: u32,
    pub education: u32,
    pub transport: u32,
    pub shopping: u32,
    pub restaurants: u32,
}

/// Geocoded location with nearby facility counts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminLocation {
    pub location: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub facilities_summary: FacilitySummary,
    #[serde(default)]
    pub search_radius_meters: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocationQuery {
    pub location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Outcome of an admin data upload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub file_name: String,
    pub bytes: usize,
    #[serde(default)]
    pub message: Option<String>,
}

/// Chat request body
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatUnitInfo {
    #[serde(default)]
    pub completion_date: Option<CompletionDate>,
    #[serde(default)]
    pub floor: i32,
    #[serde(default)]
    pub full_payment: f64,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub total_area: f64,
    #[serde(default)]
    pub unit_code: String,
    #[serde(default)]
    pub unit_type: String,
    #[serde(default)]
    pub view: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatUnitResult {
    pub link: String,
    pub unit_info: ChatUnitInfo,
}

/// Structured reply from `chatbot/ask`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub description: String,
    #[serde(default)]
    pub has_units: bool,
    #[serde(default)]
    pub unit_result: Vec<ChatUnitResult>,
}
