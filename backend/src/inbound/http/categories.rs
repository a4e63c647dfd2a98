//! Category browser endpoint.
//!
//! ```text
//! GET /api/v1/categories?category=emergency&search=shelter
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::Error;
use crate::domain::categories::{
    CategoryQuery, CategoryRecord, CategorySelector, CategoryValidationError, Facet, facet_counts,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query string for `GET /api/v1/categories`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoriesQuery {
    /// `all` or a category tag; defaults to `all`.
    #[param(example = "emergency")]
    pub category: Option<String>,
    /// Case-insensitive text matched against names and descriptions.
    #[param(example = "shelter")]
    pub search: Option<String>,
}

impl CategoriesQuery {
    fn to_domain(&self) -> Result<CategoryQuery, Error> {
        let selector = match self.category.as_deref() {
            None | Some("") => CategorySelector::All,
            Some(raw) => raw.parse().map_err(|err: CategoryValidationError| {
                Error::invalid_request(err.to_string())
                    .with_details(json!({ "field": "category", "code": "unknown_category" }))
            })?,
        };
        Ok(CategoryQuery::new(
            selector,
            self.search.clone().unwrap_or_default(),
        ))
    }
}

/// One filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FacetBody {
    #[schema(example = "emergency")]
    pub tag: String,
    #[schema(example = "Emergency")]
    pub label: String,
    #[schema(example = 5)]
    pub count: usize,
}

impl From<Facet> for FacetBody {
    fn from(facet: Facet) -> Self {
        Self {
            tag: facet.selector.as_str().to_owned(),
            label: facet.selector.label().to_owned(),
            count: facet.count,
        }
    }
}

/// One category card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    pub id: String,
    #[schema(example = "Emergency Shelter Operations")]
    pub name: String,
    #[schema(example = "emergency-shelter-operations")]
    pub slug: String,
    pub description: String,
    pub icon: String,
    #[schema(example = "emergency")]
    pub category: String,
    #[schema(example = "Emergency")]
    pub category_label: String,
    /// Design token for the card accent.
    #[schema(example = "error-600")]
    pub color_token: String,
    #[schema(example = "real-time")]
    pub timeframe: String,
    #[schema(example = "⚡ Real-time")]
    pub timeframe_label: String,
    /// Discussion board route.
    #[schema(example = "/community/emergency-shelter-operations")]
    pub href: String,
}

impl From<&CategoryRecord> for CategoryCard {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            id: record.id().to_owned(),
            name: record.name().to_owned(),
            slug: record.slug().to_owned(),
            description: record.description().to_owned(),
            icon: record.icon().to_owned(),
            category: record.category().as_str().to_owned(),
            category_label: record.category().label().to_owned(),
            color_token: record.category().color_token().to_owned(),
            timeframe: record.timeframe().as_str().to_owned(),
            timeframe_label: record.timeframe().label().to_owned(),
            href: record.board_path(),
        }
    }
}

/// Body of `GET /api/v1/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    /// `remote` or `builtin`.
    #[schema(example = "builtin")]
    pub source: String,
    /// Active selector.
    #[schema(example = "all")]
    pub selected: String,
    /// Search text as applied.
    pub search: String,
    /// Chip counts over the full list.
    pub facets: Vec<FacetBody>,
    /// Cards passing the selector and search, in `sort_order`.
    pub categories: Vec<CategoryCard>,
}

/// Browse discussion categories.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(CategoriesQuery),
    responses(
        (status = 200, description = "Filtered categories", body = CategoriesResponse),
        (status = 400, description = "Unknown category tag", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories",
    security([])
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
    query: web::Query<CategoriesQuery>,
) -> ApiResult<web::Json<CategoriesResponse>> {
    let query = query.to_domain()?;
    let loaded = state.categories.load().await;
    let categories = query
        .apply(&loaded.records)
        .into_iter()
        .map(CategoryCard::from)
        .collect();

    Ok(web::Json(CategoriesResponse {
        source: loaded.origin.as_str().to_owned(),
        selected: query.selector.as_str().to_owned(),
        facets: facet_counts(&loaded.records)
            .into_iter()
            .map(FacetBody::from)
            .collect(),
        search: query.search,
        categories,
    }))
}
