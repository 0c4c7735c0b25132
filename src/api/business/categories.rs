//
//  instaapi
//  api/business/categories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Business categories.
//!
//! Categories form a two-level tree: top-level categories are queried with
//! the parent `-1`, subcategories with the id of their parent. Suggested
//! categories are derived by the platform from the account's username.

use serde::{Deserialize, Serialize};

use crate::api::common::{require_data, string_or_number, ApiResult, GraphErrorResponse};

/// Query id of the category tree query.
pub(crate) const CATEGORIES_QUERY_ID: &str = "425892567746558";

/// Query id of the suggested categories query.
pub(crate) const SUGGESTED_CATEGORIES_QUERY_ID: &str = "706774002864790";

/// Parent id selecting top-level categories.
pub(crate) const ROOT_CATEGORY: &str = "-1";

/// A business category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    #[serde(default)]
    data: Option<CategoriesData>,
    #[serde(default)]
    errors: Vec<GraphErrorResponse>,
}

#[derive(Debug, Deserialize)]
struct CategoriesData {
    #[serde(default)]
    categories: Option<Vec<CategoryResponse>>,
    #[serde(default)]
    suggested_categories: Option<Vec<CategoryResponse>>,
}

#[derive(Debug, Deserialize)]
struct CategoryResponse {
    #[serde(deserialize_with = "string_or_number")]
    category_id: String,
    #[serde(default)]
    category_name: String,
}

impl From<CategoryResponse> for BusinessCategory {
    fn from(raw: CategoryResponse) -> Self {
        Self {
            id: raw.category_id,
            name: raw.category_name,
        }
    }
}

impl CategoriesResponse {
    /// `data.categories`
    pub(crate) fn into_categories(self) -> ApiResult<Vec<BusinessCategory>> {
        let list = self.data.and_then(|d| d.categories);
        Ok(convert(require_data(list, &self.errors, "data.categories")?))
    }

    /// `data.suggested_categories`
    pub(crate) fn into_suggested(self) -> ApiResult<Vec<BusinessCategory>> {
        let list = self.data.and_then(|d| d.suggested_categories);
        Ok(convert(require_data(list, &self.errors, "data.suggested_categories")?))
    }
}

fn convert(list: Vec<CategoryResponse>) -> Vec<BusinessCategory> {
    list.into_iter().map(BusinessCategory::from).collect()
}
