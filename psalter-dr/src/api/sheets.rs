//! Sheet browsing API: sheet listing, manuscript lists, paginated words

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use psalter_common::codec::WordEntry;

use crate::api::ApiError;
use crate::pagination::{paginate, PAGE_SIZE};
use crate::AppState;

/// Query parameters for word listing
#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// One row of the sheet listing
#[derive(Debug, Serialize)]
pub struct SheetSummary {
    pub name: String,
    pub manuscript_count: usize,
    pub word_count: usize,
}

/// Paginated word listing response
#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub sheet: String,
    pub total_words: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub words: Vec<WordEntry>,
}

/// GET /api/sheets
///
/// Lists all decoded sheets in wire order.
pub async fn list_sheets(State(state): State<AppState>) -> Json<Vec<SheetSummary>> {
    let summaries = state
        .data
        .psalter
        .sheets
        .iter()
        .map(|sheet| SheetSummary {
            name: sheet.name.clone(),
            manuscript_count: sheet.manuscripts.len(),
            word_count: sheet.words.len(),
        })
        .collect();
    Json(summaries)
}

/// GET /api/sheets/:name/manuscripts
///
/// The manuscript list declared for a sheet, in declared order.
pub async fn get_sheet_manuscripts(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let manuscripts = state
        .data
        .psalter
        .manuscripts(&name)
        .ok_or_else(|| ApiError::NotFound(format!("sheet '{}'", name)))?;
    Ok(Json(manuscripts.to_vec()))
}

/// GET /api/sheets/:name/words?page=N
///
/// Paginated decoded word entries for one sheet, 100 per page.
pub async fn get_sheet_words(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<WordsResponse>, ApiError> {
    let sheet = state
        .data
        .psalter
        .sheet(&name)
        .ok_or_else(|| ApiError::NotFound(format!("sheet '{}'", name)))?;

    let p = paginate(sheet.words.len(), query.page);
    let words = sheet.words[p.start..p.end].to_vec();

    Ok(Json(WordsResponse {
        sheet: sheet.name.clone(),
        total_words: sheet.words.len(),
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        words,
    }))
}
