use axum::{
    Form,
    extract::{Query, RawQuery, State, rejection::FormRejection},
    response::Html,
};
use crate::{
    error::AppError,
    message::FormFields,
    routes::page::render_page,
    state::SharedState,
    view::{PageSnapshot, PageView},
};

/// First value of `key` in the page query. Repeated keys are allowed.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub async fn chat_page_handler(
    State(state): State<SharedState>,
    RawQuery(raw): RawQuery,
    Query(query): Query<Vec<(String, String)>>,
) -> Html<String> {
    let form = state.form_for(first_param(&query, "api"));
    Html(render_page(
        form.config().base(),
        raw.as_deref(),
        &FormFields::default(),
        &PageSnapshot::default(),
    ))
}

pub async fn chat_submit_handler(
    State(state): State<SharedState>,
    RawQuery(raw): RawQuery,
    Query(query): Query<Vec<(String, String)>>,
    payload: Result<Form<FormFields>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(fields) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let form = state.form_for(first_param(&query, "api"));
    let view = PageView::new();
    // A skipped submission leaves the view idle, which renders the blank page.
    form.submit(&fields, &view).await;

    Ok(Html(render_page(
        form.config().base(),
        raw.as_deref(),
        &fields,
        &view.snapshot(),
    )))
}
