use anyhow::{Result, bail};
use artsearch_client::{Outcome, Session};
use artsearch_core::{FilterSelection, Settings, UserAction, build_search};

use super::build_client;
use crate::render;

pub(crate) async fn run_search(
    settings: &Settings,
    selection: FilterSelection,
    open: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut session = Session::new(build_client(settings, false)?);
    let outcome = session.dispatch(&UserAction::Submit(selection)).await;
    report(&mut session, &outcome, open, json).await
}

pub(crate) async fn run_page(
    settings: &Settings,
    url: &str,
    open: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut session = Session::new(build_client(settings, false)?);
    let outcome = session.open_url(url).await;
    report(&mut session, &outcome, open, json).await
}

pub(crate) fn run_url(settings: &Settings, selection: &FilterSelection) -> Result<()> {
    let request = build_search(&settings.endpoint()?, selection);
    println!("url: {}", request.url);
    println!("label: {}", request.label);
    Ok(())
}

async fn report(
    session: &mut Session,
    outcome: &Outcome,
    open: Option<usize>,
    json: bool,
) -> Result<()> {
    if *outcome == Outcome::FetchFailed {
        bail!("catalog request failed");
    }

    let detail = match open {
        Some(index) => match session.dispatch(&UserAction::OpenRecord(index)).await {
            Outcome::Detail(projection) => Some(projection),
            _ => bail!("no record at index {index}"),
        },
        None => None,
    };

    let state = session.state();
    if json {
        let out = serde_json::json!({
            "label": state.query_label(),
            "total_records": state.total_records(),
            "navigation": state.navigation(),
            "previews": state.previews(),
            "detail": detail,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!("{}", render::previews(state));
    if let Some(url) = &state.navigation().next_url {
        println!("next: {url}");
    }
    if let Some(url) = &state.navigation().prev_url {
        println!("prev: {url}");
    }
    if let Some(projection) = detail {
        println!();
        print!("{}", render::detail(&projection));
    }
    Ok(())
}
