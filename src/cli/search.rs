use tabled::Table;

use super::{report, session, spinner, table::SearchRow};
use crate::{spotify::QueryOptions, warning};

pub async fn search(query: String, types: String, limit: Option<u32>) {
    let session = session().await;
    let Some(token) = session.token().await else {
        return;
    };

    let mut opts = QueryOptions::new();
    if let Some(limit) = limit {
        opts = opts.limit(limit);
    }

    let pb = spinner("Searching...");
    let result = session
        .client
        .search(&query, types.as_str(), &token, &opts)
        .await;
    pb.finish_and_clear();

    let results = match result {
        Ok(results) => results,
        Err(e) => return report(&e),
    };

    let mut kinds: Vec<&String> = results.keys().collect();
    kinds.sort();
    let rows: Vec<SearchRow> = kinds
        .into_iter()
        .flat_map(|kind| {
            results[kind]
                .items
                .iter()
                .map(move |item| SearchRow::new(kind, item))
        })
        .collect();

    if rows.is_empty() {
        warning!("No results for {:?}", query);
        return;
    }
    println!("{}", Table::new(rows));
}
