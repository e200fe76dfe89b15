//! Search query construction

/// Build DIY search queries from the user's items.
///
/// `["cardboard", "glue"]` becomes combined queries for the first three
/// items, two per-item queries for the first two items, and a pairing
/// query. Duplicates are dropped, keeping the first.
pub fn build_search_queries(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut queries = Vec::new();

    let combined = items.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(" ");
    queries.push(format!("DIY craft using {}", combined));
    queries.push(format!("DIY projects with {}", combined));

    for item in items.iter().take(2) {
        queries.push(format!("DIY {} craft", item));
        queries.push(format!("{} craft tutorial", item));
    }

    if items.len() > 1 {
        queries.push(format!("creative DIY with {} and {}", items[0], items[1]));
    }

    let mut unique: Vec<String> = Vec::with_capacity(queries.len());
    for query in queries {
        if !unique.contains(&query) {
            unique.push(query);
        }
    }
    unique
}
