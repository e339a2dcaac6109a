use crate::server::error::AppError;

/// Parses a comma-separated list of numeric IDs from a query string value
///
/// Blank segments are skipped so `"1,,2,"` yields `[1, 2]`. Duplicates are removed
/// while preserving first-seen order.
///
/// # Arguments
/// - `value` - The raw query parameter, e.g. `"3,7,12"`
///
/// # Returns
/// - `Ok(Vec<i32>)` - Successfully parsed IDs
/// - `Err(AppError::BadRequest)` - A segment is not a valid ID
pub fn parse_id_list(value: &str) -> Result<Vec<i32>, AppError> {
    let mut ids = Vec::new();

    for segment in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let id = segment
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest(format!("Invalid ID '{}' in list", segment)))?;

        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}
