use crate::parameters::ParameterVector;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Parameter files already read, keyed by the path they were loaded from
static PARAMETER_CACHE: Lazy<Mutex<HashMap<PathBuf, ParameterVector>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Load a parameter vector from a JSON file, using the cache if available.
///
/// Keys are the camelCase parameter names; any key left out keeps its
/// default. Unknown keys and non-finite values are rejected.
pub fn load_parameters<P: AsRef<Path>>(file_path: P) -> Result<ParameterVector, String> {
    let path_buf = file_path.as_ref().to_path_buf();

    {
        let cache = PARAMETER_CACHE
            .lock()
            .map_err(|e| format!("Parameter cache poisoned: {}", e))?;
        if let Some(params) = cache.get(&path_buf) {
            return Ok(*params);
        }
    }

    let json_str = fs::read_to_string(&path_buf).map_err(|e| {
        let error = format!("Failed to read file {}: {}", path_buf.display(), e);
        tracing::warn!(target: "marine_eco::config", path = %path_buf.display(), %error, "config.load_failed");
        error
    })?;

    let params = parameters_from_str(&json_str).map_err(|e| {
        let error = format!("{}: {}", path_buf.display(), e);
        tracing::warn!(target: "marine_eco::config", path = %path_buf.display(), %error, "config.load_failed");
        error
    })?;

    tracing::info!(
        target: "marine_eco::config",
        path = %path_buf.display(),
        boats = params.boats,
        co2 = params.co2,
        "config.loaded"
    );

    {
        let mut cache = PARAMETER_CACHE
            .lock()
            .map_err(|e| format!("Parameter cache poisoned: {}", e))?;
        cache.insert(path_buf, params);
    }

    Ok(params)
}

/// Parse a parameter vector from a JSON document. Not cached.
///
/// # Examples
/// ```
/// use marine_eco_rust::parameter_loader::parameters_from_str;
///
/// let params = parameters_from_str(r#"{ "boats": 40, "pH": 8.1 }"#).unwrap();
/// assert_eq!(params.boats, 40.0);
/// assert_eq!(params.ph, 8.1);
/// assert_eq!(params.depth, 1000.0);
/// ```
pub fn parameters_from_str(json_str: &str) -> Result<ParameterVector, String> {
    let params: ParameterVector =
        serde_json::from_str(json_str).map_err(|e| format!("Failed to parse JSON: {}", e))?;
    params.check_finite()?;
    Ok(params)
}

/// Forget every loaded file so the next load reads from disk again
pub fn clear_cache() {
    if let Ok(mut cache) = PARAMETER_CACHE.lock() {
        cache.clear();
    }
}

/// Number of cached parameter files
pub fn cache_size() -> usize {
    PARAMETER_CACHE.lock().map(|cache| cache.len()).unwrap_or(0)
}
