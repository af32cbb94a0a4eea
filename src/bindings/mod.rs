//! Python bindings (feature `python`)

mod record;

pub use record::CharacterRecord;

use crate::character::{CharacterType, Sex};
use crate::config::ConfigCatalog;
use crate::error::{CharGenError, Result};
use crate::generator::{
    batch_count, AgeRange, CharacterGenerator, GenerationParams, ProfessionChoice,
};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// Cached Catalog
// ============================================================================

/// Global cached catalog
static CACHED_CATALOG: OnceCell<Arc<RwLock<ConfigCatalog>>> = OnceCell::new();

fn store_catalog(catalog: ConfigCatalog) {
    // If already initialized, replace the catalog
    if let Some(existing) = CACHED_CATALOG.get() {
        *existing.write() = catalog;
    } else {
        let _ = CACHED_CATALOG.set(Arc::new(RwLock::new(catalog)));
    }
}

fn cached_catalog() -> PyResult<Arc<RwLock<ConfigCatalog>>> {
    CACHED_CATALOG.get().cloned().ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "Catalog not initialized. Call init_config() first.",
        )
    })
}

// ============================================================================
// Generation Options
// ============================================================================

/// GenerationOptions - keyword arguments shared by every generate call
#[pyclass(frozen)]
pub struct GenerationOptions {
    params: GenerationParams,
}

#[pymethods]
impl GenerationOptions {
    #[new]
    #[allow(clippy::too_many_arguments)]
    #[pyo3(signature = (
        profession="random",
        count=1,
        character_type="agent",
        random_nationality=false,
        min_age=25,
        max_age=55,
        veteran=false,
        damaged=false,
        no_occult=false,
        verbose=false,
        sex=None,
        label=None,
        employer=None,
        seed=None
    ))]
    fn new(
        profession: &str,
        count: i64,
        character_type: &str,
        random_nationality: bool,
        min_age: i64,
        max_age: i64,
        veteran: bool,
        damaged: bool,
        no_occult: bool,
        verbose: bool,
        sex: Option<&str>,
        label: Option<String>,
        employer: Option<String>,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let params = GenerationParams {
            character_type: character_type.parse::<CharacterType>()?,
            profession: ProfessionChoice::parse(profession),
            count: batch_count(count)?,
            random_nationality,
            age: AgeRange::new(min_age, max_age)?,
            veteran,
            damaged,
            no_occult,
            verbose,
            sex: sex.map(str::parse::<Sex>).transpose()?,
            label,
            employer,
            seed,
        };
        params.validate()?;
        Ok(Self { params })
    }

    #[getter]
    fn count(&self) -> usize {
        self.params.count
    }

    #[getter]
    fn seed(&self) -> Option<u64> {
        self.params.seed
    }
}

fn params_from(options: Option<PyRef<'_, GenerationOptions>>) -> GenerationParams {
    options
        .map(|options| options.params.clone())
        .unwrap_or_default()
}

fn run_batch(catalog: &ConfigCatalog, params: &GenerationParams) -> Result<Vec<CharacterRecord>> {
    let generator = CharacterGenerator::new(catalog);
    let mut rng = params.rng();
    let characters = generator.generate_many(params, &mut rng)?;
    Ok(characters.into_iter().map(CharacterRecord::new).collect())
}

// ============================================================================
// Python Functions
// ============================================================================

/// Load the catalog from a JSON string and cache it (call once at startup)
#[pyfunction]
fn init_config(catalog_json: &str) -> PyResult<()> {
    store_catalog(ConfigCatalog::from_json_str(catalog_json)?);
    Ok(())
}

/// Load the catalog from a `.json`, `.yaml` or `.yml` file and cache it
#[pyfunction]
fn init_config_file(path: PathBuf) -> PyResult<()> {
    store_catalog(ConfigCatalog::from_path(path)?);
    Ok(())
}

/// Check if the catalog is initialized
#[pyfunction]
fn is_config_initialized() -> bool {
    CACHED_CATALOG.get().is_some()
}

/// Profession ids in sorted order
#[pyfunction]
fn list_professions() -> PyResult<Vec<String>> {
    let catalog = cached_catalog()?;
    let guard = catalog.read();
    Ok(guard.profession_ids().into_iter().map(str::to_string).collect())
}

/// Generate a batch of characters
///
/// # Raises
/// KeyError for an unknown profession, ValueError for invalid options,
/// RuntimeError if `init_config` was not called first
#[pyfunction]
#[pyo3(signature = (options=None))]
fn generate(options: Option<PyRef<'_, GenerationOptions>>) -> PyResult<Vec<CharacterRecord>> {
    let params = params_from(options);
    let catalog = cached_catalog()?;
    let guard = catalog.read();
    Ok(run_batch(&guard, &params)?)
}

/// Generate a batch of characters on a blocking worker thread
///
/// # Example (Python)
/// ```python
/// records = await generate_async(GenerationOptions(profession="criminal", count=3))
/// ```
#[pyfunction]
#[pyo3(signature = (options=None))]
fn generate_async<'py>(
    py: Python<'py>,
    options: Option<PyRef<'py, GenerationOptions>>,
) -> PyResult<Bound<'py, PyAny>> {
    let params = params_from(options);
    let catalog = cached_catalog()?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let records = tokio::task::spawn_blocking(move || {
            let guard = catalog.read();
            run_batch(&guard, &params).map_err(PyErr::from)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Generation task panicked: {}",
                e
            ))
        })??;

        Ok(records)
    })
}

/// Write each statblock to `out_dir/Character_<n>.txt` as it is generated
///
/// Returns the written paths. Files written before a failure are kept.
#[pyfunction]
#[pyo3(signature = (out_dir, options=None))]
fn generate_to_directory(
    out_dir: PathBuf,
    options: Option<PyRef<'_, GenerationOptions>>,
) -> PyResult<Vec<PathBuf>> {
    let params = params_from(options);
    let catalog = cached_catalog()?;
    let guard = catalog.read();

    std::fs::create_dir_all(&out_dir).map_err(CharGenError::from)?;

    let generator = CharacterGenerator::new(&guard);
    let mut rng = params.rng();
    let mut written = Vec::with_capacity(params.count);

    generator.generate_batch(&params, &mut rng, |index, character| {
        let path = out_dir.join(format!("Character_{}.txt", index + 1));
        std::fs::write(&path, CharacterRecord::new(character).statblock())?;
        tracing::debug!(path = %path.display(), "statblock written");
        written.push(path);
        Ok(())
    })?;

    Ok(written)
}

// ============================================================================
// Python Module Definition
// ============================================================================

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_config, m)?)?;
    m.add_function(wrap_pyfunction!(init_config_file, m)?)?;
    m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(list_professions, m)?)?;
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    m.add_function(wrap_pyfunction!(generate_async, m)?)?;
    m.add_function(wrap_pyfunction!(generate_to_directory, m)?)?;
    m.add_class::<GenerationOptions>()?;
    m.add_class::<CharacterRecord>()?;
    Ok(())
}
