//! PyO3 wrapper for Random

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;

use super::types::random_error_to_py;
use crate::random::Random;

/// Python wrapper for the reproducible generator
///
/// # Example (from Python)
///
/// ```python
/// from repro_random import Random
///
/// rng = Random(42)
/// roll = rng.get_uint32(6)
/// picked = rng.sample(["a", "b", "c", "d"], 2)
/// state = rng.save()
///
/// other = Random()
/// other.load(state)
/// assert other == rng
/// ```
#[pyclass(name = "Random")]
pub struct PyRandom {
    inner: Random,
}

#[pymethods]
impl PyRandom {
    /// Create a generator; without a seed one is taken from the global provider
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => Random::new(seed),
            None => Random::self_seeded(),
        };
        PyRandom { inner }
    }

    /// Value in [0, max)
    ///
    /// # Errors
    ///
    /// Raises ValueError if max is zero
    #[pyo3(signature = (max=Random::MAX32))]
    fn get_uint32(&mut self, max: u32) -> PyResult<u32> {
        if max == 0 {
            return Err(PyValueError::new_err("max must be greater than zero"));
        }
        Ok(self.inner.get_uint32(max))
    }

    /// Value in [0.0, 1.0)
    fn get_real64(&mut self) -> f64 {
        self.inner.get_real64()
    }

    fn get_seed(&self) -> u64 {
        self.inner.seed()
    }

    /// Shuffle a list in place
    fn shuffle(&mut self, items: &Bound<'_, PyList>) -> PyResult<()> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        self.inner.shuffle(&mut order);

        let originals: Vec<Bound<'_, PyAny>> = items.iter().collect();
        for (slot, &from) in order.iter().enumerate() {
            items.set_item(slot, originals[from].clone())?;
        }
        Ok(())
    }

    /// New list with n_choices elements of population, in random order
    ///
    /// # Errors
    ///
    /// Raises ValueError if n_choices exceeds the population size
    fn sample(
        &mut self,
        py: Python<'_>,
        population: &Bound<'_, PyList>,
        n_choices: usize,
    ) -> PyResult<Py<PyList>> {
        let indices: Vec<usize> = (0..population.len()).collect();
        let picked = self
            .inner
            .sample(&indices, n_choices)
            .map_err(random_error_to_py)?;

        let items = picked
            .iter()
            .map(|&i| population.get_item(i))
            .collect::<PyResult<Vec<_>>>()?;
        Ok(PyList::new_bound(py, items).unbind())
    }

    /// State in the text layout
    fn save(&self) -> PyResult<String> {
        let mut buf = Vec::new();
        self.inner.save(&mut buf).map_err(random_error_to_py)?;
        String::from_utf8(buf).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Replace this generator's state with one produced by save()
    fn load(&mut self, state: &str) -> PyResult<()> {
        self.inner
            .load(&mut state.as_bytes())
            .map_err(random_error_to_py)
    }

    /// JSON checkpoint with state hash
    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(random_error_to_py)
    }

    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let inner = Random::from_json(json).map_err(random_error_to_py)?;
        Ok(PyRandom { inner })
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!("Random(seed={})", self.inner.seed())
    }
}
