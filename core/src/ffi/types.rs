//! Error conversion for the FFI boundary

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyErr;

use crate::error::RandomError;

/// Map a crate error onto the closest Python exception
pub fn random_error_to_py(err: RandomError) -> PyErr {
    match err {
        RandomError::Io(io) => PyErr::from(io),
        RandomError::SeederAlreadyBound => PyRuntimeError::new_err(err.to_string()),
        RandomError::InvalidArgument { .. } | RandomError::Format(_) | RandomError::Config(_) => {
            PyValueError::new_err(err.to_string())
        }
    }
}
