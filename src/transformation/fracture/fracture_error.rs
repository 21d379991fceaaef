/// Errors that can occur while fracturing an object.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FractureError {
    /// The host could not provide any mesh data for the object to fracture.
    #[error("the object to fracture has no mesh data")]
    MissingMesh,
    /// One of the fracture parameters is out of its valid range.
    #[error("invalid fracture parameters: {0}")]
    InvalidParameters(&'static str),
}
