use thiserror::Error;

/// Raised for invalid use of the metadata API.
///
/// Every variant is a caller mistake: nothing here is recovered internally,
/// and no operation mutates state before its checks pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageErr {
    /// `t` and `iteration` are mutually exclusive snapshot selectors.
    #[error("please pass either a time (`t`) or an iteration (`iteration`), but not both")]
    BothTimeAndIteration,
    /// The axis to restrict to is not part of this object.
    #[error("`{0}` is not one of the coordinates that are present in this object")]
    UnknownAxis(String),
    /// The requested iteration does not exist in the output series.
    #[error(
        "the requested iteration '{requested}' is not available\nthe available iterations are:\n - {}",
        .available.iter().map(|it| it.to_string()).collect::<Vec<_>>().join("\n - ")
    )]
    IterationNotAvailable { requested: u64, available: Vec<u64> },
    /// Cartesian conversion only applies to an `{r, z}` axis set.
    #[error("conversion to 3D Cartesian can only be applied to a timeseries in thetaMode geometry")]
    NotThetaMode,
}
