/// User-facing failures of the alias resolution pipeline.
///
/// These are fatal to the command being run, never to the process; malformed
/// or unrecognizable alias files are logged as warnings during loading and do
/// not surface here.
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
    #[error("no alias found for @{0}")]
    NotFound(String),

    #[error("@self requires a bootstrapped site; run inside an application root or pass --root")]
    NoBootstrappedSite,

    #[error("invalid alias reference: {0:?} (expected @[group.]site[.environment])")]
    InvalidReference(String),
}
