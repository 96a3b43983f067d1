//! Demo route handlers.

use rand::Rng;

use crate::error::{ErrorKind, ServiceError};


/// Fails every request with a randomly chosen error kind.
///
/// Exists purely to exercise the alerting pipeline: some of the kinds it
/// raises are alertable, some are not.
pub async fn russian_roulette() -> Result<(), ServiceError> {
    let mut rng = rand::rng();
    let kind = ErrorKind::ALL[rng.random_range(0..ErrorKind::ALL.len())];

    Err(ServiceError::new(kind, "It blew up!"))
}
