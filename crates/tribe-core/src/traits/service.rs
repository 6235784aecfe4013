//! Service marker trait.

/// Marker trait for business logic services.
///
/// Services in `tribe-service` implement this trait so the host can hold
/// them behind `Arc` and share them across tasks.
pub trait Service: Send + Sync + 'static {
    /// Short name used in log fields.
    fn name(&self) -> &'static str;
}
