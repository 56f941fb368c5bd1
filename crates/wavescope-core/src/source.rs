//! Scan source port.

use crate::models::ScanSnapshot;

/// Supplies the observations, connection and saved networks for one call.
/// The aggregator never triggers a scan itself.
pub trait ScanSource {
    fn snapshot(&self) -> ScanSnapshot;
}

impl ScanSource for ScanSnapshot {
    fn snapshot(&self) -> ScanSnapshot {
        self.clone()
    }
}

impl<T: ScanSource + ?Sized> ScanSource for &T {
    fn snapshot(&self) -> ScanSnapshot {
        (**self).snapshot()
    }
}

impl<T: ScanSource + ?Sized> ScanSource for Box<T> {
    fn snapshot(&self) -> ScanSnapshot {
        (**self).snapshot()
    }
}
