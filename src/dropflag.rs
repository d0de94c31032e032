//! Drop observation helpers, compiled for tests only.

use std::cell::Cell;
use std::rc::Rc;

pub type DropFlag = Rc<Cell<bool>>;

/// Raises its flag when dropped. The interesting assertions in this crate
/// are the ones where the flag must stay down.
pub struct Canary {
    pub dropped: DropFlag,
}

impl Drop for Canary {
    fn drop(&mut self) {
        self.dropped.set(true);
    }
}

#[test]
fn canary_reports_its_drop() {
    let flag = DropFlag::default();
    let canary = Canary {
        dropped: flag.clone(),
    };
    assert!(!flag.get());
    std::mem::drop(canary);
    assert!(flag.get());
}
