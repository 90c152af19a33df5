//! CPU affinity helpers for stable timing measurements.
//!
//! Pinning the measuring thread to one core prevents scheduler migration
//! from polluting cycle counts. Real affinity control is implemented for
//! Linux via `libc`; other platforms fall back to a no-op so the harness
//! still runs there, just without pinning.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Get the CPU core the thread is currently running on
    pub fn get_current_cpu() -> Option<usize> {
        unsafe {
            let cpu = libc::sched_getcpu();
            if cpu >= 0 {
                Some(cpu as usize)
            } else {
                None
            }
        }
    }

    /// Save the current CPU affinity mask so it can be restored later
    pub fn save_affinity() -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                ORIGINAL_AFFINITY.with(|cell| {
                    *cell.borrow_mut() = Some(set);
                });
                true
            } else {
                false
            }
        }
    }

    /// Pin to a specific core
    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    /// Restore the original CPU affinity (unpin)
    pub fn restore_affinity() -> bool {
        unsafe {
            ORIGINAL_AFFINITY.with(|cell| {
                if let Some(set) = cell.borrow_mut().take() {
                    libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
                } else {
                    false
                }
            })
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn get_current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> bool {
        true
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity() -> bool {
        true
    }
}

/// Pin the current thread to the core it is running on.
///
/// Saves the current affinity first so [`unpin`] can restore it.
///
/// # Returns
/// The core ID that was pinned to, or `None` if pinning is unavailable.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::get_current_cpu()?;
    platform::save_affinity();
    if platform::set_affinity(core) {
        Some(core)
    } else {
        None
    }
}

/// Unpin the current thread, restoring its original CPU affinity.
pub fn unpin() -> bool {
    platform::restore_affinity()
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    /// Create a new guard that pins to the current CPU core.
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    /// Check if the thread was successfully pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
    }

    #[test]
    fn test_pin_unpin_cycle() {
        if pin_to_current_core().is_some() {
            assert!(unpin(), "unpin should succeed after pin");
        }
    }
}
