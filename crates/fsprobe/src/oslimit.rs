//! Probe for the OS per-component name length limit.
//!
//! The classic limit is 255 bytes, but it varies per filesystem
//! (eCryptfs caps around 143, some network filesystems differ), so the
//! harness asks `pathconf(_PC_NAME_MAX)` for the directory it actually
//! tests under and only falls back to 255 when the answer is
//! unavailable or nonsensical.

use std::path::Path;

/// Fallback per-component limit when the OS cannot be queried.
pub const FALLBACK_NAME_MAX: usize = 255;

/// Upper bound on plausible probe answers; anything beyond is treated
/// as "no effective limit reported" and falls back.
const MAX_PLAUSIBLE: i64 = 65536;

/// Maximum name component length for entries under `dir`.
#[cfg(unix)]
pub fn name_max(dir: &Path) -> usize {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(cpath) = CString::new(dir.as_os_str().as_bytes()) else {
        return FALLBACK_NAME_MAX;
    };
    // pathconf returns -1 both for errors and for "indeterminate".
    let n = unsafe { libc::pathconf(cpath.as_ptr(), libc::_PC_NAME_MAX) };
    if n >= 1 && n <= MAX_PLAUSIBLE {
        n as usize
    } else {
        FALLBACK_NAME_MAX
    }
}

/// Maximum name component length for entries under `dir`.
#[cfg(not(unix))]
pub fn name_max(_dir: &Path) -> usize {
    FALLBACK_NAME_MAX
}
