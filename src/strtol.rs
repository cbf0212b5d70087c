//! C23 `strto*` entry points, forwarded to the pre-C23 conversion functions.
//!
//! glibc 2.38 gave the `strto*` family new `__isoc23_`-prefixed symbol
//! names for C23, so binaries built against 2.38 or later reference names
//! that older runtimes don't define. Each function here satisfies one of
//! those references by forwarding to the conversion function present in
//! every glibc release.

use libc::{c_char, c_int, c_long, c_longlong, c_ulonglong};

/// Parse a signed `long` from `nptr`.
///
/// This symbol conforms to the [glibc 2.38] `__isoc23_strtol` ABI.
///
/// [glibc 2.38]: https://sourceware.org/glibc/wiki/Release/2.38
#[inline(never)]
#[no_mangle]
unsafe extern "C" fn __isoc23_strtol(
    nptr: *const c_char,
    endptr: *mut *mut c_char,
    base: c_int,
) -> c_long {
    // The C23 entry point also accepts a 0b/0B prefix when `base` is 0 or
    // 2. The pre-C23 function stops after the leading 0, and that is the
    // behavior callers of this shim get.
    libc::strtol(nptr, endptr, base)
}

/// Parse a signed `long long` from `nptr`.
#[inline(never)]
#[no_mangle]
unsafe extern "C" fn __isoc23_strtoll(
    nptr: *const c_char,
    endptr: *mut *mut c_char,
    base: c_int,
) -> c_longlong {
    libc::strtoll(nptr, endptr, base)
}

/// Parse an unsigned `long long` from `nptr`.
#[inline(never)]
#[no_mangle]
unsafe extern "C" fn __isoc23_strtoull(
    nptr: *const c_char,
    endptr: *mut *mut c_char,
    base: c_int,
) -> c_ulonglong {
    libc::strtoull(nptr, endptr, base)
}
