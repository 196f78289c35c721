//! Exit handling: core dumps, signal handlers, emergency zeroing.

use crate::secure::registry;

/// Termination signals: zero live buffers and exit without unwinding.
extern "C" fn signal_handler(sig: libc::c_int) {
    unsafe {
        registry::emergency_zero();
        libc::_exit(128 + sig)
    }
}

/// Crash handler for SIGSEGV/SIGABRT - zero sensitive memory, then re-raise for core dump
extern "C" fn crash_handler(sig: libc::c_int) {
    unsafe {
        registry::emergency_zero();
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep entropy and passwords out of core files and ptrace.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
        tracing::debug!("prctl(PR_SET_DUMPABLE) failed");
    }
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
