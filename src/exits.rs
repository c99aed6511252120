//! Process lifecycle for the form: the terminal is handed back in a usable
//! state however passform ends, and passwords never reach a core file.

/// Exit status used when a signal ends the form.
const SIGNAL_EXIT: libc::c_int = 130;

/// Turn line buffering, echo and newline translation back on for stdin.
fn restore_line_discipline() {
    unsafe {
        let mut attrs: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut attrs) != 0 {
            return;
        }
        attrs.c_oflag |= libc::OPOST | libc::ONLCR;
        attrs.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
        libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &attrs);
    }
}

/// Runs on every exit path, including `exit` from the signal handler.
extern "C" fn restore_on_exit() {
    restore_line_discipline();
    unsafe {
        // Colour reset and cursor show, skipped when output is piped.
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            let seq = b"\x1b[0m\x1b[?25h\r\n";
            libc::write(
                libc::STDOUT_FILENO,
                seq.as_ptr() as *const libc::c_void,
                seq.len(),
            );
        }
    }
}

extern "C" fn on_signal(_: libc::c_int) {
    unsafe { libc::exit(SIGNAL_EXIT) }
}

/// Register the exit hook and route SIGINT, SIGTERM and SIGHUP through it.
pub fn install_handlers() {
    unsafe {
        libc::atexit(restore_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_signal as *const () as libc::sighandler_t);
        }
    }
}

/// Keep the session's passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

/// Undo raw mode left behind by a previous run that was killed mid-form.
pub fn reset_terminal() {
    restore_line_discipline();
}
