use std::io;
use std::panic;

/// Restore the terminal before the default hook prints the panic message,
/// otherwise the message lands in the alternate screen and is lost.
pub fn install_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        super::restore_terminal(&mut io::stdout());
        previous(info);
    }));
}
