//! evlogbook main entrypoint.

use evlogbook::run;
use evlogbook::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
