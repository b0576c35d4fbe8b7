//! rTimesheet main entrypoint.

use rtimesheet::errors::AppError;
use rtimesheet::run;
use rtimesheet::ui::messages::{error, rejected};

fn main() {
    if let Err(e) = run() {
        match e {
            AppError::Stamp(_) | AppError::Attendance(_) => rejected(&e),
            _ => error(format!("Error: {e}")),
        }
        std::process::exit(1);
    }
}
