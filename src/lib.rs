pub mod config;
pub mod error;
pub mod relocate;
pub mod remote;
pub mod scheduler;
pub mod stage;
pub mod task;

use jiff::civil::Date;

/// Directory key for a calendar day, e.g. "07-10-2023".  Both the staging
/// and the destination tree use this as their per-day subdirectory name.
pub fn day_marker(date: Date) -> String {
    date.strftime("%d-%m-%Y").to_string()
}

/// Parse a day marker back into a date.
pub fn parse_day_marker(s: &str) -> Result<Date, jiff::Error> {
    Date::strptime("%d-%m-%Y", s)
}

#[test]
fn test_day_marker() {
    let date = jiff::civil::date(2023, 10, 7);
    assert_eq!(day_marker(date), "07-10-2023");
    assert_eq!(parse_day_marker("07-10-2023").unwrap(), date);
}
