/// Formats a 24-hour wall-clock time as `hh:mm AM`/`hh:mm PM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    let hours = hours % 24;
    let minutes = minutes % 60;
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours % 12 {
        0 => 12,
        other => other,
    };
    format!("{display_hours:02}:{minutes:02} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon_is_zero_padded() {
        assert_eq!(format_clock(14, 52), "02:52 PM");
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(format_clock(0, 0), "12:00 AM");
        assert_eq!(format_clock(12, 5), "12:05 PM");
        assert_eq!(format_clock(23, 59), "11:59 PM");
    }
}
