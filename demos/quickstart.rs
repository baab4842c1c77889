use zonebridge::{
    build_warning, convert_to_viewer, date_changes, format_with_abbreviation, local_timezone,
    Instant, TimezoneId,
};

fn main() {
    let business = TimezoneId::from("Australia/Brisbane");
    let viewer = local_timezone();

    if let Ok(Some(warning)) = build_warning(&viewer, &business) {
        println!("{warning}");
    }

    let slots = [
        "2024-06-16T13:30:00Z",
        "2024-06-16T23:30:00Z",
        "2024-06-17T01:00:00Z",
    ];

    for slot in slots {
        let instant = Instant::parse_rfc3339(slot).expect("valid slot timestamp");
        let business_time = format_with_abbreviation(instant, &business).expect("known zone");
        let viewer_time = convert_to_viewer(instant, &viewer).expect("known zone");
        let next_day = date_changes(instant, &business, &viewer).expect("known zone");

        let marker = if next_day { " (different calendar day)" } else { "" };
        println!("{business_time}  ->  {viewer_time}{marker}");
    }
}
