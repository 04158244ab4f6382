use chrono::{NaiveDate, NaiveDateTime};
use duedeck_core::{classify, DueCategory};

#[test]
fn one_day_past_is_overdue_by_one_day() {
    let label = classify(at(2024, 1, 9, 9, 0), at(2024, 1, 10, 14, 30));

    assert_eq!(label.day_offset, -1);
    assert_eq!(label.category, DueCategory::Overdue);
    assert_eq!(label.text, "Overdue by 1 day");
}

#[test]
fn several_days_past_pluralizes() {
    let label = classify(at(2024, 1, 7, 9, 0), at(2024, 1, 10, 14, 30));

    assert_eq!(label.day_offset, -3);
    assert_eq!(label.text, "Overdue by 3 days");
}

#[test]
fn same_day_is_today_with_due_time() {
    let label = classify(at(2024, 1, 10, 16, 45), at(2024, 1, 10, 14, 30));

    assert_eq!(label.day_offset, 0);
    assert_eq!(label.category, DueCategory::Today);
    assert_eq!(label.text, "Today at 16:45");
}

#[test]
fn next_day_is_tomorrow_with_due_time() {
    let label = classify(at(2024, 1, 11, 8, 5), at(2024, 1, 10, 14, 30));

    assert_eq!(label.day_offset, 1);
    assert_eq!(label.category, DueCategory::Tomorrow);
    assert_eq!(label.text, "Tomorrow at 08:05");
}

#[test]
fn within_a_week_shows_the_weekday() {
    // 2024-01-13 is a Saturday, three days out from Wednesday the 10th.
    let label = classify(at(2024, 1, 13, 10, 0), at(2024, 1, 10, 14, 30));

    assert_eq!(label.day_offset, 3);
    assert_eq!(label.category, DueCategory::ThisWeek);
    assert_eq!(label.text, "Saturday at 10:00");
}

#[test]
fn seven_days_out_is_still_this_week() {
    let label = classify(at(2024, 1, 17, 10, 0), at(2024, 1, 10, 14, 30));

    assert_eq!(label.day_offset, 7);
    assert_eq!(label.category, DueCategory::ThisWeek);
    assert_eq!(label.text, "Wednesday at 10:00");
}

#[test]
fn eight_days_out_switches_to_month_and_day() {
    let label = classify(at(2024, 1, 18, 10, 0), at(2024, 1, 10, 14, 30));

    assert_eq!(label.day_offset, 8);
    assert_eq!(label.category, DueCategory::Later);
    assert_eq!(label.text, "Jan 18 at 10:00");
}

#[test]
fn far_future_day_number_is_unpadded() {
    let label = classify(at(2024, 2, 5, 10, 0), at(2024, 1, 10, 14, 30));

    assert_eq!(label.category, DueCategory::Later);
    assert_eq!(label.text, "Feb 5 at 10:00");
}

#[test]
fn classification_floors_both_instants_to_calendar_days() {
    // Nearly 24 hours apart, but the same calendar day: still Today.
    let label = classify(at(2024, 1, 10, 23, 59), at(2024, 1, 10, 0, 1));
    assert_eq!(label.day_offset, 0);
    assert_eq!(label.category, DueCategory::Today);

    // Two minutes apart across midnight: already Tomorrow.
    let label = classify(at(2024, 1, 11, 0, 1), at(2024, 1, 10, 23, 59));
    assert_eq!(label.day_offset, 1);
    assert_eq!(label.category, DueCategory::Tomorrow);
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
