mod common;
use common::office_hours_model;
use rschedule::ScheduleModel;
use rschedule::errors::AppError;
use rschedule::models::color::{Color, Preset, Rgb};
use rschedule::models::day::Weekday;
use rschedule::models::event::{EventId, NewEvent};
use rschedule::models::schedule_file::EventEntry;

#[test]
fn test_add_event_parses_fields() {
    let mut model = ScheduleModel::new();
    let e = model
        .add_event(
            NewEvent::new("  Office Hours ", "Monday", "9:00 AM", "11:00 AM")
                .location(" Room 210 ")
                .color("etsu gold"),
        )
        .expect("valid event");

    assert_eq!(e.id(), EventId(1));
    assert_eq!(e.title(), "Office Hours");
    assert_eq!(e.day(), Weekday::Mon);
    assert_eq!(e.start().minutes(), 540);
    assert_eq!(e.end().minutes(), 660);
    assert_eq!(e.location(), Some("Room 210"));
    assert_eq!(e.color(), Color::Preset(Preset::EtsuGold));
}

#[test]
fn test_equal_start_and_end_is_invalid_range() {
    let mut model = ScheduleModel::new();
    let err = model
        .add_event(NewEvent::new("Zero", "tue", "10:00", "10:00"))
        .unwrap_err();
    match err {
        AppError::InvalidTimeRange { start, end } => {
            assert_eq!(start.minutes(), 600);
            assert_eq!(end.minutes(), 600);
        }
        other => panic!("expected InvalidTimeRange, got {other:?}"),
    }
    assert!(model.is_empty());
}

#[test]
fn test_end_before_start_is_invalid_range() {
    let mut model = ScheduleModel::new();
    let err = model
        .add_event(NewEvent::new("Backwards", "tue", "2 PM", "1 PM"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimeRange { .. }));
}

#[test]
fn test_bad_time_text_is_invalid_format() {
    let mut model = ScheduleModel::new();
    let err = model
        .add_event(NewEvent::new("Lab", "wed", "13 AM", "2 PM"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimeFormat { .. }));
}

#[test]
fn test_missing_and_invalid_fields() {
    let mut model = ScheduleModel::new();

    let err = model
        .add_event(NewEvent::new("   ", "mon", "9", "10"))
        .unwrap_err();
    assert!(matches!(err, AppError::MissingField("title")));

    let err = model
        .add_event(NewEvent::new("Lab", "saturday", "9", "10"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDay(_)));

    let err = model
        .add_event(NewEvent::new("Lab", "mon", "9", "10").color("chartreuse"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidColor(_)));
}

#[test]
fn test_events_outside_window_are_accepted() {
    let mut model = ScheduleModel::new();
    model
        .add_event(NewEvent::new("Early", "thu", "6 AM", "7 AM"))
        .expect("model does not check the printed window");
    assert_eq!(model.len(), 1);
}

#[test]
fn test_list_keeps_insertion_order_and_duplicates() {
    let mut model = office_hours_model();
    model
        .add_event(NewEvent::new("Office Hours", "mon", "9:00 AM", "11:00 AM"))
        .expect("duplicate allowed");

    let titles: Vec<&str> = model.list_events().iter().map(|e| e.title()).collect();
    assert_eq!(titles, ["Office Hours", "Seminar", "Office Hours"]);

    let ids: Vec<u32> = model.list_events().iter().map(|e| e.id().0).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn test_remove_event() {
    let mut model = office_hours_model();
    let removed = model.remove_event(EventId(1)).expect("remove");
    assert_eq!(removed.title(), "Office Hours");
    assert_eq!(model.len(), 1);
    assert_eq!(model.list_events()[0].title(), "Seminar");

    // ids are never reused
    let e = model
        .add_event(NewEvent::new("Lab", "fri", "1 PM", "3 PM"))
        .expect("add");
    assert_eq!(e.id(), EventId(3));
}

#[test]
fn test_remove_unknown_event() {
    let mut model = office_hours_model();
    let err = model.remove_event(EventId(42)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(EventId(42))));
    assert_eq!(model.len(), 2);
}

#[test]
fn test_default_color_and_custom_color() {
    let mut model = ScheduleModel::new().with_default_color(Color::Preset(Preset::Gray));
    let plain = model
        .add_event(NewEvent::new("Plain", "mon", "9", "10"))
        .unwrap();
    assert_eq!(plain.color(), Color::Preset(Preset::Gray));

    let custom = model
        .add_event(NewEvent::new("Custom", "mon", "9", "10").color("#70CCD1"))
        .unwrap();
    assert_eq!(custom.color(), Color::Custom(Rgb::new(0x70, 0xcc, 0xd1)));
    assert_eq!(custom.color().resolve(), Rgb::new(0x70, 0xcc, 0xd1));
}

#[test]
fn test_preset_lookup_and_contrast() {
    assert_eq!(Preset::Blue.rgb(), Rgb::new(0x34, 0x98, 0xdb));
    assert_eq!(Preset::from_name("ETSU_BLUE"), Some(Preset::EtsuBlue));
    assert_eq!(Color::parse("teal"), Some(Color::Preset(Preset::Teal)));
    assert_eq!(Color::parse("#12345"), None);

    // dark fill → white text, light fill → black text
    assert_eq!(Preset::EtsuBlue.rgb().contrast_text(), Rgb::new(255, 255, 255));
    assert_eq!(Preset::EtsuGold.rgb().contrast_text(), Rgb::new(0, 0, 0));
}

#[test]
fn test_from_entries_reports_bad_entry_index() {
    let entries = vec![
        EventEntry {
            title: "Ok".into(),
            day: "mon".into(),
            start: "9".into(),
            end: "10".into(),
            ..Default::default()
        },
        EventEntry {
            title: "Broken".into(),
            day: "tue".into(),
            start: "11".into(),
            end: "10".into(),
            ..Default::default()
        },
    ];

    let err = ScheduleModel::from_entries(&entries, Color::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("event #2"), "{msg}");
    assert!(msg.contains("Broken"), "{msg}");
}
