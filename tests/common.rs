#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rschedule::ScheduleModel;
use rschedule::models::event::NewEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsc() -> Command {
    cargo_bin_cmd!("rschedule")
}

/// Unique path inside the system temp dir; any leftover file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rschedule.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A config path that does not exist, so every run uses the defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

pub fn write_schedule(name: &str, yaml: &str) -> String {
    let p = temp_path(name, "yaml");
    fs::write(&p, yaml).expect("write schedule file");
    p
}

pub const OFFICE_HOURS_YAML: &str = r##"
owner: Dr. Jane Doe
term: Spring 2026
day_end: 6 PM
events:
  - title: Office Hours
    day: mon
    start: "9:00 AM"
    end: "11:00 AM"
    location: Room 210
    color: Blue
  - title: Seminar
    day: Monday
    start: "10:00 AM"
    end: "10:30 AM"
    color: Red
  - title: CSCI 1250
    day: wed
    start: "13:00"
    end: "14:15"
    color: "#1abc9c"
"##;

/// Model with the Monday office hours / seminar pair.
pub fn office_hours_model() -> ScheduleModel {
    let mut model = ScheduleModel::new();
    model
        .add_event(NewEvent::new("Office Hours", "mon", "9:00 AM", "11:00 AM").color("blue"))
        .expect("office hours");
    model
        .add_event(NewEvent::new("Seminar", "mon", "10:00 AM", "10:30 AM").color("red"))
        .expect("seminar");
    model
}
