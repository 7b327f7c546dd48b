//! Page layout: turns a schedule snapshot into absolute rectangles.
//!
//! Each selected day is a fixed-width column. Events that overlap in time are
//! split into side-by-side lanes; events in different overlap clusters never
//! affect each other's width. Coordinates are PDF points measured from the
//! top-left corner of the page (the renderer flips them).

use crate::core::schedule::Snapshot;
use crate::models::day::Weekday;
use crate::models::event::{Event, EventId};
use crate::models::time::CanonicalTime;
use std::fmt;

/// Fixed page measurements, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub page_w: f32,
    pub page_h: f32,
    pub margin: f32,
    /// Space left of the grid for the hour labels.
    pub label_gutter: f32,
    pub title_h: f32,
    pub day_header_h: f32,
    pub footer_h: f32,
}

impl PageFrame {
    /// US Letter, landscape.
    pub const LETTER_LANDSCAPE: PageFrame = PageFrame {
        page_w: 792.0,
        page_h: 612.0,
        margin: 30.0,
        label_gutter: 58.0,
        title_h: 46.0,
        day_header_h: 24.0,
        footer_h: 26.0,
    };

    pub fn grid_left(&self) -> f32 {
        self.margin + self.label_gutter
    }

    pub fn grid_top(&self) -> f32 {
        self.margin + self.title_h + self.day_header_h
    }

    pub fn grid_width(&self) -> f32 {
        self.page_w - self.margin - self.grid_left()
    }

    pub fn grid_height(&self) -> f32 {
        self.page_h - self.margin - self.footer_h - self.grid_top()
    }

    pub fn grid_bottom(&self) -> f32 {
        self.grid_top() + self.grid_height()
    }

    pub fn column_width(&self, columns: usize) -> f32 {
        self.grid_width() / columns.max(1) as f32
    }
}

impl Default for PageFrame {
    fn default() -> Self {
        Self::LETTER_LANDSCAPE
    }
}

/// Lane placement of one event inside its overlap cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaneSlot {
    pub lane: usize,
    /// Lanes used by the whole cluster.
    pub lanes: usize,
    /// Cluster number within the day, in start-time order.
    pub cluster: usize,
}

/// Assign lanes to the `(start, end)` minute intervals of one day.
///
/// Intervals are taken in start order (ties keep input order) and each one
/// gets the lowest lane whose previous occupant has already ended. Touching
/// endpoints do not overlap. A cluster closes as soon as the next start is at
/// or after the latest end seen so far, so the lane count of every cluster is
/// its maximum number of simultaneously active intervals.
///
/// The result is indexed like the input.
pub fn assign_lanes(intervals: &[(u16, u16)]) -> Vec<LaneSlot> {
    let mut slots = vec![LaneSlot::default(); intervals.len()];

    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&i| intervals[i].0);

    let mut cluster = 0;
    let mut cluster_end = 0u16;
    let mut members: Vec<usize> = Vec::new();
    let mut lane_ends: Vec<u16> = Vec::new();

    for i in order {
        let (start, end) = intervals[i];

        if !members.is_empty() && start >= cluster_end {
            close_cluster(&mut slots, &members, lane_ends.len());
            members.clear();
            lane_ends.clear();
            cluster += 1;
        }

        // events already in a lane are sorted by start, so only its last end matters
        let lane = match lane_ends.iter().position(|&e| e <= start) {
            Some(free) => {
                lane_ends[free] = end;
                free
            }
            None => {
                lane_ends.push(end);
                lane_ends.len() - 1
            }
        };

        cluster_end = if members.is_empty() {
            end
        } else {
            cluster_end.max(end)
        };
        members.push(i);
        slots[i] = LaneSlot {
            lane,
            lanes: 0,
            cluster,
        };
    }
    close_cluster(&mut slots, &members, lane_ends.len());

    slots
}

fn close_cluster(slots: &mut [LaneSlot], members: &[usize], lanes: usize) {
    for &m in members {
        slots[m].lanes = lanes;
    }
}

/// Rectangle of one event on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry<'a> {
    pub event: &'a Event,
    pub column: usize,
    pub slot: LaneSlot,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Part of the event inside the printed window; the event keeps its real times.
    pub visible_start: CanonicalTime,
    pub visible_end: CanonicalTime,
}

impl Geometry<'_> {
    pub fn is_clipped(&self) -> bool {
        self.visible_start != self.event.start || self.visible_end != self.event.end
    }
}

/// Non-fatal layout findings the caller should show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Event lies entirely outside the printed hours and was left out.
    OutOfBounds {
        id: EventId,
        title: String,
        day: Weekday,
        start: CanonicalTime,
        end: CanonicalTime,
    },
    /// Event sticks out of the printed hours and was cut to fit.
    Clipped {
        id: EventId,
        title: String,
        day: Weekday,
        start: CanonicalTime,
        end: CanonicalTime,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::OutOfBounds {
                id,
                title,
                day,
                start,
                end,
            } => write!(
                f,
                "Event #{id} '{title}' ({day} {start}-{end}) is outside the printed hours and was omitted"
            ),
            Warning::Clipped {
                id,
                title,
                day,
                start,
                end,
            } => write!(
                f,
                "Event #{id} '{title}' ({day} {start}-{end}) extends past the printed hours and was clipped"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout<'a> {
    pub frame: PageFrame,
    pub days: Vec<Weekday>,
    pub day_start: CanonicalTime,
    pub day_end: CanonicalTime,
    pub blocks: Vec<Geometry<'a>>,
    pub warnings: Vec<Warning>,
}

impl<'a> Layout<'a> {
    pub fn blocks_for(&self, day: Weekday) -> impl Iterator<Item = &Geometry<'a>> {
        self.blocks.iter().filter(move |g| g.event.day == day)
    }

    /// Vertical page position of a time inside the window.
    pub fn y_of(&self, t: CanonicalTime) -> f32 {
        let offset = f32::from(t.minutes().saturating_sub(self.day_start.minutes()));
        let window = f32::from(self.day_end.minutes().saturating_sub(self.day_start.minutes()));
        self.frame.grid_top() + self.frame.grid_height() * offset / window
    }
}

/// Lay out a snapshot on the standard page.
pub fn layout(snapshot: &Snapshot) -> Layout<'_> {
    layout_with(snapshot, PageFrame::default())
}

pub fn layout_with(snapshot: &Snapshot, frame: PageFrame) -> Layout<'_> {
    let opts = &snapshot.options;
    let (day_start, day_end) = (opts.day_start, opts.day_end);
    let window = f32::from(opts.window_minutes());
    let column_w = frame.column_width(opts.selected_days.len());

    let mut blocks = Vec::with_capacity(snapshot.events.len());
    let mut warnings = Vec::new();

    for (column, &day) in opts.selected_days.iter().enumerate() {
        let mut visible: Vec<(&Event, CanonicalTime, CanonicalTime)> = Vec::new();

        for event in snapshot.events.iter().filter(|e| e.day == day) {
            if event.end <= day_start || event.start >= day_end {
                warnings.push(Warning::OutOfBounds {
                    id: event.id,
                    title: event.title.clone(),
                    day,
                    start: event.start,
                    end: event.end,
                });
                continue;
            }

            let vis_start = event.start.max(day_start);
            let vis_end = event.end.min(day_end);
            if vis_start != event.start || vis_end != event.end {
                warnings.push(Warning::Clipped {
                    id: event.id,
                    title: event.title.clone(),
                    day,
                    start: event.start,
                    end: event.end,
                });
            }
            visible.push((event, vis_start, vis_end));
        }

        let intervals: Vec<(u16, u16)> = visible
            .iter()
            .map(|(_, s, e)| (s.minutes(), e.minutes()))
            .collect();
        let slots = assign_lanes(&intervals);

        for ((event, vis_start, vis_end), slot) in visible.into_iter().zip(slots) {
            let slot_w = column_w / slot.lanes as f32;
            let offset = f32::from(vis_start.minutes() - day_start.minutes());
            let duration = f32::from(vis_end.minutes() - vis_start.minutes());

            blocks.push(Geometry {
                event,
                column,
                slot,
                x: frame.grid_left() + column as f32 * column_w + slot.lane as f32 * slot_w,
                y: frame.grid_top() + frame.grid_height() * offset / window,
                width: slot_w,
                height: frame.grid_height() * duration / window,
                visible_start: vis_start,
                visible_end: vis_end,
            });
        }
    }

    Layout {
        frame,
        days: opts.selected_days.clone(),
        day_start,
        day_end,
        blocks,
        warnings,
    }
}
