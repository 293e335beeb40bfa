use std::cell::{Cell, RefCell};

use vitrine_foundation::track::TrackHost;

/// A [`TrackHost`] that records everything the track pushes at it.
pub struct RecordingHost {
    viewport_width: Cell<f32>,
    offsets: RefCell<Vec<f32>>,
    shifts: RefCell<Vec<(usize, f32)>>,
    navigations: RefCell<Vec<String>>,
}

impl RecordingHost {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width: Cell::new(viewport_width),
            offsets: RefCell::new(Vec::new()),
            shifts: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
        }
    }

    pub fn set_viewport_width(&self, width: f32) {
        self.viewport_width.set(width);
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.offsets.borrow().clone()
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.offsets.borrow().last().copied()
    }

    /// Number of offset updates pushed so far (one per render pass).
    pub fn render_count(&self) -> usize {
        self.offsets.borrow().len()
    }

    pub fn shifts(&self) -> Vec<(usize, f32)> {
        self.shifts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl TrackHost for RecordingHost {
    fn set_track_offset(&self, x: f32) {
        self.offsets.borrow_mut().push(x);
    }

    fn set_item_shift(&self, item_index: usize, shift_percent: f32) {
        self.shifts.borrow_mut().push((item_index, shift_percent));
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_owned());
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width.get()
    }
}
